//! Canned answers to common tax questions, keyed by lowercase trigger phrase.

use serde::Serialize;

/// A trigger phrase and the answer it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub keyword: &'static str,
    pub answer: &'static str,
}

/// Built-in entries. Order is precedence: the first keyword found in a
/// question wins, regardless of where it appears in the text.
pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        keyword: "save tax",
        answer: "You can save tax through various deductions under Section 80C like PPF, ELSS, and life insurance premiums. You can also claim HRA if you're paying rent, and home loan interest deductions.",
    },
    FaqEntry {
        keyword: "documents",
        answer: "For tax filing, you'll need: Form 16 from employer, bank interest statements, investment proofs (80C), rent receipts, home loan statement, and PAN card.",
    },
    FaqEntry {
        keyword: "tax bracket",
        answer: "Tax slabs for FY 2023-24 under the old regime are: No tax up to ₹2.5L, 5% up to ₹5L, 20% up to ₹10L, and 30% above ₹10L. A 4% cess is applicable.",
    },
    FaqEntry {
        keyword: "hra",
        answer: "To claim HRA, you need rent receipts, rent agreement, and proof of rent payment. The exemption is the least of: Actual HRA received, 50% of salary (metro) or 40% (non-metro), or rent paid minus 10% of salary.",
    },
    FaqEntry {
        keyword: "section 80c",
        answer: "Under Section 80C, you can invest up to ₹1.5L in PPF, ELSS, NSC, life insurance premiums, or 5-year fixed deposits to save tax.",
    },
    FaqEntry {
        keyword: "tax calculation",
        answer: "To calculate your tax, provide your total income, deductions, and investments. I can help you estimate your tax liability.",
    },
];

/// Read-only view over an ordered FAQ table
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase<'a> {
    entries: &'a [FaqEntry],
}

impl KnowledgeBase<'static> {
    pub fn builtin() -> Self {
        KnowledgeBase { entries: FAQ }
    }
}

impl Default for KnowledgeBase<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> KnowledgeBase<'a> {
    pub fn new(entries: &'a [FaqEntry]) -> Self {
        KnowledgeBase { entries }
    }

    pub fn entries(&self) -> &'a [FaqEntry] {
        self.entries
    }

    /// Case-insensitive substring match, first entry in table order wins
    pub fn lookup(&self, question: &str) -> Option<&'a str> {
        self.find(question).map(|e| e.answer)
    }

    pub fn find(&self, question: &str) -> Option<&'a FaqEntry> {
        let question = question.to_lowercase();
        self.entries
            .iter()
            .find(|e| question.contains(e.keyword))
    }
}
