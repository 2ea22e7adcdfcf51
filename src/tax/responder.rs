//! Answers free-text tax questions.
//!
//! A question is classified in strict priority order:
//! 1. mentions "tax calculation": ask for income and deductions
//! 2. mentions "income": pull a number out of the text and estimate tax on it
//! 3. matches an FAQ keyword: the canned answer
//! 4. anything else: a fallback pointing at the known topics

use crate::tax::brackets::compute_tax;
use crate::tax::conversation::Conversation;
use crate::tax::currency::format_inr;
use crate::tax::faq::KnowledgeBase;
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

pub const CALCULATION_PROMPT: &str =
    "Sure! Please provide your total income and deductions (if any) so I can calculate your tax.";
pub const INVALID_INCOME: &str = "Please provide a valid income amount.";
pub const FALLBACK: &str = "I'm sorry, I don't have specific information about that. Please try asking about tax saving, documents needed, or tax brackets.";

const CALCULATION_TRIGGER: &str = "tax calculation";
const INCOME_TRIGGER: &str = "income";

/// How a question was answered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply<'a> {
    CalculationPrompt,
    IncomeEstimate { income: Decimal, tax: Decimal },
    InvalidIncome,
    Faq { keyword: &'a str, answer: &'a str },
    Fallback,
}

impl Reply<'_> {
    pub fn text(&self) -> String {
        match self {
            Reply::CalculationPrompt => CALCULATION_PROMPT.to_string(),
            Reply::IncomeEstimate { income, tax } => format!(
                "Based on your income of {}, your estimated tax liability is {}.",
                format_inr(*income),
                format_inr(*tax)
            ),
            Reply::InvalidIncome => INVALID_INCOME.to_string(),
            Reply::Faq { answer, .. } => answer.to_string(),
            Reply::Fallback => FALLBACK.to_string(),
        }
    }
}

/// Result of submitting a question: the updated log and the next input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub conversation: Conversation,
    pub input: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Responder<'a> {
    knowledge: KnowledgeBase<'a>,
}

impl Default for Responder<'static> {
    fn default() -> Self {
        Responder::new(KnowledgeBase::builtin())
    }
}

impl<'a> Responder<'a> {
    pub fn new(knowledge: KnowledgeBase<'a>) -> Self {
        Responder { knowledge }
    }

    /// Classify a question. Blank questions get no reply.
    pub fn classify(&self, question: &str) -> Option<Reply<'a>> {
        if question.trim().is_empty() {
            return None;
        }
        let lowered = question.to_lowercase();

        let reply = if lowered.contains(CALCULATION_TRIGGER) {
            Reply::CalculationPrompt
        } else if lowered.contains(INCOME_TRIGGER) {
            match extract_amount(question) {
                Some(income) => Reply::IncomeEstimate {
                    income,
                    tax: compute_tax(income),
                },
                None => Reply::InvalidIncome,
            }
        } else {
            match self.knowledge.find(question) {
                Some(entry) => Reply::Faq {
                    keyword: entry.keyword,
                    answer: entry.answer,
                },
                None => Reply::Fallback,
            }
        };
        log::debug!("Classified {:?} as {:?}", question, reply);
        Some(reply)
    }

    /// Submit a question against a conversation.
    ///
    /// A blank question leaves both the conversation and the input as they
    /// were. Otherwise the question and its reply are appended and the input
    /// is cleared.
    pub fn respond(&self, question: &str, conversation: &Conversation) -> Turn {
        match self.classify(question) {
            Some(reply) => Turn {
                conversation: conversation.with_exchange(question, &reply.text()),
                input: String::new(),
            },
            None => Turn {
                conversation: conversation.clone(),
                input: question.to_string(),
            },
        }
    }
}

/// Pull an amount out of free text.
///
/// Every digit and '.' anywhere in the text is concatenated, so
/// "income 5 lakh in 2024" yields 52024. The longest leading number of the
/// form `digits[.digits]` is then parsed; trailing junk such as a second '.'
/// is ignored. Returns `None` when no digits survive or the value does not
/// fit in a `Decimal`.
pub fn extract_amount(text: &str) -> Option<Decimal> {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let whole: String = kept.chars().take_while(char::is_ascii_digit).collect();
    let rest = &kept[whole.len()..];
    let fraction: String = match rest.strip_prefix('.') {
        Some(after_point) => after_point.chars().take_while(char::is_ascii_digit).collect(),
        None => String::new(),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    let number = match (whole.is_empty(), fraction.is_empty()) {
        (_, true) => whole,
        (true, false) => format!("0.{fraction}"),
        (false, false) => format!("{whole}.{fraction}"),
    };
    Decimal::from_str(&number).ok()
}
