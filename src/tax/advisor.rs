use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Investment advice tier, chosen by total income
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionTier {
    /// Income up to ₹5,00,000
    Starter,
    /// Income up to ₹10,00,000
    Growth,
    /// Income above ₹10,00,000
    Comprehensive,
}

impl SuggestionTier {
    pub fn for_income(income: Decimal) -> SuggestionTier {
        if income <= dec!(500000) {
            SuggestionTier::Starter
        } else if income <= dec!(1000000) {
            SuggestionTier::Growth
        } else {
            SuggestionTier::Comprehensive
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            SuggestionTier::Starter => {
                "Consider investing in PPF or ELSS to save tax under Section 80C."
            }
            SuggestionTier::Growth => {
                "You can save tax by investing in PPF, ELSS, or NPS. Also, consider claiming HRA if applicable."
            }
            SuggestionTier::Comprehensive => {
                "Maximize your tax savings by investing in PPF, ELSS, NPS, and claiming HRA, home loan interest, and medical insurance premiums."
            }
        }
    }

    /// Instruments named in the suggestion
    pub fn instruments(&self) -> &'static [&'static str] {
        match self {
            SuggestionTier::Starter => &["PPF", "ELSS"],
            SuggestionTier::Growth => &["PPF", "ELSS", "NPS", "HRA"],
            SuggestionTier::Comprehensive => &[
                "PPF",
                "ELSS",
                "NPS",
                "HRA",
                "home loan interest",
                "medical insurance premiums",
            ],
        }
    }

    pub fn display(&self) -> &'static str {
        match self {
            SuggestionTier::Starter => "starter",
            SuggestionTier::Growth => "growth",
            SuggestionTier::Comprehensive => "comprehensive",
        }
    }
}

/// Tax-saving suggestion for a total income
pub fn suggest(income: Decimal) -> &'static str {
    SuggestionTier::for_income(income).suggestion()
}
