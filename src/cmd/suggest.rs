//! Suggest command - tax-saving investments for a total income

use crate::tax::{format_inr, non_negative, SuggestionTier};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct SuggestCommand {
    /// Total income
    #[arg(allow_negative_numbers = true)]
    income: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SuggestionData {
    income: String,
    tier: SuggestionTier,
    suggestion: &'static str,
    instruments: &'static [&'static str],
}

impl SuggestCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let income = non_negative("income", self.income)?;
        let tier = SuggestionTier::for_income(income);

        if self.json {
            let data = SuggestionData {
                income: format!("{:.2}", income),
                tier,
                suggestion: tier.suggestion(),
                instruments: tier.instruments(),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            println!("Income {} ({} tier)", format_inr(income), tier.display());
            println!("{}", tier.suggestion());
        }
        Ok(())
    }
}
