//! Tax command - slab tax and cess for a taxable income

use crate::tax::{assess, format_inr, non_negative, TaxAssessment};
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct TaxCommand {
    /// Taxable income (after deductions)
    #[arg(allow_negative_numbers = true)]
    income: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TaxData {
    taxable_income: String,
    slab: String,
    marginal_rate_pct: String,
    slab_tax: String,
    cess: String,
    total_tax: String,
}

impl TaxCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let income = non_negative("income", self.income)?;
        let assessment = assess(income);

        if self.json {
            let data = TaxData {
                taxable_income: format!("{:.2}", assessment.taxable_income),
                slab: assessment.bracket.display_range(),
                marginal_rate_pct: format!("{:.0}", assessment.bracket.rate * dec!(100)),
                slab_tax: format!("{:.2}", assessment.bracket_tax),
                cess: format!("{:.2}", assessment.cess),
                total_tax: format!("{:.2}", assessment.total),
            };
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_assessment(&assessment);
        }
        Ok(())
    }
}

fn print_assessment(assessment: &TaxAssessment) {
    println!();
    println!("TAX ON {}", format_inr(assessment.taxable_income));
    println!();
    println!(
        "  Slab: {} @ {:.0}%",
        assessment.bracket.display_range(),
        assessment.bracket.rate * dec!(100)
    );
    println!("  Slab tax: {}", format_inr(assessment.bracket_tax));
    println!("  Cess @ 4%: {}", format_inr(assessment.cess));
    println!();
    println!("TAX PAYABLE: {}", format_inr(assessment.total));
    println!();
}
