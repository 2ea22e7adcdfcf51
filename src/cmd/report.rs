//! Report command - tax report with deduction breakdown and investment advice

use crate::cmd::open_input;
use crate::tax::{
    compute_tax, format_inr, non_negative, read_result_json, suggest, Deduction, InputError,
    SuggestionTier, TaxResult,
};
use clap::Args;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// Tax result JSON from the income-entry flow ("-" for stdin)
    #[arg(short, long, conflicts_with_all = ["income", "deductions"], required_unless_present = "income")]
    file: Option<PathBuf>,

    /// Total income, to compute the report here instead of reading one
    #[arg(short, long, allow_negative_numbers = true)]
    income: Option<Decimal>,

    /// CSV of deduction line items with columns name,value
    #[arg(short, long, requires = "income")]
    deductions: Option<PathBuf>,

    /// Output as JSON instead of formatted tables
    #[arg(long)]
    json: bool,
}

/// Deduction line item as read from CSV
#[derive(Debug, Deserialize)]
struct DeductionRecord {
    name: String,
    value: Decimal,
}

#[derive(Debug, Serialize)]
struct ReportData<'a> {
    #[serde(flatten)]
    result: &'a TaxResult,
    suggestion_tier: SuggestionTier,
    suggestion: &'static str,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct DeductionRow {
    #[tabled(rename = "Deduction")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let result = match (&self.file, self.income) {
            (Some(path), _) => read_result_json(open_input(path)?)?,
            (None, Some(income)) => {
                let deductions = match &self.deductions {
                    Some(path) => read_deductions_csv(open_input(path)?)?,
                    None => Vec::new(),
                };
                assemble(income, deductions)?
            }
            (None, None) => anyhow::bail!("Provide either --file or --income."),
        };

        if self.json {
            self.print_json(&result)
        } else {
            self.print_report(&result);
            Ok(())
        }
    }

    fn print_report(&self, result: &TaxResult) {
        println!();
        println!("YOUR TAX REPORT");
        println!();

        let summary = vec![
            SummaryRow {
                label: "Total Income",
                amount: format_inr(result.total_income),
            },
            SummaryRow {
                label: "Total Deductions",
                amount: format_inr(result.total_deductions),
            },
            SummaryRow {
                label: "Taxable Income",
                amount: format_inr(result.taxable_income),
            },
            SummaryRow {
                label: "Tax Payable",
                amount: format_inr(result.tax),
            },
        ];
        println!("{}", right_aligned(Table::new(summary)));
        println!();

        if result.deductions.is_empty() {
            println!("No deductions claimed.");
        } else {
            let rows: Vec<DeductionRow> = result
                .deduction_shares()
                .into_iter()
                .map(|(d, share)| DeductionRow {
                    name: d.name.clone(),
                    amount: format_inr(d.value),
                    share: format!("{:.1}%", share),
                })
                .collect();
            println!("DEDUCTIONS");
            println!("{}", right_aligned(Table::new(rows)));
        }
        println!();
        println!("SUGGESTION: {}", suggest(result.total_income));
        println!();
    }

    fn print_json(&self, result: &TaxResult) -> anyhow::Result<()> {
        let tier = SuggestionTier::for_income(result.total_income);
        let data = ReportData {
            result,
            suggestion_tier: tier,
            suggestion: tier.suggestion(),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

fn right_aligned(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

fn read_deductions_csv<R: Read>(reader: R) -> anyhow::Result<Vec<Deduction>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut deductions = Vec::new();
    for (i, record) in rdr.deserialize::<DeductionRecord>().enumerate() {
        let record = record?;
        let row = i + 1;
        if record.name.is_empty() {
            return Err(InputError::EmptyDeductionName { row }.into());
        }
        let value = non_negative(&format!("deduction '{}'", record.name), record.value)?;
        deductions.push(Deduction {
            name: record.name,
            value,
        });
    }
    log::info!("Read {} deduction records", deductions.len());
    Ok(deductions)
}

/// Income-entry flow: subtract deductions from income and tax the remainder
fn assemble(income: Decimal, deductions: Vec<Deduction>) -> Result<TaxResult, InputError> {
    let total_income = non_negative("income", income)?;
    let total_deductions: Decimal = deductions.iter().map(|d| d.value).sum();
    let taxable_income = (total_income - total_deductions).max(Decimal::ZERO);

    Ok(TaxResult {
        total_income,
        total_deductions,
        taxable_income,
        tax: compute_tax(taxable_income),
        deductions,
    })
}
