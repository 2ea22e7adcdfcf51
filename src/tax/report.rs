use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// A single deduction line item, e.g. "Section 80C"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Deduction {
    /// Deduction name as shown in the breakdown
    pub name: String,
    /// Amount deducted
    #[schemars(with = "f64")]
    pub value: Decimal,
}

/// Tax figures assembled by the income-entry flow, displayed unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    /// Gross income declared
    #[schemars(with = "f64")]
    pub total_income: Decimal,
    /// Sum of all deductions
    #[schemars(with = "f64")]
    pub total_deductions: Decimal,
    /// Income the slab rates apply to
    #[schemars(with = "f64")]
    pub taxable_income: Decimal,
    /// Tax payable including cess
    #[schemars(with = "f64")]
    pub tax: Decimal,
    /// Deduction line items in entry order
    #[serde(default)]
    pub deductions: Vec<Deduction>,
}

impl TaxResult {
    /// Share of total deductions taken by each line item, as a percentage
    pub fn deduction_shares(&self) -> Vec<(&Deduction, Decimal)> {
        self.deductions
            .iter()
            .map(|d| {
                let share = if self.total_deductions.is_zero() {
                    Decimal::ZERO
                } else {
                    (d.value / self.total_deductions * Decimal::ONE_HUNDRED).round_dp(1)
                };
                (d, share)
            })
            .collect()
    }
}

pub fn read_result_json<R: Read>(reader: R) -> anyhow::Result<TaxResult> {
    let result = serde_json::from_reader(reader)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const JSON: &str = r#"{
        "totalIncome": 1200000,
        "totalDeductions": 200000,
        "taxableIncome": 1000000,
        "tax": 117000,
        "deductions": [
            { "name": "Section 80C", "value": 150000 },
            { "name": "Section 80D", "value": 50000 }
        ]
    }"#;

    #[test]
    fn reads_camel_case_json() {
        let result = read_result_json(JSON.as_bytes()).unwrap();
        assert_eq!(result.total_income, dec!(1200000));
        assert_eq!(result.taxable_income, dec!(1000000));
        assert_eq!(result.tax, dec!(117000));
        assert_eq!(result.deductions.len(), 2);
        assert_eq!(result.deductions[0].name, "Section 80C");
    }

    #[test]
    fn deductions_default_to_empty() {
        let json = r#"{"totalIncome": 1, "totalDeductions": 0, "taxableIncome": 1, "tax": 0}"#;
        let result = read_result_json(json.as_bytes()).unwrap();
        assert!(result.deductions.is_empty());
        assert!(result.deduction_shares().is_empty());
    }

    #[test]
    fn shares_of_total_deductions() {
        let result = read_result_json(JSON.as_bytes()).unwrap();
        let shares: Vec<_> = result.deduction_shares().into_iter().map(|(_, s)| s).collect();
        assert_eq!(shares, vec![dec!(75.0), dec!(25.0)]);
    }
}
