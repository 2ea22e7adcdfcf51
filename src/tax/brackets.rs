use crate::tax::currency::format_inr;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Health and education cess, charged on top of the slab tax.
pub const CESS_RATE: Decimal = dec!(0.04);

/// A contiguous slab of taxable income with its own marginal rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxBracket {
    /// Income at which this slab starts
    pub lower: Decimal,
    /// Inclusive ceiling of this slab; `None` for the top slab
    pub upper: Option<Decimal>,
    /// Marginal rate applied to income above `lower`
    pub rate: Decimal,
    /// Tax already accrued in the slabs below this one
    pub base: Decimal,
}

impl TaxBracket {
    /// Whether an income is at or below this slab's ceiling
    pub fn within_ceiling(&self, income: Decimal) -> bool {
        self.upper.is_none_or(|upper| income <= upper)
    }

    /// Slab tax for an income falling inside this bracket, before cess
    pub fn tax_for(&self, income: Decimal) -> Decimal {
        self.base + (income - self.lower) * self.rate
    }

    /// Display as "₹2,50,000 - ₹5,00,000" or "above ₹10,00,000"
    pub fn display_range(&self) -> String {
        match self.upper {
            Some(upper) => format!("{} - {}", format_inr(self.lower), format_inr(upper)),
            None => format!("above {}", format_inr(self.lower)),
        }
    }
}

/// Slabs in ascending order, covering every income from zero upwards
pub static BRACKETS: [TaxBracket; 4] = [
    TaxBracket {
        lower: dec!(0),
        upper: Some(dec!(250000)),
        rate: dec!(0),
        base: dec!(0),
    },
    TaxBracket {
        lower: dec!(250000),
        upper: Some(dec!(500000)),
        rate: dec!(0.05),
        base: dec!(0),
    },
    TaxBracket {
        lower: dec!(500000),
        upper: Some(dec!(1000000)),
        rate: dec!(0.20),
        base: dec!(12500),
    },
    TaxBracket {
        lower: dec!(1000000),
        upper: None,
        rate: dec!(0.30),
        base: dec!(112500),
    },
];

/// Breakdown of the tax due on a taxable income
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxAssessment {
    pub taxable_income: Decimal,
    pub bracket: &'static TaxBracket,
    pub bracket_tax: Decimal,
    pub cess: Decimal,
    pub total: Decimal,
}

/// Find the slab an income falls into.
///
/// Incomes exactly on a boundary belong to the lower slab. Negative incomes
/// are outside the domain and land in the zero-rate slab.
pub fn bracket_for(income: Decimal) -> &'static TaxBracket {
    BRACKETS
        .iter()
        .find(|b| b.within_ceiling(income))
        .unwrap_or(&BRACKETS[BRACKETS.len() - 1])
}

/// Slab tax plus cess for a taxable income
pub fn assess(taxable_income: Decimal) -> TaxAssessment {
    let bracket = bracket_for(taxable_income);
    let bracket_tax = bracket.tax_for(taxable_income);
    let cess = bracket_tax * CESS_RATE;
    log::debug!(
        "Taxable income {} in slab from {} @ {}: slab tax {}, cess {}",
        taxable_income,
        bracket.lower,
        bracket.rate,
        bracket_tax,
        cess
    );
    TaxAssessment {
        taxable_income,
        bracket,
        bracket_tax,
        cess,
        total: bracket_tax + cess,
    }
}

/// Total tax payable, cess included, on a taxable income
pub fn compute_tax(taxable_income: Decimal) -> Decimal {
    assess(taxable_income).total
}
