use rust_decimal::Decimal;

/// Input rejected at the command-line boundary before it reaches the calculator
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} must not be negative: {value}")]
    NegativeAmount { field: String, value: Decimal },
    #[error("deduction on row {row} has no name")]
    EmptyDeductionName { row: usize },
}

/// Reject negative amounts; the calculator is only defined from zero upwards
pub fn non_negative(field: &str, value: Decimal) -> Result<Decimal, InputError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(InputError::NegativeAmount {
            field: field.to_string(),
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(non_negative("income", dec!(0)), Ok(dec!(0)));
        assert_eq!(non_negative("income", dec!(800000)), Ok(dec!(800000)));
    }

    #[test]
    fn rejects_negative() {
        let err = non_negative("income", dec!(-1)).unwrap_err();
        assert_eq!(err.to_string(), "income must not be negative: -1");
    }
}
