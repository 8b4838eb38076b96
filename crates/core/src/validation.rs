//! Input validation shared by every mutation.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] runs the derived
//! rules and converts failures into [`CoreError::InvalidFields`] so callers
//! get one message list per submitted field.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldErrors};

/// Run the derived validation rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::InvalidFields(field_errors(&errors)))
}

/// Flatten validator output into per-field messages.
///
/// Rules without an explicit message fall back to their error code.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            out.add(field.to_string(), message);
        }
    }
    out
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Reject text that is non-empty but only whitespace.
///
/// Empty strings are left to `length(min = 1)` so the field reports a single
/// message.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.trim().is_empty() {
        return Err(error("blank", "Must not be blank."));
    }
    Ok(())
}

/// Money values must be strictly positive.
pub fn positive_decimal(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() || value.is_zero() {
        return Err(error("range", "Please enter a value greater than 0."));
    }
    Ok(())
}

/// Money values are stored as `NUMERIC(14,2)`.
pub fn at_most_two_decimals(value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > 2 {
        return Err(error("scale", "Use at most two decimal places."));
    }
    Ok(())
}

/// Rule for money fields: positive with at most two decimal places.
pub fn money_amount(value: &Decimal) -> Result<(), ValidationError> {
    positive_decimal(value)?;
    at_most_two_decimals(value)
}

/// Bank codes are short runs of digits (e.g. `001`, `341`).
pub fn bank_code(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.len() > 10 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(error("bank_code", "Bank code must be 1 to 10 digits."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Please enter a name."), custom(function = "not_blank"))]
        nome: String,
        #[validate(required(message = "Please enter a value."), custom(function = "positive_decimal"))]
        valor: Option<Decimal>,
    }

    #[test]
    fn valid_input_passes() {
        let probe = Probe {
            nome: "Renda Fixa".into(),
            valor: Some(dec!(10)),
        };
        assert!(validate_input(&probe).is_ok());
    }

    #[test]
    fn failures_are_reported_per_field() {
        let probe = Probe {
            nome: String::new(),
            valor: None,
        };
        let err = validate_input(&probe).unwrap_err();
        assert_matches!(err, CoreError::InvalidFields(ref fields) => {
            assert_eq!(fields.get("nome"), Some(&["Please enter a name.".to_string()][..]));
            assert_eq!(fields.get("valor"), Some(&["Please enter a value.".to_string()][..]));
        });
    }

    #[test]
    fn whitespace_only_text_is_blank() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_ok());
        assert!(not_blank(" x ").is_ok());
    }

    #[test]
    fn positive_decimal_rejects_zero_and_negative() {
        assert!(positive_decimal(&dec!(0)).is_err());
        assert!(positive_decimal(&dec!(-1.5)).is_err());
        assert!(positive_decimal(&dec!(0.01)).is_ok());
    }

    #[test]
    fn scale_is_limited_to_cents() {
        assert!(at_most_two_decimals(&dec!(10.25)).is_ok());
        assert!(at_most_two_decimals(&dec!(10.250)).is_ok());
        assert!(at_most_two_decimals(&dec!(10.255)).is_err());
    }

    #[test]
    fn money_amount_combines_both_rules() {
        assert!(money_amount(&dec!(1500.00)).is_ok());
        assert_eq!(money_amount(&dec!(-3)).unwrap_err().code, "range");
        assert_eq!(money_amount(&dec!(3.141)).unwrap_err().code, "scale");
    }

    #[test]
    fn bank_code_must_be_digits() {
        assert!(bank_code("341").is_ok());
        assert!(bank_code("34a").is_err());
        assert!(bank_code("12345678901").is_err());
    }
}
