//! CVV field validation.
//!
//! The form accepts exactly three digits, which is what the back of most
//! cards carries.
//!
//! # Example
//!
//! ```
//! use card_form::cvv::validate_cvv;
//!
//! assert!(validate_cvv("123").is_ok());
//! assert!(validate_cvv("12").is_err());
//! assert!(validate_cvv("12a").is_err());
//! ```

use crate::error::{Field, FormError};

/// Number of digits in a CVV.
pub const CVV_DIGITS: usize = 3;

/// Validates a CVV value: required, ASCII digits only, exactly three of them.
pub fn validate_cvv(input: &str) -> Result<(), FormError> {
    if input.is_empty() {
        return Err(FormError::Missing(Field::Cvv));
    }

    let mut length = 0usize;
    for (position, character) in input.chars().enumerate() {
        if !character.is_ascii_digit() {
            return Err(FormError::InvalidCharacter {
                field: Field::Cvv,
                position,
                character,
            });
        }
        length += 1;
    }

    if length != CVV_DIGITS {
        return Err(FormError::InvalidLength {
            field: Field::Cvv,
            length,
            expected: CVV_DIGITS,
        });
    }

    Ok(())
}
