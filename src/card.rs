//! The normalized card number handed to the checksum and the payload.
//!
//! A [`NormalizedCardNumber`] is what is left of the card-number field once
//! whitespace is gone: ASCII digits only. The value is cleared from memory on
//! drop and never printed in full by `Debug` or `Display`.

use std::fmt;

use serde::{Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Field, FormError};
use crate::luhn;

/// Number of digits the form accepts for a card number.
pub const CARD_NUMBER_DIGITS: usize = 16;

/// A card number with whitespace removed and only ASCII digits remaining.
///
/// # Security
///
/// - Memory is zeroed on drop using the `zeroize` crate
/// - Debug and Display output is masked to the last four digits
/// - Serialization emits the full digits, since that is the payload
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct NormalizedCardNumber {
    digits: String,
}

impl NormalizedCardNumber {
    /// Strips whitespace from `raw` and checks every remaining character.
    ///
    /// The result may be empty; length rules belong to the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::card::NormalizedCardNumber;
    ///
    /// let number = NormalizedCardNumber::parse("4111 1111 1111 1111").unwrap();
    /// assert_eq!(number.as_str(), "4111111111111111");
    ///
    /// assert!(NormalizedCardNumber::parse("4111-1111").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, FormError> {
        let mut digits = String::with_capacity(raw.len());

        for (position, character) in raw.chars().enumerate() {
            if character.is_whitespace() {
                continue;
            }
            if !character.is_ascii_digit() {
                digits.zeroize();
                return Err(FormError::InvalidCharacter {
                    field: Field::CardNumber,
                    position,
                    character,
                });
            }
            digits.push(character);
        }

        Ok(Self { digits })
    }

    /// Returns the digits as a string slice.
    ///
    /// # Security Warning
    ///
    /// This exposes the full card number. Never log the result; use
    /// [`masked`](Self::masked) for display.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns the number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if no digits were entered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the digit values (0-9).
    pub fn digit_values(&self) -> Vec<u8> {
        self.digits.bytes().map(|b| b - b'0').collect()
    }

    /// Runs the Luhn checksum over the digits.
    pub fn passes_luhn(&self) -> bool {
        let mut values = self.digit_values();
        let passes = luhn::passes(&values);
        values.zeroize();
        passes
    }

    /// Returns the last four digits, or fewer if the number is shorter.
    pub fn last_four(&self) -> &str {
        let start = self.digits.len().saturating_sub(4);
        &self.digits[start..]
    }

    /// Returns the number masked for display: `************0366`.
    pub fn masked(&self) -> String {
        crate::mask::mask_digits(&self.digits)
    }
}

impl fmt::Debug for NormalizedCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NormalizedCardNumber")
            .field(&self.masked())
            .finish()
    }
}

impl fmt::Display for NormalizedCardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl Serialize for NormalizedCardNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.digits)
    }
}
