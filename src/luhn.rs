//! Luhn checksum for card numbers typed into the form.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is the
//! checksum every payment card number carries in its last digit. The form
//! runs it before anything leaves the machine.
//!
//! # Example
//!
//! ```
//! use card_form::luhn;
//!
//! assert!(luhn::is_valid("4532 0151 1283 0366"));
//! assert!(!luhn::is_valid("4532015112830367"));
//!
//! // Non-digits are rejected outright rather than folded into the sum.
//! assert!(!luhn::is_valid("4532-0151-1283-0366"));
//! ```

use crate::card::NormalizedCardNumber;

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Reports whether a user-entered card number passes the Luhn check.
///
/// Whitespace anywhere in the input is stripped first. Any other character
/// that is not an ASCII digit makes the number invalid.
///
/// An empty (or all-whitespace) input sums to zero and is therefore reported
/// valid. Callers that need a non-empty number must check that separately;
/// [`FormController`](crate::form::FormController) does.
///
/// # Example
///
/// ```
/// use card_form::luhn::is_valid;
///
/// assert!(is_valid("4111 1111 1111 1111"));
/// assert!(!is_valid("4111 1111 1111 1112"));
/// assert!(!is_valid("4111a111111111111"));
/// assert!(is_valid(""));
/// ```
pub fn is_valid(raw_input: &str) -> bool {
    match NormalizedCardNumber::parse(raw_input) {
        Ok(number) => number.passes_luhn(),
        Err(_) => false,
    }
}

/// Validates a sequence of digit values (0-9) with the Luhn algorithm.
///
/// Returns `true` for an empty slice, since its checksum is zero.
#[inline]
pub fn passes(digits: &[u8]) -> bool {
    checksum(digits) % 10 == 0
}

/// Computes the Luhn sum for a sequence of digits.
///
/// The rightmost digit is position 0 and is kept as is; positions 1, 3, 5, ...
/// are doubled (minus 9 when the result exceeds 9). The returned value is the
/// plain sum, not reduced modulo 10.
///
/// # Panics
///
/// Panics if a doubled position holds a value greater than 9. Slices from
/// [`NormalizedCardNumber::digit_values`](crate::NormalizedCardNumber::digit_values)
/// only contain 0-9.
///
/// # Example
///
/// ```
/// use card_form::luhn::checksum;
///
/// // 7 is kept, 9 doubles to 18 and drops back to 9, 2 is kept.
/// assert_eq!(checksum(&[2, 9, 7]), 2 + 9 + 7);
/// assert_eq!(checksum(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]) % 10, 0);
/// ```
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Computes the check digit for a partial card number.
///
/// Given digits without the check digit, returns the digit that makes the
/// full number pass [`passes`].
///
/// # Panics
///
/// Panics if a doubled position holds a value greater than 9, as [`checksum`]
/// does.
///
/// # Example
///
/// ```
/// use card_form::luhn::{check_digit, passes};
///
/// let partial = [4, 5, 3, 2, 0, 1, 5, 1, 1, 2, 8, 3, 0, 3, 6];
/// assert_eq!(check_digit(&partial), 6);
///
/// let mut full = partial.to_vec();
/// full.push(6);
/// assert!(passes(&full));
/// ```
pub fn check_digit(partial: &[u8]) -> u8 {
    // Once the check digit is appended, every existing digit moves one
    // position to the left, so the doubling parity flips.
    let sum: u32 = partial
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert!(is_valid("4532015112830366"));
        assert!(!is_valid("4532015112830367"));
        assert!(is_valid("4111111111111111"));
        assert!(is_valid("5500000000000004"));
        assert!(is_valid("378282246310005"));
        assert!(!is_valid("1234567890123456"));
    }

    #[test]
    fn test_whitespace_is_stripped() {
        assert!(is_valid("4532 0151 1283 0366"));
        assert!(is_valid(" 4532015112830366 "));
        assert!(is_valid("4532\t0151\n1283 0366"));
    }

    #[test]
    fn test_non_digit_is_rejected() {
        assert!(!is_valid("4532-0151-1283-0366"));
        assert!(!is_valid("453201511283036a"));
        // "0a" would sum to 0 if the letter were silently skipped
        assert!(!is_valid("0a"));
        // Non-ASCII digits are not decimal digits for this purpose
        assert!(!is_valid("４１１１"));
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(is_valid(""));
        assert!(is_valid("    "));
        assert!(passes(&[]));
    }

    #[test]
    fn test_single_digit() {
        assert!(passes(&[0]));
        assert!(!passes(&[1]));
        assert!(!passes(&[5]));
    }

    #[test]
    fn test_checksum_doubles_every_other_digit() {
        // 1 kept, 8 doubled -> 16 - 9 = 7
        assert_eq!(checksum(&[8, 1]), 8);
        // 5 kept, 5 doubled -> 1, 5 kept
        assert_eq!(checksum(&[5, 5, 5]), 5 + 1 + 5);
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]), 1);
        assert_eq!(check_digit(&[5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 4);
        assert_eq!(check_digit(&[3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0]), 5);
        assert_eq!(check_digit(&[]), 0);
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }

    #[test]
    #[should_panic]
    fn test_checksum_rejects_out_of_range_digit() {
        checksum(&[10, 0]);
    }

    #[test]
    #[should_panic]
    fn test_check_digit_rejects_out_of_range_digit() {
        check_digit(&[0, 10]);
    }
}
