//! Masking for card numbers and CVVs shown in logs or on screen.
//!
//! Only the last four digits of a card number are ever displayed. This is
//! what `Debug`, `Display` and every `tracing` event in this crate use.

/// Masks a digit string, keeping only the last 4 characters.
///
/// Inputs of 4 characters or fewer are masked entirely.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_digits;
///
/// assert_eq!(mask_digits("4532015112830366"), "************0366");
/// assert_eq!(mask_digits("123"), "***");
/// ```
pub fn mask_digits(digits: &str) -> String {
    let len = digits.chars().count();

    if len <= 4 {
        return "*".repeat(len);
    }

    let mut result = String::with_capacity(len);
    for _ in 0..len - 4 {
        result.push('*');
    }
    result.extend(digits.chars().skip(len - 4));
    result
}

/// Masks a formatted display value, keeping separators in place.
///
/// Every digit except the last four becomes `*`; spaces stay where they are
/// so the grouping remains readable.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_display;
///
/// assert_eq!(mask_display("4532 0151 1283 0366"), "**** **** **** 0366");
/// ```
pub fn mask_display(value: &str) -> String {
    let digit_count = value.chars().filter(|c| c.is_ascii_digit()).count();
    let keep_from = digit_count.saturating_sub(4);
    let mut seen = 0usize;

    value
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen > keep_from && digit_count > 4 {
                    return c;
                }
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// Masks a secret entirely, preserving only its length.
#[inline]
pub fn mask_all(value: &str) -> String {
    "*".repeat(value.chars().count())
}
