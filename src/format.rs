//! Card number formatting for the input field.
//!
//! The card-number field always shows its value grouped in fours
//! (`XXXX XXXX XXXX XXXX`), whatever the user typed or pasted. The
//! formatter runs on every change to the field.
//!
//! # Example
//!
//! ```
//! use card_form::format::{format_input, strip_whitespace};
//!
//! assert_eq!(format_input("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_input("41a1 11 1111"), "4111 1111 1");
//!
//! assert_eq!(strip_whitespace("4111 1111 1111 1111"), "4111111111111111");
//! ```

/// Size of each digit group in the display value.
pub const GROUP_SIZE: usize = 4;

/// Formats raw field input into space-separated groups of four digits.
///
/// Characters other than digits and spaces are dropped, then the spaces
/// themselves, and the remaining digits are regrouped. There is never a
/// leading or trailing space.
///
/// The operation is idempotent: formatting an already formatted value
/// returns it unchanged.
///
/// # Example
///
/// ```
/// use card_form::format::format_input;
///
/// assert_eq!(format_input("4111"), "4111");
/// assert_eq!(format_input("41111"), "4111 1");
/// assert_eq!(format_input(" 4111 1111 "), "4111 1111");
/// assert_eq!(format_input("abc"), "");
/// ```
pub fn format_input(raw: &str) -> String {
    let digits = raw.chars().filter(|c| c.is_ascii_digit());

    let mut result = String::with_capacity(raw.len() + raw.len() / GROUP_SIZE);
    for (i, c) in digits.enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            result.push(' ');
        }
        result.push(c);
    }

    result
}

/// Removes every whitespace character from the input.
///
/// This is how the submitted card number is derived from the display value.
///
/// # Example
///
/// ```
/// use card_form::format::strip_whitespace;
///
/// assert_eq!(strip_whitespace("4111 1111\t1111 1111"), "4111111111111111");
/// ```
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Truncates a display value to `max_len` characters.
///
/// A space left dangling at the end by the cut is removed, so the result is
/// still a fixed point of [`format_input`].
pub fn truncate_display(value: &str, max_len: usize) -> String {
    let truncated: String = value.chars().take(max_len).collect();
    truncated.trim_end().to_string()
}
