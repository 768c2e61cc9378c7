//! Fuzz target for card number formatting.
//!
//! Tests that formatting never panics and is idempotent on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_form::{format, keys, mask};

fuzz_target!(|data: &str| {
    let formatted = format::format_input(data);
    assert_eq!(format::format_input(&formatted), formatted, "format should be idempotent");

    let digits: String = data.chars().filter(|c| c.is_ascii_digit()).collect();
    assert_eq!(format::strip_whitespace(&formatted), digits, "format should preserve digits");

    assert_eq!(keys::filter_keystrokes(data), digits);

    // These should never panic
    let _ = format::truncate_display(&formatted, 19);
    let _ = mask::mask_display(data);
    let _ = mask::mask_digits(data);
});
