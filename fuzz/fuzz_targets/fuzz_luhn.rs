//! Fuzz target for the Luhn check.
//!
//! Tests that luhn functions never panic and maintain invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_form::luhn;

fuzz_target!(|data: &str| {
    let valid = luhn::is_valid(data);

    // Whitespace never matters
    let stripped: String = data.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(valid, luhn::is_valid(&stripped), "whitespace changed the result");

    // Anything besides digits and whitespace is rejected
    if stripped.chars().any(|c| !c.is_ascii_digit()) {
        assert!(!valid, "non-digit input accepted");
        return;
    }

    let digits: Vec<u8> = stripped.bytes().map(|b| b - b'0').collect();
    assert_eq!(valid, luhn::passes(&digits), "string and digit checks disagree");

    // Adding a check digit should make it valid
    if digits.len() <= 18 {
        let check = luhn::check_digit(&digits);
        assert!(check <= 9, "Check digit should be 0-9");

        let mut with_check = digits.clone();
        with_check.push(check);
        assert!(luhn::passes(&with_check), "Adding check digit should make valid");
    }
});
