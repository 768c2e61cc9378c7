//! Fuzz target for form validation.
//!
//! Feeds arbitrary field values through the controller and checks that a
//! payload is only produced for input that passes every rule.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{expiry::ExpiryRules, luhn, FormController, FormEvent};
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    card_number: String,
    cvv: String,
    name: String,
    month: String,
    year: String,
}

fuzz_target!(|input: Input| {
    let Some(today) = NaiveDate::from_ymd_opt(2026, 10, 19) else {
        return;
    };
    let mut form = FormController::with_rules(ExpiryRules::for_date(today));
    form.apply(FormEvent::CardNumber(input.card_number));
    form.apply(FormEvent::Cvv(input.cvv));
    form.apply(FormEvent::CardHolderName(input.name));
    form.apply(FormEvent::ExpirationMonth(input.month));
    form.apply(FormEvent::ExpirationYear(input.year));

    assert!(form.fields().card_number().chars().count() <= 19);
    assert!(form.fields().cvv().chars().count() <= 3);

    if let Ok(info) = form.validate() {
        let number = info.card_number().as_str();
        assert_eq!(number.len(), 16);
        assert!(luhn::is_valid(number));
        assert_eq!(info.cvv().len(), 3);
        assert!(!info.card_holder_name().trim().is_empty());
    }
});
