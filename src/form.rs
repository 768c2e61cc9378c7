//! The card form: field state, updates, validation and submission.
//!
//! [`FormController`] owns one value holder per field. Every change arrives
//! as a [`FormEvent`] and produces the next field values from the previous
//! ones; nothing else writes to the fields. Submitting validates locally,
//! then hands exactly one [`CreditInfo`] to a [`CreditInfoSink`].
//!
//! # Example
//!
//! ```
//! use card_form::expiry::ExpiryRules;
//! use card_form::form::{FormController, FormEvent};
//! use chrono::NaiveDate;
//!
//! let rules = ExpiryRules::for_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
//! let mut form = FormController::with_rules(rules);
//!
//! form.apply(FormEvent::CardNumber("4532015112830366".into()));
//! assert_eq!(form.fields().card_number(), "4532 0151 1283 0366");
//!
//! form.apply(FormEvent::Cvv("123".into()));
//! form.apply(FormEvent::CardHolderName("Ada Lovelace".into()));
//! form.apply(FormEvent::ExpirationMonth("12".into()));
//! form.apply(FormEvent::ExpirationYear("2028".into()));
//!
//! let payload = form.validate().unwrap();
//! assert_eq!(payload.card_number().as_str(), "4532015112830366");
//! ```

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::card::{NormalizedCardNumber, CARD_NUMBER_DIGITS};
use crate::client::CreditInfoSink;
use crate::cvv::{validate_cvv, CVV_DIGITS};
use crate::error::{Field, FormError, SubmitError};
use crate::expiry::ExpiryRules;
use crate::format::{format_input, truncate_display};
use crate::keys::{self, Key};
use crate::mask::{mask_all, mask_display};

/// Longest display value the card-number field holds (16 digits, 3 spaces).
pub const CARD_NUMBER_MAX_LENGTH: usize = 19;

/// The JSON body sent to the server.
///
/// Serializes as
/// `{"cardNumber", "cvv", "cardHolderName", "expirationMonth", "expirationYear"}`
/// with string values. The card number carries digits only.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct CreditInfo {
    card_number: NormalizedCardNumber,
    cvv: String,
    card_holder_name: String,
    expiration_month: String,
    expiration_year: String,
}

impl CreditInfo {
    /// The card number, digits only.
    #[inline]
    pub fn card_number(&self) -> &NormalizedCardNumber {
        &self.card_number
    }

    /// The CVV.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// The cardholder name.
    #[inline]
    pub fn card_holder_name(&self) -> &str {
        &self.card_holder_name
    }

    /// The expiration month as entered.
    #[inline]
    pub fn expiration_month(&self) -> &str {
        &self.expiration_month
    }

    /// The expiration year as entered.
    #[inline]
    pub fn expiration_year(&self) -> &str {
        &self.expiration_year
    }
}

impl fmt::Debug for CreditInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditInfo")
            .field("card_number", &self.card_number)
            .field("cvv", &mask_all(&self.cvv))
            .field("card_holder_name", &self.card_holder_name)
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .finish()
    }
}

/// A change to one field.
#[derive(Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// New raw value of the card-number field.
    CardNumber(String),
    /// New value of the CVV field.
    Cvv(String),
    /// New value of the cardholder name field.
    CardHolderName(String),
    /// New value of the expiration month field.
    ExpirationMonth(String),
    /// New value of the expiration year field.
    ExpirationYear(String),
}

impl FormEvent {
    /// The field this event changes.
    pub const fn field(&self) -> Field {
        match self {
            Self::CardNumber(_) => Field::CardNumber,
            Self::Cvv(_) => Field::Cvv,
            Self::CardHolderName(_) => Field::CardHolderName,
            Self::ExpirationMonth(_) => Field::ExpirationMonth,
            Self::ExpirationYear(_) => Field::ExpirationYear,
        }
    }
}

impl fmt::Debug for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CardNumber(value) => f
                .debug_tuple("CardNumber")
                .field(&mask_display(value))
                .finish(),
            Self::Cvv(value) => f.debug_tuple("Cvv").field(&mask_all(value)).finish(),
            Self::CardHolderName(value) => f.debug_tuple("CardHolderName").field(value).finish(),
            Self::ExpirationMonth(value) => f.debug_tuple("ExpirationMonth").field(value).finish(),
            Self::ExpirationYear(value) => f.debug_tuple("ExpirationYear").field(value).finish(),
        }
    }
}

/// Current values of the form fields.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct FormFields {
    card_number: String,
    cvv: String,
    card_holder_name: String,
    expiration_month: String,
    expiration_year: String,
}

impl FormFields {
    /// Returns the next field values after `event`.
    ///
    /// The card number is regrouped and capped at
    /// [`CARD_NUMBER_MAX_LENGTH`] characters; the CVV is capped at three
    /// characters; the other fields are stored as given.
    pub fn update(&self, event: FormEvent) -> Self {
        let mut next = self.clone();
        match event {
            FormEvent::CardNumber(raw) => {
                next.card_number = truncate_display(&format_input(&raw), CARD_NUMBER_MAX_LENGTH);
            }
            FormEvent::Cvv(value) => {
                next.cvv = value.chars().take(CVV_DIGITS).collect();
            }
            FormEvent::CardHolderName(value) => next.card_holder_name = value,
            FormEvent::ExpirationMonth(value) => next.expiration_month = value,
            FormEvent::ExpirationYear(value) => next.expiration_year = value,
        }
        next
    }

    /// The card number as displayed, grouped in fours.
    #[inline]
    pub fn card_number(&self) -> &str {
        &self.card_number
    }

    /// The CVV.
    #[inline]
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// The cardholder name.
    #[inline]
    pub fn card_holder_name(&self) -> &str {
        &self.card_holder_name
    }

    /// The expiration month.
    #[inline]
    pub fn expiration_month(&self) -> &str {
        &self.expiration_month
    }

    /// The expiration year.
    #[inline]
    pub fn expiration_year(&self) -> &str {
        &self.expiration_year
    }

    /// Returns true if every field is empty.
    pub fn is_empty(&self) -> bool {
        self.card_number.is_empty()
            && self.cvv.is_empty()
            && self.card_holder_name.is_empty()
            && self.expiration_month.is_empty()
            && self.expiration_year.is_empty()
    }
}

impl fmt::Debug for FormFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFields")
            .field("card_number", &mask_display(&self.card_number))
            .field("cvv", &mask_all(&self.cvv))
            .field("card_holder_name", &self.card_holder_name)
            .field("expiration_month", &self.expiration_month)
            .field("expiration_year", &self.expiration_year)
            .finish()
    }
}

/// Outcome of the most recent submit, as shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The server accepted the data; holds its message.
    Succeeded(String),
    /// Validation or the request failed; holds the message for the user.
    Failed(String),
}

/// Owns the form state and drives validation and submission.
#[derive(Debug, Clone)]
pub struct FormController {
    fields: FormFields,
    status: SubmissionStatus,
    rules: ExpiryRules,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Creates an empty form whose expiry rules are anchored to today.
    pub fn new() -> Self {
        Self::with_rules(ExpiryRules::today())
    }

    /// Creates an empty form with explicit expiry rules.
    pub fn with_rules(rules: ExpiryRules) -> Self {
        Self {
            fields: FormFields::default(),
            status: SubmissionStatus::Idle,
            rules,
        }
    }

    /// Current field values.
    #[inline]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Outcome of the most recent submit.
    #[inline]
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Expiry rules in effect.
    #[inline]
    pub fn rules(&self) -> &ExpiryRules {
        &self.rules
    }

    /// Applies a field change.
    pub fn apply(&mut self, event: FormEvent) {
        debug!(field = %event.field(), "Field changed");
        self.fields = self.fields.update(event);
    }

    /// Handles a key press in the card-number field.
    ///
    /// Returns false if the keystroke filter rejected the key. Accepted
    /// digits are appended and Backspace removes the last digit. The caret
    /// is always at the end of the value, so Delete has nothing to remove;
    /// it and the navigation keys are accepted and leave the value alone.
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::form::FormController;
    /// use card_form::keys::Key;
    ///
    /// let mut form = FormController::new();
    /// for c in "41111".chars() {
    ///     assert!(form.press_card_number_key(&Key::Char(c)));
    /// }
    /// assert!(!form.press_card_number_key(&Key::Char('x')));
    /// assert_eq!(form.fields().card_number(), "4111 1");
    ///
    /// form.press_card_number_key(&Key::Backspace);
    /// assert_eq!(form.fields().card_number(), "4111");
    /// ```
    pub fn press_card_number_key(&mut self, key: &Key) -> bool {
        if !keys::accepts(key) {
            return false;
        }

        let mut value = self.fields.card_number.clone();
        match key {
            Key::Char(c) => value.push(*c),
            Key::Backspace => {
                value.pop();
            }
            _ => return true,
        }

        self.apply(FormEvent::CardNumber(value));
        true
    }

    /// Checks every field and builds the payload.
    ///
    /// The field constraints are checked first (card number present and 16
    /// digits, CVV, name, month, year, expiry), then the Luhn checksum.
    pub fn validate(&self) -> Result<CreditInfo, FormError> {
        let fields = &self.fields;

        if fields.card_number.trim().is_empty() {
            return Err(FormError::Missing(Field::CardNumber));
        }
        let card_number = NormalizedCardNumber::parse(&fields.card_number)?;
        if card_number.len() != CARD_NUMBER_DIGITS {
            return Err(FormError::InvalidLength {
                field: Field::CardNumber,
                length: card_number.len(),
                expected: CARD_NUMBER_DIGITS,
            });
        }

        validate_cvv(&fields.cvv)?;

        if fields.card_holder_name.trim().is_empty() {
            return Err(FormError::Missing(Field::CardHolderName));
        }

        self.rules
            .validate(&fields.expiration_month, &fields.expiration_year)?;

        if !card_number.passes_luhn() {
            return Err(FormError::InvalidChecksum);
        }

        Ok(CreditInfo {
            card_number,
            cvv: fields.cvv.clone(),
            card_holder_name: fields.card_holder_name.clone(),
            expiration_month: fields.expiration_month.trim().to_string(),
            expiration_year: fields.expiration_year.trim().to_string(),
        })
    }

    /// Validates the form and sends it through `sink`.
    ///
    /// Invalid input is reported without calling the sink. Otherwise the
    /// sink is called exactly once. On success the fields are cleared; on
    /// failure they are kept so the user can resubmit.
    pub async fn submit<S>(&mut self, sink: &S) -> Result<String, SubmitError>
    where
        S: CreditInfoSink + ?Sized,
    {
        let info = match self.validate() {
            Ok(info) => info,
            Err(err) => {
                warn!(error = %err, "Form validation failed");
                self.status = SubmissionStatus::Failed(err.to_string());
                return Err(err.into());
            }
        };

        self.status = SubmissionStatus::Pending;

        match sink.save(&info).await {
            Ok(message) => {
                info!(card = %info.card_number(), "Submission accepted");
                self.fields = FormFields::default();
                self.status = SubmissionStatus::Succeeded(message.clone());
                Ok(message)
            }
            Err(err) => {
                warn!(error = %err, "Submission failed");
                self.status = SubmissionStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const VALID: &str = "4532015112830366";

    fn rules() -> ExpiryRules {
        ExpiryRules::for_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn filled(card_number: &str) -> FormController {
        let mut form = FormController::with_rules(rules());
        form.apply(FormEvent::CardNumber(card_number.to_string()));
        form.apply(FormEvent::Cvv("123".to_string()));
        form.apply(FormEvent::CardHolderName("Ada Lovelace".to_string()));
        form.apply(FormEvent::ExpirationMonth("11".to_string()));
        form.apply(FormEvent::ExpirationYear("2027".to_string()));
        form
    }

    #[test]
    fn test_card_number_is_formatted_on_change() {
        let form = filled("45320151 12830366");
        assert_eq!(form.fields().card_number(), "4532 0151 1283 0366");
    }

    #[test]
    fn test_card_number_is_capped() {
        let form = filled("4532015112830366999");
        assert_eq!(form.fields().card_number(), "4532 0151 1283 0366");
    }

    #[test]
    fn test_cvv_is_capped() {
        let mut form = FormController::with_rules(rules());
        form.apply(FormEvent::Cvv("12345".to_string()));
        assert_eq!(form.fields().cvv(), "123");
    }

    #[test]
    fn test_update_leaves_other_fields() {
        let before = filled(VALID).fields().clone();
        let after = before.update(FormEvent::CardHolderName("Grace Hopper".to_string()));
        assert_eq!(after.card_holder_name(), "Grace Hopper");
        assert_eq!(after.card_number(), before.card_number());
        assert_eq!(before.card_holder_name(), "Ada Lovelace");
    }

    #[test]
    fn test_validate_builds_payload() {
        let info = filled(VALID).validate().unwrap();
        assert_eq!(info.card_number().as_str(), VALID);
        assert_eq!(info.cvv(), "123");
        assert_eq!(info.card_holder_name(), "Ada Lovelace");
        assert_eq!(info.expiration_month(), "11");
        assert_eq!(info.expiration_year(), "2027");
    }

    #[test]
    fn test_payload_json_shape() {
        let info = filled(VALID).validate().unwrap();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "cardNumber": VALID,
                "cvv": "123",
                "cardHolderName": "Ada Lovelace",
                "expirationMonth": "11",
                "expirationYear": "2027",
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_checksum() {
        let err = filled("4532015112830367").validate().unwrap_err();
        assert_eq!(err, FormError::InvalidChecksum);
    }

    #[test]
    fn test_validate_requires_card_number() {
        let err = filled("").validate().unwrap_err();
        assert_eq!(err, FormError::Missing(Field::CardNumber));
    }

    #[test]
    fn test_validate_requires_sixteen_digits() {
        // 15-digit Amex passes Luhn but not this form's length rule
        let err = filled("378282246310005").validate().unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidLength {
                field: Field::CardNumber,
                length: 15,
                expected: 16
            }
        );
    }

    #[test]
    fn test_validate_requires_name() {
        let mut form = filled(VALID);
        form.apply(FormEvent::CardHolderName("   ".to_string()));
        assert_eq!(
            form.validate().unwrap_err(),
            FormError::Missing(Field::CardHolderName)
        );
    }

    #[test]
    fn test_validate_checks_expiry() {
        let mut form = filled(VALID);
        form.apply(FormEvent::ExpirationYear("2026".to_string()));
        form.apply(FormEvent::ExpirationMonth("3".to_string()));
        assert_eq!(
            form.validate().unwrap_err(),
            FormError::Expired {
                month: 3,
                year: 2026
            }
        );
    }

    #[test]
    fn test_signed_or_padded_month_is_not_sent() {
        let mut form = filled(VALID);
        form.apply(FormEvent::ExpirationYear("2027".to_string()));

        form.apply(FormEvent::ExpirationMonth("+5".to_string()));
        assert!(matches!(
            form.validate().unwrap_err(),
            FormError::InvalidCharacter {
                field: Field::ExpirationMonth,
                character: '+',
                ..
            }
        ));

        form.apply(FormEvent::ExpirationMonth("005".to_string()));
        assert!(matches!(
            form.validate().unwrap_err(),
            FormError::InvalidLength {
                field: Field::ExpirationMonth,
                ..
            }
        ));

        form.apply(FormEvent::ExpirationMonth("05".to_string()));
        assert_eq!(form.validate().unwrap().expiration_month(), "05");
    }

    #[test]
    fn test_field_rules_run_before_checksum() {
        let mut form = filled("4532015112830367");
        form.apply(FormEvent::Cvv(String::new()));
        assert_eq!(form.validate().unwrap_err(), FormError::Missing(Field::Cvv));
    }

    #[test]
    fn test_key_presses() {
        let mut form = FormController::with_rules(rules());
        for c in "4532a0151".chars() {
            form.press_card_number_key(&Key::Char(c));
        }
        assert_eq!(form.fields().card_number(), "4532 0151");

        assert!(form.press_card_number_key(&Key::Backspace));
        assert_eq!(form.fields().card_number(), "4532 015");

        assert!(form.press_card_number_key(&Key::ArrowLeft));
        assert_eq!(form.fields().card_number(), "4532 015");

        // Nothing follows the caret.
        assert!(form.press_card_number_key(&Key::Delete));
        assert_eq!(form.fields().card_number(), "4532 015");

        assert!(!form.press_card_number_key(&Key::Other("Escape".to_string())));
    }

    #[test]
    fn test_debug_output_is_masked() {
        let form = filled(VALID);
        let debug = format!("{:?}", form);
        assert!(!debug.contains("4532 0151 1283 0366"));
        assert!(!debug.contains("123\""));
        assert!(debug.contains("0366"));

        let info = form.validate().unwrap();
        let debug = format!("{:?}", info);
        assert!(!debug.contains(VALID));
        assert!(debug.contains("***"));

        let event = FormEvent::CardNumber(VALID.to_string());
        assert!(!format!("{:?}", event).contains(VALID));
    }

    #[test]
    fn test_new_form_is_idle_and_empty() {
        let form = FormController::default();
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert!(form.fields().is_empty());
    }
}
