//! # card_form
//!
//! Logic behind a credit card entry form: Luhn validation, input
//! formatting, field rules, and JSON submission to a remote endpoint.
//!
//! ## Features
//!
//! - Luhn checksum over user-entered card numbers
//! - `XXXX XXXX XXXX XXXX` formatting on every keystroke
//! - Keystroke filter for the card-number field
//! - CVV and expiration month/year rules
//! - Form controller that owns field state and submits exactly once
//! - reqwest-based client for `POST {server}/credits/savecreditinfo`
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{format_input, is_valid};
//!
//! assert!(is_valid("4532015112830366"));
//! assert!(!is_valid("4532015112830367"));
//!
//! assert_eq!(format_input("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_input("41a1 11 1111"), "4111 1111 1");
//! ```
//!
//! ## Submitting the Form
//!
//! ```rust,no_run
//! use card_form::{ClientConfig, FormController, FormEvent, HttpClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new(ClientConfig::from_env()?);
//! let mut form = FormController::new();
//!
//! form.apply(FormEvent::CardNumber("4532 0151 1283 0366".into()));
//! form.apply(FormEvent::Cvv("123".into()));
//! form.apply(FormEvent::CardHolderName("Ada Lovelace".into()));
//! form.apply(FormEvent::ExpirationMonth("12".into()));
//! form.apply(FormEvent::ExpirationYear("2030".into()));
//!
//! let message = form.submit(&client).await?;
//! println!("{message}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | `cardform` command-line tool and logger setup |
//!
//! ## Security
//!
//! - Card numbers and form fields are zeroized on drop
//! - `Debug` and `Display` show masked card numbers and CVVs only
//! - Log events carry the masked card number, never the full one
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod client;
pub mod config;
pub mod cvv;
pub mod error;
pub mod expiry;
pub mod form;
pub mod format;
pub mod keys;
#[cfg(feature = "cli")]
pub mod logger;
pub mod luhn;
pub mod mask;

// Re-export main types at crate root
pub use card::NormalizedCardNumber;
pub use client::{CreditInfoSink, HttpClient};
pub use config::{ClientConfig, ConfigError};
pub use error::{Field, FormError, SubmitError};
pub use form::{CreditInfo, FormController, FormEvent, SubmissionStatus};
pub use format::format_input;
pub use luhn::is_valid;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        assert!(is_valid("4532015112830366"));
        assert_eq!(format_input("4532015112830366"), "4532 0151 1283 0366");
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NormalizedCardNumber>();
        assert_send_sync::<CreditInfo>();
        assert_send_sync::<FormController>();
        assert_send_sync::<HttpClient>();
        assert_send_sync::<SubmitError>();
    }
}
