//! Error types for form validation and submission.
//!
//! [`FormError`] explains why the form refused to submit. [`SubmitError`]
//! covers everything that can go wrong once a submit is attempted, including
//! the validation failure itself.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// The fields of the card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Card number.
    CardNumber,
    /// Card verification value.
    Cvv,
    /// Name printed on the card.
    CardHolderName,
    /// Expiration month.
    ExpirationMonth,
    /// Expiration year.
    ExpirationYear,
}

impl Field {
    /// Returns the label shown next to the field.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CardNumber => "Card Number",
            Self::Cvv => "CVV",
            Self::CardHolderName => "Cardholder Name",
            Self::ExpirationMonth => "Expiration Month",
            Self::ExpirationYear => "Expiration Year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons the form refuses to submit.
///
/// Every variant is detected locally; none of them involves the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field is empty.
    Missing(Field),

    /// A field contains a character it does not accept.
    InvalidCharacter {
        /// The field being checked.
        field: Field,
        /// The position in the field value (0-indexed, in characters).
        position: usize,
        /// The rejected character.
        character: char,
    },

    /// A field has the wrong number of digits.
    InvalidLength {
        /// The field being checked.
        field: Field,
        /// The number of digits provided.
        length: usize,
        /// The required number of digits.
        expected: usize,
    },

    /// The expiration month is not a number between 1 and 12.
    MonthOutOfRange {
        /// The month as entered.
        month: String,
    },

    /// The expiration year is outside the accepted window.
    YearOutOfRange {
        /// The parsed year.
        year: i32,
        /// Earliest accepted year (the current year).
        minimum: i32,
        /// Latest accepted year.
        maximum: i32,
    },

    /// The expiration month has already passed this year.
    Expired {
        /// The expiration month.
        month: u32,
        /// The expiration year.
        year: i32,
    },

    /// The card number failed the Luhn checksum.
    InvalidChecksum,
}

impl FormError {
    /// Returns the field the error refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Missing(field)
            | Self::InvalidCharacter { field, .. }
            | Self::InvalidLength { field, .. } => Some(*field),
            Self::MonthOutOfRange { .. } | Self::Expired { .. } => Some(Field::ExpirationMonth),
            Self::YearOutOfRange { .. } => Some(Field::ExpirationYear),
            Self::InvalidChecksum => Some(Field::CardNumber),
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "{} is required", field),

            Self::InvalidCharacter {
                field,
                position,
                character,
            } => {
                write!(
                    f,
                    "{}: invalid character '{}' at position {}",
                    field,
                    character.escape_default(),
                    position
                )
            }

            Self::InvalidLength {
                field,
                length,
                expected,
            } => {
                write!(
                    f,
                    "{} must have {} digits, got {}",
                    field, expected, length
                )
            }

            Self::MonthOutOfRange { month } => {
                write!(f, "invalid month '{}': must be 1-12", month.escape_default())
            }

            Self::YearOutOfRange {
                year,
                minimum,
                maximum,
            } => {
                write!(
                    f,
                    "expiration year {} must be between {} and {}",
                    year, minimum, maximum
                )
            }

            Self::Expired { month, year } => {
                write!(f, "card expired ({:02}/{})", month, year)
            }

            Self::InvalidChecksum => write!(f, "Invalid credit card number!"),
        }
    }
}

impl std::error::Error for FormError {}

/// Errors from a submit attempt.
///
/// All of them end the attempt; nothing is retried.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The form did not pass local validation; nothing was sent.
    #[error(transparent)]
    Invalid(#[from] FormError),

    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status and a JSON body.
    #[error("{message}")]
    Rejected {
        /// Response status.
        status: StatusCode,
        /// Message extracted from the JSON body.
        message: String,
    },

    /// The server answered with a non-success status and a body that is not JSON.
    #[error("{body}")]
    MalformedErrorBody {
        /// Response status.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },
}

impl SubmitError {
    /// Returns true if the request reached the server.
    pub fn is_server_response(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::MalformedErrorBody { .. })
    }
}
