//! Expiration month and year validation.
//!
//! Both fields are entered separately. The month must be 1-12, the year must
//! have four digits and fall between the current year and ten years ahead,
//! and the month/year pair must not be in the past.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::ExpiryRules;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let rules = ExpiryRules::for_date(today);
//!
//! assert!(rules.validate("12", "2026").is_ok());
//! assert!(rules.validate("09", "2026").is_err()); // already past
//! assert!(rules.validate("01", "2037").is_err()); // too far ahead
//! ```

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{Field, FormError};

/// How many years ahead an expiration year may be.
pub const MAX_YEARS_AHEAD: i32 = 10;

/// Number of digits in an expiration year.
pub const YEAR_DIGITS: usize = 4;

/// Maximum number of digits in an expiration month.
pub const MONTH_DIGITS: usize = 2;

/// Expiration rules anchored to a particular day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryRules {
    current_year: i32,
    current_month: u32,
}

impl ExpiryRules {
    /// Rules as of `today`.
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            current_year: today.year(),
            current_month: today.month(),
        }
    }

    /// Rules as of the local date right now.
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    /// Earliest accepted year.
    #[inline]
    pub const fn min_year(&self) -> i32 {
        self.current_year
    }

    /// Latest accepted year.
    #[inline]
    pub const fn max_year(&self) -> i32 {
        self.current_year + MAX_YEARS_AHEAD
    }

    /// Parses the month field: one or two ASCII digits in `1..=12`.
    /// Surrounding whitespace is ignored.
    pub fn validate_month(&self, input: &str) -> Result<u32, FormError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FormError::Missing(Field::ExpirationMonth));
        }

        ensure_digits(trimmed, Field::ExpirationMonth)?;

        if trimmed.len() > MONTH_DIGITS {
            return Err(FormError::InvalidLength {
                field: Field::ExpirationMonth,
                length: trimmed.len(),
                expected: MONTH_DIGITS,
            });
        }

        match trimmed.parse::<u32>() {
            Ok(month) if (1..=12).contains(&month) => Ok(month),
            _ => Err(FormError::MonthOutOfRange {
                month: trimmed.to_string(),
            }),
        }
    }

    /// Parses the year field: exactly four ASCII digits, inside the accepted window.
    pub fn validate_year(&self, input: &str) -> Result<i32, FormError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(FormError::Missing(Field::ExpirationYear));
        }

        ensure_digits(trimmed, Field::ExpirationYear)?;

        if trimmed.len() != YEAR_DIGITS {
            return Err(FormError::InvalidLength {
                field: Field::ExpirationYear,
                length: trimmed.len(),
                expected: YEAR_DIGITS,
            });
        }

        // Four ASCII digits always fit in an i32.
        let year: i32 = trimmed.parse().map_err(|_| FormError::InvalidLength {
            field: Field::ExpirationYear,
            length: trimmed.len(),
            expected: YEAR_DIGITS,
        })?;

        if year < self.min_year() || year > self.max_year() {
            return Err(FormError::YearOutOfRange {
                year,
                minimum: self.min_year(),
                maximum: self.max_year(),
            });
        }

        Ok(year)
    }

    /// Validates both fields and rejects a month that has already passed.
    ///
    /// A card stays valid through the end of its expiration month.
    pub fn validate(&self, month: &str, year: &str) -> Result<(u32, i32), FormError> {
        let month = self.validate_month(month)?;
        let year = self.validate_year(year)?;

        if year == self.current_year && month < self.current_month {
            return Err(FormError::Expired { month, year });
        }

        Ok((month, year))
    }
}

/// Rejects the first character that is not an ASCII digit. Signs count.
fn ensure_digits(value: &str, field: Field) -> Result<(), FormError> {
    match value.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, character)) => Err(FormError::InvalidCharacter {
            field,
            position,
            character,
        }),
        None => Ok(()),
    }
}
