// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validity values and the checks that produce them.

use alloc::string::String;

use thiserror::Error;

use crate::TextAreaConfig;

/// Validity as reported to, and fed back by, the host.
///
/// `valid` is `None` while nothing has been validated yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Validity {
    /// Whether the value passed validation.
    pub valid: Option<bool>,
    /// Message explaining a failure.
    pub message: Option<String>,
}

impl Validity {
    /// A passing result without a message.
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            valid: Some(true),
            message: None,
        }
    }

    /// A failing result with `message`.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: Some(false),
            message: Some(message.into()),
        }
    }

    /// The message, or `""` when there is none.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        Self {
            valid: Some(valid),
            message: None,
        }
    }
}

/// A built-in constraint the value violates.
///
/// Lengths are counted in UTF-16 code units, as browsers count them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstraintError {
    /// A required field is empty.
    #[error("please fill out this field")]
    ValueMissing,
    /// The value is shorter than `min_length`.
    #[error("please use at least {min} characters (currently {len})")]
    TooShort {
        /// Configured minimum.
        min: usize,
        /// Current length.
        len: usize,
    },
    /// The value is longer than `max_length`.
    #[error("please use no more than {max} characters (currently {len})")]
    TooLong {
        /// Configured maximum.
        max: usize,
        /// Current length.
        len: usize,
    },
}

/// Checks `value` against the built-in constraints of `config`.
///
/// Length limits do not apply to an empty value.
pub fn check_constraints(config: &TextAreaConfig, value: &str) -> Result<(), ConstraintError> {
    if value.is_empty() {
        return if config.required {
            Err(ConstraintError::ValueMissing)
        } else {
            Ok(())
        };
    }
    let len = value.encode_utf16().count();
    if let Some(min) = config.min_length.filter(|min| len < *min) {
        return Err(ConstraintError::TooShort { min, len });
    }
    if let Some(max) = config.max_length.filter(|max| len > *max) {
        return Err(ConstraintError::TooLong { max, len });
    }
    Ok(())
}

/// Validation supplied by the host, run after the built-in constraints pass.
///
/// Returning `None` keeps the built-in result. Closures of the form
/// `FnMut(&str) -> Option<Validity>` implement this trait.
pub trait CustomValidator {
    /// Validates `value`.
    fn validate(&mut self, value: &str) -> Option<Validity>;
}

impl<F> CustomValidator for F
where
    F: FnMut(&str) -> Option<Validity>,
{
    fn validate(&mut self, value: &str) -> Option<Validity> {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConstraintError, Validity, check_constraints};
    use crate::TextAreaConfig;

    #[test]
    fn empty_values_only_fail_when_required() {
        let mut config = TextAreaConfig {
            min_length: Some(3),
            ..TextAreaConfig::default()
        };
        assert_eq!(check_constraints(&config, ""), Ok(()));
        config.required = true;
        assert_eq!(check_constraints(&config, ""), Err(ConstraintError::ValueMissing));
    }

    #[test]
    fn lengths_count_utf16_units() {
        let config = TextAreaConfig {
            min_length: Some(2),
            max_length: Some(3),
            ..TextAreaConfig::default()
        };
        assert_eq!(
            check_constraints(&config, "a"),
            Err(ConstraintError::TooShort { min: 2, len: 1 })
        );
        // One astral character is two code units.
        assert_eq!(check_constraints(&config, "\u{1F600}"), Ok(()));
        assert_eq!(
            check_constraints(&config, "abcd"),
            Err(ConstraintError::TooLong { max: 3, len: 4 })
        );
    }

    #[test]
    fn bool_validity_has_no_message() {
        let validity = Validity::from(false);
        assert_eq!(validity.valid, Some(false));
        assert_eq!(validity.message(), "");
        assert_eq!(Validity::invalid("nope").message(), "nope");
    }
}
