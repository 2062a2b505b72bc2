//! PhoneInput value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Pattern the form enforces while the user types: an optional leading '+'
/// followed by digits only. The empty string and a bare "+" match, since
/// phone is an optional field and this is a format check, not a presence
/// check.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+)?\d*$").expect("phone pattern is valid"));

/// A type-safe wrapper for phone input.
///
/// This ensures that phone values are validated at construction time
/// against the same pattern the form applies on every keystroke.
///
/// # Example
///
/// ```
/// use contactbook_ui::domain::PhoneInput;
///
/// let phone = PhoneInput::new("+4455").unwrap();
/// assert_eq!(phone.as_str(), "+4455");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneInput(String);

impl PhoneInput {
    /// Create a new PhoneInput, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Optional leading '+'
    /// - Digits only after that
    /// - May be empty (the field is optional)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone)
    }

    /// Get the phone input as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneInput::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
