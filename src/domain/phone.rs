//! PhoneNumber value object and the shared display formatter.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum number of digit characters a phone number must carry.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Strip every non-digit character from a raw phone string.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize a raw phone number into its display form.
///
/// All non-digit characters are discarded, then the digits are grouped by
/// length and prefixed with `+`:
///
/// - 10 digits: `+123 456 7890`
/// - 11 digits starting with `1`: `+1 123 456 7890`
/// - more than 10 digits: `+123 456 789 <rest>`
/// - fewer than 10 digits: `+` followed by the digits ungrouped
///
/// Every place a phone number is displayed (preview and exported document)
/// goes through this one function, so the same digits always render to the
/// same string regardless of call site.
///
/// # Example
///
/// ```
/// use resume_export::domain::format_phone;
///
/// assert_eq!(format_phone("(123) 456-7890"), "+123 456 7890");
/// assert_eq!(format_phone("1-123-456-7890"), "+1 123 456 7890");
/// ```
pub fn format_phone(raw: &str) -> String {
    let d = digits(raw);

    match d.len() {
        10 => format!("+{} {} {}", &d[0..3], &d[3..6], &d[6..10]),
        11 if d.starts_with('1') => {
            format!("+{} {} {} {}", &d[0..1], &d[1..4], &d[4..7], &d[7..11])
        }
        n if n > 10 => format!("+{} {} {} {}", &d[0..3], &d[3..6], &d[6..9], &d[9..]),
        _ => format!("+{}", d),
    }
}

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time:
/// after discarding formatting characters, at least [`MIN_PHONE_DIGITS`]
/// digits must remain. The raw input is kept as entered; use
/// [`PhoneNumber::formatted`] for the display form.
///
/// # Example
///
/// ```
/// use resume_export::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("(220) 222-20002").unwrap();
/// assert_eq!(phone.digits_only(), "22022220002");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the digit count.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if fewer than
    /// [`MIN_PHONE_DIGITS`] digits remain after stripping formatting.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if digits(&phone).len() < MIN_PHONE_DIGITS {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        digits(&self.0)
    }

    /// Get the normalized display form (see [`format_phone`]).
    pub fn formatted(&self) -> String {
        format_phone(&self.0)
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support - uses the normalized form
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}
