use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::borrow::Cow;
use validator::ValidationError;

lazy_static! {
    /// Donor mobile numbers: exactly ten digits
    /// - Valid: "5551234567"
    /// - Invalid: "555-123-4567", "555123456", "+15551234567"
    pub static ref MOBILE_REGEX: Regex = Regex::new(r"^\d{10}$").unwrap();

    /// Hospital and contact phone numbers: digits with optional leading "+",
    /// spaces, dashes and parentheses, 7 to 20 characters
    /// - Valid: "+1 (555) 123-4567", "5551234567"
    /// - Invalid: "call me", "12"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9()\- ]{7,20}$").unwrap();
}

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("must not be blank"));
        return Err(error);
    }
    Ok(())
}

/// Serde helper for optional text fields: forms send `""` for untouched
/// inputs, which should read as absent rather than fail validation.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}
