//! Request payload validation.
//!
//! Request bodies deserialize with every field optional, then these checks
//! run in declaration order and the first failure becomes the 422 message.
//! That keeps "field missing" a validation error rather than a
//! deserialization error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ValidationError;
use crate::models::Role;

const MAX_EMAIL_LENGTH: usize = 254; // RFC 5321

lazy_static! {
    // RFC 5322 simplified email regex (practical validation)
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();
}

/// A required free-text field: present and non-empty after trimming.
pub fn validate_required(
    value: Option<&str>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::MissingField(field))?;
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }

    Ok(trimmed.to_string())
}

/// A required email field, format-checked.
pub fn validate_email(value: Option<&str>) -> Result<String, ValidationError> {
    let email = validate_required(value, "email")?;

    if email.len() > MAX_EMAIL_LENGTH || !EMAIL_REGEX.is_match(&email) {
        return Err(ValidationError::InvalidFormat("email"));
    }

    Ok(email)
}

/// An optional role field. Absent or empty defaults to `regular`.
pub fn validate_role(value: Option<&str>) -> Result<Role, ValidationError> {
    match value.map(str::trim) {
        None | Some("") => Ok(Role::Regular),
        Some("admin") => Ok(Role::Admin),
        Some("regular") => Ok(Role::Regular),
        Some(_) => Err(ValidationError::InvalidFormat("role")),
    }
}

/// A required positive price.
pub fn validate_price(value: Option<i64>) -> Result<i64, ValidationError> {
    let price = value.ok_or(ValidationError::MissingField("price"))?;
    if price <= 0 {
        return Err(ValidationError::OutOfRange("price"));
    }
    Ok(price)
}

/// An optional free-text field: absent is fine, present must be non-empty.
pub fn validate_optional(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match value {
        None => Ok(None),
        Some(value) => validate_required(Some(value), field).map(Some),
    }
}

/// An optional price: absent is fine, present must be positive.
pub fn validate_optional_price(value: Option<i64>) -> Result<Option<i64>, ValidationError> {
    match value {
        None => Ok(None),
        Some(price) => validate_price(Some(price)).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_reports_missing_then_empty() {
        assert_eq!(
            validate_required(None, "name").unwrap_err().to_string(),
            "\"name\" is required"
        );
        assert_eq!(
            validate_required(Some("   "), "name").unwrap_err().to_string(),
            "\"name\" is not allowed to be empty"
        );
        assert_eq!(validate_required(Some(" bob "), "name").unwrap(), "bob");
    }

    #[test]
    fn email_format_is_checked() {
        assert!(validate_email(Some("a@test.com")).is_ok());
        assert!(validate_email(Some("notanemail")).is_err());
        assert!(validate_email(Some("user@")).is_err());
        assert!(validate_email(Some("@example.com")).is_err());
        assert!(validate_email(None).is_err());
    }

    #[test]
    fn role_defaults_to_regular() {
        assert_eq!(validate_role(None).unwrap(), Role::Regular);
        assert_eq!(validate_role(Some("")).unwrap(), Role::Regular);
        assert_eq!(validate_role(Some("admin")).unwrap(), Role::Admin);
        assert_eq!(validate_role(Some("regular")).unwrap(), Role::Regular);
        assert!(validate_role(Some("superuser")).is_err());
    }

    #[test]
    fn price_must_be_positive() {
        assert_eq!(validate_price(Some(100_000)).unwrap(), 100_000);
        assert!(validate_price(Some(0)).is_err());
        assert!(validate_price(Some(-5)).is_err());
        assert!(validate_price(None).is_err());
    }

    #[test]
    fn optional_fields_allow_absence_only() {
        assert_eq!(validate_optional(None, "size").unwrap(), None);
        assert_eq!(
            validate_optional(Some("XL"), "size").unwrap(),
            Some("XL".to_string())
        );
        assert!(validate_optional(Some(""), "size").is_err());
        assert_eq!(validate_optional_price(None).unwrap(), None);
        assert!(validate_optional_price(Some(0)).is_err());
    }
}
