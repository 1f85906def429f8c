//! Checkout form and field validation.

use crate::checkout::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single failed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Every failed field from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a given field failed.
    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Contact and shipping details collected at checkout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub shipping: Address,
}

impl CheckoutForm {
    pub fn new(email: impl Into<String>, shipping: Address) -> Self {
        Self {
            email: email.into(),
            phone: None,
            shipping,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Check every field, collecting all failures rather than stopping at
    /// the first.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let a = &self.shipping;

        if self.email.trim().is_empty() {
            errors.push("email", "is required");
        } else if !is_valid_email(self.email.trim()) {
            errors.push("email", "is not a valid email address");
        }
        if let Some(phone) = &self.phone {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            if !phone.trim().is_empty() && !(7..=15).contains(&digits) {
                errors.push("phone", "is not a valid phone number");
            }
        }

        for (field, value) in [
            ("firstName", &a.first_name),
            ("lastName", &a.last_name),
            ("address1", &a.address1),
            ("city", &a.city),
            ("country", &a.country),
        ] {
            if value.trim().is_empty() {
                errors.push(field, "is required");
            }
        }

        if a.zip.trim().is_empty() {
            errors.push("zip", "is required");
        } else if !is_valid_postal_code(a.zip.trim(), a.country.trim()) {
            errors.push("zip", "is not a valid postal code");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// One `@`, a non-empty local part, and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

/// US ZIP or ZIP+4 for "US"; a loose alphanumeric check elsewhere.
fn is_valid_postal_code(zip: &str, country: &str) -> bool {
    if country.eq_ignore_ascii_case("US") {
        let (five, plus_four) = match zip.split_once('-') {
            Some((five, four)) => (five, Some(four)),
            None => (zip, None),
        };
        let all_digits = |s: &str, len: usize| s.len() == len && s.chars().all(|c| c.is_ascii_digit());
        all_digits(five, 5) && plus_four.map_or(true, |four| all_digits(four, 4))
    } else {
        (3..=10).contains(&zip.len())
            && zip.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm::new(
            "jane@example.com",
            Address::new("Jane", "Smith", "456 Oak Ave", "Los Angeles", "90001", "US"),
        )
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(valid_form().validate().is_ok());
        assert!(valid_form().with_phone("+1 (555) 010-2000").validate().is_ok());
    }

    #[test]
    fn test_collects_every_missing_field() {
        let form = CheckoutForm::default();
        let errors = form.validate().unwrap_err();
        for field in ["email", "firstName", "lastName", "address1", "city", "country", "zip"] {
            assert!(errors.has(field), "missing error for {}", field);
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b..co"));
    }

    #[test]
    fn test_postal_codes() {
        assert!(is_valid_postal_code("94102", "US"));
        assert!(is_valid_postal_code("94102-1234", "us"));
        assert!(!is_valid_postal_code("9410", "US"));
        assert!(!is_valid_postal_code("ABCDE", "US"));
        assert!(is_valid_postal_code("SW1A 1AA", "GB"));
        assert!(!is_valid_postal_code("12", "GB"));
    }

    #[test]
    fn test_bad_phone_is_reported() {
        let errors = valid_form().with_phone("12").validate().unwrap_err();
        assert!(errors.has("phone"));
        assert_eq!(errors.errors().len(), 1);
    }

    #[test]
    fn test_display_joins_errors() {
        let mut form = valid_form();
        form.email = "nope".into();
        form.shipping.city.clear();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.to_string(), "email is not a valid email address; city is required");
    }
}
