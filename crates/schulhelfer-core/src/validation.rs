//! Registration Form Validation
//!
//! Synchronous per-field checks. The UI runs them on blur and before submit.

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::ValidationError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::NameMissing);
    }
    if value.chars().count() < 2 {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::EmailMissing);
    }
    if !email_regex().is_match(value) {
        return Err(ValidationError::EmailInvalid);
    }
    Ok(())
}

/// Which form field a validation result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
}

/// Outcome of validating the whole form before submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
}

impl FormErrors {
    pub fn check(name: &str, email: &str) -> Self {
        Self {
            name: validate_name(name).err(),
            email: validate_email(email).err(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    /// Field that should receive focus after a failed submit
    pub fn first_invalid(&self) -> Option<Field> {
        if self.name.is_some() {
            Some(Field::Name)
        } else if self.email.is_some() {
            Some(Field::Email)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_character_name_passes() {
        assert_eq!(validate_name("Jo"), Ok(()));
        assert_eq!(validate_name("  Lü "), Ok(()));
    }

    #[test]
    fn test_name_errors() {
        assert_eq!(validate_name(""), Err(ValidationError::NameMissing));
        assert_eq!(validate_name("   "), Err(ValidationError::NameMissing));
        assert_eq!(validate_name("A"), Err(ValidationError::NameTooShort));
        assert_eq!(
            validate_name("A").unwrap_err().to_string(),
            "Der Name muss mindestens 2 Zeichen haben."
        );
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(validate_email("eltern@schule.ch"), Ok(()));
        assert_eq!(validate_email(" a.b@c.de "), Ok(()));
        assert_eq!(validate_email(""), Err(ValidationError::EmailMissing));
        assert_eq!(validate_email("no-at.ch"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("a@b"), Err(ValidationError::EmailInvalid));
        assert_eq!(validate_email("a b@c.ch"), Err(ValidationError::EmailInvalid));
    }

    #[test]
    fn test_form_errors_focus_order() {
        let errors = FormErrors::check("A", "bad");
        assert!(!errors.is_valid());
        assert_eq!(errors.first_invalid(), Some(Field::Name));

        let errors = FormErrors::check("Anna", "bad");
        assert_eq!(errors.first_invalid(), Some(Field::Email));

        let errors = FormErrors::check("Anna", "anna@example.ch");
        assert!(errors.is_valid());
        assert_eq!(errors.first_invalid(), None);
    }
}
