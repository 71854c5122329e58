//! Field-level payload validation that collects every violation.

use std::fmt;

use validator::ValidateEmail;

pub const MIN_PASSWORD_LENGTH: usize = 3;
pub const MAX_PASSWORD_LENGTH: usize = 130;

/// A single rule a field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// All violations found in one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn has(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Records a violation when `value` is blank. Returns whether it was present.
pub fn required(errors: &mut ValidationErrors, field: &'static str, value: &str) -> bool {
    if value.trim().is_empty() {
        errors.push(field, "is required");
        return false;
    }
    true
}

pub fn email(errors: &mut ValidationErrors, field: &'static str, value: &str) {
    if required(errors, field, value) && !value.validate_email() {
        errors.push(field, "must be a valid email address");
    }
}

/// Length is counted in characters, not bytes.
pub fn length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) {
    let len = value.chars().count();
    if len < min || len > max {
        errors.push(
            field,
            format!("must be between {min} and {max} characters"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_required() {
        let mut errors = ValidationErrors::new();
        assert!(!required(&mut errors, "firstName", "   "));
        assert!(required(&mut errors, "lastName", "B"));
        assert_eq!(errors.violations().len(), 1);
        assert!(errors.has("firstName"));
    }

    #[test]
    fn email_accepts_valid_and_rejects_invalid() {
        let mut errors = ValidationErrors::new();
        email(&mut errors, "email", "user@example.com");
        email(&mut errors, "email", "a@b.co");
        assert!(errors.is_empty());

        email(&mut errors, "email", "invalid");
        email(&mut errors, "email", "@nodomain");
        assert_eq!(errors.violations().len(), 2);
    }

    #[test]
    fn empty_email_reports_only_required() {
        let mut errors = ValidationErrors::new();
        email(&mut errors, "email", "");
        assert_eq!(errors.violations().len(), 1);
        assert_eq!(errors.violations()[0].message, "is required");
    }

    #[test]
    fn length_counts_characters() {
        let mut errors = ValidationErrors::new();
        length(&mut errors, "password", "äöü", 3, 130);
        assert!(errors.is_empty());
        length(&mut errors, "password", "ab", 3, 130);
        length(&mut errors, "password", &"x".repeat(131), 3, 130);
        assert_eq!(errors.violations().len(), 2);
    }

    #[test]
    fn display_joins_all_violations() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "is required");
        errors.push("password", "is required");
        assert_eq!(
            errors.to_string(),
            "email: is required; password: is required"
        );
        assert!(errors.into_result().is_err());
    }
}
