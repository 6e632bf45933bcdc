use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_NAME_CHARS: usize = 2;

/// Raw field values exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub full_name: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
}

/// Per-field error flags shown next to the inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: bool,
    pub email: bool,
}

impl ValidationErrors {
    pub fn is_clean(&self) -> bool {
        !self.name && !self.email
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::FullName => self.name = false,
            Field::Email => self.email = false,
        }
    }
}

/// A form that passed validation, with both values trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applicant {
    pub name: String,
    pub email: String,
}

pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= MIN_NAME_CHARS
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Checks both fields; every failing field is flagged, not just the first.
pub fn validate(form: &SubmissionForm) -> Result<Applicant, ValidationErrors> {
    let errors = ValidationErrors {
        name: !is_valid_name(&form.full_name),
        email: !is_valid_email(&form.email),
    };

    if !errors.is_clean() {
        return Err(errors);
    }

    Ok(Applicant {
        name: form.full_name.trim().to_string(),
        email: form.email.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> SubmissionForm {
        SubmissionForm {
            full_name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn name_needs_two_trimmed_chars() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("   "));
        assert!(!is_valid_name("  A  "));
        assert!(is_valid_name("Al"));
        assert!(is_valid_name(" Al "));
        assert!(is_valid_name("Émilie"));
    }

    #[test]
    fn name_length_counts_chars_not_bytes() {
        // two multi-byte chars
        assert!(is_valid_name("李明"));
        assert!(!is_valid_name("é"));
    }

    #[test]
    fn email_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email(" a@b.co "));
        assert!(is_valid_email("al@example.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn validate_trims_accepted_values() {
        let applicant = validate(&form("  Al ", " al@example.com\t")).unwrap();
        assert_eq!(applicant.name, "Al");
        assert_eq!(applicant.email, "al@example.com");
    }

    #[test]
    fn validate_flags_each_failing_field() {
        assert_eq!(
            validate(&form("A", "al@example.com")),
            Err(ValidationErrors { name: true, email: false })
        );
        assert_eq!(
            validate(&form("Al", "nope")),
            Err(ValidationErrors { name: false, email: true })
        );
        assert_eq!(
            validate(&SubmissionForm::default()),
            Err(ValidationErrors { name: true, email: true })
        );
    }

    #[test]
    fn clearing_one_field_keeps_the_other() {
        let mut errors = ValidationErrors { name: true, email: true };
        errors.clear(Field::Email);
        assert_eq!(errors, ValidationErrors { name: true, email: false });
        errors.clear(Field::FullName);
        assert!(errors.is_clean());
    }
}
