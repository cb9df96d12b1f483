use std::sync::OnceLock;

use regex::Regex;

/// Values read from the three text inputs at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub full_name: String,
    pub email: String,
    pub github_handle: String,
}

impl FormFields {
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        github_handle: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            github_handle: github_handle.into(),
        }
    }
}

/// Both checks are always evaluated; neither short-circuits the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldValidation {
    pub full_name_ok: bool,
    pub email_ok: bool,
}

impl FieldValidation {
    pub fn check(fields: &FormFields) -> Self {
        Self {
            full_name_ok: is_valid_full_name(&fields.full_name),
            email_ok: is_valid_email(&fields.email),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.full_name_ok && self.email_ok
    }
}

pub fn is_valid_full_name(value: &str) -> bool {
    !value.trim().is_empty()
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
    })
}

/// No trimming: surrounding whitespace makes an address invalid.
pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}
