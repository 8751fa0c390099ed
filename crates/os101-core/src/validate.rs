//! Registration-form validation.
//!
//! Runs before any request is made. Every violated rule is reported, in form
//! order, so the caller can show all messages at once.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::{
    error::{Field, ValidationErrors},
    types::RegistrationInput,
};

pub const FULL_NAME_MESSAGE: &str = "Full name is required (min 2 characters)";
pub const EMAIL_MESSAGE: &str = "Invalid email address";
pub const PHONE_MESSAGE: &str = "Phone number is required";
pub const GITHUB_URL_MESSAGE: &str = "Please enter a valid GitHub URL";
pub const LINKEDIN_URL_MESSAGE: &str = "Please enter a valid LinkedIn URL";
pub const EXPERIENCE_LEVEL_MESSAGE: &str = "Please select an experience level";
pub const CODE_OF_CONDUCT_MESSAGE: &str = "You must agree to the Code of Conduct";

// Local part may not start with a dot or contain "..": checked separately
// because the regex crate has no lookaround.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is valid")
});

/// True for addresses of the `local@domain.tld` form.
pub fn is_email(s: &str) -> bool {
    if s.starts_with('.') || s.contains("..") {
        return false;
    }
    EMAIL.is_match(s)
}

/// True when `s` parses as an absolute URL.
pub fn is_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

/// Validate a registration form.
pub fn validate(input: &RegistrationInput) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    // Counted in UTF-16 code units, like the browser form's length rule.
    if input.full_name.encode_utf16().count() < 2 {
        errors.push(Field::FullName, FULL_NAME_MESSAGE);
    }
    if !is_email(&input.email) {
        errors.push(Field::Email, EMAIL_MESSAGE);
    }
    if input.phone.is_empty() {
        errors.push(Field::Phone, PHONE_MESSAGE);
    }
    if !is_url(&input.github_url) {
        errors.push(Field::GithubUrl, GITHUB_URL_MESSAGE);
    }
    match input.linkedin_url.as_deref() {
        None | Some("") => {}
        Some(url) if is_url(url) => {}
        Some(_) => errors.push(Field::LinkedinUrl, LINKEDIN_URL_MESSAGE),
    }
    if input.experience_level.is_empty() {
        errors.push(Field::ExperienceLevel, EXPERIENCE_LEVEL_MESSAGE);
    }
    if !input.agree_to_code_of_conduct {
        errors.push(Field::AgreeToCodeOfConduct, CODE_OF_CONDUCT_MESSAGE);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(violations = errors.errors.len(), "registration form rejected");
        Err(errors)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
