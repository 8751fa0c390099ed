//! Error taxonomy shared by every flow.
//!
//! The `Display` text of each variant is what the user sees; flows pick the
//! message (server-supplied or fallback) when they construct the error.

use std::fmt;

/// A form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Phone,
    GithubUrl,
    LinkedinUrl,
    ExperienceLevel,
    AgreeToCodeOfConduct,
    /// The lookup form (email + GitHub URL pair) as a whole.
    LookupDetails,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::FullName => write!(f, "fullName"),
            Field::Email => write!(f, "email"),
            Field::Phone => write!(f, "phone"),
            Field::GithubUrl => write!(f, "githubUrl"),
            Field::LinkedinUrl => write!(f, "linkedinUrl"),
            Field::ExperienceLevel => write!(f, "experienceLevel"),
            Field::AgreeToCodeOfConduct => write!(f, "agreeToCodeOfConduct"),
            Field::LookupDetails => write!(f, "lookup"),
        }
    }
}

/// One violated rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Every rule a form violated, in field order. Never empty when returned
/// as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for `field`, if it failed.
    pub fn message_for(&self, field: Field) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Flow-level failure. All variants are recoverable at the flow boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never completed or came back with a non-success status.
    #[error("{message}")]
    Network { message: String },

    /// The response body was not valid, repairable JSON.
    #[error("{0}")]
    Parse(String),

    /// Client-side schema violation; no request was made.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The server reports the email or GitHub URL as already registered.
    #[error("{0}")]
    Duplicate(String),

    /// No registration matched.
    #[error("{0}")]
    NotFound(String),

    /// The summary view was opened without a `registrationId` parameter.
    #[error("Missing registration ID. Please register again.")]
    MissingRegistrationId,
}

impl Error {
    pub fn network(message: impl Into<String>) -> Self {
        Error::Network {
            message: message.into(),
        }
    }

    /// Short label for the failure class, used as a heading by the CLI.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Network { .. } => "Error",
            Error::Parse(_) => "Error",
            Error::Validation(_) => "Missing details",
            Error::Duplicate(_) => "Duplicate Entry",
            Error::NotFound(_) => "Not found",
            Error::MissingRegistrationId => "Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
