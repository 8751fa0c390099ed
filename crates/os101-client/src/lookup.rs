//! Registration lookup: "I registered but lost my ID".
//!
//! The backend is queried by email only. The record's stored GitHub URL must
//! then equal the supplied one, ignoring case; a mismatch or a record with no
//! stored URL is reported exactly like a missing record.

use os101_core::{
    error::{Field, ValidationErrors},
    Error,
};

use crate::api::{RecordKey, RegistrationApi};

pub const MISSING_DETAILS_MESSAGE: &str = "Please enter both your email and GitHub URL.";
pub const NOT_FOUND_MESSAGE: &str = "No registration found with this email and GitHub URL.";
pub const LOOKUP_FALLBACK_MESSAGE: &str =
    "Unable to find a registration with those details. Please try again.";

/// Find the registration identifier for an email + GitHub URL pair.
pub async fn lookup<A: RegistrationApi>(
    api: &A,
    email: &str,
    github_url: &str,
) -> Result<String, Error> {
    let email = email.trim();
    let github_url = github_url.trim().to_lowercase();

    if email.is_empty() || github_url.is_empty() {
        let mut errors = ValidationErrors::default();
        errors.push(Field::LookupDetails, MISSING_DETAILS_MESSAGE);
        return Err(Error::Validation(errors));
    }

    let response = api
        .find_record(RecordKey::Email(email))
        .await
        .map_err(|e| e.into_flow_error(LOOKUP_FALLBACK_MESSAGE))?;

    let record = response.data.ok_or_else(|| {
        Error::NotFound(
            response
                .error
                .clone()
                .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string()),
        )
    })?;

    let stored = record.github_url.as_deref().unwrap_or("").to_lowercase();
    if stored.is_empty() || stored != github_url {
        tracing::debug!("stored GitHub URL does not match lookup");
        return Err(Error::NotFound(NOT_FOUND_MESSAGE.to_string()));
    }

    tracing::info!(registration_id = %record.registration_id, "registration found");
    Ok(record.registration_id)
}

/// Lookup panel state: the last identifier found stays visible for the
/// session. Nothing is cached between lookups.
#[derive(Debug, Default)]
pub struct LookupState {
    pub result: Option<String>,
    loading: bool,
}

impl LookupState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Run a lookup. A new attempt hides the previous result until it
    /// completes.
    pub async fn find<A: RegistrationApi>(
        &mut self,
        api: &A,
        email: &str,
        github_url: &str,
    ) -> Result<String, Error> {
        if email.trim().is_empty() || github_url.trim().is_empty() {
            return lookup(api, email, github_url).await;
        }

        self.loading = true;
        self.result = None;
        let outcome = lookup(api, email, github_url).await;
        self.loading = false;

        if let Ok(id) = &outcome {
            self.result = Some(id.clone());
        }
        outcome
    }

    /// Notification text for a found identifier.
    pub fn notice(id: &str) -> String {
        format!("Your registration ID: {id}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
