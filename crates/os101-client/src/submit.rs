//! Registration submission flow.
//!
//! Validate ──► duplicate pre-flight ──► submit ──► summary target.
//!
//! Each step is awaited in turn; the registration endpoint is only reached
//! once the pre-flight reports the email and GitHub URL as available.

use os101_core::{nav, validate, Error, RegistrationInput};

use crate::api::{DuplicateCheckRequest, RegisteredData, RegistrationApi};

/// Shown when a rejected step carries no server message.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

/// What a successful submission hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub registration_id: String,
    /// Notification text, e.g. `Registration successful. Your ID: OS101-0001`.
    pub notice: String,
    /// Summary view to navigate to, with the identifier percent-encoded.
    pub summary_target: String,
    pub data: Option<RegisteredData>,
}

/// A registration form session.
///
/// The input is cleared after a successful submission and kept untouched
/// after a failed one so the participant can correct it.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub input: RegistrationInput,
    submitting: bool,
}

impl RegistrationForm {
    pub fn new(input: RegistrationInput) -> Self {
        Self {
            input,
            submitting: false,
        }
    }

    /// True while a submission is in flight; the submit control is disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Run the flow for the current input.
    pub async fn submit<A: RegistrationApi>(&mut self, api: &A) -> Result<SubmitReceipt, Error> {
        self.submitting = true;
        let result = submit_input(api, &self.input).await;
        self.submitting = false;

        match &result {
            Ok(receipt) => {
                tracing::info!(registration_id = %receipt.registration_id, "registration submitted");
                self.input = RegistrationInput::default();
            }
            Err(e) => tracing::warn!(error = %e, "registration not submitted"),
        }
        result
    }
}

/// The flow itself, without form bookkeeping.
pub async fn submit_input<A: RegistrationApi>(
    api: &A,
    input: &RegistrationInput,
) -> Result<SubmitReceipt, Error> {
    validate::validate(input).map_err(Error::Validation)?;

    let check = api
        .check_duplicates(&DuplicateCheckRequest {
            email: input.email.clone(),
            github_url: input.github_url.clone(),
        })
        .await
        .map_err(|e| e.into_network_error(SUBMIT_FALLBACK_MESSAGE))?;

    if !check.available {
        return Err(Error::Duplicate(check.message));
    }

    let response = api
        .register(input)
        .await
        .map_err(|e| e.into_network_error(SUBMIT_FALLBACK_MESSAGE))?;

    if !response.success {
        let message = response
            .error
            .or(response.message)
            .unwrap_or_else(|| SUBMIT_FALLBACK_MESSAGE.to_string());
        return Err(Error::network(message));
    }

    Ok(SubmitReceipt {
        notice: format!(
            "Registration successful. Your ID: {}",
            response.registration_id
        ),
        summary_target: nav::summary_target(&response.registration_id),
        registration_id: response.registration_id,
        data: response.data,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
