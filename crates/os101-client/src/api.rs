//! The registration backend as seen by the flows.
//!
//! [`RegistrationApi`] is the seam between the flows and the transport:
//! [`crate::http::HttpRegistrationApi`] speaks HTTP, tests substitute an
//! in-memory implementation. Wire types mirror the JSON the backend returns.

use std::future::Future;

use os101_core::{types::RegistrationRecord, RegistrationInput};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/register/check-duplicates`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckRequest {
    pub email: String,
    pub github_url: String,
}

/// Reply of the duplicate pre-flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCheck {
    pub available: bool,
    #[serde(default)]
    pub message: String,
}

/// Subset of the registration echoed back by `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredData {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

/// Reply of `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(default)]
    pub registration_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<RegisteredData>,
}

/// Reply of `GET /api/register?...`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<RegistrationRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Transport-level failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),

    /// Non-2xx status. `error` is the body's `error` field, when there was one.
    #[error("server returned {status}")]
    Status { status: u16, error: Option<String> },

    /// 2xx status but the body did not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The message the server attached to the failure, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Convert into [`os101_core::Error::Network`] with the server's message,
    /// else `fallback`.
    pub fn into_network_error(self, fallback: &str) -> os101_core::Error {
        os101_core::Error::network(self.server_message().unwrap_or(fallback))
    }

    /// Like [`ApiError::into_network_error`], but a 404 becomes
    /// [`os101_core::Error::NotFound`].
    pub fn into_flow_error(self, fallback: &str) -> os101_core::Error {
        let message = self.server_message().unwrap_or(fallback).to_string();
        if self.is_not_found() {
            os101_core::Error::NotFound(message)
        } else {
            os101_core::Error::network(message)
        }
    }
}

/// Which record `GET /api/register` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey<'a> {
    RegistrationId(&'a str),
    Email(&'a str),
}

impl RecordKey<'_> {
    /// Query parameter name and value.
    pub fn param(&self) -> (&'static str, &str) {
        match *self {
            RecordKey::RegistrationId(id) => ("registrationId", id),
            RecordKey::Email(email) => ("email", email),
        }
    }
}

/// The registration backend.
pub trait RegistrationApi: Send + Sync {
    fn check_duplicates(
        &self,
        request: &DuplicateCheckRequest,
    ) -> impl Future<Output = Result<DuplicateCheck, ApiError>> + Send;

    fn register(
        &self,
        input: &RegistrationInput,
    ) -> impl Future<Output = Result<RegisterResponse, ApiError>> + Send;

    fn find_record(
        &self,
        key: RecordKey<'_>,
    ) -> impl Future<Output = Result<RecordResponse, ApiError>> + Send;
}
