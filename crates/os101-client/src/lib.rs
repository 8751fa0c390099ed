//! os101-client: network-facing flows for os101.
//!
//! Each flow awaits at most one request at a time and never retries:
//!
//! - [`projects::fetch_projects`] loads the directory document;
//! - [`submit::RegistrationForm::submit`] runs validation, the duplicate
//!   pre-flight and the submission, in that order;
//! - [`lookup::lookup`] recovers an identifier from email + GitHub URL;
//! - [`summary::load_summary`] loads the record named by a query string.
//!
//! The registration flows are generic over [`api::RegistrationApi`];
//! [`http::HttpRegistrationApi`] is the production implementation.

pub mod api;
pub mod http;
pub mod lookup;
pub mod projects;
pub mod submit;
pub mod summary;

pub use api::{ApiError, RegistrationApi};
pub use http::HttpRegistrationApi;
