//! os101-core: Open Source 101 client core library.
//!
//! Everything here is pure and synchronous: the data model, the lenient
//! parse and shape normalisation of the remote projects document, search,
//! registration-form validation, navigation targets, configuration and the
//! error taxonomy. HTTP lives in `os101-client`.
//!
//! # Directory pipeline
//!
//! ```text
//! raw text ──► lenient::repair ──► serde_json ──► directory::decide_shape
//!                                                     │
//!                         search::filter ◄── Vec<Project> ◄── coerce_project
//! ```

pub mod config;
pub mod directory;
pub mod error;
pub mod lenient;
pub mod nav;
pub mod search;
pub mod types;
pub mod validate;

pub use directory::ProjectDirectory;
pub use error::{Error, Result};
pub use types::{Project, RegistrationInput, RegistrationRecord};
