//! Shared test utilities for os101 integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. The fake backend binds `127.0.0.1:0`, so harnesses can
//! run in parallel.

#![allow(dead_code)]

pub mod assertions;
pub mod builders;
pub mod fake_backend;
pub mod fixtures;

pub use builders::*;
pub use fake_backend::FakeBackend;
pub use fixtures::*;
