//! os101: Open Source 101 projects directory and registration client.
//!
//! The library crates hold the behaviour; this crate wires them into a
//! command-line tool so that integration tests can drive each command
//! against a fake backend.
//!
//! # Architecture
//!
//! ```text
//! os101-core ──► os101-client ──► cli
//!      │               │
//!      └───────────────┴──► os101-tui (browse)
//! ```
//!
//! The TUI drives the main thread during `browse`; every network flow runs
//! on the tokio runtime built in `main`.

pub mod cli;

pub use os101_client as client;
pub use os101_core as core;
