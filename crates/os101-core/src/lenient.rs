//! Lenient parse: tolerate the authoring mistakes that show up in the
//! hand-maintained `projects.json`.
//!
//! Two textual repairs run before `serde_json` sees the document, in order:
//!
//! 1. every backtick (`` ` ``) is removed;
//! 2. a comma followed only by whitespace and then `}` or `]` is removed
//!    (the whitespace goes with it).
//!
//! The repairs are purely textual and do not understand string literals, so
//! a backtick or a `", ]"` sequence inside a string value is rewritten too.
//! Changing either rule changes which remote documents stay loadable.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::Error;

/// Message shown when the document cannot be parsed even after repair.
pub const PARSE_ERROR_MESSAGE: &str = "Failed to parse projects.json. Please check its format.";

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("trailing comma pattern is valid"));

/// Apply both textual repairs and return the cleaned text.
pub fn repair(raw: &str) -> String {
    let without_backticks = raw.replace('`', "");
    TRAILING_COMMA
        .replace_all(&without_backticks, "$1")
        .into_owned()
}

/// Repair `raw` and parse it as JSON.
pub fn parse(raw: &str) -> Result<Value, Error> {
    let cleaned = repair(raw);
    serde_json::from_str(&cleaned).map_err(|e| {
        tracing::debug!(error = %e, "projects document failed to parse after repair");
        Error::Parse(PARSE_ERROR_MESSAGE.to_string())
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
