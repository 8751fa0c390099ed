//! Core types for os101-core.
//!
//! This module defines the data structures shared by every flow: the
//! normalised [`Project`] card, the [`RegistrationInput`] a participant fills
//! in, and the server-owned [`RegistrationRecord`].

use serde::{Deserialize, Serialize};

/// One open-source project as shown in the directory.
///
/// Always built through [`crate::directory::coerce_project`], so every field
/// is populated even when the remote document omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name. Also used as the display key; duplicates are not resolved.
    pub name: String,
    pub description: String,
    /// Repository URL, read from the `repository` key of the remote entry.
    pub url: String,
    /// Tech stack tags, in document order.
    pub stack: Vec<String>,
}

/// Year-of-study choices offered by the registration form.
pub const YEAR_OPTIONS: &[&str] = &["1st Year", "2nd Year", "3rd Year", "4th Year", "Other"];

/// Experience levels offered by the registration form.
///
/// The validator only requires a non-empty value, so other strings are
/// accepted and forwarded as-is.
pub const EXPERIENCE_LEVELS: &[&str] = &["beginner", "intermediate", "advanced", "expert"];

/// Everything a participant submits when registering.
///
/// Serialises with camelCase keys, which is the shape `/api/register`
/// expects. `Default` is the empty form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub github_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    pub experience_level: String,
    pub agree_to_code_of_conduct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_event_communications: Option<bool>,
}

/// A registration as stored by the backend. Read-only from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub registration_id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub college_name: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registration_input_serialises_camel_case() {
        let input = RegistrationInput {
            full_name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "12345".into(),
            github_url: "https://github.com/ada".into(),
            experience_level: "beginner".into(),
            agree_to_code_of_conduct: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "phone": "12345",
                "githubUrl": "https://github.com/ada",
                "experienceLevel": "beginner",
                "agreeToCodeOfConduct": true,
            })
        );
    }

    #[test]
    fn record_optional_fields_default_to_none() {
        let record: RegistrationRecord = serde_json::from_value(serde_json::json!({
            "registrationId": "OS101-0001",
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
        }))
        .unwrap();
        assert_eq!(record.college_name, None);
        assert_eq!(record.github_url, None);
    }
}
