//! Registration summary: the page a successful submission lands on.
//!
//! The identifier comes from the `registrationId` query parameter. Without
//! it the view fails immediately; no request is made.

use std::fmt::{self, Write as _};

use os101_core::{nav, Error, RegistrationRecord};

use crate::api::{RecordKey, RegistrationApi};

pub const SUMMARY_FALLBACK_MESSAGE: &str =
    "Unable to load your registration details. Please try again.";

/// Recovery action offered with every summary failure.
pub const RECOVERY_ACTION: (&str, &str) = ("Go back to registration page", nav::REGISTER_PATH);

/// A loaded registration, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSummary {
    pub record: RegistrationRecord,
}

/// Load the summary for the identifier in `query`.
pub async fn load_summary<A: RegistrationApi>(
    api: &A,
    query: &str,
) -> Result<RegistrationSummary, Error> {
    let id = nav::registration_id_from_query(query).ok_or(Error::MissingRegistrationId)?;
    load_summary_by_id(api, &id).await
}

/// Load the summary for a known identifier.
pub async fn load_summary_by_id<A: RegistrationApi>(
    api: &A,
    registration_id: &str,
) -> Result<RegistrationSummary, Error> {
    if registration_id.is_empty() {
        return Err(Error::MissingRegistrationId);
    }

    let response = api
        .find_record(RecordKey::RegistrationId(registration_id))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "registration summary unavailable");
            e.into_flow_error(SUMMARY_FALLBACK_MESSAGE)
        })?;

    match response.data {
        Some(record) => Ok(RegistrationSummary { record }),
        None => Err(Error::NotFound(
            response
                .error
                .unwrap_or_else(|| SUMMARY_FALLBACK_MESSAGE.to_string()),
        )),
    }
}

impl fmt::Display for RegistrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        let mut out = String::new();
        writeln!(out, "Registration Successful!")?;
        writeln!(
            out,
            "You are now part of the Open Source 101 initiative by ISTE HIT-SC"
        )?;
        writeln!(out)?;
        writeln!(out, "Registration ID: {}", r.registration_id)?;
        writeln!(out)?;
        writeln!(out, "Your Details")?;
        writeln!(out, "  Name:    {}", r.full_name)?;
        writeln!(out, "  Email:   {}", r.email)?;
        if let Some(college) = r.college_name.as_deref().filter(|c| !c.is_empty()) {
            writeln!(out, "  College: {college}")?;
        }
        writeln!(out)?;
        writeln!(out, "Next Steps")?;
        for (label, url) in nav::COMMUNITY_LINKS {
            writeln!(out, "  {label}: {url}")?;
        }
        write!(out, "  Explore projects: {}", nav::PROJECTS_PATH)?;
        f.write_str(&out)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
