//! Project directory loader: one GET for `projects.json`, then the
//! lenient parse and normalisation from `os101-core`.

use os101_core::{directory, Error, ProjectDirectory};
use reqwest::Client;

/// Shown when the document URL answers with a non-success status.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load projects.json from GitHub.";

/// Fetch and normalise the directory at `url`.
///
/// Transport failures carry the underlying message; a non-success status
/// yields [`LOAD_ERROR_MESSAGE`]; an unparseable body yields
/// [`Error::Parse`]. There is no retry.
pub async fn fetch_projects(client: &Client, url: &str) -> Result<ProjectDirectory, Error> {
    tracing::debug!(url, "fetching projects document");

    let response = client.get(url).send().await.map_err(|e| {
        tracing::warn!(error = %e, "projects request failed");
        Error::network(e.to_string())
    })?;

    if !response.status().is_success() {
        tracing::warn!(status = response.status().as_u16(), "projects document unavailable");
        return Err(Error::network(LOAD_ERROR_MESSAGE));
    }

    let raw = response
        .text()
        .await
        .map_err(|e| Error::network(e.to_string()))?;

    let projects = directory::load_from_str(&raw)?;
    tracing::info!(count = projects.len(), "projects loaded");
    Ok(ProjectDirectory::new(projects, url))
}
