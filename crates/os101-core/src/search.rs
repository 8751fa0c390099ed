//! Search layer: case-insensitive substring filter over the directory.
//!
//! A project matches when its name, its description, or any stack entry
//! contains the trimmed, lowercased query. Lists are tens of entries long, so
//! there is no index; every call is a linear scan that preserves order.

use crate::types::Project;

/// Normalise a raw query: trim and lowercase. `None` means "no filter".
pub fn normalize_query(query: &str) -> Option<String> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        None
    } else {
        Some(q)
    }
}

/// True when `project` matches an already-normalised query.
pub fn matches(project: &Project, normalized: &str) -> bool {
    project.name.to_lowercase().contains(normalized)
        || project.description.to_lowercase().contains(normalized)
        || project
            .stack
            .iter()
            .any(|tech| tech.to_lowercase().contains(normalized))
}

/// Projects matching `query`, in list order. Blank queries return everything.
pub fn filter<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
    match normalize_query(query) {
        None => projects.iter().collect(),
        Some(q) => projects.iter().filter(|p| matches(p, &q)).collect(),
    }
}

/// Indices into `projects` of the matches, for views that keep a cursor.
pub fn filter_indices(projects: &[Project], query: &str) -> Vec<usize> {
    match normalize_query(query) {
        None => (0..projects.len()).collect(),
        Some(q) => projects
            .iter()
            .enumerate()
            .filter(|(_, p)| matches(p, &q))
            .map(|(i, _)| i)
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
