//! Directory normalisation: turn whatever JSON the remote `projects.json`
//! holds into a uniform `Vec<Project>`.
//!
//! The document has appeared in three shapes over time, so the first step is
//! a single decision function, [`decide_shape`], that names which one it is.
//! Each raw entry is then coerced field by field with [`coerce_project`].

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::{lenient, types::Project};

/// Repository of the initiative itself. Used as the fallback `url` and as
/// the fallback project when the document lists nothing.
pub const INITIATIVE_REPOSITORY: &str = "https://github.com/shubham-dev4me/opensource101";

/// Default location of the directory document.
pub const DEFAULT_PROJECTS_URL: &str =
    "https://raw.githubusercontent.com/shubham-dev4me/opensource101/main/projects.json";

pub const UNTITLED_PROJECT: &str = "Untitled project";
pub const DESCRIPTION_PLACEHOLDER: &str = "Project details coming soon.";

/// How the project list was located inside the parsed document.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// `[{...}, ...]`: the values of the first element are the list.
    ListFromFirstElementValues(Vec<Value>),
    /// `[...]` whose first element is not object-like: the array is the list.
    ListFromArray(Vec<Value>),
    /// `{...}`: the object's values are the list.
    ListFromObjectValues(Vec<Value>),
    /// A string, number, boolean or null.
    Empty,
}

impl Shape {
    pub fn into_entries(self) -> Vec<Value> {
        match self {
            Shape::ListFromFirstElementValues(v)
            | Shape::ListFromArray(v)
            | Shape::ListFromObjectValues(v) => v,
            Shape::Empty => Vec::new(),
        }
    }
}

/// Decide which shape `doc` has.
///
/// An array element counts as object-like when it is an object or an array;
/// the values of an array are its elements.
pub fn decide_shape(doc: Value) -> Shape {
    match doc {
        Value::Array(items) => match items.first() {
            Some(Value::Object(first)) => {
                Shape::ListFromFirstElementValues(first.values().cloned().collect())
            }
            Some(Value::Array(first)) => Shape::ListFromFirstElementValues(first.clone()),
            _ => Shape::ListFromArray(items),
        },
        Value::Object(map) => Shape::ListFromObjectValues(object_values(map)),
        _ => Shape::Empty,
    }
}

fn object_values(map: Map<String, Value>) -> Vec<Value> {
    map.into_iter().map(|(_, v)| v).collect()
}

/// Build a [`Project`] from one raw entry, falling back per field.
pub fn coerce_project(entry: &Value) -> Project {
    let field = |key: &str| entry.as_object().and_then(|o| o.get(key));
    let string_or = |key: &str, default: &str| match field(key) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    };

    let stack = match field("stack") {
        Some(Value::Array(items)) => items.iter().map(js_string).collect(),
        _ => Vec::new(),
    };

    Project {
        name: string_or("name", UNTITLED_PROJECT),
        description: string_or("description", DESCRIPTION_PLACEHOLDER),
        url: string_or("repository", INITIATIVE_REPOSITORY),
        stack,
    }
}

/// The single card shown when the document yields no entries.
pub fn fallback_project() -> Project {
    Project {
        name: "opensource101".to_string(),
        description: "Main repository for the Open Source 101 initiative.".to_string(),
        url: INITIATIVE_REPOSITORY.to_string(),
        stack: Vec::new(),
    }
}

/// Normalise a parsed document into the project list. Never empty.
pub fn normalize(doc: Value) -> Vec<Project> {
    let shape = decide_shape(doc);
    tracing::debug!(shape = shape_name(&shape), "projects document shape");

    let entries = shape.into_entries();
    if entries.is_empty() {
        return vec![fallback_project()];
    }
    entries.iter().map(coerce_project).collect()
}

/// Lenient-parse `raw` and normalise it.
pub fn load_from_str(raw: &str) -> crate::Result<Vec<Project>> {
    let doc = lenient::parse(raw)?;
    Ok(normalize(doc))
}

fn shape_name(shape: &Shape) -> &'static str {
    match shape {
        Shape::ListFromFirstElementValues(_) => "first-element-values",
        Shape::ListFromArray(_) => "array",
        Shape::ListFromObjectValues(_) => "object-values",
        Shape::Empty => "empty",
    }
}

/// Render a JSON value the way JavaScript's `String(x)` would.
fn js_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if f.fract() == 0.0 && f.abs() < 1e21 {
                    format!("{f:.0}")
                } else {
                    f.to_string()
                }
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// A loaded directory, as held by a view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDirectory {
    pub projects: Vec<Project>,
    /// Where the document was fetched from.
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}

impl ProjectDirectory {
    pub fn new(projects: Vec<Project>, source: impl Into<String>) -> Self {
        Self {
            projects,
            source: source.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Projects matching `query`; see [`crate::search::filter`].
    pub fn search(&self, query: &str) -> Vec<&Project> {
        crate::search::filter(&self.projects, query)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
