//! Static `projects.json` documents used across harnesses.
//!
//! Each constant is a document shape the directory loader has to cope with,
//! from clean JSON to the hand-edited files people actually commit.

/// The published layout: an array holding one object keyed by slug.
pub const PROJECTS_CLEAN: &str = r#"[
  {
    "opensource101-web": {
      "name": "opensource101-web",
      "description": "Landing page and registration form for the event.",
      "repository": "https://github.com/example/opensource101-web",
      "stack": ["React", "Tailwind", "Vite"]
    },
    "campus-bot": {
      "name": "campus-bot",
      "description": "Discord bot that answers questions about campus events.",
      "repository": "https://github.com/example/campus-bot",
      "stack": ["Python", "discord.py"]
    },
    "attendance-api": {
      "name": "attendance-api",
      "description": "REST API tracking workshop attendance.",
      "repository": "https://github.com/example/attendance-api",
      "stack": ["Node.js", "Express", "MongoDB"]
    }
  }
]"#;

/// Hand-edited document with trailing commas and stray backticks.
pub const PROJECTS_SLOPPY: &str = r#"```
[
  {
    "campus-bot": {
      "name": "campus-bot",
      "description": "Discord bot that answers questions about campus events.",
      "repository": "https://github.com/example/campus-bot",
      "stack": ["Python", "discord.py",],
    },
  },
]
```"#;

/// A flat array of records. The first record's field values become the
/// list, so every card falls back to placeholders.
pub const PROJECTS_FLAT_RECORDS: &str = r#"[
  {"name": "solo", "repository": "https://github.com/example/solo"},
  {"name": "ignored"}
]"#;

/// An array of bare values is used as-is.
pub const PROJECTS_SCALARS: &str = r#"["just-a-name", 7]"#;

/// Object keyed by slug instead of an array.
pub const PROJECTS_KEYED: &str = r#"{
  "zeta": {"name": "zeta-cli", "repository": "https://github.com/example/zeta"},
  "alpha": {"name": "alpha-ui", "stack": ["Svelte"]}
}"#;

/// Stack entries that are not strings.
pub const PROJECTS_ODD_STACK: &str = r#"[
  {
    "first": {"name": "first-project", "stack": ["Go"]},
    "second": {"name": "second-project", "stack": [1, 2.5, true, null, {"a": 1}, ["x", "y"]]}
  }
]"#;

/// Records with every field missing or of the wrong type.
pub const PROJECTS_MALFORMED_FIELDS: &str = r#"{
  "a": {"name": 42, "description": null, "repository": false, "stack": "Rust"},
  "b": {}
}"#;

/// Not repairable by the lenient parse.
pub const PROJECTS_BROKEN: &str = r#"[{"name": "unterminated"#;
