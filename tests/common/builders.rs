//! Test builders: ergonomic constructors for registration inputs and
//! configs pointed at a [`FakeBackend`](super::FakeBackend).
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use std::sync::atomic::{AtomicUsize, Ordering};

use fake::{faker::name::en::Name, Fake};
use os101_core::{config::Config, RegistrationInput};

static NEXT_PARTICIPANT: AtomicUsize = AtomicUsize::new(1);

// ---------------------------------------------------------------------------
// RegistrationBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for a valid [`RegistrationInput`]. Every built participant
/// gets a unique email and GitHub URL.
///
/// # Example
///
/// ```rust
/// let input = RegistrationBuilder::new()
///     .college("HIT")
///     .experience("advanced")
///     .build();
/// ```
pub struct RegistrationBuilder {
    input: RegistrationInput,
}

impl RegistrationBuilder {
    pub fn new() -> Self {
        let n = NEXT_PARTICIPANT.fetch_add(1, Ordering::Relaxed);
        let full_name: String = Name().fake();
        Self {
            input: RegistrationInput {
                full_name,
                email: format!("participant{n}@example.com"),
                phone: "+91 98765 43210".to_string(),
                github_url: format!("https://github.com/participant{n}"),
                linkedin_url: None,
                college_name: None,
                year: Some("2nd Year".to_string()),
                experience_level: "beginner".to_string(),
                agree_to_code_of_conduct: true,
                receive_event_communications: Some(true),
            },
        }
    }

    pub fn full_name(mut self, name: impl Into<String>) -> Self {
        self.input.full_name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.input.email = email.into();
        self
    }

    pub fn github_url(mut self, url: impl Into<String>) -> Self {
        self.input.github_url = url.into();
        self
    }

    pub fn linkedin_url(mut self, url: impl Into<String>) -> Self {
        self.input.linkedin_url = Some(url.into());
        self
    }

    pub fn college(mut self, college: impl Into<String>) -> Self {
        self.input.college_name = Some(college.into());
        self
    }

    pub fn experience(mut self, level: impl Into<String>) -> Self {
        self.input.experience_level = level.into();
        self
    }

    pub fn without_code_of_conduct(mut self) -> Self {
        self.input.agree_to_code_of_conduct = false;
        self
    }

    pub fn build(self) -> RegistrationInput {
        self.input
    }
}

impl Default for RegistrationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Default config with the API and projects URL pointed at `backend`.
pub fn config_for(backend: &super::FakeBackend) -> Config {
    let mut config = Config::defaults();
    config.api.base_url = backend.base_url();
    config.api.timeout_secs = 5;
    config.projects.url = backend.projects_url();
    config
}
