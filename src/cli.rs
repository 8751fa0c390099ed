//! Command-line surface.
//!
//! Each subcommand is a thin wrapper over one flow from `os101-client`; the
//! wrappers write their output to any [`Write`] so harnesses can capture it.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{builder::PossibleValuesParser, Args, Parser, Subcommand};
use os101_client::{
    http::build_client,
    lookup::LookupState,
    projects::fetch_projects,
    submit::RegistrationForm,
    summary::{self as summary_flow, RECOVERY_ACTION},
    HttpRegistrationApi, RegistrationApi,
};
use os101_core::{config::Config, types::YEAR_OPTIONS, Error, ProjectDirectory, RegistrationInput};

#[derive(Parser, Debug)]
#[command(
    name = "os101",
    about = "Open Source 101 — projects directory and registration"
)]
pub struct Cli {
    /// Write debug logs to /tmp/os101-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Extra config file layered over ~/.config/os101/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the projects directory and print the matching cards.
    Projects {
        /// Filter by name, description or tech stack.
        #[arg(long, short)]
        query: Option<String>,
        /// Fetch from this URL instead of the configured one.
        #[arg(long)]
        url: Option<String>,
    },
    /// Open the terminal projects browser.
    Browse,
    /// Register for Open Source 101 and print the summary.
    Register(RegisterArgs),
    /// Recover a registration ID from email and GitHub URL.
    Lookup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        github_url: String,
    },
    /// Show the summary for a registration.
    Summary(SummaryArgs),
}

/// Registration form fields. Everything defaults to empty so that client-side
/// validation, not clap, reports what is missing.
#[derive(Args, Debug, Default, Clone)]
pub struct RegisterArgs {
    #[arg(long, default_value = "")]
    pub full_name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub github_url: String,
    #[arg(long)]
    pub linkedin_url: Option<String>,
    #[arg(long)]
    pub college_name: Option<String>,
    #[arg(long, value_parser = PossibleValuesParser::new(YEAR_OPTIONS.iter().copied()))]
    pub year: Option<String>,
    /// One of beginner, intermediate, advanced, expert.
    #[arg(long, default_value = "")]
    pub experience_level: String,
    #[arg(long)]
    pub agree_to_code_of_conduct: bool,
    #[arg(long)]
    pub receive_event_communications: bool,
}

impl From<RegisterArgs> for RegistrationInput {
    fn from(args: RegisterArgs) -> Self {
        RegistrationInput {
            full_name: args.full_name,
            email: args.email,
            phone: args.phone,
            github_url: args.github_url,
            linkedin_url: args.linkedin_url,
            college_name: args.college_name,
            year: args.year,
            experience_level: args.experience_level,
            agree_to_code_of_conduct: args.agree_to_code_of_conduct,
            receive_event_communications: args.receive_event_communications.then_some(true),
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct SummaryArgs {
    /// Query string carrying `registrationId`, e.g. `?registrationId=OS101-0001`.
    pub query: Option<String>,
    #[arg(long, conflicts_with = "query")]
    pub registration_id: Option<String>,
}

/// Load config, build the runtime and run the chosen command.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let runtime = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Browse => {
            // The TUI owns the terminal; the runtime only carries the fetch.
            if let Some(url) = os101_tui::run(config, runtime.handle().clone())? {
                println!("{url}");
            }
            Ok(())
        }
        Commands::Projects { query, url } => runtime.block_on(projects(
            &config,
            query.as_deref(),
            url.as_deref(),
            &mut io::stdout().lock(),
        )),
        Commands::Register(args) => {
            let api = HttpRegistrationApi::from_config(&config)?;
            runtime.block_on(register(&api, args.into(), &mut io::stdout().lock()))
        }
        Commands::Lookup { email, github_url } => {
            let api = HttpRegistrationApi::from_config(&config)?;
            runtime.block_on(lookup(&api, &email, &github_url, &mut io::stdout().lock()))
        }
        Commands::Summary(args) => {
            let api = HttpRegistrationApi::from_config(&config)?;
            runtime.block_on(summary(&api, &args, &mut io::stdout().lock()))
        }
    }
}

/// One-line stderr report for a failed command.
pub fn report(err: &anyhow::Error) -> String {
    match err.downcast_ref::<Error>() {
        Some(e) => match e {
            Error::Validation(errors) => {
                let mut out = format!("{}:", e.title());
                for field in &errors.errors {
                    out.push_str("\n  - ");
                    out.push_str(field.message);
                }
                out
            }
            _ => format!("{}: {e}", e.title()),
        },
        None => format!("Error: {err:#}"),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

pub async fn projects<W: Write>(
    config: &Config,
    query: Option<&str>,
    url: Option<&str>,
    out: &mut W,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let url = url.unwrap_or(&config.projects.url);
    let directory = fetch_projects(&client, url).await?;
    write_projects(&directory, query.unwrap_or(""), out)?;
    Ok(())
}

/// Print the cards matching `query`, in directory order.
pub fn write_projects<W: Write>(
    directory: &ProjectDirectory,
    query: &str,
    out: &mut W,
) -> io::Result<()> {
    let matches = directory.search(query);
    writeln!(
        out,
        "{} of {} projects",
        matches.len(),
        directory.projects.len()
    )?;
    if matches.is_empty() {
        writeln!(out, "No projects match your search.")?;
    }
    for project in matches {
        writeln!(out)?;
        writeln!(out, "{}", project.name)?;
        writeln!(out, "  {}", project.description)?;
        if !project.stack.is_empty() {
            writeln!(out, "  Stack: {}", project.stack.join(", "))?;
        }
        writeln!(out, "  {}", project.url)?;
    }
    Ok(())
}

pub async fn register<A: RegistrationApi, W: Write>(
    api: &A,
    input: RegistrationInput,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut form = RegistrationForm::new(input);
    let receipt = form.submit(api).await?;
    writeln!(out, "{}", receipt.notice)?;
    writeln!(out, "Summary: {}", receipt.summary_target)?;

    // The ID is already printed; a failed summary does not fail the command.
    match summary_flow::load_summary(api, &receipt.summary_target).await {
        Ok(loaded) => {
            writeln!(out)?;
            writeln!(out, "{loaded}")?;
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                target = %receipt.summary_target,
                "summary fetch failed after registration"
            );
            writeln!(out, "Warning: could not load the summary: {e}")?;
        }
    }
    Ok(())
}

pub async fn lookup<A: RegistrationApi, W: Write>(
    api: &A,
    email: &str,
    github_url: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut state = LookupState::default();
    let id = state.find(api, email, github_url).await?;
    writeln!(out, "{}", LookupState::notice(&id))?;
    Ok(())
}

/// On failure the recovery action is printed before the error is returned.
pub async fn summary<A: RegistrationApi, W: Write>(
    api: &A,
    args: &SummaryArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let loaded = match (&args.registration_id, &args.query) {
        (Some(id), _) => summary_flow::load_summary_by_id(api, id).await,
        (None, Some(query)) => summary_flow::load_summary(api, query).await,
        (None, None) => Err(Error::MissingRegistrationId),
    };

    match loaded {
        Ok(loaded) => {
            writeln!(out, "{loaded}")?;
            Ok(())
        }
        Err(e) => {
            let (label, path) = RECOVERY_ACTION;
            writeln!(out, "{label}: {path}")?;
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use os101_core::{
        error::{Field, ValidationErrors},
        Project,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn report_titles_flow_errors() {
        let err = anyhow::Error::from(Error::Duplicate("Email already registered".into()));
        assert_eq!(report(&err), "Duplicate Entry: Email already registered");
    }

    #[test]
    fn report_lists_every_validation_message() {
        let mut errors = ValidationErrors::default();
        errors.push(Field::Email, "Invalid email address");
        errors.push(Field::Phone, "Phone number is required");
        let err = anyhow::Error::from(Error::Validation(errors));
        assert_eq!(
            report(&err),
            "Missing details:\n  - Invalid email address\n  - Phone number is required"
        );
    }

    #[test]
    fn report_falls_back_for_other_errors() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(report(&err), "Error: disk on fire");
    }

    #[test]
    fn register_args_map_onto_input() {
        let input: RegistrationInput = RegisterArgs {
            full_name: "Ada".into(),
            receive_event_communications: true,
            ..RegisterArgs::default()
        }
        .into();
        assert_eq!(input.full_name, "Ada");
        assert_eq!(input.receive_event_communications, Some(true));
        assert_eq!(input.linkedin_url, None);
    }

    #[test]
    fn write_projects_reports_empty_search() {
        let directory = ProjectDirectory::new(
            vec![Project {
                name: "tokio".into(),
                description: "async runtime".into(),
                url: "https://github.com/tokio-rs/tokio".into(),
                stack: vec!["Rust".into()],
            }],
            "test",
        );
        let mut out = Vec::new();
        write_projects(&directory, "haskell", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0 of 1 projects\nNo projects match your search.\n"
        );
    }

    #[test]
    fn cli_parses_summary_by_id() {
        let cli = Cli::parse_from(["os101", "summary", "--registration-id", "OS101-0001"]);
        match cli.command {
            Commands::Summary(args) => {
                assert_eq!(args.registration_id.as_deref(), Some("OS101-0001"))
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_year() {
        assert!(Cli::try_parse_from(["os101", "register", "--year", "5th Year"]).is_err());
    }
}
