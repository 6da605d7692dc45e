use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod flow;

/// Note text used when the operator does not provide one.
const DEFAULT_NOTE: &str = "Hi there! I came across your profile and would love to connect \
                            and learn more about your work in the industry.";

#[derive(Parser)]
#[command(name = "outreach")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Supervised LinkedIn connection requests from the command line",
    long_about = "Outreach logs into LinkedIn, runs a keyword people search, opens the \
                  connection dialog on the first Connect button, and pre-fills a note. \
                  It never sends the request: you review and click Send yourself."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the workflow: log in, search people, pre-fill a connect note
    Run {
        /// People-search keywords, e.g. "technical recruiter"
        #[arg(value_name = "QUERY")]
        query: String,

        /// Note to pre-fill in the connection dialog
        #[arg(long, default_value = DEFAULT_NOTE)]
        note: String,

        /// Env file holding LINKEDIN_USERNAME and LINKEDIN_PASSWORD
        #[arg(long, value_name = "FILE", default_value = ".env")]
        env_file: PathBuf,

        /// Path to the Chrome binary (skips platform default lookup)
        #[arg(long, value_name = "PATH")]
        chrome_path: Option<PathBuf>,

        /// Named persistent Chrome profile (keeps the LinkedIn session
        /// between runs); a temporary profile is used when omitted
        #[arg(long, value_name = "NAME")]
        profile: Option<String>,

        /// Bound the search-results poll to this many seconds
        /// (unbounded when omitted)
        #[arg(long, value_name = "SECS")]
        search_timeout: Option<u64>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            query,
            note,
            env_file,
            chrome_path,
            profile,
            search_timeout,
        } => commands::run::execute(
            query,
            note,
            &env_file,
            chrome_path,
            profile,
            search_timeout.map(Duration::from_secs),
        ),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("outreach=debug,outreach_core=debug,outreach_browser=debug")
    } else {
        EnvFilter::new("outreach=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
