use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

use cli::credit::CreditKind;

#[derive(Parser)]
#[command(name = "crucible")]
#[command(about = "Writer's Crucible - daily character goals for your writing")]
#[command(version)]
struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.crucible/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's progress
    Status {
        /// Print the status as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show lifetime statistics and daily history
    Stats {
        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit chart data (history, daily count, goal) as JSON
        #[arg(long)]
        chart: bool,
    },

    /// List the built-in challenges
    Presets,

    /// Start a daily challenge
    Start {
        /// Built-in challenge key or label (see `presets`)
        #[arg(long, conflicts_with = "goal")]
        preset: Option<String>,

        /// Custom goal in characters per day
        #[arg(long)]
        goal: Option<i64>,

        /// Display name for the challenge
        #[arg(long)]
        name: Option<String>,
    },

    /// Credit work that isn't typed (revision time, citations)
    Credit {
        #[arg(value_enum)]
        kind: CreditKind,
    },

    /// Correct today's count by DELTA characters (negative to subtract)
    Correct {
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },

    /// Pause character tracking
    Pause,

    /// Resume character tracking
    Resume,

    /// Delete all challenge data for this project
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Create a default config file
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,

        /// Also track the project directory separately from the global record
        #[arg(long)]
        project: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let config = cli.config.as_deref();

    match cli.command {
        Some(Commands::Status { json }) => {
            cli::status::status_command(&work_dir, config, json).await?;
        }
        Some(Commands::Stats { output, chart }) => {
            cli::stats::stats_command(&work_dir, config, output, chart).await?;
        }
        Some(Commands::Presets) => {
            cli::challenge::presets_command();
        }
        Some(Commands::Start { preset, goal, name }) => {
            cli::challenge::start_command(&work_dir, config, preset, goal, name).await?;
        }
        Some(Commands::Credit { kind }) => {
            cli::credit::credit_command(&work_dir, config, kind).await?;
        }
        Some(Commands::Correct { delta }) => {
            cli::credit::correct_command(&work_dir, config, delta).await?;
        }
        Some(Commands::Pause) => {
            cli::tracking::set_paused_command(&work_dir, config, true).await?;
        }
        Some(Commands::Resume) => {
            cli::tracking::set_paused_command(&work_dir, config, false).await?;
        }
        Some(Commands::Reset { yes }) => {
            cli::challenge::reset_command(&work_dir, config, yes).await?;
        }
        Some(Commands::Init { force, project }) => {
            cli::init::init_command(&work_dir, cli.config.clone(), force, project).await?;
        }
        None => {
            // Default: show today's progress
            cli::status::status_command(&work_dir, config, false).await?;
        }
    }

    Ok(())
}
