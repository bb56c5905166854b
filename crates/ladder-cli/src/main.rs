mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ladder",
    about = "Badminton training ladder — track skills, levels, and score growth",
    version,
    propagate_version = true
)]
struct Cli {
    /// Data directory (default: ~/.ladder)
    #[arg(long, global = true, env = "LADDER_HOME")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List curriculum skills with current mastery
    Skills {
        /// Only skills in this tier (1-6)
        #[arg(long)]
        tier: Option<u8>,

        /// Only skills in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one skill in detail
    Show { id: u32 },

    /// Set a skill's mastery: unknown, basic, or mastered
    Mark { id: u32, mastery: String },

    /// Current score, level, and per-tier ladder standing
    Status,

    /// Score history (down-sampled chart projection by default)
    History {
        /// Show every recorded sample instead of the projection
        #[arg(long)]
        full: bool,
    },

    /// Render a shareable text snapshot of the current standing
    Share,

    /// Generate a practice plan for up to three weak skills
    Plan,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = root::resolve_root(cli.root.as_deref()).and_then(|root| match cli.command {
        Commands::Skills { tier, category } => {
            cmd::skills::run(&root, tier, category.as_deref(), cli.json)
        }
        Commands::Show { id } => cmd::show::run(&root, id, cli.json),
        Commands::Mark { id, mastery } => cmd::mark::run(&root, id, &mastery, cli.json),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::History { full } => cmd::history::run(&root, full, cli.json),
        Commands::Share => cmd::share::run(&root),
        Commands::Plan => cmd::plan::run(&root, cli.json),
    });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
