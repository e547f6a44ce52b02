mod cmd;
mod output;
mod publish;
mod session;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "planner",
    about = "Monthly content planner — generates a social calendar with Gemini and pushes cards to Trello",
    version,
    propagate_version = true
)]
struct Cli {
    /// Presets file (default: ./presets.yaml)
    #[arg(long, global = true, env = "PLANNER_PRESETS")]
    presets: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter presets.yaml in the current directory
    Init,

    /// Generate the month's calendar; optionally export CSV and publish to Trello
    Plan {
        /// Month to plan, e.g. "Novembro 2025"
        #[arg(long)]
        month: String,

        /// Posts per week (1-7)
        #[arg(long, default_value_t = 3)]
        frequency: u8,

        /// Publishing days, free text
        #[arg(long, default_value = "segunda, quarta e sexta")]
        days: String,

        /// Active pillar (repeat; default: every preset pillar)
        #[arg(long = "pillar")]
        pillars: Vec<String>,

        /// Write the calendar as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Trello board (id or exact name) to publish to
        #[arg(long, requires = "list")]
        board: Option<String>,

        /// Trello list (id or exact name) inside the board
        #[arg(long, requires = "board")]
        list: Option<String>,

        /// Card name prefix (default: the preset brand)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// List the open Trello boards for the configured credentials
    Boards,

    /// List the lists of a Trello board (id or exact name)
    Lists { board: String },
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

    let presets_path = cli
        .presets
        .clone()
        .unwrap_or_else(|| PathBuf::from(planner_core::presets::PRESETS_FILE));

    let result = match cli.command {
        Commands::Init => cmd::init::run(&presets_path),
        Commands::Plan {
            month,
            frequency,
            days,
            pillars,
            csv,
            board,
            list,
            prefix,
        } => cmd::plan::run(
            &presets_path,
            cmd::plan::PlanArgs {
                month,
                frequency,
                days,
                pillars,
                csv,
                board,
                list,
                prefix,
            },
            cli.json,
        ),
        Commands::Boards => cmd::boards::run(cli.json),
        Commands::Lists { board } => cmd::lists::run(&board, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
