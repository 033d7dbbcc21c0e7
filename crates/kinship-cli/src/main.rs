//! Kinship CLI - Command-line interface for Kinship
//!
//! This is the main entry point for users exploring a social network.
//! It provides one-shot query commands and an interactive menu shell.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod render;
mod shell;

use config::Config;

#[derive(Parser)]
#[command(name = "kinship")]
#[command(author = "Kinship Contributors")]
#[command(version)]
#[command(about = "Friendship queries over a small social network", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Roster file (overrides the config)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Friendship file (overrides the config)
    #[arg(long, global = true)]
    friends: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Kinship in the current directory
    Init,

    /// Display all the friends of a person
    Friends {
        /// Member name (any casing)
        name: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Display all the friends and friends of the friends of a person
    Mutual {
        /// Member name (any casing)
        name: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Display all the common friends of two people
    Common {
        /// First member name
        first: String,

        /// Second member name
        second: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Display all members sorted by popularity, then by name
    Popular {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List everyone reachable from a person, depth first
    Traverse {
        /// Member name to start from
        name: String,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Show network statistics
    Status {
        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Start the interactive menu (the default)
    Shell,
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        roster,
        friends,
        command,
        ..
    } = cli;

    let load_config = move || -> Result<Config, Box<dyn std::error::Error>> {
        let root = std::env::current_dir()?;
        Ok(Config::load(&root)?.with_overrides(roster, friends))
    };

    match command.unwrap_or(Commands::Shell) {
        Commands::Init => commands::init(&std::env::current_dir()?),
        Commands::Friends { name, json } => commands::friends(&load_config()?, &name, json),
        Commands::Mutual { name, json } => commands::mutual(&load_config()?, &name, json),
        Commands::Common {
            first,
            second,
            json,
        } => commands::common(&load_config()?, &first, &second, json),
        Commands::Popular { json } => commands::popular(&load_config()?, json),
        Commands::Traverse { name, json } => commands::traverse(&load_config()?, &name, json),
        Commands::Status { json } => commands::status(&load_config()?, json),
        Commands::Shell => commands::shell(&load_config()?),
    }
}
