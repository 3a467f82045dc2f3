//! markbook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "markbook", version, about = "Student roster and grade tracker")]
struct Cli {
    /// Roster CSV file (overrides the config file)
    #[arg(long, global = true)]
    roster: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student, or update the one with the same roll
    Add {
        /// Roll number (unique identifier)
        #[arg(long)]
        roll: String,

        /// Student name
        #[arg(long)]
        name: String,

        /// Three marks, 0-100 each
        #[arg(long, num_args = 3, value_name = "MARK")]
        marks: Vec<String>,
    },

    /// Delete a student by roll
    Delete {
        #[arg(long)]
        roll: String,
    },

    /// List all students
    List {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Search students by roll or name substring
    Search {
        /// Query text (case-insensitive)
        query: String,
    },

    /// Show the student with the highest average
    Topper,

    /// Render a student's report card
    Report {
        #[arg(long)]
        roll: String,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Omit the remark line
        #[arg(long)]
        minimal: bool,
    },

    /// Write a snapshot of the roster to another file
    Export {
        #[arg(long)]
        output: PathBuf,

        /// Output format: csv, json
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Replace the roster wholesale from an external CSV
    Import {
        #[arg(long)]
        input: PathBuf,
    },

    /// Remove all records
    Reset {
        /// Actually do it; without this flag nothing changes
        #[arg(long)]
        yes: bool,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("markbook=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = (|| {
        let config = config::load_config_from(cli.config.as_deref())?;
        let roster_path = cli.roster.unwrap_or_else(|| config.roster.clone());

        match cli.command {
            Commands::Add { roll, name, marks } => {
                commands::add::execute(&roster_path, &roll, &name, &marks)
            }
            Commands::Delete { roll } => commands::delete::execute(&roster_path, &roll),
            Commands::List { format } => commands::list::execute(&roster_path, &format),
            Commands::Search { query } => commands::search::execute(&roster_path, &query),
            Commands::Topper => commands::topper::execute(&roster_path),
            Commands::Report {
                roll,
                output,
                minimal,
            } => commands::report::execute(&roster_path, &roll, output.as_deref(), minimal, &config),
            Commands::Export { output, format } => {
                commands::export::execute(&roster_path, &output, &format)
            }
            Commands::Import { input } => commands::import::execute(&roster_path, &input),
            Commands::Reset { yes } => commands::reset::execute(&roster_path, yes),
            Commands::Init => commands::init::execute(),
        }
    })();

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
