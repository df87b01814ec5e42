//! CLI frontend for the Spielleiter session assistant.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sl",
    about = "Spielleiter — a game master's assistant for card-based initiative",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new campaign directory with a starter campaign.json
    Init {
        /// Name of the campaign to create
        name: String,
    },

    /// Run an interactive session (saves the campaign on quit)
    Play {
        /// Campaign directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// RNG seed for reproducible shuffles and rolls
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Bennies in the bank at session start
        #[arg(short, long, default_value = "20")]
        bank: u32,
    },

    /// Roll dice once and exit
    Roll {
        /// Dice expression, e.g. 3d6+2
        expression: String,

        /// RNG seed (default: from the OS)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List campaign records in a table
    List {
        /// What to list: chars, monsters, encounters, store
        what: String,

        /// Campaign directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Export the campaign to a different format
    Export {
        /// Output format: markdown, json
        #[arg(default_value = "markdown")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Campaign directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&name),
        Commands::Play { dir, seed, bank } => commands::play::run(&dir, seed, bank),
        Commands::Roll { expression, seed } => commands::roll::run(&expression, seed),
        Commands::List { what, dir } => commands::list::run(&dir, &what),
        Commands::Export {
            format,
            output,
            dir,
        } => commands::export::run(&dir, &format, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
