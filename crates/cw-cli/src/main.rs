//! CLI frontend for the Castaway draw simulator.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

use cw_session::SessionConfig;

#[derive(Parser)]
#[command(
    name = "castaway",
    about = "Castaway — token bag and weather deck simulator for a survival board game",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive drawing session (the default)
    Play {
        /// RNG seed for a reproducible session (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of entries the `journal` command shows
        #[arg(long, default_value_t = SessionConfig::default().journal_preview)]
        journal: usize,
    },

    /// Run many draws and print the resulting odds
    Stats {
        /// Number of trials per measurement
        #[arg(short, long, default_value = "10000")]
        trials: u32,

        /// RNG seed for deterministic trials
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Some(Commands::Play { seed, journal }) => commands::play::run(seed, journal),
        Some(Commands::Stats { trials, seed }) => commands::stats::run(trials, seed),
        None => commands::play::run(None, SessionConfig::default().journal_preview),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
