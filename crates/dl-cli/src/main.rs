//! Terminal front end for Deadline.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "deadline",
    about = "Deadline: get your things home and submit the assignment in time",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game in the terminal
    Play {
        #[command(flatten)]
        session: SessionArgs,

        /// RNG seed for the minigames
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Word list for the word guess, one word per line
        #[arg(long)]
        words: Option<PathBuf>,
    },

    /// Replay a script of commands with challenges switched off
    Simulate {
        /// Script file, one command per line (`-` for stdin)
        script: PathBuf,

        #[command(flatten)]
        session: SessionArgs,

        /// Print the final summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a world file and list its locations
    Check {
        /// World file (default: the built-in campus)
        #[arg(short, long)]
        world: Option<PathBuf>,
    },
}

/// Flags shared by every command that starts a session.
#[derive(Args)]
struct SessionArgs {
    /// World file (default: the built-in campus)
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Turn budget
    #[arg(long)]
    turns: Option<u32>,

    /// Wall-clock budget in minutes
    #[arg(long)]
    minutes: Option<u64>,

    /// Score that survives running out of turns
    #[arg(long)]
    pass: Option<i32>,

    /// Start location id
    #[arg(long)]
    start: Option<u32>,

    /// Home location id, where `submit` is played
    #[arg(long)]
    home: Option<u32>,

    /// Item needed for `submit` (repeatable; replaces the default list)
    #[arg(long = "require")]
    required: Vec<String>,
}

impl SessionArgs {
    fn options(&self) -> commands::SessionOptions<'_> {
        commands::SessionOptions {
            world: self.world.as_deref(),
            turns: self.turns,
            minutes: self.minutes,
            passing_score: self.pass,
            start: self.start,
            home: self.home,
            required: &self.required,
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("DEADLINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            session,
            seed,
            words,
        } => commands::play::run(&session.options(), seed, words.as_deref()),
        Commands::Simulate {
            script,
            session,
            json,
        } => commands::simulate::run(&script, &session.options(), json),
        Commands::Check { world } => commands::check::run(world.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
