//! Daily Word - CLI
//!
//! Play the daily five-letter word game in the terminal, or run the service that
//! hands out the word of the day.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_daily::{
    client::{ClientConfig, DEFAULT_SERVER_URL, SolutionSource},
    commands::{evaluate_words, run_simple},
    output::print_evaluate_result,
    server::{self, ServerConfig},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the word service
    #[arg(long, global = true, env = "WORDLE_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Accepted-word list file (one word per line) replacing the built-in list
    #[arg(short = 'w', long, global = true)]
    accepted: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, env = "WORDLE_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Choose today's word locally instead of asking the service
        #[arg(long, conflicts_with = "practice")]
        offline: bool,

        /// Play a random word
        #[arg(long)]
        practice: bool,
    },

    /// Line-based game without the TUI
    Simple {
        /// Choose today's word locally instead of asking the service
        #[arg(long, conflicts_with = "practice")]
        offline: bool,

        /// Play a random word
        #[arg(long)]
        practice: bool,
    },

    /// Score a guess against a solution
    Evaluate {
        /// The guessed word
        guess: String,

        /// The solution to score against
        solution: String,
    },

    /// Run the daily word service
    Serve {
        /// Listen address
        #[arg(short, long, env = "WORDLE_LISTEN", default_value = "127.0.0.1:5000")]
        listen: SocketAddr,

        /// Override the listen port
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// First day of the solution rotation (YYYY-MM-DD)
        #[arg(long)]
        epoch: Option<NaiveDate>,

        /// Enable JSON logging
        #[arg(long, env = "WORDLE_LOG_JSON")]
        log_json: bool,
    },
}

impl Cli {
    fn solution_source(&self, offline: bool, practice: bool) -> SolutionSource {
        if practice {
            SolutionSource::Practice
        } else if offline {
            SolutionSource::Offline
        } else {
            SolutionSource::Server(ClientConfig::new(self.server.clone()))
        }
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` takes precedence over `--log-level`. With a log file, output goes
/// there without colours; `terminal` controls whether stderr may be used otherwise.
fn init_tracing(
    log_level: &str,
    json: bool,
    log_file: Option<&Path>,
    terminal: bool,
) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| log_level.into());

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false);
        if json {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(layer)
                .init();
        }
    } else if !terminal {
        // Nothing to log to
    } else if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

/// Built-in accepted list, or the one given with `--accepted`
fn load_accepted(path: Option<&Path>) -> Result<WordList> {
    match path {
        None => Ok(WordList::accepted()),
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            tracing::info!(count = words.len(), path = %path.display(), "loaded accepted words");
            Ok(words.into_iter().collect())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let default_command = Commands::Play {
        offline: false,
        practice: false,
    };
    let command = cli.command.as_ref().unwrap_or(&default_command);

    match command {
        Commands::Play { offline, practice } => {
            init_tracing(&cli.log_level, false, cli.log_file.as_deref(), false)?;
            let accepted = load_accepted(cli.accepted.as_deref())?;
            run_play_command(cli.solution_source(*offline, *practice), &accepted)
        }
        Commands::Simple { offline, practice } => {
            init_tracing(&cli.log_level, false, cli.log_file.as_deref(), true)?;
            let accepted = load_accepted(cli.accepted.as_deref())?;
            run_simple(&cli.solution_source(*offline, *practice), &accepted)
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Evaluate { guess, solution } => {
            init_tracing(&cli.log_level, false, cli.log_file.as_deref(), true)?;
            let accepted = load_accepted(cli.accepted.as_deref())?;
            let result =
                evaluate_words(guess, solution, &accepted).map_err(|e| anyhow::anyhow!(e))?;
            print_evaluate_result(&result);
            Ok(())
        }
        Commands::Serve {
            listen,
            port,
            epoch,
            log_json,
        } => {
            init_tracing(&cli.log_level, *log_json, cli.log_file.as_deref(), true)?;
            let mut config = ServerConfig {
                listen_addr: *listen,
                ..ServerConfig::default()
            };
            if let Some(port) = port {
                config = config.with_port(*port);
            }
            if let Some(epoch) = epoch {
                config.epoch = *epoch;
            }
            run_serve_command(config)
        }
    }
}

fn run_play_command(source: SolutionSource, accepted: &WordList) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    let app = App::new(source, accepted);
    run_tui(app)
}

fn run_serve_command(config: ServerConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(server::run(config))
}
