use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use arith_drill::config::{self, Config};
use arith_drill::console::TerminalConsole;
use arith_drill::session::{self, Selection, Session, SessionSettings};

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a practice session (default if no subcommand)
    Practice,
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "arith-drill")]
#[command(about = "Practice mental arithmetic in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/arith-drill/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Upper bound for addition sums and subtraction minuends [default: 100]
    #[arg(short, long)]
    limit: Option<u32>,

    /// Session length, e.g. "90", "90s" or "5m" [default: unlimited]
    #[arg(short, long)]
    time_limit: Option<String>,

    /// Operations to practice, e.g. "+-*" (skips the question)
    #[arg(short, long)]
    ops: Option<String>,

    /// Times tables as digits, e.g. "78" (skips the question)
    #[arg(long)]
    tables: Option<String>,

    /// Ask each task again until it is answered correctly
    #[arg(short, long)]
    repeat: bool,

    /// Plain success message without emoji
    #[arg(long)]
    no_celebrate: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    /// Command-line values as a config layer
    fn overrides(&self) -> Config {
        Config {
            limit: self.limit,
            time_limit: self.time_limit.clone(),
            operations: self.ops.clone(),
            tables: self
                .tables
                .as_deref()
                .map(|t| session::parse_tables(t).into_iter().collect()),
            repeat_until_correct: self.repeat.then_some(true),
            celebrate: self.no_celebrate.then_some(false),
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    // RUST_LOG wins over --verbose when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("arith_drill={}", level)));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Init { force }) = &cli.command {
        let path = match &cli.config {
            Some(p) => p.clone(),
            None => match config::get_config_path() {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            },
        };
        if let Err(e) = config::write_starter_config(&path, *force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Config written to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config, then layer command-line flags on top
    let file_config = match config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let effective = cli.overrides().merged_over(file_config);

    if let Err(errors) = config::validate_config(&effective) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let use_colors = !cli.no_color && arith_drill::output::should_use_colors();
    let settings = match SessionSettings::from_config(&effective, use_colors) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    tracing::debug!(?settings, "Effective settings");

    let preset = Selection {
        kinds: effective
            .operations
            .as_deref()
            .map(session::parse_kinds)
            .unwrap_or_default(),
        tables: effective
            .tables
            .iter()
            .flatten()
            .copied()
            .collect(),
    };

    let mut console = TerminalConsole::new();

    let selection = match session::collect_selection(&mut console, preset).await {
        Ok(Some(s)) => s,
        // Nothing was asked yet, so there is no score to report
        Ok(None) => std::process::exit(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_RUNTIME);
        }
    };

    let mut drill = match Session::new(settings, selection, StdRng::from_entropy()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    match session::run(&mut drill, &mut console).await {
        Ok(outcome) => tracing::info!(
            "Session finished ({:?}) with {}/{} correct after {}",
            outcome.reason,
            outcome.score.correct,
            outcome.score.asked,
            humantime::format_duration(Duration::from_secs(outcome.elapsed.as_secs()))
        ),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_RUNTIME);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
