//! Command-line interface for gleaner
//!
//! Usage:
//!   gleaner vowels `<text>` [--join]   - Print the vowels of a string
//!   gleaner count `<text>`             - Count the vowels of a string
//!   gleaner glean `<text>`             - Sum (concatenate) the vowels of a string
//!   gleaner sum `<expr>`               - Sum a collection literal, e.g. "[1, 2, 3]"
//!   gleaner shout `<text>`             - Print a string upper-cased

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gleaner::{parse_collection, Config, Loud, Summable, VowelFinder};

/// Gleaner - vowel extraction and seedless summation
#[derive(Parser, Debug)]
#[command(name = "gleaner")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Characters to treat as vowels (overrides the config file)
    #[arg(long, global = true)]
    vowels: Option<String>,

    /// Match vowels regardless of case
    #[arg(short = 'i', long, global = true)]
    ignore_case: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each vowel of TEXT
    Vowels {
        /// Text to scan
        text: String,

        /// Print the vowels on one line
        #[arg(long)]
        join: bool,
    },

    /// Print the number of vowels in TEXT
    Count {
        /// Text to scan
        text: String,
    },

    /// Print the vowels of TEXT added together
    Glean {
        /// Text to scan
        text: String,
    },

    /// Print the sum of a collection literal such as "[1, 2, 3]" or "'a'..='m'"
    Sum {
        /// Collection literal
        expr: String,
    },

    /// Print TEXT upper-cased
    Shout {
        /// Text to shout
        text: String,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(vowels) = &cli.vowels {
        config.vowels = vowels.clone();
    }
    if cli.ignore_case {
        config.ignore_case = true;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let set = config.vowel_set().context("invalid vowel set")?;
    tracing::debug!(?set, "using vowel set");

    match &cli.command {
        Command::Vowels { text, join } => {
            let finder = VowelFinder::with_set(text, set);
            if *join {
                println!("{}", finder.iter().collect::<String>());
            } else {
                for vowel in &finder {
                    println!("{}", vowel);
                }
            }
        }
        Command::Count { text } => {
            println!("{}", VowelFinder::with_set(text, set).count());
        }
        Command::Glean { text } => {
            let finder = VowelFinder::with_set(text, set);
            let total = (&finder).total().context("no vowels to glean")?;
            println!("{}", total);
        }
        Command::Sum { expr } => {
            // EvalError carries proc-macro2 spans, which are not Send
            let items = parse_collection(expr, &config)
                .map_err(|e| anyhow::anyhow!("failed to evaluate `{}`: {}", expr, e))?;
            let total = items
                .total()
                .with_context(|| format!("failed to sum `{}`", expr))?;
            println!("{}", total);
        }
        Command::Shout { text } => {
            println!("{}", Loud::new(text).shout());
        }
    }

    Ok(())
}
