//! Command-line interface for verse notation
//! Parses chapter or range notation given on the command line and prints the result.
//!
//! Usage:
//!   verses chapters `<notation>` [--format `<format>`]   - Parse chapter notation, e.g. "150:10-12 2:5"
//!   verses range `<notation>` [--format `<format>`]      - Expand range notation, e.g. "10-11,13-15"
//!   verses check `<notation>`                            - Validate chapter notation, print its canonical form
//!
//! Settings come from the embedded defaults, an optional `verses.toml` in the current
//! directory (or the file given with `--config`), then command-line flags.

mod output;

use clap::{Parser, Subcommand};
use output::{render, render_error, Parsed};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use verse_config::{Loader, OutputFormat, VersesConfig};
use verse_parser::{ChapterVerseParser, RangeExpander};

const LOCAL_CONFIG: &str = "verses.toml";

#[derive(Parser)]
#[command(name = "verses")]
#[command(version, about = "Parse bible chapter and verse notation")]
struct Cli {
    /// Configuration file layered over the defaults
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Output format: json, pretty, debug or notation
    #[arg(long, short = 'f', global = true)]
    format: Option<String>,

    /// Largest number of verses a single range may contribute (unbounded if unset)
    #[arg(long, global = true)]
    max_range_len: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse chapter notation such as "150:10-12,14 2:10"
    Chapters {
        #[arg(allow_hyphen_values = true)]
        notation: String,
    },
    /// Expand range notation such as "10-11,13-15"
    Range {
        #[arg(allow_hyphen_values = true)]
        notation: String,
    },
    /// Check chapter notation and print its canonical form
    Check {
        #[arg(allow_hyphen_values = true)]
        notation: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(2);
    });
    init_tracing(&config.log.level);
    debug!(?config, "loaded configuration");

    let limits = config.parser.limits();
    match &cli.command {
        Command::Chapters { notation } => {
            let parsed = parse_or_exit(ChapterVerseParser::new(limits), notation);
            print_rendered(&Parsed::Chapters(parsed), config.output.format);
        }
        Command::Range { notation } => {
            let verses = RangeExpander::new(limits).expand(notation);
            print_rendered(&Parsed::Verses(verses), config.output.format);
        }
        Command::Check { notation } => {
            let parsed = parse_or_exit(ChapterVerseParser::new(limits), notation);
            info!(chapters = parsed.len(), "notation is valid");
            print_rendered(&Parsed::Chapters(parsed), OutputFormat::Notation);
        }
    }
}

/// Layer defaults, config file and command-line overrides
fn load_config(cli: &Cli) -> Result<VersesConfig, verse_config::ConfigError> {
    let mut loader = match &cli.config {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    if let Some(format) = &cli.format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(max_range_len) = cli.max_range_len {
        loader = loader.set_override("parser.max_range_len", i64::from(max_range_len))?;
    }
    loader.build()
}

/// Logs go to stderr; RUST_LOG wins over the configured level
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_or_exit(parser: ChapterVerseParser, notation: &str) -> verse_parser::ChapterMap {
    parser.parse(notation).unwrap_or_else(|e| {
        eprintln!("{}", render_error(notation, &e));
        std::process::exit(1);
    })
}

fn print_rendered(parsed: &Parsed, format: OutputFormat) {
    let rendered = render(parsed, format).unwrap_or_else(|e| {
        eprintln!("Error formatting output: {}", e);
        std::process::exit(1);
    });
    println!("{}", rendered);
}
