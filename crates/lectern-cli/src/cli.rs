use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Output format for lookup commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// Pretty-printed JSON, identical to the HTTP response bodies
    Json,
}

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "lectern - read-only scripture lookup over per-translation SQLite files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value. RUST_LOG wins over both.
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ./lectern.toml, then ~/.config/lectern/config.toml)
    #[arg(short = 'C', long, global = true, env = "LECTERN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the translation databases (overrides config file)
    #[arg(short = 'd', long, global = true, env = "LECTERN_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Level requested on the command line, if any
    pub fn log_filter(&self) -> Option<LevelFilter> {
        if self.verbose {
            Some(LevelFilter::DEBUG)
        } else {
            self.log_level.map(LevelFilter::from)
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Disable cross-origin headers
        #[arg(long)]
        no_cors: bool,
    },

    /// List available translations
    Translations {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List the books of a translation
    Books {
        /// Translation acronym (case-insensitive)
        translation: String,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Count the chapters of a book
    #[command(allow_negative_numbers = true)]
    Chapters {
        /// Translation acronym (case-insensitive)
        translation: String,

        /// Numeric book id
        book: i64,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print one verse, or a whole chapter when the verse is omitted
    #[command(allow_negative_numbers = true)]
    Verse {
        /// Translation acronym (case-insensitive)
        translation: String,

        /// Numeric book id
        book: i64,

        /// Chapter number
        chapter: i64,

        /// Verse number
        verse: Option<i64>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Book, chapter and verse totals for a translation
    Stats {
        /// Translation acronym (case-insensitive)
        translation: String,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Output format (toml, json)
        #[arg(short, long, default_value = "toml")]
        format: String,
    },

    /// Print the config file that would be loaded
    Path,
}
