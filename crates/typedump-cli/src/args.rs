use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "typedump")]
#[command(about = "Render JSON documents as indented, human-readable dumps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON files to dump; reads stdin when none are given or for `-`
    pub files: Vec<PathBuf>,

    /// Config file (defaults to $TYPEDUMP_CONFIG, then the user config dir)
    #[arg(long)]
    pub config: Option<String>,

    /// Spaces per nesting level
    #[arg(long)]
    pub indent: Option<usize>,

    /// Print the bare dump without the surrounding box
    #[arg(long)]
    pub no_border: bool,

    /// Box title (defaults to the input path)
    #[arg(long)]
    pub title: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
