use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Manage bank accounts stored in a JSON ledger file
#[derive(Parser, Debug)]
#[command(name = "ledger-manager")]
#[command(about = "Manage bank accounts stored in a JSON ledger file", long_about = None)]
pub struct CliArgs {
    /// Path of the JSON ledger file
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = "accounts.json",
        help = "Path of the JSON ledger file (created if missing)"
    )]
    pub data_file: PathBuf,

    /// Minimum level of log records written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level: 'error', 'warn', 'info', 'debug' or 'trace' (RUST_LOG overrides)"
    )]
    pub log_level: LogLevel,
}

/// Available log levels
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
