use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "rayshade")]
#[command(about = "Ray cast spheres and triangles with hard shadows into a 512x512 PNG")]
pub struct Args {
    /// Output base name, without extension. Only `reference` (or no name)
    /// renders the reference scene; other names render an empty scene.
    pub name: Option<String>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Number of render threads (defaults to one per CPU core)
    #[arg(long, short = 'j', help = "Number of render threads (defaults to one per CPU core)")]
    pub threads: Option<usize>,

    /// Compare sequential and parallel rendering of the reference scene
    #[arg(long, help = "Compare sequential and parallel rendering of the reference scene (no file written)")]
    pub bench: bool,
}
