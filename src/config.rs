//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::{catalog::Catalog, error::Result};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "workout-tracker")]
#[command(about = "Pick a workout split, log weights and track workouts in the browser")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// JSON file mapping "3-day", "4-day" and "5-day" to workout plans
    /// (built-in plans are used when omitted)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Maximum number of open sessions; the oldest is dropped beyond this
    #[arg(long, default_value = "64")]
    pub max_sessions: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// The catalog file if one was given, else the built-in plans
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
