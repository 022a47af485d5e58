//! CLI command definitions
//!
//! Defines the clap commands for the todo-e2e CLI.

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run a seed-then-visit scenario defined in a YAML file
    Run {
        /// Path to the YAML scenario file
        path: PathBuf,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,
    },

    /// Generate a todo batch and seed it, without visiting
    Seed {
        /// Number of todos to generate (default from config)
        #[arg(long, short)]
        count: Option<usize>,
    },

    /// Visit a path in the application under test
    Visit {
        /// Path relative to the base URL
        #[arg(default_value = "/")]
        path: String,
    },

    /// Print a generated todo batch as JSON
    Generate {
        /// Number of todos to generate (default from config)
        #[arg(long, short)]
        count: Option<usize>,
    },
}

/// Options shared by every command
///
/// Command-line values take precedence over the config file.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the application under test
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Seed into this JSON database file
    #[arg(long, global = true, conflicts_with = "task_url")]
    pub db: Option<PathBuf>,

    /// Seed through a remote task endpoint
    #[arg(long, global = true)]
    pub task_url: Option<String>,

    /// Also write logs to the platform log directory
    #[arg(long, global = true)]
    pub log_file: bool,
}
