use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "py-version")]
#[command(
    author,
    version,
    about = "A tool to manage version numbers in pyproject.toml files"
)]
pub struct Cli {
    /// Enable verbose output with additional information
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Configuration file (defaults to py-version.toml in the current directory)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct FileArgs {
    /// Files to operate on, repeatable or comma-separated; glob patterns are expanded
    /// (default: pyproject.toml in current dir)
    #[clap(short, long, value_delimiter = ',')]
    pub files: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Increment a version component (major, minor, or patch)
    Increment {
        /// Component to increment; lower components are reset to 0
        component: String,

        /// Amount to increment by
        #[clap(long, default_value_t = 1)]
        amount: u64,

        #[command(flatten)]
        files: FileArgs,
    },

    /// Decrement a version component (major, minor, or patch)
    Decrement {
        /// Component to decrement; it never goes below 0
        component: String,

        /// Amount to decrement by
        #[clap(long, default_value_t = 1)]
        amount: u64,

        #[command(flatten)]
        files: FileArgs,
    },

    /// Set a version component to a specific value
    Set {
        /// Component to set
        component: String,

        /// New value for the component
        #[clap(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        files: FileArgs,
    },

    /// Display the current version without modifying it
    Show {
        /// Print one JSON object per file instead of plain text
        #[clap(long, default_value_t = false)]
        json: bool,

        #[command(flatten)]
        files: FileArgs,
    },
}
