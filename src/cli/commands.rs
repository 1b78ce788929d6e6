//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};

/// jobfeed - browse paginated job listings from the terminal
#[derive(Parser, Debug)]
#[command(name = "jobfeed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Job board endpoint (defaults to the built-in board)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Listing filters shared by all commands
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Filter by words in the position description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Filter by location
    #[arg(short, long)]
    pub location: Option<String>,

    /// Only full-time positions
    #[arg(long)]
    pub full_time: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print one page of listings and exit
    Fetch {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page to fetch (1-based)
        #[arg(short, long, default_value = "1")]
        page: u32,
    },

    /// Browse interactively: n(ext), p(revious), f(irst), q(uit)
    Browse {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one job per line)
    Json,
    /// Human-readable output
    Pretty,
}
