use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bin-status")]
#[command(about = "Look up issuer (BIN) enrollment status for card numbers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: String,

    /// Report failed lookups per card instead of aborting the batch
    #[arg(long, global = true)]
    pub keep_going: bool,

    /// Number of lookups in flight at once (overrides config)
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check card numbers given inline, or one per line on stdin
    Check {
        /// Card numbers to check
        cards: Vec<String>,
    },

    /// Check every card listed in a file and write the report to another file
    File {
        /// Input file, one card number per line
        input: PathBuf,

        /// Output file for the records
        #[arg(short, long, default_value = "output_results.txt")]
        output: PathBuf,
    },
}
