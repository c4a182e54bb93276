use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ktfix", version)]
#[command(about = "Repair delimiter imbalances left behind by Kotlin codemods", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Report repairs without writing any file
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append missing closing braces at the end of each file
    #[command(alias = "b")]
    Braces {
        /// Files to repair, processed in order
        // Kept optional at the parser level so an empty list exits with the
        // usage error code instead of clap's own.
        #[arg(required = false)]
        files: Vec<PathBuf>,
    },

    /// Close unterminated `.update { it.copy(` call chains
    #[command(alias = "c")]
    Chains {
        /// Files to repair, processed in order
        #[arg(required = false)]
        files: Vec<PathBuf>,
    },
}
