use clap::Parser;
use ktfix::api::KtfixApi;
use ktfix::config::KtfixConfig;
use ktfix::error::{KtfixError, Result};
use ktfix::store::fs::FileStore;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        match e {
            KtfixError::Usage(message) => eprintln!("{}", message),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_dir = std::env::current_dir().map_err(KtfixError::Io)?;
    let config = KtfixConfig::load(config_dir)?;
    let mut api = KtfixApi::new(FileStore::new(), config);

    let batch = match cli.command {
        Commands::Braces { files } => {
            require_files(&files, "braces")?;
            api.repair_braces(&files, cli.dry_run)
        }
        Commands::Chains { files } => {
            require_files(&files, "chains")?;
            api.repair_chains(&files, cli.dry_run)
        }
    };

    print::print_reports(&batch);
    Ok(())
}

fn require_files(files: &[PathBuf], subcommand: &str) -> Result<()> {
    if files.is_empty() {
        return Err(KtfixError::Usage(format!(
            "usage: ktfix {} <file> [file ...]",
            subcommand
        )));
    }
    Ok(())
}
