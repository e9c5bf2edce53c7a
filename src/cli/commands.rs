use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::info;

use crate::analysis::analyze;
use crate::history::HistoryStore;
use crate::models::DedupeStrategy;
use crate::utils::{default_history_path, expand_tilde, format_path_with_tilde, init_logging};

#[derive(Parser)]
#[command(name = "zsh-history-cleaner")]
#[command(version)]
#[command(about = "Remove duplicate commands from a Zsh history file", long_about = None)]
pub struct Cli {
    /// History file to read [default: ~/.zsh_history]
    #[arg(short = 'f', long, global = true)]
    pub history_file: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove duplicate commands from the history
    Clean(CleanArgs),
    /// Show statistics about the history
    Stats {
        /// Number of most used commands to list
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct CleanArgs {
    /// Report what would be removed without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not back up the history file before overwriting it
    #[arg(long)]
    pub no_backup: bool,

    /// Write the cleaned history to this file instead of the history file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which occurrence of a repeated command to keep
    #[arg(long, value_enum, default_value_t = DedupeStrategy::First)]
    pub keep: DedupeStrategy,
}

impl Cli {
    fn log_level(&self) -> Option<LevelFilter> {
        if self.verbose {
            Some(LevelFilter::DEBUG)
        } else if self.quiet {
            Some(LevelFilter::WARN)
        } else {
            None
        }
    }

    fn history_path(&self) -> Result<PathBuf> {
        let path = match &self.history_file {
            Some(path) => expand_tilde(path),
            None => default_history_path(),
        };
        path.context("Failed to resolve the history file path")
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match &cli.command {
        Some(Commands::Clean(args)) => {
            clean(&cli.history_path()?, args)?;
        }
        Some(Commands::Stats { top, json }) => {
            show_stats(&cli.history_path()?, *top, *json)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn clean(history_file: &Path, args: &CleanArgs) -> Result<()> {
    let mut store = HistoryStore::load(history_file).context("Failed to load history")?;
    println!("Read {} entries from {}", store.len(), format_path_with_tilde(store.path()));
    if !store.warnings().is_empty() {
        println!("Skipped {} unparsable line(s)", store.warnings().len());
    }

    info!("Removing duplicate commands...");
    let report = store.remove_duplicates_with(args.keep);
    println!("{} command(s) will be removed from the history", report.removed());

    if args.dry_run {
        println!("Dry run: nothing written");
        return Ok(());
    }
    if report.removed() == 0 && args.output.is_none() {
        println!("No duplicate commands found, nothing to write");
        return Ok(());
    }

    let backup =
        store.save(args.output.as_deref(), !args.no_backup).context("Failed to save history")?;
    if let Some(backup) = backup {
        println!("Backup written to {}", format_path_with_tilde(&backup));
    }
    let output = args.output.as_deref().unwrap_or(store.path());
    println!("History written to {} ({} entries)", format_path_with_tilde(output), store.len());

    Ok(())
}

fn show_stats(history_file: &Path, top: usize, json: bool) -> Result<()> {
    let store = HistoryStore::load(history_file).context("Failed to load history")?;
    let analysis = analyze(&store, top);

    if json {
        let output =
            serde_json::to_string_pretty(&analysis).context("Failed to serialize statistics")?;
        println!("{}", output);
    } else {
        print!("{}", analysis);
    }

    Ok(())
}
