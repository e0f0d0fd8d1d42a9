//! CLI parsing for adacheck

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "adacheck")]
#[command(about = "Check websites for ADA/WCAG accessibility compliance", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (defaults to ./adacheck.toml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the compliance service address
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Hide progress bars and terminal summaries
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a fast scan of a page for the most common issues
    QuickScan(commands::quick_scan::Args),

    /// Run a full compliance analysis and business risk assessment
    Analyze(commands::analyze::Args),

    /// Export a saved analysis as a standalone HTML report
    Report(commands::report::Args),

    /// Interactive session: scan, analyze and export from one prompt
    Session(commands::session::Args),

    /// Write a default adacheck.toml in the current directory
    Init(commands::init::Args),
}
