use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "langdiff")]
#[command(about = "Tracks newly added lines between localization dump snapshots")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff a dump against the latest archived snapshot and log the new lines
    Analyze(AnalyzeArgs),

    /// List archived snapshots, newest first
    History(HistoryArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the current localization dump (e.g. ru.lang)
    pub file: PathBuf,

    /// Directory holding archived dump snapshots (default: dumps)
    #[arg(long)]
    pub dump_dir: Option<PathBuf>,

    /// Directory receiving analysis logs (default: logs)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Show loader diagnostics
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

#[derive(Parser)]
pub struct HistoryArgs {
    /// Directory holding archived dump snapshots (default: dumps)
    #[arg(long)]
    pub dump_dir: Option<PathBuf>,
}
