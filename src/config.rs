use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{AnalyzeArgs, HistoryArgs};

const DEFAULT_DUMP_DIR: &str = "dumps";
const DEFAULT_LOG_DIR: &str = "logs";

/// Shape of the optional config file (~/.config/langdiff/config.toml).
#[derive(Deserialize, Default)]
struct FileConfig {
    dump_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
}

pub struct Config {
    pub dump_dir: PathBuf,
    pub log_dir: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn from_analyze_args(args: &AnalyzeArgs) -> Self {
        let file = load_file_config();
        let (dump_dir, log_dir) =
            resolve_dirs(args.dump_dir.clone(), args.log_dir.clone(), &file);

        Config {
            dump_dir,
            log_dir,
            verbose: args.verbose,
        }
    }

    pub fn from_history_args(args: &HistoryArgs) -> Self {
        let file = load_file_config();
        let (dump_dir, log_dir) = resolve_dirs(args.dump_dir.clone(), None, &file);

        Config {
            dump_dir,
            log_dir,
            verbose: false,
        }
    }
}

/// CLI flags win over the config file, the config file wins over defaults.
fn resolve_dirs(
    cli_dump: Option<PathBuf>,
    cli_log: Option<PathBuf>,
    file: &FileConfig,
) -> (PathBuf, PathBuf) {
    let dump_dir = cli_dump
        .or_else(|| file.dump_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DUMP_DIR));
    let log_dir = cli_log
        .or_else(|| file.log_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));
    (dump_dir, log_dir)
}

fn load_file_config() -> FileConfig {
    let Some(dirs) = directories::ProjectDirs::from("", "", "langdiff") else {
        return FileConfig::default();
    };

    let path = dirs.config_dir().join("config.toml");
    let Ok(content) = std::fs::read_to_string(&path) else {
        return FileConfig::default();
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: ignoring malformed config {}: {e}", path.display());
            FileConfig::default()
        }
    }
}
