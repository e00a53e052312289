use std::collections::HashSet;
use std::path::Path;

use clap::Parser;
use langdiff::cli::{Cli, Command};
use langdiff::config::Config;
use langdiff::snapshot::{self, Snapshot};
use langdiff::{diff, report, stats};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(args) => {
            let config = Config::from_analyze_args(&args);
            if let Err(e) = run_analyze(&args.file, &config) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Command::History(args) => {
            let config = Config::from_history_args(&args);
            run_history(&config);
        }
    }
}

fn run_analyze(file: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let old_file = snapshot::find_latest(
        &config.dump_dir,
        snapshot::DUMP_PREFIX,
        snapshot::DUMP_SUFFIX,
    );

    // a missing or unreadable previous dump means "no prior data"
    let old_lines = match &old_file {
        Some(path) => {
            let (old, diagnostics) = Snapshot::load_or_empty(path);
            if config.verbose {
                for diagnostic in &diagnostics {
                    eprintln!("[loader] {diagnostic}");
                }
            }
            old.lines
        }
        None => HashSet::new(),
    };

    // the current dump is different: failing to read it aborts the run
    let current = Snapshot::capture(file)?;

    let added = diff::new_lines(&current.lines, &old_lines);
    let analysis = stats::analyze(&added);

    let body = report::log::build_log_body(
        &analysis,
        &added,
        file,
        old_file.as_deref(),
        current.timestamp,
    );
    let outputs = report::write_outputs(config, &body, &current.lines, current.timestamp)?;

    report::print_summary(&analysis, &outputs, file, old_file.as_deref());
    Ok(())
}

fn run_history(config: &Config) {
    let dumps = snapshot::list_dumps(&config.dump_dir);

    if dumps.is_empty() {
        println!("No snapshots found. Run 'langdiff analyze <file>' to create one.");
        return;
    }

    println!("{:<20} {:>8}  {}", "Date", "Lines", "File");
    println!("{}", "-".repeat(60));

    for record in dumps {
        let date = record.modified.format("%Y-%m-%d %H:%M:%S").to_string();
        let name = record
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        println!("{date:<20} {:>8}  {name}", record.lines);
    }
}
