//! Output persistence and console summary.
//!
//! Each run writes two files sharing one timestamp suffix: the analysis
//! log and a verbatim copy of the current snapshot's line set (the next
//! run diffs against that copy). The writes are independent, so each gets
//! its own scoped thread; both must land before the run completes, and
//! either failure is fatal.

pub mod log;

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::thread::ScopedJoinHandle;

use chrono::{DateTime, Local};

use crate::config::Config;
use crate::snapshot::{self, TIMESTAMP_FORMAT};
use crate::stats::AnalysisResult;

pub struct RunOutputs {
    pub log_path: PathBuf,
    pub dump_path: PathBuf,
}

pub fn write_outputs(
    config: &Config,
    body: &[String],
    snapshot_lines: &HashSet<String>,
    timestamp: DateTime<Local>,
) -> Result<RunOutputs, Box<dyn std::error::Error>> {
    fs::create_dir_all(&config.log_dir)?;
    fs::create_dir_all(&config.dump_dir)?;

    let suffix = timestamp.format(TIMESTAMP_FORMAT).to_string();
    let log_path = config.log_dir.join(format!("log_{suffix}.txt"));
    let dump_path = config.dump_dir.join(snapshot::dump_file_name(&suffix));

    let mut dump_lines: Vec<&str> = snapshot_lines.iter().map(String::as_str).collect();
    dump_lines.sort_unstable();

    let (log_result, dump_result) = std::thread::scope(|s| {
        let log_task = s.spawn(|| write_lines(&log_path, body.iter().map(String::as_str)));
        let dump_task = s.spawn(|| write_lines(&dump_path, dump_lines.iter().copied()));
        (join(log_task, "log writer"), join(dump_task, "dump writer"))
    });

    log_result?;
    dump_result?;

    Ok(RunOutputs {
        log_path,
        dump_path,
    })
}

pub fn print_summary(
    analysis: &AnalysisResult,
    outputs: &RunOutputs,
    new_file: &Path,
    old_file: Option<&Path>,
) {
    println!("new file: {}", new_file.display());
    match old_file {
        Some(path) => println!("compared against: {}", path.display()),
        None => println!("compared against: none (first run)"),
    }

    println!("\nnew lines: {}", analysis.new_lines_count);
    println!("empty values: {}", analysis.empty_value_count);
    println!("total length: {}", analysis.total_length);
    println!("unique prefixes: {}", analysis.unique_prefixes);

    if !analysis.prefix_counts.is_empty() {
        println!("\nprefix counts:");
        for (prefix, count) in &analysis.prefix_counts {
            println!("  {prefix:<width$}: {count}", width = analysis.max_prefix_len);
        }
    }

    if !analysis.item_values.is_empty() {
        println!("\nnew item values:");
        for value in &analysis.item_values {
            println!("  {value}");
        }
    }

    println!("\nlog written to: {}", outputs.log_path.display());
    println!("snapshot saved to: {}", outputs.dump_path.display());
}

fn join(handle: ScopedJoinHandle<'_, std::io::Result<()>>, name: &str) -> std::io::Result<()> {
    handle
        .join()
        .unwrap_or_else(|_| Err(std::io::Error::other(format!("{name} thread panicked"))))
}

fn write_lines<'a, I>(path: &Path, lines: I) -> std::io::Result<()>
where
    I: Iterator<Item = &'a str>,
{
    let mut out = std::io::BufWriter::new(fs::File::create(path)?);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
