//! Log body assembly.
//!
//! Renders the on-disk log layout: header, statistics block, the aligned
//! prefix table, then every new line. Rendering is separated from the
//! writer so the layout can be tested without touching the filesystem.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::stats::AnalysisResult;

pub fn build_log_body(
    analysis: &AnalysisResult,
    new_lines: &HashSet<String>,
    new_file: &Path,
    old_file: Option<&Path>,
    timestamp: DateTime<Local>,
) -> Vec<String> {
    let comparison = old_file
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| String::from("Not found"));

    let mut body = vec![
        format!("Analysis time: {}", timestamp.to_rfc3339()),
        format!("New file: {}", new_file.display()),
        format!("Comparison file: {comparison}"),
        format!("Total number of new lines: {}", analysis.new_lines_count),
        format!(
            "Number of lines with empty values: {}",
            analysis.empty_value_count
        ),
        format!("Total length of new lines: {}", analysis.total_length),
        format!("Number of unique prefixes: {}", analysis.unique_prefixes),
        String::new(),
        String::from("Prefix statistics:"),
    ];

    for (prefix, count) in &analysis.prefix_counts {
        body.push(format!(
            "{prefix:<width$}: {count}",
            width = analysis.max_prefix_len
        ));
    }

    body.push(String::new());
    body.push(String::from("New lines:"));

    // set iteration order is unspecified; sort for identical bytes per run
    let mut sorted: Vec<&String> = new_lines.iter().collect();
    sorted.sort();
    body.extend(sorted.into_iter().cloned());

    body
}
