//! Prefix statistics over the new-lines set.
//!
//! Lines follow the `prefix.key=value` convention. The prefix is whatever
//! precedes the first `.`; lines without one are skipped for prefix
//! statistics but still count toward line count and total length. Lines
//! without `=` are skipped for the value statistics. Never errors on
//! malformed input.

use std::collections::{HashMap, HashSet};

/// Derived statistics for one run, rebuilt fresh per analysis.
pub struct AnalysisResult {
    /// Per-prefix line counts, descending by count; ties break
    /// lexicographically by prefix so output is deterministic.
    pub prefix_counts: Vec<(String, usize)>,
    /// Lines whose `=` value is blank after stripping.
    pub empty_value_count: usize,
    /// Character count summed over all new lines.
    pub total_length: usize,
    pub unique_prefixes: usize,
    /// Stripped values of `item.*` lines, sorted.
    pub item_values: Vec<String>,
    /// Longest prefix in characters, 0 when no line had a prefix.
    /// Used to align the prefix table in the log.
    pub max_prefix_len: usize,
    pub new_lines_count: usize,
}

pub fn analyze(new_lines: &HashSet<String>) -> AnalysisResult {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut empty_value_count = 0;
    let mut item_values = Vec::new();
    let total_length = new_lines.iter().map(|l| l.chars().count()).sum();

    for line in new_lines {
        let Some((prefix, rest)) = line.split_once('.') else {
            continue;
        };
        *counts.entry(prefix).or_default() += 1;

        if let Some((_, value)) = rest.split_once('=') {
            if value.trim().is_empty() {
                empty_value_count += 1;
            }
            if prefix == "item" {
                item_values.push(value.trim().to_string());
            }
        }
    }

    let unique_prefixes = counts.len();
    let max_prefix_len = counts.keys().map(|p| p.chars().count()).max().unwrap_or(0);

    let mut prefix_counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(prefix, count)| (prefix.to_string(), count))
        .collect();
    prefix_counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    item_values.sort();

    AnalysisResult {
        prefix_counts,
        empty_value_count,
        total_length,
        unique_prefixes,
        item_values,
        max_prefix_len,
        new_lines_count: new_lines.len(),
    }
}
