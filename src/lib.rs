//! langdiff: diff a localization dump against its most recent archived
//! snapshot and report statistics over the newly added lines.
//!
//! Pipeline: locate latest archived dump -> load both line sets -> set
//! difference -> prefix statistics -> write a timestamped log and a
//! timestamped copy of the current snapshot.

pub mod cli;
pub mod config;
pub mod diff;
pub mod report;
pub mod snapshot;
pub mod stats;
