//! Human-readable output for scan results.
//!
//! This module renders the token listing printed to the console and
//! persists the same listing to a timestamped file under `logs/`.

pub mod logfile;
pub mod report;
