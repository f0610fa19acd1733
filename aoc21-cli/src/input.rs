//! Local puzzle input directory
//!
//! Inputs are path-addressed by day identifier: `<root>/day-NN/input.txt`.
//! There is no fetching; a missing file is reported as an error for that
//! day and the remaining solvers keep running.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a puzzle input file
#[derive(Debug, Error)]
#[error("cannot read puzzle input {}: {}", path.display(), source)]
pub struct InputError {
    path: PathBuf,
    #[source]
    source: std::io::Error,
}

/// Day-addressed puzzle input directory
pub struct PuzzleDir {
    root: PathBuf,
}

impl PuzzleDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the input file for a specific day
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.root.join(format!("day-{:02}", day)).join("input.txt")
    }

    /// Check whether the input file for a day is present
    pub fn contains(&self, day: u8) -> bool {
        self.input_path(day).exists()
    }

    /// Read the input file for a day
    pub fn load(&self, day: u8) -> Result<String, InputError> {
        let path = self.input_path(day);
        fs::read_to_string(&path).map_err(|source| InputError { path, source })
    }
}
