//! Day 3: Binary diagnostic report

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 3, tags = ["diagnostics"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    readings: Vec<u32>,
    width: u32,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut width = 0u32;
        let readings = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                let line = line.trim();
                if width == 0 {
                    width = line.len() as u32;
                } else if line.len() as u32 != width {
                    return Err(anyhow!(
                        "(line {}) expected {} bits, got {}",
                        line_idx + 1,
                        width,
                        line.len()
                    ));
                }
                u32::from_str_radix(line, 2).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(SharedData { readings, width })
    }
}

/// Count readings with a one at the given column, columns indexed from the
/// most significant bit.
fn ones_at(readings: &[u32], width: u32, column: u32) -> usize {
    let mask = 1 << (width - 1 - column);
    readings.iter().filter(|&&r| r & mask != 0).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut gamma = 0u32;
        for column in 0..shared.width {
            let ones = ones_at(&shared.readings, shared.width, column);
            if 2 * ones >= shared.readings.len() {
                gamma |= 1 << (shared.width - 1 - column);
            }
        }
        let epsilon = !gamma & ((1 << shared.width) - 1);
        Ok((u64::from(gamma) * u64::from(epsilon)).to_string())
    }
}

/// Iteratively keep readings matching the most (or least) common bit per
/// column until one remains. Ties keep ones for the most-common rule and
/// zeros for the least-common rule.
fn filter_rating(readings: &[u32], width: u32, keep_most_common: bool) -> anyhow::Result<u32> {
    let mut candidates = readings.to_vec();
    for column in 0..width {
        if candidates.len() <= 1 {
            break;
        }
        let mask = 1 << (width - 1 - column);
        let ones = ones_at(&candidates, width, column);
        let zeros = candidates.len() - ones;
        let keep_ones = if keep_most_common {
            ones >= zeros
        } else {
            ones < zeros
        };
        candidates.retain(|&r| (r & mask != 0) == keep_ones);
    }
    candidates
        .first()
        .copied()
        .ok_or_else(|| anyhow!("bit filtering left no candidate reading"))
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = filter_rating(&shared.readings, shared.width, true)
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        let scrubber = filter_rating(&shared.readings, shared.width, false)
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        Ok((u64::from(oxygen) * u64::from(scrubber)).to_string())
    }
}
