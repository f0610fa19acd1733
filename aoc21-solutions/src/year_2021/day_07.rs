//! Day 7: Crab submarine alignment

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 7, tags = ["alignment"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    positions: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|position| {
                position
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| anyhow!("bad crab position {:?}: {}", position, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|positions| SharedData { positions })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Total fuel to align every crab on `target` under the given per-crab cost.
fn alignment_cost(positions: &[i64], target: i64, cost: impl Fn(i64) -> i64) -> i64 {
    positions
        .iter()
        .map(|&position| cost((position - target).abs()))
        .sum()
}

/// Cheapest alignment cost over every candidate target position between the
/// leftmost and rightmost crab.
fn min_alignment_cost(positions: &[i64], cost: impl Fn(i64) -> i64) -> Option<i64> {
    let &min = positions.iter().min()?;
    let &max = positions.iter().max()?;
    (min..=max)
        .map(|target| alignment_cost(positions, target, &cost))
        .min()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_alignment_cost(&shared.positions, |distance| distance)
            .map(|cost| cost.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no crab positions").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        min_alignment_cost(&shared.positions, |distance| {
            distance * (distance + 1) / 2
        })
        .map(|cost| cost.to_string())
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("no crab positions").into()))
    }
}
