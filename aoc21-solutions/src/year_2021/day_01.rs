//! Day 1: Sonar sweep depth report

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 1, tags = ["sonar"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    depths: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<u32>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|depths| SharedData { depths })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn count_increases(values: &[u32]) -> usize {
    values.windows(2).filter(|pair| pair[1] > pair[0]).count()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(&shared.depths).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let window_sums: Vec<u32> = shared
            .depths
            .windows(3)
            .map(|window| window.iter().sum())
            .collect();
        Ok(count_increases(&window_sums).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263";

    #[test]
    fn sample_part_1() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!("7", <Solver as PartSolver<1>>::solve(&mut shared).unwrap());
    }

    #[test]
    fn sample_part_2() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!("5", <Solver as PartSolver<2>>::solve(&mut shared).unwrap());
    }

    #[test]
    fn malformed_line_is_reported_with_line_number() {
        let err = Solver::parse("199\nabc\n208").unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err}");
    }
}
