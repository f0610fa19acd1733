//! Day 6: Lanternfish population growth

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 6, tags = ["population"])]
pub struct Solver;

/// Spawn timer of a fish that just reproduced.
const RESET_TIMER: usize = 6;
/// Spawn timer of a newborn fish.
const NEWBORN_TIMER: usize = 8;

/// A school of lanternfish, counted per spawn timer rather than per fish.
///
/// Populations reach the trillions long before day 256; only the nine
/// per-timer counts are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FishSchool {
    timers: [u64; NEWBORN_TIMER + 1],
}

impl FishSchool {
    pub fn new(timers_seen: &[u8]) -> Self {
        let mut timers = [0u64; NEWBORN_TIMER + 1];
        for &timer in timers_seen {
            timers[timer as usize] += 1;
        }
        Self { timers }
    }

    /// Advance one day: timer-0 fish respawn at 6 and each produces a
    /// newborn at 8.
    pub fn tick(&mut self) {
        self.timers.rotate_left(1);
        self.timers[RESET_TIMER] += self.timers[NEWBORN_TIMER];
    }

    pub fn population_after(mut self, days: usize) -> u64 {
        for _ in 0..days {
            self.tick();
        }
        self.population()
    }

    pub fn population(&self) -> u64 {
        self.timers.iter().sum()
    }
}

#[derive(Debug)]
pub struct SharedData {
    school: FishSchool,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|timer| -> Result<u8, anyhow::Error> {
                let timer: u8 = timer.trim().parse()?;
                if timer as usize > NEWBORN_TIMER {
                    return Err(anyhow!("spawn timer {} out of range", timer));
                }
                Ok(timer)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|timers| SharedData {
                school: FishSchool::new(&timers),
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.school.population_after(80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.school.population_after(256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3,4,3,1,2";

    #[test]
    fn short_simulation() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(26, shared.school.population_after(18));
    }

    #[test]
    fn sample_part_1() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!("5934", <Solver as PartSolver<1>>::solve(&mut shared).unwrap());
    }

    #[test]
    fn sample_part_2() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            "26984457625",
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap()
        );
    }

    #[test]
    fn rejects_out_of_range_timers() {
        assert!(Solver::parse("1,9,3").is_err());
    }
}
