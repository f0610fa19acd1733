//! Day 9: Smoke basins in a cave height map

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["flood-fill"])]
pub struct Solver;

/// Peak height; smoke never settles here and basins stop at it.
const PEAK: u8 = 9;

/// Rectangular grid of digit heights.
#[derive(Debug)]
pub struct HeightMap {
    heights: Vec<Vec<u8>>,
}

impl HeightMap {
    fn rows(&self) -> usize {
        self.heights.len()
    }

    fn cols(&self) -> usize {
        self.heights.first().map_or(0, Vec::len)
    }

    fn height(&self, row: usize, col: usize) -> u8 {
        self.heights[row][col]
    }

    fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut adjacent = Vec::with_capacity(4);
        if row > 0 {
            adjacent.push((row - 1, col));
        }
        if col + 1 < self.cols() {
            adjacent.push((row, col + 1));
        }
        if row + 1 < self.rows() {
            adjacent.push((row + 1, col));
        }
        if col > 0 {
            adjacent.push((row, col - 1));
        }
        adjacent
    }

    /// Cells strictly lower than every adjacent cell.
    pub fn low_points(&self) -> Vec<(usize, usize)> {
        let (rows, cols) = (self.rows(), self.cols());
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&(row, col)| {
                let height = self.height(row, col);
                self.neighbors(row, col)
                    .into_iter()
                    .all(|(r, c)| self.height(r, c) > height)
            })
            .collect()
    }

    pub fn risk_level(&self, (row, col): (usize, usize)) -> u32 {
        u32::from(self.height(row, col)) + 1
    }

    /// Size of the basin draining into the given low point: flood fill
    /// outward, stopping at peak-height cells.
    pub fn basin_size(&self, low_point: (usize, usize)) -> usize {
        let mut seen = vec![vec![false; self.cols()]; self.rows()];
        let mut frontier = VecDeque::from([low_point]);
        let mut size = 0;
        while let Some((row, col)) = frontier.pop_front() {
            if seen[row][col] || self.height(row, col) == PEAK {
                continue;
            }
            seen[row][col] = true;
            size += 1;
            frontier.extend(self.neighbors(row, col));
        }
        size
    }
}

#[derive(Debug)]
pub struct SharedData {
    map: HeightMap,
    low_points: Option<Vec<(usize, usize)>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let heights = input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                line.trim()
                    .chars()
                    .map(|c| {
                        c.to_digit(10)
                            .map(|d| d as u8)
                            .ok_or_else(|| anyhow!("(line {}) bad height {:?}", line_idx + 1, c))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        if heights.is_empty() {
            return Err(ParseError::MissingData("height map".to_string()));
        }
        let cols = heights[0].len();
        if heights.iter().any(|row| row.len() != cols) {
            return Err(ParseError::InvalidFormat(
                "height map rows have differing widths".to_string(),
            ));
        }

        Ok(SharedData {
            map: HeightMap { heights },
            low_points: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &shared.map;
        let low_points = shared.low_points.get_or_insert_with(|| map.low_points());
        let total_risk: u32 = low_points.iter().map(|&p| map.risk_level(p)).sum();
        Ok(total_risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &shared.map;
        let low_points = shared.low_points.get_or_insert_with(|| map.low_points());
        let mut basin_sizes: Vec<usize> = low_points.iter().map(|&p| map.basin_size(p)).collect();
        basin_sizes.sort_unstable();
        let product: usize = basin_sizes.iter().rev().take(3).product();
        Ok(product.to_string())
    }
}
