//! Day 5: Hydrothermal vent lines

pub mod geometry;


use anyhow::{Context, anyhow};
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};
use geometry::{Point, Segment, dedupe_points};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 5, tags = ["geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    segments: Vec<Segment>,
}

/// Parse a `"x1,y1 -> x2,y2"` vent line.
pub fn parse_segment(line: &str) -> anyhow::Result<Segment> {
    let (from, to) = line
        .split_once(" -> ")
        .ok_or_else(|| anyhow!("expected \"x1,y1 -> x2,y2\", got {:?}", line))?;
    Ok(Segment::new(parse_point(from)?, parse_point(to)?)?)
}

fn parse_point(text: &str) -> anyhow::Result<Point> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| anyhow!("expected \"x,y\", got {:?}", text))?;
    let x = x
        .trim()
        .parse()
        .with_context(|| format!("x coordinate in {:?}", text))?;
    let y = y
        .trim()
        .parse()
        .with_context(|| format!("y coordinate in {:?}", text))?;
    Ok(Point { x, y })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_segment(line.trim()).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|segments| SharedData { segments })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// Distinct points covered by at least two of the given segments.
fn overlap_points(segments: &[Segment]) -> Vec<Point> {
    let mut crossings = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        for other in &segments[i + 1..] {
            crossings.extend(segment.intersections(other));
        }
    }
    dedupe_points(crossings)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let straights: Vec<Segment> = shared
            .segments
            .iter()
            .filter(|segment| segment.is_axis_aligned())
            .copied()
            .collect();
        Ok(overlap_points(&straights).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(overlap_points(&shared.segments).len().to_string())
    }
}
