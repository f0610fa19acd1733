//! Day 2: Submarine dive commands

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 2, tags = ["navigation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let (name, scale) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected \"<command> <scale>\", got {:?}", line))?;
    let scale: i64 = scale.trim().parse()?;
    match name {
        "forward" => Ok(Command::Forward(scale)),
        "down" => Ok(Command::Down(scale)),
        "up" => Ok(Command::Up(scale)),
        other => Err(anyhow!("unknown command {:?}", other)),
    }
}

#[derive(Debug)]
pub struct SharedData {
    commands: Vec<Command>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_command(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|commands| SharedData { commands })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth) =
            shared
                .commands
                .iter()
                .fold((0i64, 0i64), |(horizontal, depth), command| match command {
                    Command::Forward(scale) => (horizontal + scale, depth),
                    Command::Down(scale) => (horizontal, depth + scale),
                    Command::Up(scale) => (horizontal, depth - scale),
                });
        Ok((horizontal * depth).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (horizontal, depth, _aim) = shared.commands.iter().fold(
            (0i64, 0i64, 0i64),
            |(horizontal, depth, aim), command| match command {
                Command::Forward(scale) => (horizontal + scale, depth + aim * scale, aim),
                Command::Down(scale) => (horizontal, depth, aim + scale),
                Command::Up(scale) => (horizontal, depth, aim - scale),
            },
        );
        Ok((horizontal * depth).to_string())
    }
}
