//! Day 4: Squid bingo

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 4, tags = ["bingo"])]
pub struct Solver;

const BOARD_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Board {
    cells: [[u8; BOARD_SIZE]; BOARD_SIZE],
    marks: [[bool; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    fn new(cells: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self {
            cells,
            marks: [[false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Mark the first unmarked cell holding `value`. Returns whether a cell
    /// was newly marked.
    fn mark(&mut self, value: u8) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col] == value && !self.marks[row][col] {
                    self.marks[row][col] = true;
                    return true;
                }
            }
        }
        false
    }

    fn has_bingo(&self) -> bool {
        (0..BOARD_SIZE).any(|row| (0..BOARD_SIZE).all(|col| self.marks[row][col]))
            || (0..BOARD_SIZE).any(|col| (0..BOARD_SIZE).all(|row| self.marks[row][col]))
    }

    /// Sum of unmarked cells times the winning call.
    fn score(&self, last_call: u8) -> u32 {
        let unmarked: u32 = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| !self.marks[row][col])
            .map(|(row, col)| u32::from(self.cells[row][col]))
            .sum();
        unmarked * u32::from(last_call)
    }
}

#[derive(Debug)]
pub struct SharedData {
    calls: Vec<u8>,
    boards: Vec<Board>,
    winning_scores: Option<Vec<u32>>,
}

fn parse_row(line: &str) -> anyhow::Result<[u8; BOARD_SIZE]> {
    let cells = line
        .split_whitespace()
        .map(|cell| cell.parse::<u8>().map_err(anyhow::Error::from))
        .collect::<Result<Vec<_>, _>>()?;
    <[u8; BOARD_SIZE]>::try_from(cells)
        .map_err(|cells| anyhow!("expected {} cells per row, got {}", BOARD_SIZE, cells.len()))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim().lines();
        let calls = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("call sequence".to_string()))?
            .split(',')
            .map(|call| {
                call.trim()
                    .parse::<u8>()
                    .map_err(|e| ParseError::InvalidFormat(format!("bad call {:?}: {}", call, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rows = lines
            .filter(|line| !line.trim().is_empty())
            .map(parse_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if rows.is_empty() || rows.len() % BOARD_SIZE != 0 {
            return Err(ParseError::InvalidFormat(format!(
                "expected boards of {} rows, got {} rows total",
                BOARD_SIZE,
                rows.len()
            )));
        }
        let boards = rows
            .chunks(BOARD_SIZE)
            .map(|chunk| {
                Board::new(
                    <[[u8; BOARD_SIZE]; BOARD_SIZE]>::try_from(chunk.to_vec())
                        .expect("chunks are exactly BOARD_SIZE rows"),
                )
            })
            .collect();

        Ok(SharedData {
            calls,
            boards,
            winning_scores: None,
        })
    }
}

/// Replay the call sequence once, recording each board's score at the moment
/// it first wins. Both parts read from this.
fn winning_scores(shared: &mut SharedData) -> &[u32] {
    shared.winning_scores.get_or_insert_with(|| {
        let mut boards = shared.boards.clone();
        let mut scores = Vec::new();
        for &call in &shared.calls {
            for board in boards.iter_mut().filter(|board| !board.has_bingo()) {
                if board.mark(call) && board.has_bingo() {
                    scores.push(board.score(call));
                }
            }
        }
        scores
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winning_scores(shared)
            .first()
            .map(|score| score.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no board ever wins").into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        winning_scores(shared)
            .last()
            .map(|score| score.to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("no board ever wins").into()))
    }
}
