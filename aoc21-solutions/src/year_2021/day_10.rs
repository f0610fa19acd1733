//! Day 10: Navigation subsystem syntax scoring

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 10, tags = ["syntax"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    Round,
    Square,
    Curly,
    Angle,
}

impl Bracket {
    fn corrupt_score(self) -> u64 {
        match self {
            Bracket::Round => 3,
            Bracket::Square => 57,
            Bracket::Curly => 1197,
            Bracket::Angle => 25137,
        }
    }

    fn complete_score(self) -> u64 {
        match self {
            Bracket::Round => 1,
            Bracket::Square => 2,
            Bracket::Curly => 3,
            Bracket::Angle => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Open(Bracket),
    Close(Bracket),
}

fn parse_token(c: char) -> anyhow::Result<Token> {
    match c {
        '(' => Ok(Token::Open(Bracket::Round)),
        '[' => Ok(Token::Open(Bracket::Square)),
        '{' => Ok(Token::Open(Bracket::Curly)),
        '<' => Ok(Token::Open(Bracket::Angle)),
        ')' => Ok(Token::Close(Bracket::Round)),
        ']' => Ok(Token::Close(Bracket::Square)),
        '}' => Ok(Token::Close(Bracket::Curly)),
        '>' => Ok(Token::Close(Bracket::Angle)),
        other => Err(anyhow!("invalid chunk character {:?}", other)),
    }
}

/// Outcome of scanning one line of chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCheck {
    /// Stopped at the first closer that doesn't match its opener.
    Corrupt { score: u64 },
    /// Ran out of input; the score completes the unclosed openers
    /// (zero when the line was already balanced).
    Incomplete { score: u64 },
}

pub fn check_line(tokens: &[Token]) -> LineCheck {
    let mut open_stack = Vec::new();
    for &token in tokens {
        match token {
            Token::Open(bracket) => open_stack.push(bracket),
            Token::Close(bracket) => match open_stack.last() {
                Some(&open) if open == bracket => {
                    open_stack.pop();
                }
                Some(_) => {
                    return LineCheck::Corrupt {
                        score: bracket.corrupt_score(),
                    };
                }
                // A closer with nothing open is skipped.
                None => {}
            },
        }
    }
    let score = open_stack
        .iter()
        .rev()
        .fold(0, |acc, bracket| acc * 5 + bracket.complete_score());
    LineCheck::Incomplete { score }
}

#[derive(Debug)]
pub struct SharedData {
    lines: Vec<Vec<Token>>,
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
                    .chars()
                    .map(parse_token)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| SharedData { lines })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .lines
            .iter()
            .filter_map(|line| match check_line(line) {
                LineCheck::Corrupt { score } => Some(score),
                LineCheck::Incomplete { .. } => None,
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scores: Vec<u64> = shared
            .lines
            .iter()
            .filter_map(|line| match check_line(line) {
                LineCheck::Incomplete { score } if score > 0 => Some(score),
                _ => None,
            })
            .collect();
        if scores.is_empty() {
            return Err(SolveError::SolveFailed(
                anyhow!("no incomplete lines to score").into(),
            ));
        }
        scores.sort_unstable();
        Ok(scores[scores.len() / 2].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]";

    #[test]
    fn detects_corruption() {
        let shared = Solver::parse("{([(<{}[<>[]}>{[]{[(<()>").unwrap();
        assert_eq!(
            LineCheck::Corrupt { score: 1197 },
            check_line(&shared.lines[0])
        );
    }

    #[test]
    fn scores_completion() {
        let shared = Solver::parse("[({(<(())[]>[[{[]{<()<>>").unwrap();
        assert_eq!(
            LineCheck::Incomplete { score: 288957 },
            check_line(&shared.lines[0])
        );
    }

    #[test]
    fn balanced_line_scores_zero() {
        let shared = Solver::parse("([<>{}])").unwrap();
        assert_eq!(LineCheck::Incomplete { score: 0 }, check_line(&shared.lines[0]));
    }

    #[test]
    fn sample_part_1() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!("26397", <Solver as PartSolver<1>>::solve(&mut shared).unwrap());
    }

    #[test]
    fn sample_part_2() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!("288957", <Solver as PartSolver<2>>::solve(&mut shared).unwrap());
    }

    #[test]
    fn rejects_non_bracket_characters() {
        assert!(Solver::parse("([)]x").is_err());
    }
}
