//! Day 8: Seven-segment display deduction
//!
//! Each entry shows the ten digit patterns of a scrambled display and a
//! four-digit output. Digits 1, 4, 7 and 8 are recognizable by segment count
//! alone; the rest are pinned down by set relationships between patterns and
//! a few individually derived segments.

use anyhow::anyhow;
use aoc21_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 8, tags = ["deduction"])]
pub struct Solver;

/// A set of active signal wires `a..=g`, packed into the low seven bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalSet(u8);

impl SignalSet {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut wires = 0u8;
        for c in text.chars() {
            match c {
                'a'..='g' => wires |= 1 << (c as u8 - b'a'),
                other => return Err(anyhow!("invalid signal wire {:?}", other)),
            }
        }
        Ok(SignalSet(wires))
    }

    /// Number of active wires.
    pub fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every wire of `other` is also active here.
    pub fn contains(self, other: SignalSet) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for SignalSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for SignalSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitXor for SignalSet {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

/// Set difference.
impl Sub for SignalSet {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 & !rhs.0)
    }
}

/// One display entry: ten observed digit patterns and the four-digit output.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    patterns: [SignalSet; 10],
    outputs: [SignalSet; 4],
}

fn parse_entry(line: &str) -> anyhow::Result<Entry> {
    let (patterns, outputs) = line
        .split_once(" | ")
        .ok_or_else(|| anyhow!("expected \"<patterns> | <outputs>\", got {:?}", line))?;
    Ok(Entry {
        patterns: parse_sets(patterns)?,
        outputs: parse_sets(outputs)?,
    })
}

fn parse_sets<const N: usize>(text: &str) -> anyhow::Result<[SignalSet; N]> {
    let sets = text
        .split_whitespace()
        .map(SignalSet::parse)
        .collect::<Result<Vec<_>, _>>()?;
    <[SignalSet; N]>::try_from(sets)
        .map_err(|sets| anyhow!("expected {} patterns, got {}", N, sets.len()))
}

#[derive(Debug)]
pub struct SharedData {
    entries: Vec<Entry>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_entry(line.trim()).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|entries| SharedData { entries })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn find_pattern(
    patterns: &[SignalSet; 10],
    digit: u8,
    pred: impl Fn(SignalSet) -> bool,
) -> anyhow::Result<SignalSet> {
    patterns
        .iter()
        .copied()
        .find(|&pattern| pred(pattern))
        .ok_or_else(|| anyhow!("no pattern matches digit {}", digit))
}

/// Digit patterns indexed by the digit they display.
pub struct Decoder {
    digits: [SignalSet; 10],
}

impl Decoder {
    /// Recover the wire assignment from the ten observed patterns.
    pub fn deduce(patterns: &[SignalSet; 10]) -> anyhow::Result<Self> {
        // 1, 7, 4 and 8 have unique segment counts.
        let one = find_pattern(patterns, 1, |p| p.len() == 2)?;
        let seven = find_pattern(patterns, 7, |p| p.len() == 3)?;
        let four = find_pattern(patterns, 4, |p| p.len() == 4)?;
        let eight = find_pattern(patterns, 8, |p| p.len() == 7)?;
        // 6 is the only six-segment digit sharing a single wire with 1;
        // 3 is the only five-segment digit containing both wires of 1.
        let six = find_pattern(patterns, 6, |p| p.len() == 6 && (p & one).len() == 1)?;
        let three = find_pattern(patterns, 3, |p| p.len() == 5 && p.contains(one))?;
        // Individual segments recoverable from the digits known so far.
        let top_right = one - six;
        let top_left = (three | four) - three;
        let middle = four - top_left - one;
        let two = find_pattern(patterns, 2, |p| p.len() == 5 && p == (six ^ four) | middle)?;
        let five = find_pattern(patterns, 5, |p| {
            p.len() == 5 && p == (three - top_right) | top_left
        })?;
        let zero = find_pattern(patterns, 0, |p| p.len() == 6 && p == eight - middle)?;
        let nine = find_pattern(patterns, 9, |p| p.len() == 6 && p == three | top_left)?;

        Ok(Self {
            digits: [zero, one, two, three, four, five, six, seven, eight, nine],
        })
    }

    fn digit(&self, pattern: SignalSet) -> Option<u64> {
        self.digits
            .iter()
            .position(|&digit| digit == pattern)
            .map(|digit| digit as u64)
    }

    /// Decode a four-digit output reading.
    pub fn decode(&self, outputs: &[SignalSet; 4]) -> anyhow::Result<u64> {
        outputs.iter().try_fold(0u64, |acc, &output| {
            self.digit(output)
                .map(|digit| acc * 10 + digit)
                .ok_or_else(|| anyhow!("output pattern {:?} matches no digit", output))
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Outputs with the segment counts unique to 1, 7, 4 or 8.
        let count = shared
            .entries
            .iter()
            .flat_map(|entry| entry.outputs.iter())
            .filter(|output| matches!(output.len(), 2 | 3 | 4 | 7))
            .count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .entries
            .iter()
            .try_fold(0u64, |acc, entry| {
                let decoder = Decoder::deduce(&entry.patterns)?;
                Ok(acc + decoder.decode(&entry.outputs)?)
            })
            .map(|sum: u64| sum.to_string())
            .map_err(|e: anyhow::Error| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce";

    const SINGLE: &str =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagbd ab | cdfeb fcadb cdfeb cdbaf";

    #[test]
    fn signal_set_algebra() {
        let ab = SignalSet::parse("ab").unwrap();
        let bc = SignalSet::parse("cb").unwrap();
        assert_eq!(SignalSet::parse("abc").unwrap(), ab | bc);
        assert_eq!(SignalSet::parse("b").unwrap(), ab & bc);
        assert_eq!(SignalSet::parse("ac").unwrap(), ab ^ bc);
        assert_eq!(SignalSet::parse("a").unwrap(), ab - bc);
        assert!(ab.contains(SignalSet::parse("a").unwrap()));
        assert!(!ab.contains(bc));
        assert_eq!(2, ab.len());
    }

    #[test]
    fn parse_order_does_not_matter() {
        assert_eq!(
            SignalSet::parse("abcdefg").unwrap(),
            SignalSet::parse("gfedcba").unwrap()
        );
    }

    #[test]
    fn rejects_bad_wires() {
        assert!(SignalSet::parse("abz").is_err());
        assert!(Solver::parse("ab cd | ef").is_err());
    }

    #[test]
    fn deduces_single_entry() {
        let shared = Solver::parse(SINGLE).unwrap();
        let entry = &shared.entries[0];
        let decoder = Decoder::deduce(&entry.patterns).unwrap();
        assert_eq!(5353, decoder.decode(&entry.outputs).unwrap());
    }

    #[test]
    fn sample_part_1() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!("26", <Solver as PartSolver<1>>::solve(&mut shared).unwrap());
    }

    #[test]
    fn sample_part_2() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!("61229", <Solver as PartSolver<2>>::solve(&mut shared).unwrap());
    }
}
