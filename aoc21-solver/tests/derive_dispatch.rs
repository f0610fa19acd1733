//! Dispatch behavior of the `AocSolver` derive macro.

use aoc21_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(2, <TestSolver as Solver>::PARTS);
}

#[test]
fn invalid_part_returns_not_implemented() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();
    for part in [0u8, 3, 200] {
        match TestSolver::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => assert_eq!(part, p),
            other => panic!("expected PartNotImplemented, got {:?}", other),
        }
    }
}

#[test]
fn checked_range_rejects_out_of_range_parts() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();
    assert!(matches!(
        TestSolver::solve_part_checked_range(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
    assert_eq!(
        "6",
        TestSolver::solve_part_checked_range(&mut shared, 1).unwrap()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any valid part, `Solver::solve_part` agrees with calling the
    /// corresponding `PartSolver` impl directly.
    #[test]
    fn solve_part_dispatches_to_correct_part_solver(
        numbers in prop::collection::vec(1i32..10, 1..5),
        part in 1u8..=2
    ) {
        let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        let mut shared1 = TestSolver::parse(&input).unwrap();
        let mut shared2 = TestSolver::parse(&input).unwrap();

        let dispatched = TestSolver::solve_part(&mut shared1, part);
        let direct = match part {
            1 => <TestSolver as PartSolver<1>>::solve(&mut shared2),
            2 => <TestSolver as PartSolver<2>>::solve(&mut shared2),
            _ => unreachable!(),
        };

        prop_assert_eq!(dispatched.unwrap(), direct.unwrap());
    }
}
