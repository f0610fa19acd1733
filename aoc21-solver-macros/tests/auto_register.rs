//! The AutoRegisterSolver derive submits plugins discoverable by the registry.

use aoc21_solver::{AocParser, DynSolver, ParseError, PartSolver, RegistryBuilder, SolveError};
use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2021, day = 24, tags = ["test", "registered"])]
struct Tagged;

impl AocParser for Tagged {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.len())
    }
}

impl PartSolver<1> for Tagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc(year = 2021, day = 25)]
#[aoc_solver(max_parts = 1)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = ();

    fn parse(_: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(_: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("done".to_string())
    }
}

#[test]
fn register_all_plugins_finds_both() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    assert!(registry.contains(2021, 24));
    assert!(registry.contains(2021, 25));

    let mut solver = registry.create_solver(2021, 24, "abcd").unwrap();
    assert_eq!("4", solver.solve(1).unwrap().answer);
}

#[test]
fn tag_filter_applies() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"registered"))
        .unwrap()
        .build();
    assert!(registry.contains(2021, 24));
    assert!(!registry.contains(2021, 25));
}

#[test]
fn year_day_metadata_is_recorded() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    let info = registry.get_info(2021, 24).unwrap();
    assert_eq!(2021, info.year);
    assert_eq!(24, info.day);
    assert_eq!(1, info.parts);
}
