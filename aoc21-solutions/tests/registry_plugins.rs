//! Plugin registration of the solution crate's solvers.

use aoc21_solutions as _;
use aoc21_solver::{DynSolver, RegistryBuilder, SolveError, SolverError};

#[test]
fn all_days_register() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    assert_eq!(10, registry.len());
    for day in 1..=10 {
        let info = registry.get_info(2021, day).expect("registered day");
        assert_eq!(2, info.parts);
    }
    assert!(!registry.contains(2021, 11));
}

#[test]
fn tag_filter_selects_subset() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"geometry"))
        .unwrap()
        .build();
    assert_eq!(1, registry.len());
    assert!(registry.contains(2021, 5));
}

#[test]
fn solves_through_registry() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let input = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263";
    let mut solver = registry.create_solver(2021, 1, input).unwrap();
    assert_eq!(2, solver.parts());
    assert_eq!("7", solver.solve(1).unwrap().answer);
    assert_eq!("5", solver.solve(2).unwrap().answer);
    assert!(matches!(
        solver.solve(3),
        Err(SolveError::PartOutOfRange(3))
    ));
}

#[test]
fn missing_solver_is_reported() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    assert!(matches!(
        registry.create_solver(2021, 25, ""),
        Err(SolverError::NotFound(2021, 25))
    ));
}

#[test]
fn parse_failure_surfaces_through_factory() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();
    assert!(matches!(
        registry.create_solver(2021, 1, "not a depth"),
        Err(SolverError::ParseError(_))
    ));
}
