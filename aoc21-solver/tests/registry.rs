//! Registry construction, lookup and metadata.

use aoc21_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, RegistrationError, RegistryBuilder,
    SolveError, SolverError, register_solver,
};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct CountSolver;

impl AocParser for CountSolver {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for CountSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

impl PartSolver<2> for CountSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok((*shared * 2).to_string())
    }
}

/// Borrows the input instead of owning a transformation of it.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct EchoSolver;

impl AocParser for EchoSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for EchoSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[test]
fn registers_and_creates_solvers() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, CountSolver, 2021, 1);
    register_solver!(builder, EchoSolver, 2021, 2);
    let registry = builder.build();

    assert_eq!(2, registry.len());

    let mut solver = registry.create_solver(2021, 1, "a\nb\nc").unwrap();
    assert_eq!("3", solver.solve(1).unwrap().answer);
    assert_eq!("6", solver.solve(2).unwrap().answer);

    let mut solver = registry.create_solver(2021, 2, "  hello  ").unwrap();
    assert_eq!("hello", solver.solve(1).unwrap().answer);
}

#[test]
fn duplicate_registration_is_rejected() {
    let builder = RegistryBuilder::new()
        .register(2021, 1, 2, |_input: &str| {
            Err(ParseError::Other("unused".to_string()))
        })
        .unwrap();
    let result = builder.register(2021, 1, 2, |_input: &str| {
        Err(ParseError::Other("unused".to_string()))
    });
    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2021, 1))
    ));
}

#[test]
fn unknown_year_day_is_not_found() {
    let registry = RegistryBuilder::new().build();
    assert!(matches!(
        registry.create_solver(2021, 1, ""),
        Err(SolverError::NotFound(2021, 1))
    ));
    assert!(registry.is_empty());
}

#[test]
fn iter_info_reports_metadata() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, CountSolver, 2021, 1);
    register_solver!(builder, EchoSolver, 2021, 2);
    let registry = builder.build();

    let mut info: Vec<_> = registry.iter_info().collect();
    info.sort_by_key(|i| (i.year, i.day));
    assert_eq!(2, info.len());
    assert_eq!((2021, 1, 2), (info[0].year, info[0].day, info[0].parts));
    assert_eq!((2021, 2, 1), (info[1].year, info[1].day, info[1].parts));

    assert_eq!(Some(info[0]), registry.get_info(2021, 1));
    assert_eq!(None, registry.get_info(2021, 3));
}

#[test]
fn solver_instance_reports_parse_timing() {
    let mut builder = RegistryBuilder::new();
    register_solver!(builder, CountSolver, 2021, 1);
    let registry = builder.build();

    let solver = registry.create_solver(2021, 1, "x\ny").unwrap();
    assert_eq!(2021, solver.year());
    assert_eq!(1, solver.day());
    assert_eq!(2, solver.parts());
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
}
