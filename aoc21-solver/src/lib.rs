//! Advent of Code 2021 solver framework
//!
//! A trait-based framework for the daily puzzle solvers in this workspace.
//! Each day implements custom input parsing and one solver per puzzle part;
//! a registry collects the days so the CLI can look them up and run them.
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers ([`AocParser`],
//!   [`PartSolver`], [`Solver`])
//! - Type-safe parsing with an explicit error taxonomy
//! - Solver instances with parse and solve timing ([`SolverInstance`],
//!   [`DynSolver`])
//! - A registry for managing multiple solvers, fed either manually or
//!   through the inventory-based plugin system
//!
//! # Quick Example
//!
//! ```
//! use aoc21_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 1)]
//! struct Day0;
//!
//! impl AocParser for Day0 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day0 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! let mut shared = Day0::parse("1\n2\n3").unwrap();
//! assert_eq!(Day0::solve_part(&mut shared, 1).unwrap(), "6");
//! ```
//!
//! # Plugin registration
//!
//! Solvers annotated with `#[derive(AutoRegisterSolver)]` and an
//! `#[aoc(year = ..., day = ..., tags = [...])]` attribute submit themselves
//! to the [`SolverPlugin`] inventory; [`RegistryBuilder::register_all_plugins`]
//! collects them into a [`SolverRegistry`].

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc21_solver_macros::{AocSolver, AutoRegisterSolver};
