//! Advent of Code 2021 puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions, organized by year.
//! Each solution uses the `AutoRegisterSolver` derive macro for automatic
//! plugin registration with the solver framework; linking this crate is
//! enough to make every day visible to `RegistryBuilder::register_all_plugins`.

pub mod year_2021;
