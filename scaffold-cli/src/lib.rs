//! # gh-scaffold CLI Library
//!
//! Command-line front end for gh-scaffold: argument parsing, client
//! construction from configuration, and the orchestrator that creates the
//! GitHub repository and writes its settings file.

pub mod cli;
pub mod clients;
pub mod scaffold;

pub use scaffold::{ScaffoldOptions, ScaffoldResult, scaffold};
