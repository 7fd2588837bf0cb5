//! Sentipool CLI library.
//!
//! This library provides the operator tooling for the sentence pool:
//! seeding sentences, inspecting annotation progress, and exporting
//! resolved labels as training data.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::{Cli, Command};
pub use error::{CliError, Result};
