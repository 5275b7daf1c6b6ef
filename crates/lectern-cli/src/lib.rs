//! Lectern CLI library
//!
//! Argument parsing, configuration overrides, logging setup and the
//! subcommand implementations behind the `lectern` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
