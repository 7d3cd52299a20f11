//! # Ignite CLI
//!
//! Argument parsing, subcommands and terminal output for the `ignite` binary.

pub mod commands;
pub mod terminal;
