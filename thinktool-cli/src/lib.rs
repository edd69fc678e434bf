//! thinktool CLI library
//!
//! Command-line definitions, the stdio server routine, logging setup and
//! exit codes for the `thinktool` binary.

/// Command-line interface definitions and argument parsing
pub mod cli;
/// Error type carrying an exit code
pub mod error;
/// Exit codes used by the CLI application
pub mod exit_codes;
/// Subscriber setup for diagnostic logs
pub mod logging;
/// The stdio MCP server routine
pub mod serve;
/// The `tools` command
pub mod tools;
