use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::io;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "thinktool")]
#[command(version)]
#[command(about = "An MCP server that gives models a scratchpad for structured thinking")]
#[command(long_about = "
thinktool is an MCP (Model Context Protocol) server that lets a model think
out loud and keep tagged thoughts in memory for the rest of a session.
Nothing is persisted: every thought is gone when the server exits.

Example usage:
  thinktool serve     # Run as MCP server over stdio
  thinktool tools     # Show the tools the server exposes
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs thinktool as an MCP server on stdin/stdout. This is the default mode
when stdin is not a terminal. The server exits when the client closes stdin
or on Ctrl-C.

Logs go to stderr, or to the file named by THINKTOOL_LOG_FILE.
Input limits are read from THINKTOOL_MAX_CONTENT_LENGTH, THINKTOOL_MAX_TAGS
and THINKTOOL_MAX_TAG_LENGTH.

Example:
  thinktool serve
")]
    Serve,
    /// List the tools exposed by the server
    #[command(long_about = "
Prints every tool the server registers with its description and required
arguments, without starting a server.

Output formats:
  table  - Formatted table (default)
  json   - JSON output for scripting

Examples:
  thinktool tools
  thinktool tools --format json
")]
    Tools {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    /// Whether stdin is attached to a terminal rather than a client pipe
    pub fn stdin_is_tty() -> bool {
        io::stdin().is_terminal()
    }
}
