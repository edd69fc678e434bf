use std::process;

use clap::CommandFactory;
use thinktool_cli::cli::{Cli, Commands};
use thinktool_cli::error::handle_cli_result;
use thinktool_cli::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};
use thinktool_cli::{logging, serve, tools};
use tracing::Level;

#[tokio::main]
async fn main() {
    let cli = Cli::parse_args();

    // A piped stdin means an MCP client launched us without arguments
    let command = match cli.command {
        Some(command) => command,
        None if !Cli::stdin_is_tty() => Commands::Serve,
        None => {
            let code = match Cli::command().print_help() {
                Ok(()) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("Failed to print help: {e}");
                    EXIT_ERROR
                }
            };
            process::exit(code);
        }
    };

    let log_level = if cli.quiet {
        Level::ERROR
    } else if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::TRACE
    } else {
        Level::INFO
    };
    logging::init_logging(log_level, logging::log_file_from_env());

    let exit_code = match command {
        Commands::Serve => {
            tracing::debug!("Starting MCP server");
            handle_cli_result(serve::run_server().await)
        }
        Commands::Tools { format } => handle_cli_result(tools::run_tools_command(format)),
    };

    process::exit(exit_code);
}
