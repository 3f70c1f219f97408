//! CLI module for anitui.
//!
//! Called early in `main()`, before the terminal is switched to TUI mode:
//!
//! ```ignore
//! use anitui::cli::{parse_args, run_cli_command};
//!
//! if run_cli_command(parse_args(std::env::args())) {
//!     return Ok(());
//! }
//! // continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{help_text, version_text, VERSION};

/// Run a CLI command if applicable.
///
/// Returns `true` when the command was handled and the process should exit
/// without starting the TUI.
pub fn run_cli_command(command: CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            true
        }
        CliCommand::Help => {
            print!("{}", help_text());
            true
        }
        CliCommand::RunTui => false,
    }
}
