use clap::{Parser, Subcommand};

/// Asks for confirmation before protected config files are modified.
///
/// Without a subcommand, reads a pre-tool-use hook payload from stdin and
/// prints an advisory to stdout when the target file is protected.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<GuardCommand>,
}

#[derive(Subcommand, Debug)]
pub enum GuardCommand {
    /// Evaluate a file path directly and print the advisory, if any
    Check {
        /// Path of the file that would be modified
        path: String,
    },
    /// Print the protection policy
    Policy,
}
