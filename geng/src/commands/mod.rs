mod completions;
mod interface;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use interface::InterfaceCommand;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for geng_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(miette::Report::new(*e)),
        }
    }
}

impl<T> UnwrapOrExit<T> for geng_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(miette::Report::new(*e)),
        }
    }
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{report:?}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "geng")]
#[command(version)]
#[command(about = "Generate Go interfaces from pointer-receiver methods")]
pub(crate) struct Cli {
    /// Log debug events to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Interface(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate <package>_interface.go files for every package in a directory tree
    #[command(visible_alias = "i")]
    Interface(InterfaceCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
