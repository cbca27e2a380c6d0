mod completions;
mod menu;
mod new;
mod web;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use hatch_core::Config;
use new::NewCommand;
use web::WebCommand;

/// Extension trait for exiting on core errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for hatch_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "hatch")]
#[command(version)]
#[command(about = "Scaffold actix-web services with an optional vite frontend")]
pub(crate) struct Cli {
    /// Path to hatch.toml with your defaults
    #[arg(long, global = true, default_value = "hatch.toml")]
    config: PathBuf,

    /// Log every step (overridden by HATCH_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Opens the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        if let Some(Commands::Completions(cmd)) = &self.command {
            return cmd.run();
        }

        let config = Config::load(&self.config).unwrap_or_exit();

        match &self.command {
            Some(Commands::New(cmd)) => cmd.run(&config),
            Some(Commands::Web(cmd)) => cmd.run(&config),
            Some(Commands::Completions(cmd)) => cmd.run(),
            None => menu::run(&config),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new backend project, optionally with a web frontend
    New(NewCommand),

    /// Add a web frontend to a project created by hatch
    Web(WebCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
