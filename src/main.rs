//! relprep - release preparation pipeline
//!
//! Assembles a package's long-form description from its readme, history, and
//! license documents, converts it to the publication format with an external
//! converter, and gates the package-index upload on the converted file being
//! committed and the release being explicitly confirmed.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod comments;
mod config;
mod confirm;
mod convert;
mod description;
mod error;
mod exec;
mod temp;
mod text;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // No subcommand means ordinary packaging; prep and publish are the
    // exceptional release-time modes.
    let command = cli.command.unwrap_or(Commands::Package);

    let result = match command {
        Commands::Prep => commands::prep::run(cli.workspace),
        Commands::Publish => commands::publish::run(cli.workspace),
        Commands::Package => commands::package::run(cli.workspace),
        Commands::Show(args) => commands::show::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
