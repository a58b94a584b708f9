//! Docs authoring - editor commands for Markdown/YAML documentation
//!
//! Normalizes single-valued metadata and inserts table-of-contents entries
//! from the command line.

use clap::Parser;

use docs_authoring::cli::{Cli, Commands};
use docs_authoring::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Cleanup(args) => commands::cleanup::run(cli.workspace, args),
        Commands::Toc(args) => commands::toc::run(cli.workspace, args),
        Commands::Templates(args) => commands::templates::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        if e.is_silent() {
            tracing::debug!("{e}");
            return;
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
