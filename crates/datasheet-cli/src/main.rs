//! Datasheet CLI - register models and render their datasheets.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};
use datasheet::{Catalog, FileRegistry};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    tracing::debug!(registry = %cli.registry.display(), "opening registry");
    let catalog = Catalog::new(FileRegistry::open(&cli.registry));

    let result = match cli.command {
        Commands::Register {
            name,
            path,
            framework,
            framework_version,
            description,
            tags,
            tags_file,
            no_digest,
        } => commands::register::run(
            commands::register::RegisterArgs {
                root: cli.registry.clone(),
                name,
                path,
                framework,
                framework_version,
                description,
                tags,
                tags_file,
                no_digest,
            },
            cli.verbose,
        ),

        Commands::Show {
            name,
            model_version,
            format,
            output,
            open,
        } => commands::show::run(&catalog, name, model_version, format, output, open),

        Commands::Tags {
            name,
            model_version,
            json,
        } => commands::tags::run(catalog.registry(), name, model_version, json),

        Commands::List { json } => commands::list::run(catalog.registry(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
