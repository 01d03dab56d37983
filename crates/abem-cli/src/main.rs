//! abem CLI: the `abem` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let abem = support::load_abem_or_exit(cli.config.as_deref());

    match cli.command {
        Commands::Class {
            block,
            elem,
            mods,
            mods_json,
            json,
        } => commands::class::run(
            &abem,
            commands::class::Args {
                block,
                elem,
                mods,
                mods_json,
                json,
            },
        ),

        Commands::Call { args, json } => commands::call::run(&abem, &args, json),

        Commands::Join { values, json } => commands::join::run(&abem, &values, json),

        Commands::Normalize { tokens, json } => commands::normalize::run(&tokens, json),
    }
}
