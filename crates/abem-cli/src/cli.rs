use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "abem",
    about = "abem: BEM class names with prefixed modifiers",
    version
)]
pub struct Cli {
    /// Conventions TOML (defaults to ./abem.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a class name from a block, an optional element and modifiers
    Class {
        /// Block name (may already carry an element, e.g. `card__title`)
        block: String,

        /// Element name
        #[arg(long)]
        elem: Option<String>,

        /// Modifier name (repeatable, kept in order)
        #[arg(long = "mod")]
        mods: Vec<String>,

        /// Modifiers as a JSON object of flags or an array of names
        #[arg(long, conflicts_with = "mods")]
        mods_json: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Call the builder with loosely typed arguments (JSON, or bare strings)
    Call {
        /// Up to three arguments: block, element and/or modifiers
        args: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Space-join the truthy values (JSON, or bare strings)
    Join {
        values: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Normalize modifier names the way modifier classes spell them
    Normalize {
        /// Tokens to normalize; put `--` before tokens that start with `-`
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
