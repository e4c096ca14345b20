//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::recipe::RecipeFields;

/// Recipe contents shared by `add` and `edit`.
#[derive(Debug, Clone, Args)]
pub struct RecipeArgs {
    /// Recipe title (required)
    #[arg(short, long)]
    pub title: String,

    /// Ingredients, free-form (required)
    #[arg(short, long)]
    pub ingredients: String,

    /// Preparation instructions
    #[arg(short = 'n', long, default_value = "")]
    pub instructions: String,

    /// Cuisine, e.g. "Italian"
    #[arg(short = 'k', long, default_value = "")]
    pub cuisine: String,
}

impl From<RecipeArgs> for RecipeFields {
    fn from(args: RecipeArgs) -> Self {
        Self::new(args.title, args.ingredients, args.instructions, args.cuisine)
    }
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Recipe contents
    #[command(flatten)]
    pub recipe: RecipeArgs,
}

/// Edit command arguments.
///
/// Fields left out keep their current value.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// ID of the recipe to edit
    pub id: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New ingredients
    #[arg(short, long)]
    pub ingredients: Option<String>,

    /// New instructions
    #[arg(short = 'n', long)]
    pub instructions: Option<String>,

    /// New cuisine (pass "" to clear)
    #[arg(short = 'k', long)]
    pub cuisine: Option<String>,
}

impl EditCommand {
    /// Overlay the given values onto a recipe's current fields.
    #[must_use]
    pub fn merge_into(self, current: RecipeFields) -> RecipeFields {
        RecipeFields {
            title: self.title.unwrap_or(current.title),
            ingredients: self.ingredients.unwrap_or(current.ingredients),
            instructions: self.instructions.unwrap_or(current.instructions),
            cuisine: self.cuisine.unwrap_or(current.cuisine),
        }
    }
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// ID of the recipe to delete
    pub id: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// ID of the recipe to show
    pub id: String,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only recipes whose title or ingredients contain this text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only recipes of this cuisine (exact, case-insensitive)
    #[arg(short = 'k', long, default_value = "")]
    pub cuisine: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One card per recipe
    #[default]
    Plain,
    /// One row per recipe
    Table,
    /// JSON array
    Json,
}
