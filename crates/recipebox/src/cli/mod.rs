//! Command-line interface for recipebox.
//!
//! This module provides the CLI structure for the `recipes` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::Verbosity;

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, EditCommand, ListCommand, OutputFormat,
    RecipeArgs, ShowCommand, StatsCommand,
};

/// recipes - Keep your recipe catalog at hand
///
/// Add, edit, delete, search and filter recipes stored in a local database.
#[derive(Debug, Parser)]
#[command(name = "recipes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new recipe
    Add(AddCommand),

    /// Change fields of an existing recipe
    Edit(EditCommand),

    /// Delete a recipe
    Delete(DeleteCommand),

    /// Show a single recipe
    Show(ShowCommand),

    /// List recipes, optionally searched and filtered
    List(ListCommand),

    /// List the cuisines in use
    Cuisines,

    /// Show catalog statistics
    Stats(StatsCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}
