//! `recipes` - CLI for recipebox
//!
//! This binary is the presentation layer over [`recipebox::RecipeStore`]:
//! it maps subcommands to store operations and renders the results.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use recipebox::cli::{
    AddCommand, Cli, Command, ConfigCommand, DeleteCommand, EditCommand, ListCommand,
    OutputFormat, ShowCommand, StatsCommand,
};
use recipebox::{init_logging, Config, Recipe, RecipeId, RecipeStore, SqliteStore};

type Store = RecipeStore<SqliteStore>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        Command::Add(cmd) => handle_add(&mut open_store(&config)?, cmd),
        Command::Edit(cmd) => handle_edit(&mut open_store(&config)?, cmd),
        Command::Delete(cmd) => handle_delete(&mut open_store(&config)?, &cmd),
        Command::Show(cmd) => handle_show(&open_store(&config)?, &cmd),
        Command::List(cmd) => handle_list(&open_store(&config)?, &cmd),
        Command::Cuisines => {
            handle_cuisines(&open_store(&config)?);
            Ok(())
        }
        Command::Stats(cmd) => handle_stats(&open_store(&config)?, &cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn open_store(config: &Config) -> anyhow::Result<Store> {
    let path = config.database_path();
    let storage = SqliteStore::open(&path)
        .with_context(|| format!("opening recipe database {}", path.display()))?;
    Ok(RecipeStore::open(storage, config.storage_key()))
}

fn handle_add(store: &mut Store, cmd: AddCommand) -> anyhow::Result<()> {
    let recipe = store.add(cmd.recipe.into())?;
    println!("Added recipe {}", recipe.id);
    Ok(())
}

fn handle_edit(store: &mut Store, cmd: EditCommand) -> anyhow::Result<()> {
    let id = RecipeId::from(cmd.id.as_str());
    let current = store
        .get(&id)
        .ok_or_else(|| recipebox::Error::not_found(id.as_str()))?
        .fields();
    let recipe = store.update(&id, cmd.merge_into(current))?;
    println!("Updated recipe {}", recipe.id);
    Ok(())
}

fn handle_delete(store: &mut Store, cmd: &DeleteCommand) -> anyhow::Result<()> {
    let id = RecipeId::from(cmd.id.as_str());

    if !cmd.yes {
        match store.get(&id) {
            Some(recipe) => {
                println!("This will permanently delete \"{}\".", recipe.title);
                println!("Use --yes to confirm.");
            }
            None => println!("No recipe with id {id}."),
        }
        return Ok(());
    }

    match store.delete(&id) {
        Ok(()) => println!("Deleted recipe {id}"),
        // Already gone: nothing left to do.
        Err(e) if e.is_not_found() => println!("No recipe with id {id}."),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn handle_show(store: &Store, cmd: &ShowCommand) -> anyhow::Result<()> {
    let id = RecipeId::from(cmd.id.as_str());
    let recipe = store
        .get(&id)
        .ok_or_else(|| recipebox::Error::not_found(id.as_str()))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
    } else {
        print_card(recipe);
    }
    Ok(())
}

fn handle_list(store: &Store, cmd: &ListCommand) -> anyhow::Result<()> {
    let recipes = store.search(&cmd.search, &cmd.cuisine);

    if cmd.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    match cmd.format {
        OutputFormat::Table => {
            println!("{:<36}  {:<30}  {}", "ID", "TITLE", "CUISINE");
            for recipe in recipes {
                println!(
                    "{:<36}  {:<30}  {}",
                    recipe.id,
                    recipe.title,
                    recipe.cuisine_label()
                );
            }
        }
        OutputFormat::Plain | OutputFormat::Json => {
            for recipe in recipes {
                print_card(recipe);
                println!();
            }
        }
    }
    Ok(())
}

fn handle_cuisines(store: &Store) {
    for cuisine in store.cuisines() {
        println!("{cuisine}");
    }
}

fn handle_stats(store: &Store, cmd: &StatsCommand) -> anyhow::Result<()> {
    let stats = store.stats()?;
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Recipes:       {}", stats.total_recipes);
        println!("Cuisines:      {}", stats.total_cuisines);
        match stats.last_saved {
            Some(at) => println!("Last saved:    {}", at.to_rfc3339()),
            None => println!("Last saved:    never"),
        }
        println!("Database size: {} bytes", stats.storage_bytes);
    }
    Ok(())
}

fn print_card(recipe: &Recipe) {
    println!("{}", recipe.title);
    println!("  ID:           {}", recipe.id);
    println!("  Cuisine:      {}", recipe.cuisine_label());
    println!("  Ingredients:  {}", recipe.ingredients);
    println!("  Instructions: {}", recipe.instructions_label());
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:  {}", config.database_path().display());
                println!("  Key:            {}", config.storage_key());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
