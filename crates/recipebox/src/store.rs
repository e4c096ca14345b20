//! The recipe catalog.
//!
//! [`RecipeStore`] owns the in-memory collection and mirrors it to a
//! [`KeyValueStore`]. Every successful mutation rewrites the whole collection
//! under a single key before returning; a failed mutation writes nothing.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::recipe::{Recipe, RecipeFields, RecipeId};
use crate::storage::KeyValueStore;

/// Storage key used when none is configured.
pub const DEFAULT_KEY: &str = "recipes";

/// Recipe collection backed by a key-value store.
#[derive(Debug)]
pub struct RecipeStore<S> {
    storage: S,
    key: String,
    recipes: Vec<Recipe>,
}

impl<S: KeyValueStore> RecipeStore<S> {
    /// Open the catalog stored under `key` and load it.
    ///
    /// Missing or unreadable data yields an empty catalog.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            recipes: Vec::new(),
        };
        store.load();
        info!(
            "Opened recipe catalog '{}' with {} recipes",
            store.key,
            store.recipes.len()
        );
        store
    }

    /// Replace the in-memory collection with what is persisted.
    ///
    /// Never fails: an absent key, a read error, or malformed content all
    /// produce an empty collection. Entries that break the collection
    /// invariants (blank required fields, repeated IDs) are skipped.
    pub fn load(&mut self) -> &[Recipe] {
        self.recipes = read_collection(&self.storage, &self.key);
        &self.recipes
    }

    /// Validate and append a new recipe, then persist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the title or ingredients are blank, or
    /// a storage error if the write fails. Either way the catalog is unchanged.
    pub fn add(&mut self, fields: RecipeFields) -> Result<Recipe> {
        let recipe = Recipe::create(fields.normalized()?);
        self.recipes.push(recipe.clone());

        if let Err(e) = self.persist() {
            self.recipes.pop();
            return Err(e);
        }

        info!("Added recipe {} ({})", recipe.id, recipe.title);
        Ok(recipe)
    }

    /// Overwrite every field of an existing recipe except its ID, then persist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for blank required fields,
    /// [`Error::NotFound`] if `id` is unknown, or a storage error if the write
    /// fails. The catalog is unchanged on error.
    pub fn update(&mut self, id: &RecipeId, fields: RecipeFields) -> Result<Recipe> {
        let fields = fields.normalized()?;
        let index = self.position(id)?;

        let previous = self.recipes[index].clone();
        self.recipes[index].apply(fields);

        if let Err(e) = self.persist() {
            self.recipes[index] = previous;
            return Err(e);
        }

        let updated = self.recipes[index].clone();
        info!("Updated recipe {} ({})", updated.id, updated.title);
        Ok(updated)
    }

    /// Remove a recipe permanently, then persist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` is unknown (already deleted), or a
    /// storage error if the write fails, in which case the recipe is kept.
    pub fn delete(&mut self, id: &RecipeId) -> Result<()> {
        let index = self.position(id)?;
        let removed = self.recipes.remove(index);

        if let Err(e) = self.persist() {
            self.recipes.insert(index, removed);
            return Err(e);
        }

        info!("Deleted recipe {} ({})", removed.id, removed.title);
        Ok(())
    }

    /// Recipes matching both a text query and a cuisine filter, in catalog order.
    ///
    /// `text` is matched case-insensitively as a substring of the title or the
    /// ingredients. `cuisine` must equal the recipe's cuisine, ignoring case.
    /// An empty argument matches everything.
    #[must_use]
    pub fn search(&self, text: &str, cuisine: &str) -> Vec<&Recipe> {
        let text = text.to_lowercase();
        let cuisine = cuisine.to_lowercase();

        let results: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|r| r.matches_text(&text) && r.matches_cuisine(&cuisine))
            .collect();

        debug!(
            "Search text={:?} cuisine={:?} matched {} of {}",
            text,
            cuisine,
            results.len(),
            self.recipes.len()
        );
        results
    }

    /// Look up a recipe by ID.
    #[must_use]
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| &r.id == id)
    }

    /// The whole collection in insertion order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Number of recipes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Distinct non-empty cuisines in first-seen order.
    ///
    /// Cuisines differing only by case are reported once, spelled as first seen.
    #[must_use]
    pub fn cuisines(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.recipes
            .iter()
            .filter(|r| !r.cuisine.is_empty())
            .filter(|r| seen.insert(r.cuisine.to_lowercase()))
            .map(|r| r.cuisine.clone())
            .collect()
    }

    /// Summary figures for the catalog and its backing store.
    ///
    /// # Errors
    ///
    /// Returns an error if the last write time cannot be read.
    pub fn stats(&self) -> Result<CatalogStats> {
        Ok(CatalogStats {
            total_recipes: self.recipes.len(),
            total_cuisines: self.cuisines().len(),
            last_saved: self.storage.last_modified(&self.key)?,
            storage_bytes: self.storage.size_bytes(),
        })
    }

    /// The storage key the catalog lives under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the backing store.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the backing store.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn position(&self, id: &RecipeId) -> Result<usize> {
        self.recipes
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| Error::not_found(id.as_str()))
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.recipes)?;
        self.storage.put(&self.key, &json).map_err(|e| {
            warn!("Failed to persist recipe catalog '{}': {}", self.key, e);
            e
        })
    }
}

/// Summary of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// Number of recipes.
    pub total_recipes: usize,
    /// Number of distinct cuisines.
    pub total_cuisines: usize,
    /// When the collection was last written.
    pub last_saved: Option<DateTime<Utc>>,
    /// Size of the backing database file in bytes.
    pub storage_bytes: u64,
}

fn read_collection<S: KeyValueStore>(storage: &S, key: &str) -> Vec<Recipe> {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored catalog under '{}', starting empty", key);
            return Vec::new();
        }
        Err(e) => {
            warn!("Failed to read catalog '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };

    let parsed: Vec<Recipe> = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Stored catalog '{}' is malformed, starting empty: {}", key, e);
            return Vec::new();
        }
    };

    let mut ids = HashSet::new();
    parsed
        .into_iter()
        .filter(|r| {
            if !r.is_valid() {
                warn!("Skipping stored recipe {} with blank required fields", r.id);
                false
            } else if !ids.insert(r.id.clone()) {
                warn!("Skipping stored recipe with duplicate id {}", r.id);
                false
            } else {
                true
            }
        })
        .collect()
}
