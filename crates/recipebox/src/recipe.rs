//! Core recipe types for recipebox.
//!
//! This module defines the catalog entry itself along with the input bundle
//! used to create or edit one.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Label shown in place of an empty cuisine.
pub const UNSPECIFIED_CUISINE: &str = "Not Specified";

/// Label shown in place of empty instructions.
pub const NO_INSTRUCTIONS: &str = "No instructions.";

/// Opaque unique identifier of a recipe.
///
/// Fresh IDs are random UUIDs. IDs read back from storage are kept verbatim,
/// whatever their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Generate a new, collision-resistant ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single catalog entry.
///
/// Serializes to the persisted object shape: string fields `id`, `title`,
/// `ingredients`, `instructions` and `cuisine`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Identifier assigned at creation.
    pub id: RecipeId,

    /// Recipe name. Never empty.
    pub title: String,

    /// Free-form ingredient list. Never empty.
    pub ingredients: String,

    /// Preparation steps, possibly empty.
    #[serde(default)]
    pub instructions: String,

    /// Cuisine name, empty when unspecified.
    #[serde(default)]
    pub cuisine: String,
}

impl Recipe {
    /// Build a recipe with a freshly generated ID from already validated fields.
    #[must_use]
    pub(crate) fn create(fields: RecipeFields) -> Self {
        Self {
            id: RecipeId::generate(),
            title: fields.title,
            ingredients: fields.ingredients,
            instructions: fields.instructions,
            cuisine: fields.cuisine,
        }
    }

    /// Overwrite every field except the ID.
    pub(crate) fn apply(&mut self, fields: RecipeFields) {
        self.title = fields.title;
        self.ingredients = fields.ingredients;
        self.instructions = fields.instructions;
        self.cuisine = fields.cuisine;
    }

    /// Current field values as an editable bundle.
    #[must_use]
    pub fn fields(&self) -> RecipeFields {
        RecipeFields {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            cuisine: self.cuisine.clone(),
        }
    }

    /// Check the stored-recipe invariants (non-empty title and ingredients).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.ingredients.trim().is_empty()
    }

    /// Case-insensitive substring match against title or ingredients.
    ///
    /// `needle` must already be lowercased. An empty needle matches everything.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.ingredients.to_lowercase().contains(needle)
    }

    /// Case-insensitive exact match on cuisine.
    ///
    /// `cuisine` must already be lowercased. An empty filter matches everything.
    #[must_use]
    pub fn matches_cuisine(&self, cuisine: &str) -> bool {
        cuisine.is_empty() || self.cuisine.to_lowercase() == cuisine
    }

    /// Cuisine for display.
    #[must_use]
    pub fn cuisine_label(&self) -> &str {
        if self.cuisine.is_empty() {
            UNSPECIFIED_CUISINE
        } else {
            &self.cuisine
        }
    }

    /// Instructions for display.
    #[must_use]
    pub fn instructions_label(&self) -> &str {
        if self.instructions.is_empty() {
            NO_INSTRUCTIONS
        } else {
            &self.instructions
        }
    }
}

/// Caller-supplied recipe contents, as entered on a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFields {
    /// Recipe name (required).
    pub title: String,
    /// Ingredient list (required).
    pub ingredients: String,
    /// Preparation steps.
    pub instructions: String,
    /// Cuisine name.
    pub cuisine: String,
}

impl RecipeFields {
    /// Bundle the four form inputs.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        instructions: impl Into<String>,
        cuisine: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients: ingredients.into(),
            instructions: instructions.into(),
            cuisine: cuisine.into(),
        }
    }

    /// Trim the free-text fields and enforce the required ones.
    ///
    /// `cuisine` is passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `title` or `ingredients` is empty
    /// after trimming.
    pub fn normalized(self) -> Result<Self> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(Error::validation("title"));
        }
        let ingredients = self.ingredients.trim();
        if ingredients.is_empty() {
            return Err(Error::validation("ingredients"));
        }

        Ok(Self {
            title: title.to_string(),
            ingredients: ingredients.to_string(),
            instructions: self.instructions.trim().to_string(),
            cuisine: self.cuisine,
        })
    }
}
