//! `recipebox` - A local recipe catalog
//!
//! This library manages a single user's recipe collection: creating, editing,
//! deleting, searching and filtering recipes, with the whole collection kept
//! in a durable key-value store.
//!
//! ```
//! use recipebox::{MemoryStore, RecipeFields, RecipeStore};
//!
//! let mut store = RecipeStore::open(MemoryStore::new(), "recipes");
//! store.add(RecipeFields::new("Tomato Soup", "tomatoes, basil", "", "Italian"))?;
//! store.add(RecipeFields::new("Pho", "rice noodles, beef", "", "Vietnamese"))?;
//!
//! assert_eq!(store.search("soup", "").len(), 1);
//! assert_eq!(store.search("", "ITALIAN").len(), 1);
//! # Ok::<(), recipebox::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod recipe;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use recipe::{Recipe, RecipeFields, RecipeId};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore};
pub use store::{CatalogStats, RecipeStore};
