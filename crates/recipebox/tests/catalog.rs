//! End-to-end catalog behavior over an on-disk database.

use std::collections::HashSet;

use recipebox::{KeyValueStore, RecipeFields, RecipeId, RecipeStore, SqliteStore};

fn open(path: &std::path::Path) -> RecipeStore<SqliteStore> {
    RecipeStore::open(SqliteStore::open(path).unwrap(), "recipes")
}

#[test]
fn catalog_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    let (soup, pho) = {
        let mut store = open(&db);
        let soup = store
            .add(RecipeFields::new(" Tomato Soup ", "tomatoes, basil", "Simmer.", "Italian"))
            .unwrap();
        let pho = store
            .add(RecipeFields::new("Pho", "rice noodles, beef", "", "Vietnamese"))
            .unwrap();
        (soup, pho)
    };

    let store = open(&db);
    assert_eq!(store.recipes(), &[soup.clone(), pho.clone()]);
    assert_eq!(store.get(&soup.id).unwrap().title, "Tomato Soup");
    assert_eq!(store.search("soup", "").len(), 1);
    assert_eq!(store.search("", "italian")[0].id, soup.id);
    assert_eq!(store.search("o", "").len(), 2);
}

#[test]
fn edits_and_deletes_are_durable() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    let (kept, gone) = {
        let mut store = open(&db);
        let kept = store.add(RecipeFields::new("Toast", "bread", "", "")).unwrap();
        let gone = store.add(RecipeFields::new("Tea", "leaves", "", "")).unwrap();

        store
            .update(&kept.id, RecipeFields::new("Cheese Toast", "bread, cheese", "Grill.", "British"))
            .unwrap();
        store.delete(&gone.id).unwrap();
        (kept.id, gone.id)
    };

    let mut store = open(&db);
    assert_eq!(store.len(), 1);
    let recipe = store.get(&kept).unwrap();
    assert_eq!(recipe.title, "Cheese Toast");
    assert_eq!(recipe.instructions, "Grill.");
    assert_eq!(recipe.cuisine, "British");

    assert!(store.delete(&gone).unwrap_err().is_not_found());
}

#[test]
fn persisted_format_is_plain_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    let mut store = open(&db);
    let added = store.add(RecipeFields::new("Toast", "bread", "", "")).unwrap();

    let raw = store.storage().get("recipes").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], added.id.as_str());
    assert_eq!(entries[0]["title"], "Toast");
    assert_eq!(entries[0]["ingredients"], "bread");
    assert_eq!(entries[0]["instructions"], "");
    assert_eq!(entries[0]["cuisine"], "");
}

#[test]
fn legacy_data_is_read_and_extended() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    {
        let mut storage = SqliteStore::open(&db).unwrap();
        storage
            .put(
                "recipes",
                r#"[{"id":"1700000000000","title":"Toast","ingredients":"bread","instructions":"","cuisine":""}]"#,
            )
            .unwrap();
    }

    let mut store = open(&db);
    assert_eq!(store.len(), 1);
    let legacy = RecipeId::from("1700000000000");
    assert!(store.get(&legacy).is_some());

    let added = store.add(RecipeFields::new("Jam", "berries", "", "")).unwrap();
    let ids: HashSet<&RecipeId> = store.recipes().iter().map(|r| &r.id).collect();
    assert!(ids.contains(&legacy));
    assert!(ids.contains(&added.id));
}

#[test]
fn corrupt_data_starts_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("recipes.db");

    {
        let mut storage = SqliteStore::open(&db).unwrap();
        storage.put("recipes", "definitely not json").unwrap();
    }

    let mut store = open(&db);
    assert!(store.is_empty());

    store.add(RecipeFields::new("Toast", "bread", "", "")).unwrap();
    assert_eq!(open(&db).len(), 1);
}
