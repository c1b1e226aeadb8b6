//! Favorites/ratings store behavior across process boundaries (simulated by
//! reopening the store from the same directory).

use marquee::json::Json;
use marquee::store::{FileStore, FAVORITES, RATINGS};
use serde_json::json;

#[test]
fn favorite_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = FileStore::open(dir.path(), FAVORITES);
    assert!(store.is_empty());

    store.add(Json::from(json!({"id": "7", "title": "Dune"})));
    assert!(store.contains(&Json::from("7")));

    // The persisted bytes are a plain JSON array of the stored objects.
    let bytes = std::fs::read(dir.path().join("favorites.txt")).unwrap();
    let persisted = Json::decode(&bytes).unwrap();
    assert_eq!(persisted.array().len(), 1);
    assert_eq!(persisted[0]["id"].string_value(), "7");

    // A fresh open sees the same contents.
    let reopened = FileStore::open(dir.path(), FAVORITES);
    assert!(reopened.contains(&Json::from("7")));
    assert_eq!(reopened.items()[0]["title"].string_value(), "Dune");
}

#[test]
fn add_then_delete_is_idempotent_and_order_preserving() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::open(dir.path(), FAVORITES);

    store.add(Json::from(json!({"id": "1", "title": "Alien"})));
    store.add(Json::from(json!({"id": "2", "title": "Arrival"})));
    store.add(Json::from(json!({"id": "3", "title": "Blade Runner"})));

    let dune = Json::from(json!({"id": "7", "title": "Dune"}));
    store.add(dune.clone());
    store.delete(&dune);

    let reopened = FileStore::open(dir.path(), FAVORITES);
    let ids: Vec<String> = reopened
        .items()
        .iter()
        .map(|item| item.id().string_value())
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn stores_are_independent_per_name() {
    let dir = tempfile::tempdir().unwrap();

    let mut favorites = FileStore::open(dir.path(), FAVORITES);
    let mut ratings = FileStore::open(dir.path(), RATINGS);

    favorites.add(Json::from(json!({"id": "7"})));
    ratings.add(Json::from(json!({"id": "7", "rating": 5})));
    favorites.delete(&Json::from(json!({"id": "7"})));

    assert!(favorites.is_empty());
    assert_eq!(FileStore::open(dir.path(), RATINGS).len(), 1);
}

#[test]
fn corrupt_store_file_degrades_to_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("favorites.txt"), b"not json at all").unwrap();

    let mut store = FileStore::open(dir.path(), FAVORITES);
    assert!(store.is_empty());

    // The first mutation rewrites the file with well-formed contents.
    store.add(Json::from(json!({"id": "7"})));
    let bytes = std::fs::read(dir.path().join("favorites.txt")).unwrap();
    assert!(Json::decode(&bytes).is_ok());
}
