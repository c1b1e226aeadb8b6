//! Persisted keyed lists (favorites, ratings).
//!
//! A [`FileStore`] is an ordered list of [`Json`] items backed by one file
//! holding a single JSON array. Items are expected (not enforced) to be
//! objects carrying an `id` field; lookups and deletes match on that field.
//!
//! Persistence is deliberately crude: every mutation rewrites the whole
//! file. A read failure degrades to an empty store; a write failure is
//! logged and dropped, keeping the in-memory list as the source of truth
//! for the rest of the session. Stores are single-writer by construction —
//! one owner per store, no locking.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tracing::{debug, warn};

use crate::json::Json;

/// Well-known store names.
pub const FAVORITES: &str = "favorites";
pub const RATINGS: &str = "ratings";

/// An ordered, persisted list of JSON items keyed by their `id` field.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    items: Vec<Json>,
}

impl FileStore {
    /// Open (or create on first write) the store named `name` under `dir`.
    /// Existing contents are loaded; unreadable or malformed contents
    /// degrade to an empty list.
    pub fn open(dir: impl AsRef<Path>, name: &str) -> Self {
        let path = dir.as_ref().join(format!("{name}.txt"));
        let items = read_items(&path);
        Self { path, items }
    }

    /// The platform data directory this application's stores live in,
    /// created if missing.
    pub fn default_dir() -> Result<PathBuf> {
        let dir = dirs::data_dir()
            .ok_or_else(|| color_eyre::eyre::eyre!("no data directory on this platform"))?
            .join("marquee");
        fs::create_dir_all(&dir).wrap_err("Failed to create data directory")?;
        Ok(dir)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn items(&self) -> &[Json] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its `id` field.
    pub fn get(&self, id: &Json) -> Option<&Json> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Whether an item with this `id` is stored.
    pub fn contains(&self, id: &Json) -> bool {
        self.get(id).is_some()
    }

    /// Append an item and rewrite the backing file.
    pub fn add(&mut self, item: Json) {
        self.items.push(item);
        self.persist_or_log();
    }

    /// Remove the first item whose `id` matches `item`'s, preserving the
    /// order of the rest, and rewrite the backing file.
    pub fn delete(&mut self, item: &Json) {
        if let Some(index) = self.items.iter().position(|x| x.id() == item.id()) {
            self.items.remove(index);
        }
        self.persist_or_log();
    }

    /// Reset the store to an empty persisted array.
    pub fn destroy(&mut self) {
        self.items.clear();
        self.persist_or_log();
    }

    /// Serialize the whole list and overwrite the backing file.
    pub fn persist(&self) -> Result<()> {
        let bytes = Json::Array(self.items.clone())
            .encode()
            .wrap_err("Failed to encode store contents")?;
        fs::write(&self.path, bytes)
            .wrap_err_with(|| format!("Failed to write store to {:?}", self.path))?;
        Ok(())
    }

    // Write failures lose this mutation on disk but not in memory.
    fn persist_or_log(&self) {
        if let Err(err) = self.persist() {
            warn!(path = ?self.path, "store write failed: {err:#}");
        }
    }
}

fn read_items(path: &Path) -> Vec<Json> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(?path, "store read failed, starting empty: {err}");
            return Vec::new();
        }
    };
    match Json::decode(&bytes) {
        Ok(value) => value.array().to_vec(),
        Err(err) => {
            debug!(?path, "store contents malformed, starting empty: {err}");
            Vec::new()
        }
    }
}
