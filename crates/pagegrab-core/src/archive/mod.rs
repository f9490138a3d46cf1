//! In-memory archive: filename → bytes, serialized once into a zip.

mod encode;
mod save;

pub use encode::encode_zip;
pub use save::{save_archive, temp_path, TEMP_SUFFIX};

use std::collections::HashMap;

/// One archive member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub data: Vec<u8>,
}

/// Archive under construction. Keyed by entry name; entries keep the order
/// in which their name was first inserted.
#[derive(Debug, Default)]
pub struct Accumulator {
    entries: Vec<ArchiveEntry>,
    index: HashMap<String, usize>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `data` under `name`. Returns true when an entry with the same
    /// name was replaced.
    pub fn insert(&mut self, name: &str, data: Vec<u8>) -> bool {
        if let Some(&i) = self.index.get(name) {
            self.entries[i].data = data;
            return true;
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(ArchiveEntry {
            name: name.to_string(),
            data,
        });
        false
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Serializes every entry into a zip blob.
    pub fn finalize(&self) -> anyhow::Result<Vec<u8>> {
        encode_zip(&self.entries)
    }
}
