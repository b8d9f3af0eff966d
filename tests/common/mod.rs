//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use dealerdesk::cart::InMemoryCatalog;
use dealerdesk::nav::NavKey;
use dealerdesk::persist::{FileStorage, MemoryStorage};
use tempfile::TempDir;

pub const NAMESPACE: &str = "test";

pub fn key(raw: &str) -> NavKey {
    NavKey::parse(raw).expect("valid key")
}

/// File-backed storage in a fresh temp dir. Keep the `TempDir` alive.
pub fn temp_storage() -> (TempDir, Arc<FileStorage>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = Arc::new(FileStorage::new(dir.path().join("state")));
    (dir, storage)
}

pub fn memory_storage() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

/// Deterministic pseudo-random sequence (xorshift) for operation fuzzing.
pub struct Sequence(u64);

impl Sequence {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

pub fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_category("casegoods", "Casegoods")
        .with_category("seating", "Seating")
        .with_product("1001", "Walnut Veneer Chip", "casegoods")
        .with_product("1002", "Maple Laminate Chip", "casegoods")
        .with_product("2001", "Mesh Back Swatch", "seating")
}
