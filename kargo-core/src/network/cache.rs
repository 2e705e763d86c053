#[cfg(test)]
#[path = "../../tests/unit/network/cache_test.rs"]
mod cache_test;

use crate::models::common::{Coordinate, Distance, StationId};
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// An ordered pair of station (or hub) identities.
pub type PairKey = (StationId, StationId);

/// A concurrent-safe store for computed road distances and paths. Entries are never invalidated:
/// road topology is assumed to be static for the store lifetime.
pub trait RoutingCache: Send + Sync {
    /// Gets cached distance.
    fn get_distance(&self, key: PairKey) -> Option<Distance>;

    /// Stores distance unless the key is already present.
    fn put_distance(&self, key: PairKey, distance: Distance);

    /// Gets cached path.
    fn get_path(&self, key: PairKey) -> Option<Arc<Vec<Coordinate>>>;

    /// Stores path unless the key is already present.
    fn put_path(&self, key: PairKey, path: Arc<Vec<Coordinate>>);
}

/// An in-memory, append-only routing cache.
#[derive(Default)]
pub struct InMemoryRoutingCache {
    distances: RwLock<FxHashMap<PairKey, Distance>>,
    paths: RwLock<FxHashMap<PairKey, Arc<Vec<Coordinate>>>>,
}

impl InMemoryRoutingCache {
    /// Returns amount of cached distances.
    pub fn distance_entries(&self) -> usize {
        self.distances.read().unwrap().len()
    }

    /// Returns amount of cached paths.
    pub fn path_entries(&self) -> usize {
        self.paths.read().unwrap().len()
    }
}

impl RoutingCache for InMemoryRoutingCache {
    fn get_distance(&self, key: PairKey) -> Option<Distance> {
        self.distances.read().unwrap().get(&key).copied()
    }

    fn put_distance(&self, key: PairKey, distance: Distance) {
        self.distances.write().unwrap().entry(key).or_insert(distance);
    }

    fn get_path(&self, key: PairKey) -> Option<Arc<Vec<Coordinate>>> {
        self.paths.read().unwrap().get(&key).cloned()
    }

    fn put_path(&self, key: PairKey, path: Arc<Vec<Coordinate>>) {
        self.paths.write().unwrap().entry(key).or_insert(path);
    }
}
