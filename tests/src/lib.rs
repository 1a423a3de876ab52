//! Helpers shared by the AliasGuard integration tests.

use aliasguard_common::store::KeyValueStore;
use aliasguard_core::History;
use aliasguard_core::generator::AliasGenerator;
use aliasguard_core::store::FileStore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

/// A generator whose draws are reproducible across runs.
pub fn seeded_generator(seed: u64) -> AliasGenerator<StdRng> {
    AliasGenerator::with_rng(StdRng::seed_from_u64(seed))
}

/// Loads the history persisted under `dir`.
pub fn file_history(dir: &Path) -> anyhow::Result<History> {
    let store: Box<dyn KeyValueStore> = Box::new(FileStore::new(dir));
    History::load(store)
}

/// Strips every dot from the local part of `alias`.
pub fn undotted_local(alias: &str) -> Option<String> {
    let (local, _) = alias.split_once('@')?;
    Some(local.chars().filter(|c| *c != '.').collect())
}
