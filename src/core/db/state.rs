use std::{fmt, path::PathBuf};

use anyhow::Context;
use tokio::{
    fs as async_fs,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use crate::core::db::marathon::Marathon;

const BUILTIN_SEED: &str = include_str!("seed.json");

/// Where the marathon catalog comes from at startup and on reset.
#[derive(Debug, Clone)]
pub enum SeedSource {
    /// The catalog compiled into the binary.
    Builtin,
    /// A JSON catalog on disk.
    File(PathBuf),
    /// A JSON catalog held in memory.
    Json(String),
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Builtin => f.write_str("built-in seed"),
            SeedSource::File(path) => write!(f, "seed file {:?}", path),
            SeedSource::Json(_) => f.write_str("inline seed"),
        }
    }
}

impl SeedSource {
    /// Parse a fresh copy of the catalog. Nothing is cached between calls, so
    /// two loads never share records.
    pub(super) async fn load(&self) -> anyhow::Result<Vec<Marathon>> {
        let raw = match self {
            SeedSource::Builtin => BUILTIN_SEED.to_string(),
            SeedSource::File(path) => async_fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read seed file {:?}", path))?,
            SeedSource::Json(json) => json.clone(),
        };
        let marathons: Vec<Marathon> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self))?;
        Ok(marathons)
    }
}

pub(super) struct StoreState {
    source: SeedSource,
    marathons: RwLock<Vec<Marathon>>,
}

impl fmt::Debug for StoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreState")
            .field("source", &self.source)
            .finish()
    }
}

impl StoreState {
    pub(super) async fn new(source: SeedSource) -> anyhow::Result<Self> {
        let marathons = source
            .load()
            .await
            .with_context(|| format!("Failed to initialize marathons from {}", source))?;
        tracing::debug!(count = marathons.len(), %source, "loaded marathons");
        Ok(Self {
            source,
            marathons: RwLock::new(marathons),
        })
    }

    pub(super) async fn read(&self) -> RwLockReadGuard<'_, Vec<Marathon>> {
        self.marathons.read().await
    }

    pub(super) async fn write(&self) -> RwLockWriteGuard<'_, Vec<Marathon>> {
        self.marathons.write().await
    }

    /// Reload the catalog from scratch. The live tree is only swapped once the
    /// new one parsed, so a failed reset leaves it as it was.
    pub(super) async fn reset(&self) -> anyhow::Result<()> {
        let fresh = self
            .source
            .load()
            .await
            .with_context(|| format!("Failed to reset marathons from {}", self.source))?;
        let mut guard = self.marathons.write().await;
        tracing::debug!(count = fresh.len(), source = %self.source, "reset marathons to seed");
        *guard = fresh;
        Ok(())
    }
}
