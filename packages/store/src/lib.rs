#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory record store for the migration map dashboard.
//!
//! The store holds the immutable loaded dataset as an ordered sequence
//! of point records. Loading is a one-shot deferred transition from
//! `{empty, loading}` to `{populated, ready}` after a fixed delay;
//! dropping the [`LoadHandle`] before the delay elapses cancels the
//! pending transition, so a torn-down consumer can never observe a
//! late mutation. The dataset is write-once per load cycle: readers
//! get cheap [`Arc`] snapshots, and every commit bumps a monotonically
//! increasing version token that downstream caches key on.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use migration_map_record_models::PointRecord;
use thiserror::Error;

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading the dataset file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not a valid JSON array of point records.
    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a pre-bundled dataset: a JSON array of point record objects.
///
/// # Errors
///
/// Returns [`StoreError::Parse`] if the JSON is malformed. Missing or
/// malformed numeric fields within individual records do not fail the
/// parse; they coerce to zero defaults at the model layer.
pub fn parse_records(json: &str) -> Result<Vec<PointRecord>, StoreError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a dataset file from disk.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be read, or
/// [`StoreError::Parse`] if its contents are not a valid record array.
pub fn load_from_path(path: &Path) -> Result<Vec<PointRecord>, StoreError> {
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}

struct Shared {
    records: RwLock<Arc<Vec<PointRecord>>>,
    loading: AtomicBool,
    version: AtomicU64,
}

/// Shared handle to the current dataset.
///
/// Cloning is cheap; all clones observe the same records, loading flag,
/// and version token.
#[derive(Clone)]
pub struct RecordStore {
    shared: Arc<Shared>,
}

impl RecordStore {
    /// Creates an empty store in the loading state, version 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Shared {
                records: RwLock::new(Arc::new(Vec::new())),
                loading: AtomicBool::new(true),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Returns a snapshot of the current dataset. Empty until the first
    /// commit completes.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn records(&self) -> Arc<Vec<PointRecord>> {
        Arc::clone(&self.shared.records.read().expect("record store lock poisoned"))
    }

    /// Returns `true` while a load is in flight and no dataset has been
    /// committed yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.shared.loading.load(Ordering::SeqCst)
    }

    /// Returns the current content version token. Starts at 0 for the
    /// empty store and increments on every commit.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.shared.version.load(Ordering::SeqCst)
    }

    fn commit(&self, records: Vec<PointRecord>) {
        *self.shared.records.write().expect("record store lock poisoned") = Arc::new(records);
        self.shared.version.fetch_add(1, Ordering::SeqCst);
        self.shared.loading.store(false, Ordering::SeqCst);
    }

    /// Starts the simulated asynchronous load: after `delay`, the given
    /// records are committed atomically and the loading flag clears.
    ///
    /// Dropping the returned [`LoadHandle`] before the delay elapses
    /// aborts the pending transition and the store stays empty.
    #[must_use]
    pub fn begin_simulated_load(&self, records: Vec<PointRecord>, delay: Duration) -> LoadHandle {
        self.shared.loading.store(true, Ordering::SeqCst);
        let store = self.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let count = records.len();
            store.commit(records);
            log::info!("Dataset loaded: {count} records");
        });
        LoadHandle { task }
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a pending simulated load. Dropping it cancels the load if
/// the commit has not happened yet.
pub struct LoadHandle {
    task: tokio::task::JoinHandle<()>,
}

impl LoadHandle {
    /// Waits for the load to commit.
    pub async fn wait(mut self) {
        let _ = (&mut self.task).await;
    }

    /// Returns `true` once the load task has committed (or been
    /// cancelled).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
