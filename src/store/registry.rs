//! The cluster store registry.

use crate::error::{Error, Result};
use crate::store::info::StoreInfo;
use crate::types::{StoreId, StoreMeta};
use std::collections::HashMap;
use tracing::{debug, error, info};

/// Registry of the current snapshot of every known store, plus cached
/// cluster-wide throughput totals.
///
/// The registry is a passive data structure and is not internally locked:
/// the surrounding coordinator serializes mutations (and excludes readers
/// while it swaps snapshots) behind its own coarse lock. Per-store updates
/// are copy-on-write through [`set_store`](Self::set_store), so a snapshot
/// handed out before a mutation stays a stable view; only the rolling rates
/// shared by a store's snapshots keep advancing underneath it.
#[derive(Debug, Default)]
pub struct StoresInfo {
    stores: HashMap<StoreId, StoreInfo>,
    bytes_write_rate: f64,
    bytes_read_rate: f64,
}

impl StoresInfo {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot for `store_id`, if registered. The clone is cheap:
    /// snapshots share their metadata, stats, and rate bundle.
    pub fn get_store(&self, store_id: StoreId) -> Option<StoreInfo> {
        self.stores.get(&store_id).cloned()
    }

    /// Borrowed view of the current snapshot for `store_id`. Same value as
    /// [`get_store`](Self::get_store); published snapshots are never
    /// mutated in place.
    pub fn take_store(&self, store_id: StoreId) -> Option<&StoreInfo> {
        self.stores.get(&store_id)
    }

    /// Publish `store` as the current snapshot for its id.
    ///
    /// This is the single mutation entry point: it folds the snapshot's
    /// stats into the store's rolling rates and refreshes the cached
    /// cluster totals. Every other mutator clones the current snapshot
    /// with overrides and republishes it here.
    pub fn set_store(&mut self, store: StoreInfo) {
        store.rates().observe(store.stats());
        debug!(store_id = store.id(), state = %store.state(), "published store snapshot");
        self.stores.insert(store.id(), store);
        self.refresh_total_rates();
    }

    /// Exclude a store from balancing until it is unblocked.
    pub fn block_store(&mut self, store_id: StoreId) -> Result<()> {
        const OP: &str = "store.block";
        let store = match self.stores.get(&store_id) {
            Some(store) => store.clone(),
            None => return Err(Error::StoreNotFound { op: OP, store_id }),
        };
        if store.is_blocked() {
            return Err(Error::StoreBlocked { op: OP, store_id });
        }
        self.set_store(store.with_blocked(true));
        info!(store_id, "store blocked");
        Ok(())
    }

    /// Re-admit a blocked store to balancing. Unblocking a store that is
    /// not blocked is a no-op publish.
    ///
    /// An unknown id here means the caller's bookkeeping has diverged from
    /// the registry; it is reported as an error for the caller to escalate.
    pub fn unblock_store(&mut self, store_id: StoreId) -> Result<()> {
        const OP: &str = "store.unblock";
        let store = match self.stores.get(&store_id) {
            Some(store) => store.clone(),
            None => {
                error!(store_id, "unblock requested for an unknown store");
                return Err(Error::StoreNotFound { op: OP, store_id });
            }
        };
        self.set_store(store.with_blocked(false));
        info!(store_id, "store unblocked");
        Ok(())
    }

    /// Set the leader count for `store_id`. Unknown ids are ignored.
    pub fn set_leader_count(&mut self, store_id: StoreId, leader_count: usize) {
        if let Some(store) = self.stores.get(&store_id).cloned() {
            self.set_store(store.with_leader_count(leader_count));
        }
    }

    /// Set the region count for `store_id`. Unknown ids are ignored.
    pub fn set_region_count(&mut self, store_id: StoreId, region_count: usize) {
        if let Some(store) = self.stores.get(&store_id).cloned() {
            self.set_store(store.with_region_count(region_count));
        }
    }

    /// Set the pending peer count for `store_id`. Unknown ids are ignored.
    pub fn set_pending_peer_count(&mut self, store_id: StoreId, pending_peer_count: usize) {
        if let Some(store) = self.stores.get(&store_id).cloned() {
            self.set_store(store.with_pending_peer_count(pending_peer_count));
        }
    }

    /// Set the total leader size for `store_id`, in MiB. Unknown ids are
    /// ignored.
    pub fn set_leader_size(&mut self, store_id: StoreId, leader_size: i64) {
        if let Some(store) = self.stores.get(&store_id).cloned() {
            self.set_store(store.with_leader_size(leader_size));
        }
    }

    /// Set the total region size for `store_id`, in MiB. Unknown ids are
    /// ignored.
    pub fn set_region_size(&mut self, store_id: StoreId, region_size: i64) {
        if let Some(store) = self.stores.get(&store_id).cloned() {
            self.set_store(store.with_region_size(region_size));
        }
    }

    /// Set both balancing weights for `store_id`. Unknown ids are ignored.
    pub fn set_store_weight(&mut self, store_id: StoreId, leader_weight: f64, region_weight: f64) {
        if let Some(store) = self.stores.get(&store_id).cloned() {
            self.set_store(
                store
                    .with_leader_weight(leader_weight)
                    .with_region_weight(region_weight),
            );
        }
    }

    /// Apply the placement figures derived from one round of region
    /// bookkeeping in a single publish. Unknown ids are ignored.
    pub fn update_store_status(
        &mut self,
        store_id: StoreId,
        leader_count: usize,
        region_count: usize,
        pending_peer_count: usize,
        leader_size: i64,
        region_size: i64,
    ) {
        if let Some(store) = self.stores.get(&store_id).cloned() {
            self.set_store(
                store
                    .with_leader_count(leader_count)
                    .with_region_count(region_count)
                    .with_pending_peer_count(pending_peer_count)
                    .with_leader_size(leader_size)
                    .with_region_size(region_size),
            );
        }
    }

    /// All current snapshots, in map order.
    pub fn stores(&self) -> Vec<StoreInfo> {
        self.stores.values().cloned().collect()
    }

    /// The raw metadata of every registered store.
    pub fn metas(&self) -> Vec<StoreMeta> {
        self.stores.values().map(|store| store.meta().clone()).collect()
    }

    /// Number of registered stores.
    pub fn store_count(&self) -> usize {
        self.stores.len()
    }

    /// Cluster-wide smoothed bytes written per second, summed over stores
    /// that are up.
    pub fn total_bytes_write_rate(&self) -> f64 {
        self.bytes_write_rate
    }

    /// Cluster-wide smoothed bytes read per second, summed over stores
    /// that are up.
    pub fn total_bytes_read_rate(&self) -> f64 {
        self.bytes_read_rate
    }

    /// Smoothed bytes written per second for every store.
    pub fn stores_bytes_write_stat(&self) -> HashMap<StoreId, u64> {
        self.stores
            .values()
            .map(|store| (store.id(), store.rates().bytes_write_rate() as u64))
            .collect()
    }

    /// Smoothed bytes read per second for every store.
    pub fn stores_bytes_read_stat(&self) -> HashMap<StoreId, u64> {
        self.stores
            .values()
            .map(|store| (store.id(), store.rates().bytes_read_rate() as u64))
            .collect()
    }

    /// Smoothed keys written per second for every store.
    pub fn stores_keys_write_stat(&self) -> HashMap<StoreId, u64> {
        self.stores
            .values()
            .map(|store| (store.id(), store.rates().keys_write_rate() as u64))
            .collect()
    }

    /// Smoothed keys read per second for every store.
    pub fn stores_keys_read_stat(&self) -> HashMap<StoreId, u64> {
        self.stores
            .values()
            .map(|store| (store.id(), store.rates().keys_read_rate() as u64))
            .collect()
    }

    fn refresh_total_rates(&mut self) {
        self.bytes_write_rate = self
            .stores
            .values()
            .filter(|store| store.is_up())
            .map(|store| store.rates().bytes_write_rate())
            .sum();
        self.bytes_read_rate = self
            .stores
            .values()
            .filter(|store| store.is_up())
            .map(|store| store.rates().bytes_read_rate())
            .sum();
    }
}
