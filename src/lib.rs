//! Cluster store state tracking and placement scoring.
//!
//! This crate is the in-memory model a placement scheduler works against:
//! - **Immutable snapshots** of every store, republished copy-on-write so
//!   readers never see a half-applied update
//! - **Median-smoothed throughput rates** per store, resistant to single
//!   delayed or duplicated heartbeats
//! - **Placement-cost scores** for leaders and regions, continuous in the
//!   hypothetical size change so score comparisons cannot flap
//! - **Health and topology** classification: disconnected/unhealthy
//!   derivation from heartbeat recency, and ordered topology-label
//!   comparison for replica diversity
//!
//! # Example
//!
//! ```rust
//! use ballast::{ReportInterval, StoreInfo, StoreMeta, StoreStats, StoresInfo};
//! use std::time::SystemTime;
//!
//! let mut stores = StoresInfo::new();
//!
//! // Register a store from its reported metadata.
//! stores.set_store(StoreInfo::new(StoreMeta::new(1, "10.0.0.1:20160")));
//!
//! // A heartbeat arrives: clone the current snapshot with the new figures
//! // and republish it.
//! let stats = StoreStats {
//!     capacity: 512 << 30,
//!     available: 256 << 30,
//!     used_size: 200 << 30,
//!     bytes_written: 64 << 20,
//!     interval: ReportInterval::new(100, 110),
//!     ..Default::default()
//! };
//! let store = stores.get_store(1).unwrap();
//! stores.set_store(store.with_stats(stats).with_last_heartbeat(SystemTime::now()));
//!
//! // Rank the store for a hypothetical placement.
//! let store = stores.get_store(1).unwrap();
//! let score = store.region_score(0.6, 0.8, 0);
//! assert!(score.is_finite());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │       heartbeat ingestion (external)        │
//! └─────────────────────────────────────────────┘
//!                     │ StoreStats
//!                     ▼
//! ┌─────────────────────────────────────────────┐
//! │                StoresInfo                   │
//! │  id → StoreInfo snapshot (copy-on-write)    │
//! │  cached cluster read/write rate totals      │
//! └─────────────────────────────────────────────┘
//!         │ snapshots             │ observe
//!         ▼                       ▼
//! ┌──────────────────┐  ┌──────────────────────┐
//! │    StoreInfo     │  │  RollingStoreRates   │
//! │ health + scores  │  │   4 × RollingStats   │
//! └──────────────────┘  └──────────────────────┘
//!         │ scores
//!         ▼
//!    placement scheduler (external)
//! ```
//!
//! # Concurrency Model
//!
//! Snapshots are immutable after publication and every snapshot of a store
//! shares one internally locked rate bundle, so readers may hold snapshots
//! without coordination; only the smoothed rates advance underneath them.
//! The registry itself is not internally locked; the owning coordinator
//! must serialize mutations through its `&mut` methods.

pub mod config;
pub mod error;
pub mod stats;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use config::{
    HealthConfig, ScheduleConfig, STORE_DISCONNECT_TIMEOUT, STORE_UNHEALTHY_TIMEOUT,
};
pub use error::{Error, Result};
pub use store::{StoreInfo, StoresInfo};
pub use types::{
    ReportInterval, ResourceKind, StoreId, StoreLabel, StoreMeta, StoreState, StoreStats,
};

// Re-export statistics types
pub use stats::{
    HotRegionsStat, RegionStat, RollingStats, RollingStoreRates, StoreHotRegionInfos,
    StoreHotRegionsStat, STORE_STATS_ROLLING_WINDOW,
};
