//! Throughput smoothing and hot-region report shapes.

pub mod hotspot;
pub mod rates;
pub mod rolling;

pub use hotspot::{HotRegionsStat, RegionStat, StoreHotRegionInfos, StoreHotRegionsStat};
pub use rates::{RollingStoreRates, STORE_STATS_ROLLING_WINDOW};
pub use rolling::RollingStats;
