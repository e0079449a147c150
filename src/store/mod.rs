//! Store snapshots and the cluster store registry.

pub mod info;
pub mod registry;

pub use info::StoreInfo;
pub use registry::StoresInfo;
