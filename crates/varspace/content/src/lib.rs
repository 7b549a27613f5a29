//! Data-driven settings and loaders for `varspace-core`.
//!
//! `varspace-core` never touches the filesystem. This crate reads the settings that
//! tune it (currently the classifier's resolution of coincident ranges) from TOML
//! documents and hands back core types.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
