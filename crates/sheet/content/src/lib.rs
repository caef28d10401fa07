//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the reference data a character sheet is
//! built from:
//! - Class and skill catalogs (data-driven via RON)
//! - Rule configuration (data-driven via TOML)
//!
//! Content is consumed when a sheet is constructed and never appears in sheet
//! state. All loaders use sheet-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader, ContentFactory, LoadResult};
