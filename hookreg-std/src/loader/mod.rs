//! Handler loading.
//!
//! This module provides the compile-time registry that backs
//! [`HandlerLoader`](hookreg_core::HandlerLoader): handler units are
//! registered into a [`Catalog`] (explicitly, or through `inventory` with the
//! `inventory` feature) and resolved by a [`CatalogLoader`].

pub mod catalog;
pub mod catalog_loader;
#[cfg(feature = "inventory")]
pub mod collected;

pub use catalog::{Catalog, CatalogBuilder, HandlerUnit, OnLoad};
pub use catalog_loader::CatalogLoader;
#[cfg(feature = "inventory")]
pub use collected::{HandlerRegistration, UnitInitializer};
