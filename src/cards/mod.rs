//! Card system: descriptors, catalog, and the base card set.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card descriptor, identified by name
//! - `CardKind`: Coin, Point, Action, Potion
//! - `CardCatalog`: Name lookup plus supply pile sizes
//!
//! The catalog is configuration: the engine never refers to a concrete
//! card by name.

pub mod base;
pub mod definition;
pub mod registry;

pub use base::base_catalog;
pub use definition::{Card, CardKind};
pub use registry::{CardCatalog, CatalogEntry};
