//! Catalog store.
//!
//! Owns the product records and the only primitive that mutates stock. Pure
//! in-memory logic (no IO, no console).

pub mod product;
pub mod store;

pub use product::ProductRecord;
pub use store::{Catalog, Entries};
