//! `storefront-core` — shared store primitives.
//!
//! This crate contains **pure domain** primitives (no IO, no console concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{StoreError, StoreResult};
pub use id::ProductId;
