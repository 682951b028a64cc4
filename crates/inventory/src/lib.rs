//! Inventory manager.
//!
//! Turns user intents (list, buy, cancel) into catalog operations, validating
//! input shape before any stock is touched. Deterministic logic only (no IO).

pub mod manager;

pub use manager::InventoryManager;
