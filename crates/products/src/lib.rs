//! Products domain module.
//!
//! This crate contains the sellable product entity, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductId};
