//! `bevstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{BeverageId, EMPTY_SLOT_ID};
