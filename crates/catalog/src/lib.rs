//! Catalog domain module.
//!
//! This crate contains the in-memory inventory index, implemented purely as
//! deterministic domain logic (no IO, no storage). One authoritative set of
//! records is kept under two simultaneous access structures: an ordered tree
//! keyed by name and a direct name-to-record map.

pub mod catalog;
pub mod direct;
pub mod ordered;
pub mod record;

pub use catalog::Catalog;
pub use direct::DirectIndex;
pub use ordered::OrderedIndex;
pub use record::Record;
