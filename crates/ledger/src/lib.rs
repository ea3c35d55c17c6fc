//! Sales transaction log.
//!
//! A thin, append-only record of scoop sales kept newest-first. Unlike the
//! catalog, this has no ordering structure and no index — searches are plain
//! linear scans by transaction id or flavor, which is all this log needs to
//! support.

pub mod transaction;

pub use transaction::{ServingSize, Transaction, TransactionId, TransactionLog};
