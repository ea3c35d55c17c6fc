use serde::{Deserialize, Serialize};

use parlor_core::{DomainError, DomainResult};
use parlor_sort::merge_sort;

use crate::direct::DirectIndex;
use crate::ordered::OrderedIndex;
use crate::record::Record;

/// The composed inventory index: one authoritative set of records under an
/// ordered tree and a direct map, kept in sync by construction.
///
/// Invariant: a name is present in the tree iff it is present in the map,
/// and both hold an equal record. `insert` enforces this by rejecting
/// duplicate names before touching either structure; there is no remove.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    ordered: OrderedIndex,
    direct: DirectIndex,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.direct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty()
    }

    /// Insert a record into both indexes.
    ///
    /// Fails with [`DomainError::DuplicateKey`] if the name is already
    /// cataloged, in which case neither index is touched. The uniqueness
    /// check runs first, so the two updates below cannot diverge.
    pub fn insert(&mut self, record: Record) -> DomainResult<()> {
        if self.direct.contains(record.name()) {
            return Err(DomainError::duplicate_key(record.name()));
        }

        self.ordered.insert(record.clone());
        self.direct.insert(record);
        Ok(())
    }

    /// O(1) lookup via the direct map — the default access path.
    pub fn search(&self, name: &str) -> Option<&Record> {
        self.direct.lookup(name)
    }

    /// Lookup via the tree's binary descent.
    ///
    /// Must agree with [`search`](Self::search) for every name; kept public
    /// so that equivalence stays observable.
    pub fn search_ordered(&self, name: &str) -> Option<&Record> {
        self.ordered.search(name)
    }

    /// Every cataloged record, in unspecified order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.direct.records()
    }

    /// Every record, ascending by name (tree in-order traversal).
    pub fn sorted_by_name(&self) -> Vec<&Record> {
        self.ordered.iter().collect()
    }

    /// Every record, ascending by price.
    ///
    /// Runs the stable merge sort over the name-ordered enumeration, so
    /// price ties deterministically break by name.
    pub fn sorted_by_price(&self) -> Vec<Record> {
        let records: Vec<Record> = self.ordered.iter().cloned().collect();
        merge_sort(&records, |record| record.price())
    }
}
