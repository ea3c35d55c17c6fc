use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Direct name-to-record map for O(1) expected-time lookup.
///
/// Insert is an unconditional upsert (last write wins), which diverges from
/// the tree's duplicate-permitting behavior — callers must insert into both
/// structures together, which is what [`Catalog`](crate::Catalog) is for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectIndex {
    entries: HashMap<String, Record>,
}

impl DirectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Upsert a record under its name; returns the displaced record, if any.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.entries.insert(record.name().to_string(), record)
    }

    pub fn lookup(&self, name: &str) -> Option<&Record> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All records, in unspecified order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.values()
    }
}
