use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Binary search tree keyed by record name.
///
/// Supports insert, exact-key search and in-order enumeration; there is no
/// remove. Children are exclusively-owned slots, so the structure is a strict
/// tree with no sharing and no cycles by construction.
///
/// Known behavior inherited from the original structure: inserting a name
/// equal to an existing key routes right and creates a second node, which an
/// exact-key search can never reach while the first node sits above it on
/// the descent path. The [`Catalog`](crate::Catalog) layer rejects duplicate
/// names before they get here, so composed use never hits this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedIndex {
    root: Option<Box<Node>>,
    len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Node {
    record: Record,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(record: Record) -> Self {
        Self {
            record,
            left: None,
            right: None,
        }
    }
}

impl OrderedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a record, keyed by its name.
    ///
    /// Descends recursively: strictly smaller names go left, everything else
    /// goes right. Each call attaches exactly one new leaf.
    pub fn insert(&mut self, record: Record) {
        Self::insert_at(&mut self.root, record);
        self.len += 1;
    }

    fn insert_at(slot: &mut Option<Box<Node>>, record: Record) {
        match slot {
            None => *slot = Some(Box::new(Node::new(record))),
            Some(node) => {
                if record.name() < node.record.name() {
                    Self::insert_at(&mut node.left, record);
                } else {
                    Self::insert_at(&mut node.right, record);
                }
            }
        }
    }

    /// Exact-key search by binary descent.
    ///
    /// Returns the first match on the descent path, or `None` once an empty
    /// slot is reached.
    pub fn search(&self, name: &str) -> Option<&Record> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            if name == node.record.name() {
                return Some(&node.record);
            }
            current = if name < node.record.name() {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }

        None
    }

    /// In-order traversal: every record in ascending name order.
    ///
    /// `O(n)` over the full iteration, holding `O(h)` traversal state.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<'a> IntoIterator for &'a OrderedIndex {
    type Item = &'a Record;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`OrderedIndex`].
///
/// The stack holds the not-yet-visited left spine of the current subtree, so
/// it never grows beyond the tree height.
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.record)
    }
}
