use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parlor_core::{DomainError, DomainResult};

/// Transaction identifier (human-assigned, e.g. `"T10008"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Serving size sold in a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServingSize {
    Small,
    Medium,
    Large,
}

impl core::fmt::Display for ServingSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            ServingSize::Small => "Small",
            ServingSize::Medium => "Medium",
            ServingSize::Large => "Large",
        };
        f.write_str(label)
    }
}

/// One recorded sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    flavor: String,
    size: ServingSize,
    price: u64,
    quantity_sold: u32,
    starting_inventory: u32,
    inventory_left: u32,
    occurred_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction; `inventory_left` is derived.
    ///
    /// Rejects selling more units than were in stock.
    pub fn new(
        id: TransactionId,
        flavor: impl Into<String>,
        size: ServingSize,
        price: u64,
        quantity_sold: u32,
        starting_inventory: u32,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let flavor = flavor.into();

        if flavor.trim().is_empty() {
            return Err(DomainError::validation("transaction flavor must not be blank"));
        }
        if quantity_sold > starting_inventory {
            return Err(DomainError::validation(format!(
                "cannot sell {quantity_sold} units with only {starting_inventory} in stock"
            )));
        }

        Ok(Self {
            id,
            flavor,
            size,
            price,
            quantity_sold,
            starting_inventory,
            inventory_left: starting_inventory - quantity_sold,
            occurred_at,
        })
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    pub fn size(&self) -> ServingSize {
        self.size
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn quantity_sold(&self) -> u32 {
        self.quantity_sold
    }

    pub fn starting_inventory(&self) -> u32 {
        self.starting_inventory
    }

    pub fn inventory_left(&self) -> u32 {
        self.inventory_left
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Append-only transaction log, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLog {
    entries: VecDeque<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a transaction at the front of the log.
    pub fn record(&mut self, transaction: Transaction) {
        self.entries.push_front(transaction);
    }

    /// All transactions, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    /// Linear scan for a transaction id, case-insensitive.
    ///
    /// Ids are expected to be unique, so the first hit wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Transaction> {
        self.entries
            .iter()
            .find(|t| t.id.as_str().eq_ignore_ascii_case(id))
    }

    /// Linear scan for every transaction of a flavor, case-insensitive,
    /// newest first.
    pub fn find_by_flavor(&self, flavor: &str) -> Vec<&Transaction> {
        self.entries
            .iter()
            .filter(|t| t.flavor.eq_ignore_ascii_case(flavor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    fn transaction(id: &str, flavor: &str, sold: u32, start: u32) -> Transaction {
        Transaction::new(
            TransactionId::new(id),
            flavor,
            ServingSize::Medium,
            11_740,
            sold,
            start,
            test_time(),
        )
        .unwrap()
    }

    #[test]
    fn inventory_left_is_derived() {
        let sale = transaction("T10008", "Chocolate", 3, 176);
        assert_eq!(sale.inventory_left(), 173);
    }

    #[test]
    fn overselling_is_rejected() {
        let err = Transaction::new(
            TransactionId::new("T10010"),
            "Chocolate",
            ServingSize::Small,
            11_740,
            200,
            176,
            test_time(),
        )
        .unwrap_err();

        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn log_iterates_newest_first() {
        let mut log = TransactionLog::new();
        log.record(transaction("T10006", "Cookies", 2, 85));
        log.record(transaction("T10007", "Strawberry", 9, 130));
        log.record(transaction("T10008", "Chocolate", 3, 176));

        let ids: Vec<&str> = log.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["T10008", "T10007", "T10006"]);
    }

    #[test]
    fn find_by_id_is_case_insensitive_first_match() {
        let mut log = TransactionLog::new();
        log.record(transaction("T10006", "Cookies", 2, 85));
        log.record(transaction("T10007", "Strawberry", 9, 130));

        assert_eq!(log.find_by_id("t10006").unwrap().flavor(), "Cookies");
        assert!(log.find_by_id("T99999").is_none());
    }

    #[test]
    fn find_by_flavor_returns_all_matches_newest_first() {
        let mut log = TransactionLog::new();
        log.record(transaction("T10007", "Strawberry", 9, 130));
        log.record(transaction("T10008", "Chocolate", 3, 176));
        log.record(transaction("T10009", "strawberry", 15, 137));

        let hits = log.find_by_flavor("STRAWBERRY");
        let ids: Vec<&str> = hits.iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, vec!["T10009", "T10007"]);

        assert!(log.find_by_flavor("Pistachio").is_empty());
    }
}
