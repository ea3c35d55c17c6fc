//! Demo data: a small catalog and a handful of sale transactions.

use anyhow::Result;
use chrono::Utc;

use parlor_catalog::{Catalog, Record};
use parlor_ledger::{ServingSize, Transaction, TransactionId, TransactionLog};

/// Populate the catalog and ledger with the demo dataset.
pub fn fill(catalog: &mut Catalog, ledger: &mut TransactionLog) -> Result<()> {
    // Prices in centavos, like everything else in the domain.
    for (name, category, price, stock) in [
        ("Vanilla", "Classic", 5_000, 20),
        ("Chocolate", "Classic", 5_500, 15),
        ("Matcha", "Premium", 7_500, 10),
        ("Mango", "Seasonal", 6_000, 12),
    ] {
        catalog.insert(Record::new(name, category, price, stock)?)?;
    }

    // Oldest first; the log keeps newest at the front.
    for (id, flavor, size, price, sold, start) in [
        ("T10006", "Cookies", ServingSize::Medium, 11_585, 2, 85),
        ("T10007", "Strawberry", ServingSize::Small, 11_962, 9, 130),
        ("T10008", "Chocolate", ServingSize::Medium, 11_740, 3, 176),
        ("T10009", "Strawberry", ServingSize::Medium, 10_968, 15, 137),
    ] {
        ledger.record(Transaction::new(
            TransactionId::new(id),
            flavor,
            size,
            price,
            sold,
            start,
            Utc::now(),
        )?);
    }

    Ok(())
}
