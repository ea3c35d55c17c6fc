//! Display-line formatting for records and transactions.
//!
//! The domain crates never format output; every user-visible line is built
//! here.

use parlor_catalog::Record;
use parlor_ledger::Transaction;

/// `"<name> | <category> | ₱<price> | Stock: <stock>"`
pub fn record_line(record: &Record) -> String {
    format!(
        "{} | {} | {} | Stock: {}",
        record.name(),
        record.category(),
        peso_line(record.price()),
        record.stock()
    )
}

/// Render centavos as pesos, e.g. `11_585` → `"₱115.85"`.
fn peso_line(centavos: u64) -> String {
    format!("\u{20b1}{}.{:02}", centavos / 100, centavos % 100)
}

/// `"<id> | <flavor> | <size> | Start: <n> | Sold: <n> | Left: <n>"`
pub fn transaction_line(transaction: &Transaction) -> String {
    format!(
        "{} | {} | {} | Start: {} | Sold: {} | Left: {}",
        transaction.id(),
        transaction.flavor(),
        transaction.size(),
        transaction.starting_inventory(),
        transaction.quantity_sold(),
        transaction.inventory_left()
    )
}
