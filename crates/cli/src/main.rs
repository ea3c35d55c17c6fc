//! `parlor` — interactive console front end for the scoop-shop inventory.

use std::io::{self, BufRead, Write};

use anyhow::Context;

use parlor_catalog::{Catalog, Record};
use parlor_ledger::TransactionLog;

mod format;
mod menu;
mod preload;

use format::{record_line, transaction_line};
use menu::Choice;

fn main() -> anyhow::Result<()> {
    parlor_observability::init();

    let mut catalog = Catalog::new();
    let mut ledger = TransactionLog::new();

    // Demo data on by default; PARLOR_NO_PRELOAD starts empty.
    if std::env::var_os("PARLOR_NO_PRELOAD").is_none() {
        preload::fill(&mut catalog, &mut ledger)?;
        tracing::info!(records = catalog.len(), transactions = ledger.len(), "preloaded demo data");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    run(&mut catalog, &mut ledger, &mut input, &mut output)
}

fn run(
    catalog: &mut Catalog,
    ledger: &mut TransactionLog,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    loop {
        write_menu(output)?;

        let Some(line) = read_line(input)? else {
            // stdin closed; treat like exit.
            break;
        };

        let Some(choice) = Choice::parse(&line) else {
            writeln!(output, "Invalid choice. Try again.")?;
            continue;
        };

        match choice {
            Choice::ViewByName => {
                writeln!(output, "\n--- INVENTORY (A-Z) ---")?;
                for record in catalog.sorted_by_name() {
                    writeln!(output, "{}", record_line(record))?;
                }
            }
            Choice::SearchFlavor => {
                writeln!(output, "Enter flavor: ")?;
                let Some(name) = read_line(input)? else { break };
                // Both access paths, side by side; they always agree.
                match catalog.search_ordered(&name) {
                    Some(record) => writeln!(output, "Tree search: {}", record_line(record))?,
                    None => writeln!(output, "Tree search: flavor not found.")?,
                }
                match catalog.search(&name) {
                    Some(record) => writeln!(output, "Map lookup: {}", record_line(record))?,
                    None => writeln!(output, "Map lookup: flavor not found.")?,
                }
            }
            Choice::ViewByPrice => {
                writeln!(output, "\n--- INVENTORY BY PRICE ---")?;
                for record in catalog.sorted_by_price() {
                    writeln!(output, "{}", record_line(&record))?;
                }
            }
            Choice::AddFlavor => add_flavor(catalog, input, output)?,
            Choice::ViewTransactions => {
                writeln!(output, "\n--- ALL TRANSACTIONS ---")?;
                for transaction in ledger.iter() {
                    writeln!(output, "{}", transaction_line(transaction))?;
                }
            }
            Choice::SearchTransactionId => {
                writeln!(output, "Enter transaction ID: ")?;
                let Some(id) = read_line(input)? else { break };
                match ledger.find_by_id(&id) {
                    Some(transaction) => writeln!(output, "{}", transaction_line(transaction))?,
                    None => writeln!(output, "Transaction not found.")?,
                }
            }
            Choice::SearchTransactionFlavor => {
                writeln!(output, "Enter flavor: ")?;
                let Some(flavor) = read_line(input)? else { break };
                let hits = ledger.find_by_flavor(&flavor);
                if hits.is_empty() {
                    writeln!(output, "No transactions found for this flavor.")?;
                } else {
                    for transaction in hits {
                        writeln!(output, "{}", transaction_line(transaction))?;
                    }
                }
            }
            Choice::Exit => {
                writeln!(output, "Exiting.")?;
                break;
            }
        }
    }

    Ok(())
}

fn write_menu(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "\n=== PARLOR INVENTORY MENU ===")?;
    writeln!(output, "1. View inventory (alphabetical)")?;
    writeln!(output, "2. Search flavor")?;
    writeln!(output, "3. View inventory by price")?;
    writeln!(output, "4. Add flavor")?;
    writeln!(output, "5. View all transactions")?;
    writeln!(output, "6. Search transaction by ID")?;
    writeln!(output, "7. Search transactions by flavor")?;
    writeln!(output, "8. Exit")?;
    write!(output, "Enter choice: ")?;
    output.flush()
}

/// Read one trimmed line; `None` means stdin is closed.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_flavor(
    catalog: &mut Catalog,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(output, "Enter name: ")?;
    let Some(name) = read_line(input)? else { return Ok(()) };
    writeln!(output, "Enter category: ")?;
    let Some(category) = read_line(input)? else { return Ok(()) };

    writeln!(output, "Enter price (centavos): ")?;
    let Some(price_raw) = read_line(input)? else { return Ok(()) };
    let Ok(price) = price_raw.parse::<u64>() else {
        writeln!(output, "Price must be a whole number of centavos.")?;
        return Ok(());
    };

    writeln!(output, "Enter stock: ")?;
    let Some(stock_raw) = read_line(input)? else { return Ok(()) };
    let Ok(stock) = stock_raw.parse::<u32>() else {
        writeln!(output, "Stock must be a whole number.")?;
        return Ok(());
    };

    let record = match Record::new(name, category, price, stock) {
        Ok(record) => record,
        Err(err) => {
            writeln!(output, "Cannot add flavor: {err}")?;
            return Ok(());
        }
    };

    match catalog.insert(record) {
        Ok(()) => {
            writeln!(output, "Flavor added.").context("writing confirmation")?;
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected catalog insert");
            writeln!(output, "Cannot add flavor: {err}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut catalog = Catalog::new();
        let mut ledger = TransactionLog::new();
        preload::fill(&mut catalog, &mut ledger).unwrap();

        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&mut catalog, &mut ledger, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn alphabetical_view_lists_preloaded_flavors_in_name_order() {
        let output = run_session("1\n8\n");

        let chocolate = output.find("Chocolate | Classic").unwrap();
        let mango = output.find("Mango | Seasonal").unwrap();
        let matcha = output.find("Matcha | Premium").unwrap();
        let vanilla = output.find("Vanilla | Classic").unwrap();
        assert!(chocolate < mango && mango < matcha && matcha < vanilla);
    }

    #[test]
    fn price_view_lists_cheapest_first() {
        let output = run_session("3\n8\n");

        let vanilla = output.find("Vanilla | Classic | \u{20b1}50.00 | Stock: 20").unwrap();
        let matcha = output.find("Matcha | Premium | \u{20b1}75.00 | Stock: 10").unwrap();
        assert!(vanilla < matcha);
    }

    #[test]
    fn flavor_search_shows_both_access_paths() {
        let output = run_session("2\nMatcha\n8\n");

        assert!(output.contains("Tree search: Matcha | Premium | \u{20b1}75.00 | Stock: 10"));
        assert!(output.contains("Map lookup: Matcha | Premium | \u{20b1}75.00 | Stock: 10"));
    }

    #[test]
    fn searching_a_missing_flavor_reports_not_found_on_both_paths() {
        let output = run_session("2\nStrawberry\n8\n");
        assert!(output.contains("Tree search: flavor not found."));
        assert!(output.contains("Map lookup: flavor not found."));
    }

    #[test]
    fn duplicate_add_is_reported() {
        let output = run_session("4\nVanilla\nClassic\n50\n20\n8\n");
        assert!(output.contains("Cannot add flavor: duplicate key: Vanilla"));
    }

    #[test]
    fn malformed_choice_reprints_menu() {
        let output = run_session("banana\n8\n");
        assert!(output.contains("Invalid choice. Try again."));
    }

    #[test]
    fn closed_stdin_exits_cleanly() {
        let output = run_session("");
        assert!(output.contains("=== PARLOR INVENTORY MENU ==="));
    }
}
