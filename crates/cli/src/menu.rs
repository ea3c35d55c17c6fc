//! Menu input parsing, kept pure so it is unit-testable.

/// One numbered menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    ViewByName,
    SearchFlavor,
    ViewByPrice,
    AddFlavor,
    ViewTransactions,
    SearchTransactionId,
    SearchTransactionFlavor,
    Exit,
}

impl Choice {
    /// Parse a raw input line into a menu choice.
    ///
    /// Surrounding whitespace is ignored; anything that is not one of the
    /// listed numbers is `None` (the caller re-prompts).
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::ViewByName),
            "2" => Some(Self::SearchFlavor),
            "3" => Some(Self::ViewByPrice),
            "4" => Some(Self::AddFlavor),
            "5" => Some(Self::ViewTransactions),
            "6" => Some(Self::SearchTransactionId),
            "7" => Some(Self::SearchTransactionFlavor),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }
}
