use serde::{Deserialize, Serialize};

use parlor_core::{DomainError, DomainResult};

/// One catalog entry: a priced, stocked item.
///
/// The name is the unique catalog key and is immutable after construction —
/// it indexes the record in two structures, so mutating it in place would
/// corrupt both. Price is kept in the smallest currency unit so comparisons
/// are total and ties are defined, not floating-point accidents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    category: String,
    price: u64,
    stock: u32,
}

impl Record {
    /// Build a record, validating that name and category are non-blank.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: u64,
        stock: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        if name.trim().is_empty() {
            return Err(DomainError::validation("record name must not be blank"));
        }
        if category.trim().is_empty() {
            return Err(DomainError::validation("record category must not be blank"));
        }

        Ok(Self {
            name,
            category,
            price,
            stock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Price in the smallest currency unit.
    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_exposes_its_fields() {
        let record = Record::new("Vanilla", "Classic", 50, 20).unwrap();
        assert_eq!(record.name(), "Vanilla");
        assert_eq!(record.category(), "Classic");
        assert_eq!(record.price(), 50);
        assert_eq!(record.stock(), 20);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Record::new("   ", "Classic", 50, 20).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn blank_category_is_rejected() {
        let err = Record::new("Vanilla", "", 50, 20).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
