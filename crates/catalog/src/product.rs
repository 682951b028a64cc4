use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId, StoreError, StoreResult};

/// A product held by the store: identity, description and units on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    quantity: u64,
}

impl ProductRecord {
    /// Build a record, rejecting blank names.
    pub fn new(id: ProductId, name: impl Into<String>, quantity: u64) -> StoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::validation(format!(
                "product {id}: name cannot be empty"
            )));
        }
        Ok(Self { id, name, quantity })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Text shown next to the id when listing.
    pub fn display_string(&self) -> String {
        format!("{} (qty: {})", self.name, self.quantity)
    }

    /// Re-run construction checks (deserialized records bypass `new`).
    pub(crate) fn validate(&self) -> StoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation(format!(
                "product {}: name cannot be empty",
                self.id
            )));
        }
        Ok(())
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> ProductId {
        ProductId::new(n).unwrap()
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = ProductRecord::new(id(1), "   ", 3).unwrap_err();
        match err {
            StoreError::Validation(msg) if msg.contains("name cannot be empty") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn display_string_contains_name_and_quantity() {
        let record = ProductRecord::new(id(1), "Compass", 5).unwrap();
        let shown = record.display_string();
        assert!(shown.contains("Compass"));
        assert!(shown.contains('5'));
    }

    #[test]
    fn deserializes_from_seed_shape() {
        let record: ProductRecord =
            serde_json::from_str(r#"{ "id": 2, "name": "Rope", "quantity": 10 }"#).unwrap();
        assert_eq!(record.id(), id(2));
        assert_eq!(record.name(), "Rope");
        assert_eq!(record.quantity(), 10);
    }

    #[test]
    fn negative_quantity_does_not_deserialize() {
        let parsed =
            serde_json::from_str::<ProductRecord>(r#"{ "id": 2, "name": "Rope", "quantity": -1 }"#);
        assert!(parsed.is_err());
    }
}
