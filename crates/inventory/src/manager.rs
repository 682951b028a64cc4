use storefront_catalog::{Catalog, Entries, ProductRecord};
use storefront_core::{ProductId, StoreError, StoreResult};

/// Validating front for a [`Catalog`].
///
/// Checks run in a fixed order: quantity shape, then product existence, then
/// stock availability. A failed check leaves the catalog untouched.
#[derive(Debug, Clone)]
pub struct InventoryManager {
    catalog: Catalog,
}

impl InventoryManager {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn product(&self, id: ProductId) -> StoreResult<&ProductRecord> {
        self.catalog.get(id)
    }

    /// Current `(id, display string)` pairs in catalog order.
    pub fn list(&self) -> Entries<'_> {
        self.catalog.entries()
    }

    /// Remove `quantity` units from stock. Returns the remaining stock.
    pub fn buy(&mut self, id: ProductId, quantity: i64) -> StoreResult<u64> {
        let result = self.try_buy(id, quantity);
        match &result {
            Ok(stock) => tracing::info!(product_id = %id, quantity, stock, "purchase recorded"),
            Err(err) => tracing::warn!(product_id = %id, quantity, error = %err, "purchase rejected"),
        }
        result
    }

    /// Return `quantity` units to stock. Returns the new stock.
    ///
    /// There is no restock ceiling beyond what `u64` can hold.
    pub fn cancel(&mut self, id: ProductId, quantity: i64) -> StoreResult<u64> {
        let result = self.try_cancel(id, quantity);
        match &result {
            Ok(stock) => tracing::info!(product_id = %id, quantity, stock, "cancellation recorded"),
            Err(err) => {
                tracing::warn!(product_id = %id, quantity, error = %err, "cancellation rejected")
            }
        }
        result
    }

    fn try_buy(&mut self, id: ProductId, quantity: i64) -> StoreResult<u64> {
        let requested = ensure_positive(quantity)?;
        let available = self.catalog.get(id)?.quantity();

        if available < requested {
            return Err(StoreError::InsufficientStock {
                requested,
                available,
            });
        }

        self.catalog.adjust_quantity(id, -quantity)
    }

    fn try_cancel(&mut self, id: ProductId, quantity: i64) -> StoreResult<u64> {
        ensure_positive(quantity)?;
        self.catalog.adjust_quantity(id, quantity)
    }
}

fn ensure_positive(quantity: i64) -> StoreResult<u64> {
    if quantity <= 0 {
        return Err(StoreError::InvalidQuantity(quantity));
    }
    Ok(quantity.unsigned_abs())
}
