//! Insertion-ordered product catalog.

use std::collections::HashMap;

use storefront_core::{Entity, ProductId, StoreError, StoreResult};

use crate::product::ProductRecord;

/// Ordered mapping from `ProductId` to `ProductRecord`.
///
/// Records live in a `Vec` (display order = insertion order) with an id→index
/// map for constant-time lookup. The record set is fixed at construction; only
/// quantities change afterwards, and only through [`Catalog::adjust_quantity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProductRecord>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog from a seed, keeping the seed's order.
    ///
    /// Rejects an empty seed, duplicate ids, and records with blank names.
    pub fn from_records<I>(records: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = ProductRecord>,
    {
        let records: Vec<ProductRecord> = records.into_iter().collect();
        if records.is_empty() {
            return Err(StoreError::validation("catalog seed cannot be empty"));
        }

        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            record.validate()?;
            if index.insert(record.id(), pos).is_some() {
                return Err(StoreError::validation(format!(
                    "duplicate product id {}",
                    record.id()
                )));
            }
        }

        Ok(Self { records, index })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.index.contains_key(&id)
    }

    /// Look up a record by id.
    pub fn get(&self, id: ProductId) -> StoreResult<&ProductRecord> {
        self.index
            .get(&id)
            .map(|&pos| &self.records[pos])
            .ok_or(StoreError::not_found(id))
    }

    /// `(id, display string)` pairs in insertion order.
    ///
    /// Each call starts a fresh pass over the current state.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.records.iter(),
        }
    }

    /// Apply `quantity += delta`, returning the new quantity.
    ///
    /// Fails without mutating when the id is unknown, when the result would be
    /// negative, or when it would exceed `u64::MAX`.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> StoreResult<u64> {
        let pos = *self.index.get(&id).ok_or(StoreError::not_found(id))?;
        let record = &mut self.records[pos];
        let current = record.quantity();

        let updated = current.checked_add_signed(delta).ok_or_else(|| {
            if delta < 0 {
                StoreError::InsufficientStock {
                    requested: delta.unsigned_abs(),
                    available: current,
                }
            } else {
                StoreError::StockOverflow(id)
            }
        })?;

        record.set_quantity(updated);
        tracing::debug!(product_id = %id, delta, quantity = updated, "quantity adjusted");
        Ok(updated)
    }
}

/// Lazy iterator over catalog entries.
///
/// A clone is an independent cursor at the same position; call
/// [`Catalog::entries`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: std::slice::Iter<'a, ProductRecord>,
}

impl Iterator for Entries<'_> {
    type Item = (ProductId, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|record| (record.id(), record.display_string()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
