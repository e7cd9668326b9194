//! In-memory product store used as the test double behind the store seam.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use super::store::{ProductStore, StoreError};
use crate::domain::{NewProduct, PageRequest, Product, ProductId, ProductPatch};

/// In-memory [`ProductStore`] with injectable failure.
///
/// Rows keep insertion order, which stands in for the database's
/// unspecified default ordering. When failing mode is enabled every
/// operation returns a [`StoreError`], letting tests exercise the
/// service's error rewrapping.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: Mutex<Vec<Product>>,
    failing: AtomicBool,
}

impl MemoryProductStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_failing(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database("injected failure".to_string()));
        }
        Ok(())
    }

    fn lock_rows(&self) -> std::sync::MutexGuard<'_, Vec<Product>> {
        self.rows.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn create(&self, fields: &NewProduct) -> Result<Product, StoreError> {
        self.check_failing()?;
        let now = Utc::now();
        let product = Product {
            id: ProductId::generate(),
            name: fields.name.clone(),
            description: fields.description.clone(),
            price: fields.price,
            created_at: now,
            updated_at: now,
        };
        self.lock_rows().push(product.clone());
        Ok(product)
    }

    async fn find_many(&self, range: Option<PageRequest>) -> Result<Vec<Product>, StoreError> {
        self.check_failing()?;
        let rows = self.lock_rows();
        Ok(match range {
            Some(range) => {
                let skip = usize::try_from(range.skip).unwrap_or(usize::MAX);
                let take = usize::try_from(range.take).unwrap_or(0);
                rows.iter().skip(skip).take(take).cloned().collect()
            }
            None => rows.clone(),
        })
    }

    async fn find_unique(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        self.check_failing()?;
        Ok(self.lock_rows().iter().find(|p| &p.id == id).cloned())
    }

    async fn update(&self, id: &ProductId, patch: &ProductPatch) -> Result<Product, StoreError> {
        self.check_failing()?;
        let mut rows = self.lock_rows();
        let row = rows
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::Database("row not found".to_string()))?;
        if let Some(name) = &patch.name {
            row.name.clone_from(name);
        }
        if let Some(description) = &patch.description {
            row.description = Some(description.clone());
        }
        if let Some(price) = patch.price {
            row.price = price;
        }
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: &ProductId) -> Result<Product, StoreError> {
        self.check_failing()?;
        let mut rows = self.lock_rows();
        let index = rows
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StoreError::Database("row not found".to_string()))?;
        Ok(rows.remove(index))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        self.check_failing()?;
        Ok(self.lock_rows().len() as i64)
    }

    async fn search_by_name(&self, keyword: &str) -> Result<Vec<Product>, StoreError> {
        self.check_failing()?;
        let needle = keyword.to_lowercase();
        Ok(self
            .lock_rows()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
