//! In-process repository backing the HTTP-level test suite.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ProductRepository;
use crate::error::AppError;
use crate::product::{NewProduct, Product, ProductUpdate};

#[derive(Default)]
struct Table {
    rows: Vec<Product>,
    last_id: i64,
}

/// Same contract as the Postgres repository, over a locked vector.
#[derive(Default)]
pub struct MemoryProductRepository {
    inner: RwLock<Table>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload rows; new ids keep assigning above the largest seeded id.
    pub async fn seed(&self, rows: Vec<Product>) {
        let mut table = self.inner.write().await;
        table.last_id = rows.iter().map(|p| p.id).max().unwrap_or(0);
        table.rows = rows;
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        let table = self.inner.read().await;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let table = self.inner.read().await;
        Ok(table.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: NewProduct) -> Result<Product, AppError> {
        let mut table = self.inner.write().await;
        table.last_id += 1;
        let product = Product {
            id: table.last_id,
            name: draft.name,
            price: draft.price,
            availability: true,
        };
        table.rows.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, update: ProductUpdate) -> Result<Option<Product>, AppError> {
        let mut table = self.inner.write().await;
        match table.rows.iter_mut().find(|p| p.id == id) {
            Some(row) => {
                row.name = update.name;
                row.price = update.price;
                row.availability = update.availability;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, AppError> {
        let mut table = self.inner.write().await;
        match table.rows.iter_mut().find(|p| p.id == id) {
            Some(row) => {
                row.availability = !row.availability;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<Option<Product>, AppError> {
        let mut table = self.inner.write().await;
        match table.rows.iter().position(|p| p.id == id) {
            Some(index) => Ok(Some(table.rows.remove(index))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids_and_lists_newest_first() {
        let repo = MemoryProductRepository::new();
        let first = repo.create(draft("Monitor", 300.0)).await.unwrap();
        let second = repo.create(draft("Teclado", 120.0)).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert!(first.availability);

        let all = repo.find_all().await.unwrap();
        assert_eq!(all[0].id, 2);
        assert_eq!(all[1].id, 1);
    }

    #[tokio::test]
    async fn toggle_twice_restores_availability() {
        let repo = MemoryProductRepository::new();
        let product = repo.create(draft("Monitor", 300.0)).await.unwrap();

        let flipped = repo.toggle_availability(product.id).await.unwrap().unwrap();
        assert!(!flipped.availability);
        let restored = repo.toggle_availability(product.id).await.unwrap().unwrap();
        assert!(restored.availability);
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = MemoryProductRepository::new();
        let product = repo.create(draft("Monitor", 300.0)).await.unwrap();

        let deleted = repo.delete(product.id).await.unwrap().unwrap();
        assert_eq!(deleted.id, product.id);
        assert!(repo.find_by_id(product.id).await.unwrap().is_none());
        assert!(repo.delete(product.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_ids_return_none() {
        let repo = MemoryProductRepository::new();
        assert!(repo.find_by_id(2000).await.unwrap().is_none());
        let update = ProductUpdate {
            name: "Monitor".to_string(),
            price: 300.0,
            availability: true,
        };
        assert!(repo.update(2000, update).await.unwrap().is_none());
        assert!(repo.toggle_availability(2000).await.unwrap().is_none());
    }
}
