//! Persistence seam: six operations against plain product records.

mod memory;
mod pg;

pub use memory::MemoryProductRepository;
pub use pg::PgProductRepository;

use async_trait::async_trait;

use crate::error::AppError;
use crate::product::{NewProduct, Product, ProductUpdate};

/// One method per API operation. `None` means the id matched no row; storage
/// failures surface as [`AppError::Db`].
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All rows, newest id first.
    async fn find_all(&self) -> Result<Vec<Product>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    async fn create(&self, draft: NewProduct) -> Result<Product, AppError>;

    /// Overwrite name, price, and availability of one row.
    async fn update(&self, id: i64, update: ProductUpdate) -> Result<Option<Product>, AppError>;

    /// Flip availability to the logical negation of its current value.
    async fn toggle_availability(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Returns the deleted row, or `None` when nothing matched.
    async fn delete(&self, id: i64) -> Result<Option<Product>, AppError>;
}
