//! Products API: REST catalog service backed by PostgreSQL.

pub mod config;
pub mod docs;
pub mod error;
pub mod product;
pub mod repository;
pub mod response;
pub mod state;
pub mod store;
pub mod validation;
pub mod handlers;
pub mod routes;
pub mod server;

pub use config::{DatabaseSettings, ServerSettings, Settings};
pub use error::AppError;
pub use product::{NewProduct, Product, ProductUpdate};
pub use repository::{MemoryProductRepository, PgProductRepository, ProductRepository};
pub use server::{app, serve};
pub use state::AppState;
pub use store::Store;
