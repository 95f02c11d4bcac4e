//! Route tables.

pub mod product;
pub use product::product_routes;
