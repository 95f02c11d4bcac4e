//! HTTP handlers for the product catalog.

pub mod product;
pub use product::*;
