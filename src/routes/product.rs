//! Verb+path map for the product catalog, mounted under /api/products.
//! Validation runs at each handler's entry; the aggregation gate rejects
//! before any repository call.

use axum::{routing::get, Router};

use crate::handlers::product::{
    create_product, delete_product, get_product, get_products, update_availability,
    update_product,
};
use crate::state::AppState;

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_products).post(create_product))
        .route(
            "/:id",
            get(get_product)
                .put(update_product)
                .patch(update_availability)
                .delete(delete_product),
        )
        .with_state(state)
}
