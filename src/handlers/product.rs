//! Product CRUD handlers: list, read, create, update, toggle, delete.
//!
//! Each handler runs its route's validation plan first, then performs at most
//! one lookup and one mutation through the repository.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::product::{NewProduct, Product, ProductUpdate};
use crate::response::{self, Msg};
use crate::state::AppState;
use crate::validation::{self, FieldError};

/// Get a list of products
///
/// Return a list of products, newest first.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "Successful response", body = [Product]),
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let products = state.repo.find_all().await?;
    Ok(response::success_ok(products))
}

/// Create a new product
///
/// Returns the new record in the database.
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, description = "Bad request - invalid input data", body = [FieldError]),
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    validation::validate(validation::CREATE_PRODUCT, None, &body)?;
    let product = state.repo.create(NewProduct::from_body(&body)).await?;
    Ok(response::success_created(product))
}

/// Get a product by ID
///
/// Return a product based on its unique ID.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The ID of the product to retrieve")),
    responses(
        (status = 200, description = "Successful response", body = Product),
        (status = 400, description = "Bad request - invalid ID", body = [FieldError]),
        (status = 404, description = "Product not found", body = Msg),
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = validation::path_id(&id)?;
    let product = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;
    Ok(response::success_ok(product))
}

/// Update a product with user input
///
/// Overwrites name, price, and availability; returns the updated product.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The ID of the product to update")),
    request_body = ProductUpdate,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, description = "Bad request - invalid ID or input data", body = [FieldError]),
        (status = 404, description = "Product not found", body = Msg),
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    validation::validate(validation::UPDATE_PRODUCT, Some(&id), &body)?;
    let id = validation::path_id(&id)?;
    let product = state
        .repo
        .update(id, ProductUpdate::from_body(&body))
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;
    Ok(response::success_ok(product))
}

/// Update product availability
///
/// Flips availability to the negation of its current value.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The ID of the product to update")),
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, description = "Bad request - invalid ID", body = [FieldError]),
        (status = 404, description = "Product not found", body = Msg),
    ),
)]
pub async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = validation::path_id(&id)?;
    let product = state
        .repo
        .toggle_availability(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;
    Ok(response::success_ok(product))
}

/// Delete a product by given ID
///
/// Returns a confirmation message.
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "The ID of the product to delete")),
    responses(
        (status = 200, description = "Product deleted successfully", body = Msg),
        (status = 400, description = "Bad request - invalid ID", body = [FieldError]),
        (status = 404, description = "Product not found", body = Msg),
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = validation::path_id(&id)?;
    state
        .repo
        .delete(id)
        .await?
        .ok_or_else(|| AppError::product_not_found(id))?;
    Ok(response::success_msg(format!("Producto con id {} eliminado", id)))
}
