//! Generated OpenAPI document, rendered by Swagger UI at /docs.

use utoipa::OpenApi;

use crate::handlers::product;
use crate::product::{NewProduct, Product, ProductUpdate};
use crate::response::Msg;
use crate::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Productos",
        description = "API documentation for products management",
    ),
    paths(
        product::get_products,
        product::create_product,
        product::get_product,
        product::update_product,
        product::update_availability,
        product::delete_product,
    ),
    components(schemas(Product, NewProduct, ProductUpdate, Msg, FieldError)),
    tags(
        (name = "Products", description = "API operations related to products"),
    ),
)]
pub struct ApiDoc;
