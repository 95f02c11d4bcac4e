//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "data": ... }` envelope for successful reads and writes.
#[derive(Serialize)]
pub struct Data<T> {
    pub data: T,
}

/// `{ "msg": ... }` envelope for confirmations and not-found responses.
#[derive(Serialize, ToSchema)]
pub struct Msg {
    #[schema(example = "Producto con id 1 eliminado")]
    pub msg: String,
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, Json<Data<T>>) {
    (StatusCode::OK, Json(Data { data }))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, Json<Data<T>>) {
    (StatusCode::CREATED, Json(Data { data }))
}

pub fn success_msg(msg: String) -> (StatusCode, Json<Msg>) {
    (StatusCode::OK, Json(Msg { msg }))
}
