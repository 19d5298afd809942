//! Response helpers and acknowledgement bodies returned by mutating endpoints.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Body of `POST /inventory/`.
#[derive(Debug, Serialize)]
pub struct BookAdded {
    pub message: String,
    pub book_id: i64,
}

/// Body of `PUT /inventory/{book_id}`.
#[derive(Debug, Serialize)]
pub struct QuantityUpdated {
    pub message: String,
    pub new_quantity: i64,
}

#[derive(Debug, Serialize)]
pub struct SaleRecorded {
    pub message: String,
    pub sale_id: i64,
}

#[derive(Debug, Serialize)]
pub struct OrderPlaced {
    pub message: String,
    pub order_id: i64,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdated {
    pub message: String,
    pub new_status: String,
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// Bare JSON array, as returned by every list endpoint.
pub fn listing<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
