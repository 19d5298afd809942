//! Inventory handlers: list stock, add a book, set its quantity.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::model::{NewBook, QuantityChange};
use crate::response::{self, BookAdded, QuantityUpdated};
use crate::service::{FieldKind, FieldRule, InventoryService, RequestValidator};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

const ADD_RULES: &[FieldRule] = &[
    FieldRule::required("title", FieldKind::Text),
    FieldRule::required("author", FieldKind::Text),
    FieldRule::optional("quantity", FieldKind::Integer),
];

const UPDATE_RULES: &[FieldRule] = &[FieldRule::required("quantity", FieldKind::Integer)];

pub async fn list(State(svc): State<InventoryService>) -> Result<impl IntoResponse, AppError> {
    let rows = svc.list().await?;
    Ok(response::listing(rows))
}

pub async fn add(
    State(svc): State<InventoryService>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let book: NewBook = RequestValidator::parse(body, ADD_RULES)?;
    let book_id = svc.add(&book).await?;
    Ok(response::created(BookAdded {
        message: "Book added to inventory".into(),
        book_id,
    }))
}

pub async fn update(
    State(svc): State<InventoryService>,
    Path(id_str): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let book_id = parse_id(&id_str)?;
    let change: QuantityChange = RequestValidator::parse(body, UPDATE_RULES)?;
    let new_quantity = svc.update_quantity(book_id, change.quantity).await?;
    Ok(response::ok(QuantityUpdated {
        message: "Inventory updated".into(),
        new_quantity,
    }))
}
