//! Handlers shared by customer and supplier orders; the `OrderService` in state decides which.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::model::{NewOrder, StatusChange};
use crate::response::{self, OrderPlaced, StatusUpdated};
use crate::service::{FieldKind, FieldRule, OrderService, RequestValidator};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde_json::Value;

const UPDATE_RULES: &[FieldRule] = &[FieldRule::required("status", FieldKind::Text)];

pub async fn list(State(svc): State<OrderService>) -> Result<impl IntoResponse, AppError> {
    let rows = svc.list().await?;
    Ok(response::listing(rows))
}

pub async fn place(
    State(svc): State<OrderService>,
    JsonObject(mut body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let kind = svc.kind();
    let rules = [
        FieldRule::required(kind.name_field(), FieldKind::Text),
        FieldRule::optional("status", FieldKind::Text),
    ];
    RequestValidator::validate(&body, &rules)?;
    let order = NewOrder {
        party_name: take_string(&mut body, kind.name_field()).unwrap_or_default(),
        status: take_string(&mut body, "status"),
    };
    let order_id = svc.place(&order).await?;
    Ok(response::created(OrderPlaced {
        message: format!("{} placed", kind.label()),
        order_id,
    }))
}

pub async fn update(
    State(svc): State<OrderService>,
    Path(id_str): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let order_id = parse_id(&id_str)?;
    let change: StatusChange = RequestValidator::parse(body, UPDATE_RULES)?;
    let new_status = svc.update_status(order_id, &change.status).await?;
    Ok(response::ok(StatusUpdated {
        message: format!("{} updated", svc.kind().label()),
        new_status,
    }))
}

fn take_string(body: &mut serde_json::Map<String, Value>, key: &str) -> Option<String> {
    match body.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}
