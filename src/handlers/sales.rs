//! Sales handlers.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::model::NewSale;
use crate::response::{self, SaleRecorded};
use crate::service::{FieldKind, FieldRule, RequestValidator, SalesService};
use axum::extract::State;
use axum::response::IntoResponse;

const CREATE_RULES: &[FieldRule] = &[FieldRule::required("total", FieldKind::Number)];

pub async fn list(State(svc): State<SalesService>) -> Result<impl IntoResponse, AppError> {
    let rows = svc.list().await?;
    Ok(response::listing(rows))
}

pub async fn create(
    State(svc): State<SalesService>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let sale: NewSale = RequestValidator::parse(body, CREATE_RULES)?;
    let sale_id = svc.create(&sale).await?;
    Ok(response::created(SaleRecorded {
        message: "Sale recorded".into(),
        sale_id,
    }))
}
