//! HTTP handlers for the inventory, sales, and order route groups.

pub mod inventory;
pub mod orders;
pub mod sales;

use crate::error::AppError;

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}
