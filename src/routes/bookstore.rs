//! Route groups, each mounted under its configured prefix. Collection routes answer both
//! `{prefix}` and `{prefix}/`.

use crate::handlers::{inventory, orders, sales};
use crate::service::{InventoryService, OrderService, SalesService};
use axum::{
    routing::{get, put},
    Router,
};

pub fn inventory_routes(prefix: &str, svc: InventoryService) -> Router {
    Router::new()
        .route(prefix, get(inventory::list).post(inventory::add))
        .route(&format!("{}/", prefix), get(inventory::list).post(inventory::add))
        .route(&format!("{}/:book_id", prefix), put(inventory::update))
        .with_state(svc)
}

pub fn sales_routes(prefix: &str, svc: SalesService) -> Router {
    Router::new()
        .route(prefix, get(sales::list).post(sales::create))
        .route(&format!("{}/", prefix), get(sales::list).post(sales::create))
        .with_state(svc)
}

/// Used for both customer and supplier orders.
pub fn order_routes(prefix: &str, svc: OrderService) -> Router {
    Router::new()
        .route(prefix, get(orders::list).post(orders::place))
        .route(&format!("{}/", prefix), get(orders::list).post(orders::place))
        .route(&format!("{}/:order_id", prefix), put(orders::update))
        .with_state(svc)
}
