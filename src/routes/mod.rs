//! Route groups mounted by `build_router`.

mod bookstore;
mod common;

pub use bookstore::{inventory_routes, order_routes, sales_routes};
pub use common::common_routes;
