//! Bookstore backend: inventory, sales, and customer/supplier order endpoints over SQLite.

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use app::{build_router, init_store};
pub use config::{RoutePrefixes, Settings};
pub use error::{AppError, ConfigError};
pub use model::OrderKind;
pub use routes::{common_routes, inventory_routes, order_routes, sales_routes};
pub use service::{InventoryService, OrderService, SalesService};
pub use state::AppState;
pub use store::{ensure_tables, Store, StoreConfig};
