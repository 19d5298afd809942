//! Services over the store, one per route group.

mod inventory;
mod orders;
mod sales;
mod validation;
pub use inventory::InventoryService;
pub use orders::OrderService;
pub use sales::SalesService;
pub use validation::{FieldKind, FieldRule, RequestValidator};
