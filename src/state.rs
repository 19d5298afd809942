//! Shared application state. Every service is built around one injected `Store`.

use crate::service::{InventoryService, OrderService, SalesService};
use crate::store::Store;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
    pub inventory: InventoryService,
    pub sales: SalesService,
    pub customer_orders: OrderService,
    pub supplier_orders: OrderService,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState {
            inventory: InventoryService::new(store.clone()),
            sales: SalesService::new(store.clone()),
            customer_orders: OrderService::customers(store.clone()),
            supplier_orders: OrderService::suppliers(store.clone()),
            store,
        }
    }
}
