//! Application assembly: open the store, create the schema, and mount every route group.

use crate::config::{RoutePrefixes, Settings};
use crate::error::AppError;
use crate::routes::{common_routes, inventory_routes, order_routes, sales_routes};
use crate::state::AppState;
use crate::store::{ensure_tables, Store, StoreConfig};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Open the store described by `settings` and make sure all tables exist.
pub async fn init_store(settings: &Settings) -> Result<Store, AppError> {
    let store = Store::open(&StoreConfig::new(&settings.database_url, settings.max_connections)).await?;
    ensure_tables(store.pool()).await?;
    tracing::info!("store ready");
    Ok(store)
}

/// Full router: operational routes plus the four route groups under their prefixes.
pub fn build_router(state: AppState, prefixes: &RoutePrefixes, body_limit_bytes: usize) -> Router {
    tracing::info!(
        inventory = %prefixes.inventory,
        sales = %prefixes.sales,
        customer_orders = %prefixes.customer_orders,
        supplier_orders = %prefixes.supplier_orders,
        "mounting routes"
    );
    Router::new()
        .merge(common_routes(state.store.clone()))
        .merge(inventory_routes(&prefixes.inventory, state.inventory))
        .merge(sales_routes(&prefixes.sales, state.sales))
        .merge(order_routes(&prefixes.customer_orders, state.customer_orders))
        .merge(order_routes(&prefixes.supplier_orders, state.supplier_orders))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(body_limit_bytes)),
        )
}
