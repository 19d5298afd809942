//! Customer and supplier orders. Both kinds share one implementation; `OrderKind` picks the
//! table and the name column.

use crate::error::AppError;
use crate::model::{NewOrder, OrderEntry, OrderKind, OrderRow, DEFAULT_STATUS};
use crate::store::Store;
use chrono::Utc;

#[derive(Clone, Debug)]
pub struct OrderService {
    store: Store,
    kind: OrderKind,
}

impl OrderService {
    pub fn new(store: Store, kind: OrderKind) -> Self {
        OrderService { store, kind }
    }

    pub fn customers(store: Store) -> Self {
        Self::new(store, OrderKind::Customer)
    }

    pub fn suppliers(store: Store) -> Self {
        Self::new(store, OrderKind::Supplier)
    }

    pub fn kind(&self) -> OrderKind {
        self.kind
    }

    pub async fn list(&self) -> Result<Vec<OrderEntry>, AppError> {
        let sql = format!(
            "SELECT id AS order_id, {} AS party_name, date, status FROM {} ORDER BY id",
            self.kind.name_field(),
            self.kind.table()
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .fetch_all(self.store.pool())
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| OrderEntry::from_row(self.kind, row))
            .collect())
    }

    /// Insert a new order dated now; status defaults to `pending`. Returns the order id.
    pub async fn place(&self, order: &NewOrder) -> Result<i64, AppError> {
        let sql = format!(
            "INSERT INTO {} ({}, date, status) VALUES (?, ?, ?)",
            self.kind.table(),
            self.kind.name_field()
        );
        let status = order.status.as_deref().unwrap_or(DEFAULT_STATUS);
        let order_id = sqlx::query(&sql)
            .bind(&order.party_name)
            .bind(Utc::now())
            .bind(status)
            .execute(self.store.pool())
            .await?
            .last_insert_rowid();
        tracing::info!(kind = ?self.kind, order_id, status, "order placed");
        Ok(order_id)
    }

    /// Overwrite an order's status. Returns the stored status.
    pub async fn update_status(&self, order_id: i64, status: &str) -> Result<String, AppError> {
        let sql = format!("UPDATE {} SET status = ? WHERE id = ?", self.kind.table());
        let result = sqlx::query(&sql)
            .bind(status)
            .bind(order_id)
            .execute(self.store.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "{} {} not found",
                self.kind.label().to_lowercase(),
                order_id
            )));
        }
        tracing::info!(kind = ?self.kind, order_id, status, "order status updated");
        Ok(status.to_string())
    }
}
