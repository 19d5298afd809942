//! Sales: list recorded sales and record new ones dated at insert time.

use crate::error::AppError;
use crate::model::{NewSale, SaleEntry};
use crate::store::Store;
use chrono::Utc;

#[derive(Clone, Debug)]
pub struct SalesService {
    store: Store,
}

impl SalesService {
    pub fn new(store: Store) -> Self {
        SalesService { store }
    }

    pub async fn list(&self) -> Result<Vec<SaleEntry>, AppError> {
        let sql = "SELECT id AS sale_id, date, total FROM sales ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, SaleEntry>(sql)
            .fetch_all(self.store.pool())
            .await?;
        Ok(rows)
    }

    /// Record a sale dated now. Returns the new sale id.
    pub async fn create(&self, sale: &NewSale) -> Result<i64, AppError> {
        let sale_id = sqlx::query("INSERT INTO sales (date, total) VALUES (?, ?)")
            .bind(Utc::now())
            .bind(sale.total)
            .execute(self.store.pool())
            .await?
            .last_insert_rowid();
        tracing::info!(sale_id, total = sale.total, "sale recorded");
        Ok(sale_id)
    }
}
