//! Books and their stock levels.

use crate::error::AppError;
use crate::model::{InventoryEntry, NewBook};
use crate::store::Store;

#[derive(Clone, Debug)]
pub struct InventoryService {
    store: Store,
}

impl InventoryService {
    pub fn new(store: Store) -> Self {
        InventoryService { store }
    }

    /// Every inventory row joined with its book, ordered by book id.
    pub async fn list(&self) -> Result<Vec<InventoryEntry>, AppError> {
        let sql = "SELECT b.id AS book_id, b.title, b.author, i.quantity \
                   FROM inventory i JOIN books b ON b.id = i.book_id \
                   ORDER BY b.id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, InventoryEntry>(sql)
            .fetch_all(self.store.pool())
            .await?;
        Ok(rows)
    }

    /// Insert the book, then its inventory row. Each insert commits on its own; if the
    /// second one fails the book is left without stock.
    pub async fn add(&self, book: &NewBook) -> Result<i64, AppError> {
        let pool = self.store.pool();
        let book_id = sqlx::query("INSERT INTO books (title, author) VALUES (?, ?)")
            .bind(&book.title)
            .bind(&book.author)
            .execute(pool)
            .await?
            .last_insert_rowid();

        let quantity = book.quantity.unwrap_or(0);
        sqlx::query("INSERT INTO inventory (book_id, quantity) VALUES (?, ?)")
            .bind(book_id)
            .bind(quantity)
            .execute(pool)
            .await?;

        tracing::info!(book_id, quantity, "book added to inventory");
        Ok(book_id)
    }

    /// Overwrite the stock level for a book. Returns the stored quantity.
    pub async fn update_quantity(&self, book_id: i64, quantity: i64) -> Result<i64, AppError> {
        let result = sqlx::query("UPDATE inventory SET quantity = ? WHERE book_id = ?")
            .bind(quantity)
            .bind(book_id)
            .execute(self.store.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("no inventory for book {}", book_id)));
        }
        tracing::info!(book_id, quantity, "inventory quantity updated");
        Ok(quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{ensure_tables, StoreConfig};

    async fn service() -> InventoryService {
        let store = Store::open(&StoreConfig::in_memory()).await.unwrap();
        ensure_tables(store.pool()).await.unwrap();
        InventoryService::new(store)
    }

    fn book(title: &str, quantity: Option<i64>) -> NewBook {
        NewBook {
            title: title.into(),
            author: "Ursula K. Le Guin".into(),
            quantity,
        }
    }

    #[tokio::test]
    async fn add_then_list() {
        let svc = service().await;
        let first = svc.add(&book("The Dispossessed", Some(4))).await.unwrap();
        let second = svc.add(&book("The Lathe of Heaven", None)).await.unwrap();
        assert_ne!(first, second);

        let rows = svc.list().await.unwrap();
        assert_eq!(
            rows,
            vec![
                InventoryEntry {
                    book_id: first,
                    title: "The Dispossessed".into(),
                    author: "Ursula K. Le Guin".into(),
                    quantity: 4,
                },
                InventoryEntry {
                    book_id: second,
                    title: "The Lathe of Heaven".into(),
                    author: "Ursula K. Le Guin".into(),
                    quantity: 0,
                },
            ]
        );
    }

    #[tokio::test]
    async fn update_quantity_overwrites() {
        let svc = service().await;
        let id = svc.add(&book("Always Coming Home", Some(1))).await.unwrap();
        assert_eq!(svc.update_quantity(id, 12).await.unwrap(), 12);
        assert_eq!(svc.list().await.unwrap()[0].quantity, 12);
    }

    #[tokio::test]
    async fn update_unknown_book_is_not_found() {
        let svc = service().await;
        let err = svc.update_quantity(41, 3).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_skips_books_without_stock_row() {
        let svc = service().await;
        sqlx::query("INSERT INTO books (title, author) VALUES ('Orphan', 'Nobody')")
            .execute(svc.store.pool())
            .await
            .unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
