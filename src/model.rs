//! Entity rows as read back from the store, plus the typed request bodies accepted by the
//! mutating endpoints.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Status assigned to new orders when the request does not carry one.
pub const DEFAULT_STATUS: &str = "pending";

/// A book joined with its inventory row.
#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct InventoryEntry {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, sqlx::FromRow)]
pub struct SaleEntry {
    pub sale_id: i64,
    pub date: DateTime<Utc>,
    pub total: f64,
}

/// Which side of the business an order belongs to. Selects the table and the name field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderKind {
    Customer,
    Supplier,
}

impl OrderKind {
    pub fn table(self) -> &'static str {
        match self {
            OrderKind::Customer => "customer_orders",
            OrderKind::Supplier => "supplier_orders",
        }
    }

    /// Column and JSON field holding the counterparty's name.
    pub fn name_field(self) -> &'static str {
        match self {
            OrderKind::Customer => "customer_name",
            OrderKind::Supplier => "supplier_name",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderKind::Customer => "Customer order",
            OrderKind::Supplier => "Supplier order",
        }
    }
}

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct OrderRow {
    pub order_id: i64,
    pub party_name: String,
    pub date: DateTime<Utc>,
    pub status: String,
}

/// An order as listed by the API; serializes `party_name` under the kind's name field.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderEntry {
    pub kind: OrderKind,
    pub order_id: i64,
    pub party_name: String,
    pub date: DateTime<Utc>,
    pub status: String,
}

impl OrderEntry {
    pub fn from_row(kind: OrderKind, row: OrderRow) -> Self {
        OrderEntry {
            kind,
            order_id: row.order_id,
            party_name: row.party_name,
            date: row.date,
            status: row.status,
        }
    }
}

impl Serialize for OrderEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("order_id", &self.order_id)?;
        map.serialize_entry(self.kind.name_field(), &self.party_name)?;
        map.serialize_entry("date", &self.date)?;
        map.serialize_entry("status", &self.status)?;
        map.end()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub quantity: Option<i64>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuantityChange {
    pub quantity: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewSale {
    pub total: f64,
}

/// Body of an order POST. The name field differs per kind, so the handler fills this in
/// after validation instead of deriving it.
#[derive(Clone, Debug)]
pub struct NewOrder {
    pub party_name: String,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatusChange {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn order_entry_uses_kind_name_field() {
        let date = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let entry = OrderEntry {
            kind: OrderKind::Supplier,
            order_id: 7,
            party_name: "Penguin".into(),
            date,
            status: "pending".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["supplier_name"], "Penguin");
        assert!(json.get("customer_name").is_none());
        assert_eq!(json["order_id"], 7);
        assert_eq!(json["date"], "2024-03-01T09:30:00Z");
    }
}
