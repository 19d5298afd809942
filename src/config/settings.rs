//! Runtime settings read from the process environment.

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://bookstore.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Paths served outside any route group; no prefix may take one of them.
pub const OPERATIONAL_PATHS: &[&str] = &["/health", "/ready", "/version"];

/// URL prefix for each route group, e.g. `/inventory`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePrefixes {
    pub inventory: String,
    pub sales: String,
    pub customer_orders: String,
    pub supplier_orders: String,
}

impl RoutePrefixes {
    fn keyed(&self) -> [(&'static str, &str); 4] {
        [
            ("INVENTORY_PREFIX", &self.inventory),
            ("SALES_PREFIX", &self.sales),
            ("CUSTOMER_ORDERS_PREFIX", &self.customer_orders),
            ("SUPPLIER_ORDERS_PREFIX", &self.supplier_orders),
        ]
    }

    /// Every group needs its own prefix, and none may shadow an operational path.
    pub fn check(&self) -> Result<(), ConfigError> {
        let keyed = self.keyed();
        for (i, &(key, value)) in keyed.iter().enumerate() {
            if OPERATIONAL_PATHS.contains(&value) {
                return Err(ConfigError::ReservedPrefix {
                    key,
                    value: value.to_string(),
                });
            }
            if let Some(&(other, _)) = keyed[..i].iter().find(|(_, earlier)| *earlier == value) {
                return Err(ConfigError::DuplicatePrefix {
                    key,
                    other,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for RoutePrefixes {
    fn default() -> Self {
        RoutePrefixes {
            inventory: "/inventory".into(),
            sales: "/sales".into(),
            customer_orders: "/customer_orders".into(),
            supplier_orders: "/supplier_orders".into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub body_limit_bytes: usize,
    pub prefixes: RoutePrefixes,
}

impl Settings {
    /// Load from environment variables, falling back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = RoutePrefixes::default();

        let settings = Settings {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            max_connections: parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), DEFAULT_MAX_CONNECTIONS)?,
            bind_addr: parse_or(
                "BIND_ADDR",
                get("BIND_ADDR"),
                SocketAddr::from(([0, 0, 0, 0], 3000)),
            )?,
            body_limit_bytes: parse_or("BODY_LIMIT_BYTES", get("BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT_BYTES)?,
            prefixes: RoutePrefixes {
                inventory: prefix_or("INVENTORY_PREFIX", get("INVENTORY_PREFIX"), defaults.inventory)?,
                sales: prefix_or("SALES_PREFIX", get("SALES_PREFIX"), defaults.sales)?,
                customer_orders: prefix_or(
                    "CUSTOMER_ORDERS_PREFIX",
                    get("CUSTOMER_ORDERS_PREFIX"),
                    defaults.customer_orders,
                )?,
                supplier_orders: prefix_or(
                    "SUPPLIER_ORDERS_PREFIX",
                    get("SUPPLIER_ORDERS_PREFIX"),
                    defaults.supplier_orders,
                )?,
            },
        };
        settings.prefixes.check()?;
        Ok(settings)
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { key, value }),
    }
}

fn prefix_or(key: &'static str, raw: Option<String>, default: String) -> Result<String, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    if !value.starts_with('/') || value.ends_with('/') {
        return Err(ConfigError::Prefix { key, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(s.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(s.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(s.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
        assert_eq!(s.prefixes, RoutePrefixes::default());
    }

    #[test]
    fn overrides_apply() {
        let s = settings(&[
            ("DATABASE_URL", "sqlite:///var/lib/shop.db"),
            ("DB_MAX_CONNECTIONS", "2"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("SALES_PREFIX", "/api/sales"),
            ("INVENTORY_PREFIX", "  "),
        ])
        .unwrap();
        assert_eq!(s.database_url, "sqlite:///var/lib/shop.db");
        assert_eq!(s.max_connections, 2);
        assert_eq!(s.bind_addr.port(), 8080);
        assert_eq!(s.prefixes.sales, "/api/sales");
        assert_eq!(s.prefixes.inventory, "/inventory");
    }

    #[test]
    fn rejects_bad_numbers() {
        let err = settings(&[("DB_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. }));
    }

    #[test]
    fn rejects_bad_prefixes() {
        for bad in ["inventory", "/inventory/", "/"] {
            let err = settings(&[("INVENTORY_PREFIX", bad)]).unwrap_err();
            assert!(matches!(err, ConfigError::Prefix { key: "INVENTORY_PREFIX", .. }), "{bad}");
        }
    }

    #[test]
    fn rejects_shared_prefixes() {
        let err = settings(&[("SALES_PREFIX", "/inventory")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicatePrefix {
                key: "SALES_PREFIX",
                other: "INVENTORY_PREFIX",
                ..
            }
        ));

        let err = settings(&[
            ("CUSTOMER_ORDERS_PREFIX", "/orders"),
            ("SUPPLIER_ORDERS_PREFIX", "/orders"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePrefix { key: "SUPPLIER_ORDERS_PREFIX", .. }));
    }

    #[test]
    fn rejects_operational_paths_as_prefixes() {
        for path in OPERATIONAL_PATHS {
            let err = settings(&[("SALES_PREFIX", *path)]).unwrap_err();
            assert!(matches!(err, ConfigError::ReservedPrefix { key: "SALES_PREFIX", .. }), "{path}");
        }
    }

    #[test]
    fn swapped_prefixes_are_accepted() {
        let s = settings(&[("INVENTORY_PREFIX", "/sales"), ("SALES_PREFIX", "/inventory")]).unwrap();
        assert!(s.prefixes.check().is_ok());
        assert_eq!(s.prefixes.sales, "/inventory");
    }
}
