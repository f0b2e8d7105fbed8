//! Server settings that are not part of `[package.metadata.leptos]`.
use leptos::logging::log;

pub const DB_PATH_VAR: &str = "STOREFRONT_DB";
pub const DEFAULT_DB_PATH: &str = "storefront.db";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub db_path: String,
    pub seed_demo_data: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup(DB_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        // Anything but an explicit "0"/"false" keeps the demo catalogue.
        let seed_demo_data = !matches!(
            lookup("STOREFRONT_SEED").as_deref(),
            Some("0") | Some("false")
        );
        log!("[CONFIG] Database at {}, demo seed {}", db_path, seed_demo_data);
        ServerConfig { db_path, seed_demo_data }
    }
}
