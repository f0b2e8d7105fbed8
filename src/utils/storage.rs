//! Browser `localStorage` persistence for the session and the cart.
//!
//! Only call these from client-side code (effects, event handlers).
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const USER_INFO_KEY: &str = "userInfo";
pub const CART_ITEMS_KEY: &str = "cartItems";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("[STORAGE] Discarding unreadable {}: {}", key, e);
            None
        }
    }
}

pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            if storage.set_item(key, &json).is_err() {
                warn!("[STORAGE] Could not persist {}", key);
            }
        }
        Err(e) => warn!("[STORAGE] Could not serialize {}: {}", key, e),
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}
