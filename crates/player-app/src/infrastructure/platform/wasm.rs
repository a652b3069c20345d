//! Browser storage provider backed by `window.localStorage`.
//!
//! The handle is looked up on every call so the provider stays a plain unit
//! struct that can be shared through Dioxus context. Private browsing modes
//! that deny storage degrade to "nothing cached".

use crate::ports::outbound::StorageProvider;

#[derive(Clone, Copy, Default)]
pub struct WasmStorageProvider;

fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!("localStorage unavailable: {:?}", e);
            None
        }
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to write {} to localStorage: {:?}", key, e);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove {} from localStorage: {:?}", key, e);
            }
        }
    }
}
