//! Browser Storage
//!
//! `window.localStorage` behind the guess book's key-value store seam.

use guessbook::store::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `localStorage`-backed store
#[derive(Clone)]
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    /// Open the window's local storage. Private browsing modes may refuse it;
    /// the store then reports every access as unavailable.
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"localStorage unavailable, guesses will not be saved".into());
        }
        Self { storage }
    }

    fn storage(&self) -> StoreResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))
    }
}

fn js_error(err: JsValue) -> StoreError {
    StoreError::Unavailable(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
