//! ブラウザのlocalStorageを使ったストレージ

use app_catalog_common::{Error, KeyValueStorage, Result};

/// `window.localStorage` のラッパー
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// localStorageを取得（使えない環境では `None`）
    pub fn open() -> Option<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|inner| Self { inner })
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.inner
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.inner
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}
