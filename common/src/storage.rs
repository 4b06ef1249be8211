//! キー・バリュー型の永続ストレージ抽象
//!
//! ブラウザのlocalStorage相当のインターフェイス。CLIはファイル、
//! Webはブラウザのストレージ、テストは [`MemoryStorage`] を注入する。

use crate::error::Result;
use std::collections::HashMap;

/// 文字列キーと文字列値を保存するストレージ
pub trait KeyValueStorage {
    /// 値を取得（存在しなければ `None`）
    fn get_item(&self, key: &str) -> Option<String>;

    /// 値を上書き保存
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// 値を削除（存在しなくてもエラーにしない）
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// メモリ上のストレージ（テスト用・セッション限り）
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
