//! ファイルベースの永続ストレージ
//!
//! ブラウザのlocalStorageと同じく文字列キー → 文字列値を保持し、
//! 書き込みのたびにJSONファイルへ保存する。

use app_catalog_common::{KeyValueStorage, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// JSONファイルに保存されるストレージ
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// ストレージファイルを開く
    ///
    /// ファイルが存在しない・読めない・壊れている場合は空として扱う。
    pub fn open(path: &Path) -> Self {
        let items = Self::read_items(path).unwrap_or_default();
        Self {
            path: path.to_path_buf(),
            items,
        }
    }

    fn read_items(path: &Path) -> Option<BTreeMap<String, String>> {
        if !path.exists() {
            return None;
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                log::warn!("ストレージを開けません ({}): {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(items) => Some(items),
            Err(e) => {
                log::warn!("ストレージが破損しています、空として扱います ({}): {}", path.display(), e);
                None
            }
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.items)?;
        log::debug!("ストレージを保存: {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// キー件数
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// ストレージファイルを削除（存在した場合 `true`）
    pub fn clear(path: &Path) -> std::io::Result<bool> {
        if path.exists() {
            std::fs::remove_file(path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        if self.items.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}
