use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::modules::portfolio::application::ports::outgoing::{FallbackStore, FallbackStoreError};
use crate::modules::portfolio::domain::SectionKey;

/// Top-level key of the document, one entry per section beneath it.
pub const STORAGE_KEY: &str = "portfolio_data";

/// One JSON document on disk, read and rewritten whole on every access.
#[derive(Clone)]
pub struct JsonFileFallbackStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileFallbackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means nothing stored yet.
    async fn load(&self) -> Result<Map<String, Value>, FallbackStoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(FallbackStoreError::Io(e.to_string())),
        };

        let mut document: Value = serde_json::from_slice(&raw)
            .map_err(|e| FallbackStoreError::Corrupt(e.to_string()))?;

        match document.get_mut(STORAGE_KEY).map(Value::take) {
            None | Some(Value::Null) => Ok(Map::new()),
            Some(Value::Object(sections)) => Ok(sections),
            Some(_) => Err(FallbackStoreError::Corrupt(format!(
                "`{STORAGE_KEY}` is not an object"
            ))),
        }
    }

    async fn persist(&self, sections: Map<String, Value>) -> Result<(), FallbackStoreError> {
        let mut document = Map::new();
        document.insert(STORAGE_KEY.to_string(), Value::Object(sections));

        let bytes = serde_json::to_vec_pretty(&Value::Object(document))
            .map_err(|e| FallbackStoreError::Corrupt(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FallbackStoreError::Io(e.to_string()))?;
        }

        // write next to the target, then swap it in
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| FallbackStoreError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| FallbackStoreError::Io(e.to_string()))
    }
}

#[async_trait]
impl FallbackStore for JsonFileFallbackStore {
    async fn read(&self, key: SectionKey) -> Result<Option<Value>, FallbackStoreError> {
        let _guard = self.lock.lock().await;
        let mut sections = self.load().await?;

        Ok(sections.remove(key.as_str()).filter(|v| !v.is_null()))
    }

    async fn write(&self, key: SectionKey, content: Value) -> Result<(), FallbackStoreError> {
        let _guard = self.lock.lock().await;

        // a corrupt document is replaced rather than blocking every save
        let mut sections = match self.load().await {
            Ok(sections) => sections,
            Err(FallbackStoreError::Corrupt(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "Overwriting corrupt fallback document");
                Map::new()
            }
            Err(e) => return Err(e),
        };

        if sections.get(key.as_str()) == Some(&content) {
            return Ok(());
        }

        sections.insert(key.as_str().to_string(), content);
        self.persist(sections).await
    }
}
