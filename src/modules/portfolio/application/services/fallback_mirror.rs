use tracing::warn;

use crate::modules::portfolio::application::ports::outgoing::{FallbackStore, FallbackStoreError};
use crate::modules::portfolio::domain::Section;

/// Copies freshly read or saved content into the fallback store. Failures
/// only cost freshness of the local copy, so they are logged and dropped.
pub(crate) async fn mirror<S: Section>(store: &(dyn FallbackStore + Send + Sync), content: &S) {
    if let Err(e) = write(store, content).await {
        warn!(section = %S::KEY, error = %e, "Failed to mirror section into fallback store");
    }
}

pub(crate) async fn write<S: Section>(
    store: &(dyn FallbackStore + Send + Sync),
    content: &S,
) -> Result<(), FallbackStoreError> {
    let value = serde_json::to_value(content)
        .map_err(|e| FallbackStoreError::Corrupt(e.to_string()))?;
    store.write(S::KEY, value).await
}

/// Unreadable or corrupt entries count as absent.
pub(crate) async fn read<S: Section>(store: &(dyn FallbackStore + Send + Sync)) -> Option<S> {
    let value = match store.read(S::KEY).await {
        Ok(Some(value)) => value,
        Ok(None) => return None,
        Err(e) => {
            warn!(section = %S::KEY, error = %e, "Fallback store read failed");
            return None;
        }
    };

    match serde_json::from_value::<S>(value) {
        Ok(content) => Some(content),
        Err(e) => {
            warn!(section = %S::KEY, error = %e, "Ignoring corrupt fallback content");
            None
        }
    }
}
