use super::{DatasetReader, load};
use crate::error::DatasetError;
use crate::models::Dataset;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Memoises the loaded dataset per source with a time-to-live.
///
/// Concurrent misses share a single fetch. Failed loads are not cached, so
/// the next view retries. Without a TTL every call goes straight to the
/// reader.
pub struct DatasetCache {
    reader: Arc<dyn DatasetReader>,
    cache: Option<Cache<String, Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new(reader: Arc<dyn DatasetReader>, ttl: Option<Duration>) -> Self {
        let cache = ttl.map(|ttl| {
            Cache::<String, Arc<Dataset>>::builder()
                .max_capacity(1)
                .time_to_live(ttl)
                .build()
        });
        Self { reader, cache }
    }

    pub fn source_name(&self) -> &str {
        self.reader.source_name()
    }

    pub async fn get(&self) -> Result<Arc<Dataset>, Arc<DatasetError>> {
        let Some(cache) = &self.cache else {
            return load(self.reader.as_ref())
                .await
                .map(Arc::new)
                .map_err(Arc::new);
        };

        let key = self.reader.source_name().to_string();
        if cache.contains_key(&key) {
            debug!(source = %key, "Dataset cache hit");
        }
        let reader = self.reader.clone();
        cache
            .try_get_with(key, async move { load(reader.as_ref()).await.map(Arc::new) })
            .await
    }

    /// Drop the cached dataset; the next `get` re-fetches.
    pub async fn invalidate(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate(self.reader.source_name()).await;
            info!(source = self.reader.source_name(), "Dataset cache invalidated");
        }
    }
}
