use crate::config::Source;
use crate::error::DatasetError;
use crate::models::{Dataset, NARRATIVE_COLUMNS, REQUIRED_COLUMNS, SoilRecord, missing_columns};
use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord};
use std::sync::Arc;
use tracing::{info, warn};

pub mod cache;
pub mod local;
pub mod remote;

pub use cache::DatasetCache;
pub use local::LocalReader;
pub use remote::RemoteReader;

/// Produces the raw CSV bytes for a dataset.
#[async_trait]
pub trait DatasetReader: Send + Sync {
    fn source_name(&self) -> &str;
    async fn fetch(&self) -> Result<Vec<u8>, DatasetError>;
}

pub fn reader_for(source: &Source) -> Arc<dyn DatasetReader> {
    match source {
        Source::Remote(url) => Arc::new(RemoteReader::new(url.clone())),
        Source::Local(path) => Arc::new(LocalReader::new(path.clone())),
    }
}

/// Parse comma-delimited UTF-8 CSV into a [`Dataset`].
///
/// Header names are trimmed (Unicode whitespace included), cell values are
/// not. The required columns are checked before any row is read, so a schema
/// failure never yields a partial dataset. Typed fields come from the first
/// column carrying each name; repeated headers stay in the raw rows only.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, DatasetError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .from_reader(bytes);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(DatasetError::Schema { missing });
    }

    let field_columns = record_columns(&headers);
    let field_headers: StringRecord = field_columns
        .iter()
        .map(|&i| headers[i].as_str())
        .collect();

    let mut rows = Vec::new();
    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let fields: StringRecord = field_columns
            .iter()
            .map(|&i| row.get(i).unwrap_or_default())
            .collect();
        let record: SoilRecord = fields.deserialize(Some(&field_headers))?;
        records.push(record);
        rows.push(row);
    }

    Ok(Dataset::new(headers, rows, records))
}

/// Index of the first column for each name `SoilRecord` reads, in file order.
fn record_columns(headers: &[String]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(i, h)| {
            let known = REQUIRED_COLUMNS.contains(&h.as_str())
                || NARRATIVE_COLUMNS.contains(&h.as_str());
            known && !headers[..*i].contains(h)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Fetch and parse. One read per call, no retries.
pub async fn load(reader: &dyn DatasetReader) -> Result<Dataset, DatasetError> {
    let source = reader.source_name();
    let bytes = reader.fetch().await.inspect_err(|e| {
        warn!(source, error = %e, "Dataset fetch failed");
    })?;

    let dataset = parse_dataset(&bytes).inspect_err(|e| {
        warn!(source, error = %e, "Dataset rejected");
    })?;

    info!(
        source,
        rows = dataset.len(),
        columns = dataset.headers().len(),
        "Dataset loaded"
    );
    Ok(dataset)
}
