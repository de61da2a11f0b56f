use super::DatasetReader;
use crate::error::DatasetError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the survey CSV from disk. Handy offline and in tests.
pub struct LocalReader {
    path: PathBuf,
    name: String,
}

impl LocalReader {
    pub fn new(path: PathBuf) -> Self {
        let name = path.display().to_string();
        Self { path, name }
    }
}

#[async_trait]
impl DatasetReader for LocalReader {
    fn source_name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<Vec<u8>, DatasetError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| DatasetError::Fetch {
                source_name: self.name.clone(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();
        let reader = LocalReader::new(dir.path().join("nope.csv"));
        match reader.fetch().await {
            Err(DatasetError::Fetch { source_name, .. }) => {
                assert!(source_name.ends_with("nope.csv"));
            }
            other => panic!("expected fetch error, got {:?}", other.map(|b| b.len())),
        }
    }
}
