use super::DatasetReader;
use crate::error::DatasetError;
use async_trait::async_trait;
use reqwest::Client;

/// Plain HTTP(S) GET of the dataset URL. A transport error or a non-2xx
/// status fails the load outright; there is no timeout and no retry.
pub struct RemoteReader {
    url: String,
    client: Client,
}

impl RemoteReader {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl DatasetReader for RemoteReader {
    fn source_name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Vec<u8>, DatasetError> {
        let fail = |e: reqwest::Error| DatasetError::Fetch {
            source_name: self.url.clone(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(fail)?
            .error_for_status()
            .map_err(fail)?;
        let bytes = response.bytes().await.map_err(fail)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_csv;
    use axum::{Router, http::StatusCode, routing::get};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetches_body_bytes() {
        let body = sample_csv();
        let expected = body.clone();
        let base = serve(Router::new().route("/data.csv", get(move || async move { body }))).await;

        let reader = RemoteReader::new(format!("{}/data.csv", base));
        assert_eq!(reader.fetch().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_http_error_status_is_fetch_error() {
        let base = serve(Router::new().route(
            "/data.csv",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        ))
        .await;

        let reader = RemoteReader::new(format!("{}/data.csv", base));
        assert!(matches!(
            reader.fetch().await,
            Err(DatasetError::Fetch { .. })
        ));
    }
}
