//! Resume document fetching over HTTP or from the local filesystem

use crate::error::{MatcherError, Result};
use crate::input::pdf;
use log::info;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Fetches a resume resource and turns it into plain text.
///
/// HTTP(S) locations are downloaded with a bounded timeout; any other
/// location is treated as a local file path. PDF payloads are detected by
/// magic bytes, everything else is decoded as UTF-8 text. No retries
/// happen here.
pub struct DocumentFetcher {
    client: Client,
}

impl DocumentFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MatcherError::Fetch(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Fetch raw bytes from a URL or local path.
    pub async fn fetch_bytes(&self, location: &str) -> Result<Vec<u8>> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let response = self.client.get(location).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(MatcherError::Fetch(format!(
                    "'{}' returned status {}",
                    location, status
                )));
            }
            Ok(response.bytes().await?.to_vec())
        } else {
            let path = Path::new(location);
            if !path.exists() {
                return Err(MatcherError::Fetch(format!("File does not exist: {}", location)));
            }
            Ok(tokio::fs::read(path)
                .await
                .map_err(|e| MatcherError::Fetch(format!("Failed to read '{}': {}", location, e)))?)
        }
    }

    /// Fetch a resume and extract its text.
    pub async fn extract_text(&self, location: &str) -> Result<String> {
        let bytes = self.fetch_bytes(location).await?;

        if pdf::looks_like_pdf(&bytes) {
            info!("Extracting text from PDF: {}", location);
            pdf::extract_text(&bytes, location)
        } else {
            let text = String::from_utf8(bytes).map_err(|e| {
                MatcherError::Fetch(format!("'{}' is neither a PDF nor UTF-8 text: {}", location, e))
            })?;
            pdf::normalize_extracted(&text, location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> DocumentFetcher {
        DocumentFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let err = fetcher().extract_text("/nonexistent/resume.pdf").await.unwrap_err();
        assert!(matches!(err, MatcherError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_local_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "Jane Doe\nPython developer, 3 years").unwrap();

        let text = fetcher().extract_text(path.to_str().unwrap()).await.unwrap();
        assert!(text.contains("Python developer"));
    }

    #[tokio::test]
    async fn test_local_empty_file_is_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, "   \n \t ").unwrap();

        let err = fetcher().extract_text(path.to_str().unwrap()).await.unwrap_err();
        assert!(matches!(err, MatcherError::EmptyDocument(_)));
    }
}
