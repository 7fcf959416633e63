use gift_common::types::RawGiftRecord;
use reqwest::header::ACCEPT;

use super::CatalogSource;
use crate::dataset::parse_payload;
use crate::error::CatalogError;

/// Fetches the dataset with a single GET.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<RawGiftRecord>, CatalogError> {
        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::SourceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::SourceUnavailable(format!(
                "HTTP {} from {}",
                status, self.url
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::SourceUnavailable(e.to_string()))?;

        if looks_like_html(&body) {
            tracing::warn!("HTML page instead of JSON from {}", self.url);
            return Err(CatalogError::SourceUnavailable(format!(
                "received HTML instead of JSON from {}",
                self.url
            )));
        }

        parse_payload(&body)
    }
}

/// A misrouted request through a proxy answers with an HTML document.
pub fn looks_like_html(body: &[u8]) -> bool {
    let start = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(body.len());
    body[start..].starts_with(b"<!") || body[start..].starts_with(b"<html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_doctype() {
        assert!(looks_like_html(b"  \n<!DOCTYPE html><html></html>"));
        assert!(looks_like_html(b"<html><body>502</body></html>"));
    }

    #[test]
    fn json_is_not_html() {
        assert!(!looks_like_html(b"[]"));
        assert!(!looks_like_html(b""));
        assert!(!looks_like_html(br#"[{"name": "<!>"}]"#));
    }
}
