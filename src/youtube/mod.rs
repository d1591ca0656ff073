pub mod playlist_items;
pub mod videos;

use crate::state::ApiContext;
use serde::de::DeserializeOwned;

#[derive(Debug)]
pub struct YouTubeApiError {
    pub status: u16,
    pub message: String,
    pub reason: Option<String>,
}

impl std::fmt::Display for YouTubeApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            Some(reason) => write!(
                f,
                "YouTube API error {}: {} ({})",
                self.status, self.message, reason
            ),
            None => write!(f, "YouTube API error {}: {}", self.status, self.message),
        }
    }
}

impl std::error::Error for YouTubeApiError {}

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Maximum `maxResults` for list calls and ids per `videos` call.
pub const MAX_PAGE_SIZE: usize = 50;

/// Issues a GET against the API and decodes the body. `url` may carry fixed
/// parameters verbatim (comma lists must stay unencoded); `query` pairs and
/// the API key are percent-encoded. Any transport, status or decode failure
/// becomes a `YouTubeApiError`, with the url (and so the key) stripped.
pub async fn youtube_get<T: DeserializeOwned>(
    api: &ApiContext,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T, YouTubeApiError> {
    tracing::debug!("[youtube] GET {} {:?}", url, query);

    let res = api
        .http
        .get(url)
        .query(query)
        .query(&[("key", api.api_key.as_str())])
        .send()
        .await
        .map_err(|e| YouTubeApiError {
            status: 0,
            message: e.without_url().to_string(),
            reason: None,
        })?;

    let status = res.status().as_u16();
    if status >= 400 {
        let body: serde_json::Value = res.json().await.unwrap_or_default();
        let reason = body["error"]["errors"][0]["reason"]
            .as_str()
            .map(|s| s.to_string());
        let message = body["error"]["message"]
            .as_str()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("HTTP status {}", status));

        if status == 403 && reason.as_deref() == Some("quotaExceeded") {
            tracing::warn!("[youtube] Daily quota exceeded");
        }

        return Err(YouTubeApiError {
            status,
            message,
            reason,
        });
    }

    res.json::<T>().await.map_err(|e| YouTubeApiError {
        status: 0,
        message: format!("Malformed response: {}", e.without_url()),
        reason: None,
    })
}
