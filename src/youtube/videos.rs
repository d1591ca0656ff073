use crate::state::ApiContext;
use crate::youtube::{youtube_get, YouTubeApiError, MAX_PAGE_SIZE};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub id: String,
    pub title: String,
    pub duration: String,
}

#[derive(Deserialize)]
struct VideoListResponse {
    items: Vec<VideoResource>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoResource {
    id: String,
    snippet: VideoSnippet,
    content_details: VideoContentDetails,
}

#[derive(Deserialize)]
struct VideoSnippet {
    title: String,
}

#[derive(Deserialize)]
struct VideoContentDetails {
    duration: String,
}

/// Fetches snippet and content details for `video_ids`, at most
/// `MAX_PAGE_SIZE` ids per request. The API may answer in any order, so
/// results are keyed by video id. Ids the API does not return (deleted or
/// private videos) are simply absent.
pub async fn fetch_video_details(
    api: &ApiContext,
    video_ids: &[String],
) -> Result<HashMap<String, VideoDetails>, YouTubeApiError> {
    let mut results = HashMap::with_capacity(video_ids.len());

    for batch in video_ids.chunks(MAX_PAGE_SIZE) {
        let ids = batch.join(",");
        let url = format!(
            "{}/videos?part=snippet,contentDetails&id={}",
            api.api_base, ids
        );

        let data: VideoListResponse = youtube_get(api, &url, &[]).await?;
        tracing::debug!(
            "[videos] Batch of {} ids returned {} items",
            batch.len(),
            data.items.len()
        );

        for item in data.items {
            results.insert(
                item.id.clone(),
                VideoDetails {
                    id: item.id,
                    title: item.snippet.title,
                    duration: item.content_details.duration,
                },
            );
        }
    }

    Ok(results)
}
