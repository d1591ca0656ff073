use crate::state::ApiContext;
use crate::youtube::{youtube_get, YouTubeApiError, MAX_PAGE_SIZE};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemListResponse {
    items: Vec<PlaylistItemResource>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemResource {
    content_details: PlaylistItemContentDetails,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemContentDetails {
    video_id: String,
}

/// Collects every video id in the playlist, following `nextPageToken`
/// until the API stops returning one. Ids keep the API's order.
pub async fn fetch_all_video_ids(
    api: &ApiContext,
    playlist_id: &str,
) -> Result<Vec<String>, YouTubeApiError> {
    let mut video_ids = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0u32;

    let url = format!("{}/playlistItems?part=contentDetails", api.api_base);
    let max_results = MAX_PAGE_SIZE.to_string();

    loop {
        let mut query = vec![
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(pt) = &page_token {
            query.push(("pageToken", pt.as_str()));
        }

        let data: PlaylistItemListResponse = youtube_get(api, &url, &query).await?;
        pages += 1;

        video_ids.extend(
            data.items
                .into_iter()
                .map(|item| item.content_details.video_id),
        );

        page_token = data.next_page_token.filter(|t| !t.is_empty());
        if page_token.is_none() {
            break;
        }
    }

    tracing::info!(
        "[playlist-items] {} videos across {} page(s) in {}",
        video_ids.len(),
        pages,
        playlist_id
    );

    Ok(video_ids)
}
