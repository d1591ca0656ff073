use crate::error::AppError;
use crate::playlist::{assemble, total_item};
use crate::render::{render, OutputFormat};
use crate::state::ApiContext;
use crate::youtube::playlist_items::fetch_all_video_ids;
use crate::youtube::videos::fetch_video_details;

/// Runs the whole pipeline for one playlist and returns the rendered text.
/// Nothing is returned on failure, so partial output never reaches stdout.
pub async fn build_report(
    api: &ApiContext,
    playlist_id: &str,
    format: OutputFormat,
    include_total: bool,
) -> Result<String, AppError> {
    // 1. Every video id, across all pages
    let video_ids = fetch_all_video_ids(api, playlist_id).await?;

    // 2. Titles and durations, batched
    let details = fetch_video_details(api, &video_ids).await?;

    // 3. Items in playlist order
    let mut items = assemble(&video_ids, &details)?;

    if include_total {
        let total = total_item(&items);
        items.push(total);
    }

    Ok(render(&items, format))
}
