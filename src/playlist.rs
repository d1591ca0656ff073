use crate::duration::{parse_iso_duration, DurationParseError};
use crate::youtube::videos::VideoDetails;
use chrono::TimeDelta;
use std::collections::HashMap;

pub const TOTAL_TITLE: &str = "Total Duration";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub title: String,
    pub url: String,
    pub duration: TimeDelta,
}

pub fn create_link(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Builds one item per playlist id, in playlist order. Ids with no
/// detail record are skipped.
pub fn assemble(
    video_ids: &[String],
    details: &HashMap<String, VideoDetails>,
) -> Result<Vec<Item>, DurationParseError> {
    let mut items = Vec::with_capacity(video_ids.len().min(details.len()));

    for video_id in video_ids {
        let Some(detail) = details.get(video_id) else {
            tracing::warn!(
                "[playlist] No details for {}, video may be private or deleted",
                video_id
            );
            continue;
        };

        items.push(Item {
            title: detail.title.clone(),
            url: create_link(&detail.id),
            duration: parse_iso_duration(&detail.duration)?,
        });
    }

    Ok(items)
}

pub fn total_duration(items: &[Item]) -> TimeDelta {
    items
        .iter()
        .fold(TimeDelta::zero(), |acc, item| acc + item.duration)
}

/// Synthetic last row carrying the playlist's total running time.
pub fn total_item(items: &[Item]) -> Item {
    Item {
        title: TOTAL_TITLE.to_string(),
        url: String::new(),
        duration: total_duration(items),
    }
}
