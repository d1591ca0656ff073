use crate::duration::DurationParseError;
use crate::youtube::YouTubeApiError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No API key given. Pass --api-key or set YT_API_KEY.")]
    MissingApiKey,

    #[error("Fetch failed: {0}")]
    Fetch(#[from] YouTubeApiError),

    #[error("Could not parse duration: {0}")]
    Parse(#[from] DurationParseError),
}
