use crate::error::AppError;
use crate::youtube::YOUTUBE_API_BASE;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
}

impl Config {
    /// Command-line values win; `YT_API_KEY` and `YOUTUBE_API_BASE` fill the gaps.
    pub fn resolve(api_key: Option<String>, api_base: Option<String>) -> Result<Self, AppError> {
        Self::resolve_with(api_key, api_base, |name| env::var(name).ok())
    }

    pub fn resolve_with<F>(
        api_key: Option<String>,
        api_base: Option<String>,
        lookup: F,
    ) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = api_key
            .or_else(|| lookup("YT_API_KEY"))
            .filter(|k| !k.trim().is_empty())
            .ok_or(AppError::MissingApiKey)?;

        let api_base = api_base
            .or_else(|| lookup("YOUTUBE_API_BASE"))
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| YOUTUBE_API_BASE.to_string());

        if api_base != YOUTUBE_API_BASE {
            tracing::info!("[config] Using API base {}", api_base);
        }

        Ok(Self { api_key, api_base })
    }
}
