use crate::config::Config;

/// Everything the fetchers need to talk to the API.
#[derive(Clone)]
pub struct ApiContext {
    pub http: reqwest::Client,
    pub api_base: String,
    pub api_key: String,
}

impl ApiContext {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[cfg(test)]
impl ApiContext {
    pub fn test(api_base: &str) -> Self {
        Self::new(&Config {
            api_key: "test-key".to_string(),
            api_base: api_base.to_string(),
        })
    }
}
