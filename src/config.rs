use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_file: PathBuf,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url = std::env::var("SKILLSWAP_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api/v1".into());
        let token_file = std::env::var("SKILLSWAP_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".skillswap/session.json"));
        let request_timeout_secs = std::env::var("SKILLSWAP_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        Ok(Self {
            api_base_url,
            token_file,
            request_timeout_secs,
        })
    }
}
