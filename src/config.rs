use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_VAR: &str = "ESTATE_API_URL";

/// Where the listing backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    api_url: String,
}

impl Config {
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Default, then `.env`, then the process environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::default().with_api_url(env::var(API_URL_VAR).ok())
    }

    /// Apply an override such as the `--api-url` flag; blanks are ignored
    pub fn with_api_url(self, api_url: Option<String>) -> Self {
        match api_url {
            Some(url) if !url.trim().is_empty() => Self::new(&url),
            _ => self,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
