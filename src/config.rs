// src/config.rs
use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Client configuration: where the backend lives, how many jobs per page,
/// and where the session token is persisted between runs.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub page_size: u32,
    pub token_path: PathBuf,
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Build from environment, falling back to local-dev defaults.
    pub fn from_env() -> Self {
        let api_base_url =
            env::var("JOBSEEKER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let token_path = env::var("JOBSEEKER_TOKEN_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_path());

        Self {
            api_base_url,
            page_size: DEFAULT_PAGE_SIZE,
            token_path,
            timeout_secs: 30,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size.max(1);
        self
    }

    pub fn with_token_path(mut self, path: PathBuf) -> Self {
        self.token_path = path;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_token_path() -> PathBuf {
    env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".jobseeker")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_floor() {
        let config = ClientConfig::from_env().with_page_size(0);
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn test_with_base_url() {
        let config = ClientConfig::from_env().with_base_url("https://api.example.com");
        assert_eq!(config.api_base_url, "https://api.example.com");
    }
}
