use crate::BattlecardError;
use secrecy::SecretString;

pub const DEFAULT_API_URL: &str = "https://script.google.com/macros/s/AKfycbz6z1qUqGyEKh_psloIeBM5HzTk1FWV48kM0y9vva2v6sCrRovWUqi0Bj7-8x6tduQ4/exec";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub api_token: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Result<Self, BattlecardError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, BattlecardError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api_url = get("BATTLECARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let api_url = api_url.trim().to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(BattlecardError::Config(format!(
                "BATTLECARD_API_URL must be an http(s) url, got {api_url:?}"
            )));
        }
        let api_token = get("BATTLECARD_API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .map(|t| SecretString::new(t.into()));
        Ok(Self { api_url, api_token })
    }
}
