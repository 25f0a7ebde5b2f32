//! HTTP client implementation for the battlecard record endpoint.
//!
//! This module provides a reqwest-based implementation of the [`BattlecardClient`](crate::BattlecardClient) trait.

use crate::config::Config;
use crate::{BattlecardClient, BattlecardError, DealRecord, decode_records};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the battlecard records endpoint using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestBattlecardClient {
    api_url: String,
    api_token: Option<SecretString>,
    client: reqwest::Client,
}

impl ReqwestBattlecardClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `api_url` - Full URL of the endpoint returning the JSON record array
    /// * `api_token` - Optional bearer token sent with every request
    pub fn new(api_url: &str, api_token: Option<SecretString>) -> Self {
        Self {
            api_url: api_url.trim().to_string(),
            api_token,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.api_url, cfg.api_token.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Build a GET request, authenticated when a token is configured.
    fn get_request(&self) -> reqwest::RequestBuilder {
        let req = self
            .client
            .get(&self.api_url)
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.api_token {
            Some(token) => req.bearer_auth(token.expose_secret()),
            None => req,
        }
    }

    /// Handle a response, converting status codes to appropriate errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, BattlecardError> {
        if !resp.status().is_success() {
            return Err(Self::error_from_response(resp).await);
        }
        Ok(resp.json::<T>().await?)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(resp: reqwest::Response) -> BattlecardError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body: String = body.chars().take(256).collect();
        BattlecardError::Status { status, body }
    }
}

#[async_trait]
impl BattlecardClient for ReqwestBattlecardClient {
    async fn fetch_records(&self) -> Result<Vec<DealRecord>, BattlecardError> {
        let result = async {
            let resp = self.get_request().send().await?;
            let rows = self.handle_response::<Vec<serde_json::Value>>(resp).await?;
            Ok::<_, BattlecardError>(decode_records(rows))
        }
        .await;

        match &result {
            Ok(records) => {
                metrics::counter!("battlecard_fetch_total", "outcome" => "ok").increment(1);
                tracing::debug!(count = records.len(), "fetched battlecard records");
            }
            Err(e) => {
                metrics::counter!("battlecard_fetch_total", "outcome" => "error").increment(1);
                tracing::warn!(error = %e, "battlecard fetch failed");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_url() {
        let client = ReqwestBattlecardClient::new("  http://localhost/exec ", None);
        assert_eq!(client.api_url(), "http://localhost/exec");
    }

    #[test]
    fn from_config_copies_endpoint() {
        let cfg = Config::from_env_with(|k| match k {
            "BATTLECARD_API_URL" => Some("http://localhost:1234/data".into()),
            _ => None,
        })
        .expect("cfg");
        let client = ReqwestBattlecardClient::from_config(&cfg);
        assert_eq!(client.api_url(), "http://localhost:1234/data");
    }
}
