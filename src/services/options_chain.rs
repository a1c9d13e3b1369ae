//! Options chain provider interface and the brokerage REST implementation.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::ProviderError;
use crate::options::{ChainRequest, ChainResponse, OptionsChain};

#[async_trait]
pub trait OptionsChainProvider: Send + Sync {
    async fn fetch_chain(&self, request: &ChainRequest) -> Result<OptionsChain, ProviderError>;
}

/// `GET /v1/marketdata/chains` on the brokerage market-data API.
pub struct TdaChainProvider {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl TdaChainProvider {
    pub fn new(
        base_url: Url,
        api_key: Option<SecretString>,
        timeout: std::time::Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(base_url, api_key, client))
    }

    pub fn with_client(base_url: Url, api_key: Option<SecretString>, client: Client) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn chains_url(&self) -> String {
        format!(
            "{}/v1/marketdata/chains",
            self.base_url.as_str().trim_end_matches('/')
        )
    }
}

#[async_trait]
impl OptionsChainProvider for TdaChainProvider {
    async fn fetch_chain(&self, request: &ChainRequest) -> Result<OptionsChain, ProviderError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::Api("TDA_API_KEY is not configured".to_string()))?;

        let from_date = request.from_date.format("%Y-%m-%d").to_string();
        let to_date = request.to_date.format("%Y-%m-%d").to_string();
        let strike_count = request.strike_count.to_string();

        debug!(
            ticker = %request.ticker,
            contract_type = %request.contract_type,
            from = %from_date,
            to = %to_date,
            "TdaChainProvider: requesting chain"
        );

        let response = self
            .client
            .get(self.chains_url())
            .query(&[
                ("apikey", api_key.expose_secret()),
                ("symbol", request.ticker.as_str()),
                ("contractType", request.contract_type.as_str()),
                ("strikeCount", strike_count.as_str()),
                ("includeQuotes", "FALSE"),
                ("strategy", "SINGLE"),
                ("fromDate", from_date.as_str()),
                ("toDate", to_date.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: ChainResponse =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode(e.to_string()))?;

        envelope.into_chain(&request.ticker)
    }
}
