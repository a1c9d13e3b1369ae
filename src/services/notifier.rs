//! Notification transport.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use url::Url;

use crate::error::ProviderError;
use crate::report::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// Nothing to send or no credential configured.
    Skipped,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<Delivery, ProviderError>;
}

/// Pushes a note through the Pushbullet REST API.
pub struct PushbulletNotifier {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl PushbulletNotifier {
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
}

#[async_trait]
impl Notifier for PushbulletNotifier {
    async fn notify(&self, notification: &Notification) -> Result<Delivery, ProviderError> {
        let Some(api_key) = self.api_key.as_ref() else {
            return Ok(Delivery::Skipped);
        };
        if notification.body.is_empty() {
            return Ok(Delivery::Skipped);
        }

        let url = format!("{}/v2/pushes", self.base_url.as_str().trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .header("Access-Token", api_key.expose_secret())
            .json(&json!({
                "type": "note",
                "title": notification.title,
                "body": notification.body,
            }))
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

        Ok(Delivery::Sent)
    }
}
