use std::fmt::Debug;

use anyhow::Context;
use reqwest::{header, Client, Url};
use serde::Serialize;
use serde_json::Value;

use crate::domain::ResponseEnvelope;
use crate::utils::error_chain_fmt;

pub const FISHBOWL_API_BASE_URL: &str = "https://api.fishbowl.com";
const SUBSCRIPTION_CREATE_PATH: &str = "api/external/subscription/create";

#[derive(thiserror::Error)]
pub enum SubscribeError {
    #[error("Failed to reach the subscription API: {0}")]
    Transport(reqwest::Error),
    #[error("HTTP Error | Status: {0}")]
    Status(u16),
    #[error("Failed to decode the subscription API response: {0}")]
    Decode(reqwest::Error),
    #[error("The subscription API answered with an empty body")]
    EmptyBody,
}

impl Debug for SubscribeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Client for the Fishbowl subscription API.
///
/// Cheap to clone; clones share the underlying connection pool.
/// No timeout is configured, a hung request stays pending until the peer gives up.
#[derive(Clone, Debug)]
pub struct SubscriptionClient {
    http_client: Client,
    endpoint: Url,
}

impl SubscriptionClient {
    /// `base_url` is the API origin, the subscription path is joined onto it.
    pub fn new(base_url: &str) -> Result<Self, anyhow::Error> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(SUBSCRIPTION_CREATE_PATH))
            .with_context(|| format!("Invalid subscription API base url: {base_url}"))?;
        let http_client = Client::builder()
            .build()
            .context("Failed to build the HTTP client")?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn fishbowl() -> Result<Self, anyhow::Error> {
        Self::new(FISHBOWL_API_BASE_URL)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts `form_values` as JSON and folds every failure into the envelope.
    #[tracing::instrument(
        name = "Subscribing through the Fishbowl API",
        skip_all,
        fields(endpoint = %self.endpoint)
    )]
    pub async fn subscribe<T>(&self, form_values: &T) -> ResponseEnvelope
    where
        T: Serialize + ?Sized,
    {
        let outcome = self.try_subscribe(form_values).await;
        if let Err(e) = &outcome {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Subscription request failed",
            );
        }
        outcome.into()
    }

    pub async fn try_subscribe<T>(&self, form_values: &T) -> Result<Value, SubscribeError>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(header::ACCEPT, "application/json")
            .json(form_values)
            .send()
            .await
            .map_err(SubscribeError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubscribeError::Status(status.as_u16()));
        }

        match response.json().await.map_err(SubscribeError::Decode)? {
            Value::Null => Err(SubscribeError::EmptyBody),
            body => Ok(body),
        }
    }
}
