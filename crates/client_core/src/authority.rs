//! The remote elevator authority and its HTTP binding.

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::ButtonCommand, protocol::ElevatorSnapshot};

use crate::error::Result;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:3001/api";

#[async_trait]
pub trait ElevatorAuthority: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<ElevatorSnapshot>;
    async fn send_button(&self, command: ButtonCommand) -> Result<()>;
}

/// Talks to `GET {backend}/total` and `POST {backend}/button`.
#[derive(Debug, Clone)]
pub struct HttpAuthority {
    http: Client,
    backend_url: String,
}

impl HttpAuthority {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), backend_url)
    }

    pub fn with_client(http: Client, backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into().trim_end_matches('/').to_string();
        Self { http, backend_url }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }
}

#[async_trait]
impl ElevatorAuthority for HttpAuthority {
    async fn fetch_snapshot(&self) -> Result<ElevatorSnapshot> {
        let body = self
            .http
            .get(format!("{}/total", self.backend_url))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_button(&self, command: ButtonCommand) -> Result<()> {
        self.http
            .post(format!("{}/button", self.backend_url))
            .json(&command)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/authority_tests.rs"]
mod tests;
