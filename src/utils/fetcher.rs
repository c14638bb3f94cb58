use futures::future::try_join_all;
use log::{debug, error};
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tokio::time;

use crate::config::fetch::{FETCH_TIMEOUT, MAX_RETRIES, RETRY_DELAY};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request error: {0}")]
    Request(String),

    #[error("HTTP error status: {0}")]
    Status(u16),

    #[error("Response body error: {0}")]
    InvalidBody(String),

    #[error("Attempt timed out")]
    Timeout,
}

pub struct Fetcher {
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
    timeout: Duration,
}

impl Fetcher {
    pub fn new() -> Self {
        Fetcher::with_policy(MAX_RETRIES, RETRY_DELAY, FETCH_TIMEOUT)
    }

    pub fn with_policy(max_retries: u32, retry_delay: Duration, timeout: Duration) -> Self {
        Fetcher {
            client: Client::new(),
            max_retries,
            retry_delay,
            timeout,
        }
    }

    // One attempt issues every request together and is accepted only when all
    // of them succeed; the timeout bounds the whole attempt and elapsing it
    // drops whatever is still in flight. Payloads come back in request order.
    pub async fn fetch_batch(&self, urls: &[String]) -> Result<Vec<Value>, FetchError> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            let batch = try_join_all(urls.iter().map(|url| self.fetch_one(url)));

            let outcome = match time::timeout(self.timeout, batch).await {
                Ok(Ok(payloads)) => return Ok(payloads),
                Ok(Err(e)) => e,
                Err(_) => FetchError::Timeout,
            };

            error!(
                "fetch attempt {}/{} failed: {}",
                attempt, self.max_retries, outcome
            );
            last_error = Some(outcome);

            if attempt < self.max_retries {
                let delay = self.retry_delay * attempt;
                debug!("waiting {:?} before next attempt", delay);
                time::sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or(FetchError::Timeout))
    }

    async fn fetch_one(&self, url: &str) -> Result<Value, FetchError> {
        let res = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        res.json::<Value>()
            .await
            .map_err(|e| FetchError::InvalidBody(e.to_string()))
    }
}
