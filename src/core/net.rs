// src/core/net.rs
//
// Blocking page download with retry on transient failures.

use std::{thread, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::RETRY_BASE_DELAY_MS;
use crate::config::options::FetchOptions;
use crate::error::{Result, ToolError};

pub fn create_client(opts: &FetchOptions) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(opts.timeout_secs))
        .user_agent(opts.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Backoff before attempt `attempt` (0-based): 0, 500ms, 1000ms, 2000ms…
pub fn retry_delay(attempt: u32) -> Duration {
    if attempt == 0 {
        Duration::ZERO
    } else {
        Duration::from_millis(RETRY_BASE_DELAY_MS << (attempt - 1).min(16))
    }
}

/// GET `url` and return the body as text.
/// Connect/timeout errors and 5xx are retried; 4xx and everything else fail fast.
pub fn http_get(client: &Client, url: &str, max_retries: u32) -> Result<String> {
    let attempts = max_retries.max(1);
    let mut last_error: Option<String> = None;

    for attempt in 0..attempts {
        let delay = retry_delay(attempt);
        if !delay.is_zero() {
            logd!(attempt, delay_ms = delay.as_millis() as u64, "Net: retrying after delay");
            thread::sleep(delay);
        }

        match client.get(url).send() {
            Ok(response) => {
                let status = response.status();
                if status.is_server_error() {
                    logw!(%status, attempt = attempt + 1, "Net: server error, will retry");
                    last_error = Some(format!("Server error: {status}"));
                    continue;
                }
                let response = response.error_for_status()?;
                let body = response.text()?;
                logf!(url, bytes = body.len(), "Net: fetched page");
                return Ok(body);
            }
            Err(e) if e.is_connect() || e.is_timeout() => {
                logw!(error = %e, attempt = attempt + 1, "Net: connection error, will retry");
                last_error = Some(e.to_string());
            }
            Err(e) => return Err(ToolError::Http(e)),
        }
    }

    Err(ToolError::RetriesExhausted {
        attempts,
        message: last_error.unwrap_or_else(|| s!("Unknown error")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_defaults() {
        assert!(create_client(&FetchOptions::default()).is_ok());
    }

    #[test]
    fn backoff_doubles() {
        assert_eq!(retry_delay(0), Duration::ZERO);
        assert_eq!(retry_delay(1), Duration::from_millis(500));
        assert_eq!(retry_delay(2), Duration::from_millis(1000));
        assert_eq!(retry_delay(3), Duration::from_millis(2000));
    }
}
