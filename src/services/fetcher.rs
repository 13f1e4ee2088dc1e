//! Deadline-bounded HTTP fetching.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::FetchConfig;

/// A JSON GET with a hard deadline.
///
/// The engine and aggregator only talk to the network through this trait,
/// so tests can substitute a scripted implementation.
#[async_trait]
pub trait EndpointFetch: Send + Sync {
    /// Fetch `url` and decode the body as JSON, failing with `Timeout` if
    /// the deadline elapses first.
    async fn fetch_json(&self, url: &str, timeout: Duration) -> Result<Value>;
}

/// Production fetcher backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the configured user agent.
    ///
    /// The deadline is applied per call rather than on the client, so one
    /// client serves requests with differing timeouts.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EndpointFetch for HttpFetcher {
    async fn fetch_json(&self, url: &str, timeout: Duration) -> Result<Value> {
        let request = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| AppError::transport(url, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(AppError::HttpStatus {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }

            response.json::<Value>().await.map_err(|e| {
                if e.is_decode() {
                    AppError::payload(url, e)
                } else {
                    AppError::transport(url, e)
                }
            })
        };

        // Dropping the losing branch cancels the in-flight request and
        // releases the timer on every exit path.
        match tokio::time::timeout(timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(AppError::timeout(url, timeout.as_millis() as u64)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&FetchConfig::default()).unwrap()
    }

    /// Bind a listener that answers exactly one request with `response`.
    async fn serve_once(response: &'static str) -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
        });
        addr
    }

    #[tokio::test]
    async fn test_success_returns_json() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 17\r\nconnection: close\r\n\r\n{\"text\":\"tafsir\"}",
        )
        .await;
        let value = fetcher()
            .fetch_json(&format!("http://{addr}/1/1.json"), Duration::from_secs(2))
            .await
            .unwrap();
        assert_eq!(value["text"], "tafsir");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let addr = serve_once(
            "HTTP/1.1 503 Service Unavailable\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let result = fetcher()
            .fetch_json(&format!("http://{addr}/1/1.json"), Duration::from_secs(2))
            .await;
        assert!(matches!(
            result,
            Err(AppError::HttpStatus { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_payload_error() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 8\r\nconnection: close\r\n\r\nnot json",
        )
        .await;
        let result = fetcher()
            .fetch_json(&format!("http://{addr}/1/1.json"), Duration::from_secs(2))
            .await;
        assert!(matches!(result, Err(AppError::PayloadShape { .. })));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = fetcher()
            .fetch_json(&format!("http://{addr}/1/1.json"), Duration::from_secs(2))
            .await;
        assert!(matches!(result, Err(AppError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_deadline_elapses_before_late_response() {
        // Accept the connection but never answer.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let started = Instant::now();
        let result = fetcher()
            .fetch_json(&format!("http://{addr}/slow.json"), Duration::from_millis(100))
            .await;

        assert!(matches!(result, Err(AppError::Timeout { timeout_ms: 100, .. })));
        assert!(started.elapsed() < Duration::from_secs(2));
        drop(listener);
    }
}
