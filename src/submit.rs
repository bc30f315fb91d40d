/// Listing submission
///
/// One POST per submit, no retries. The outcome is reduced to a single
/// user-facing notification; details only go to the log.

use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::notify::{Notifier, NotifyKind};
use crate::state::data::Listing;

pub const SUCCESS_MESSAGE: &str = "Listing created successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to create listing";

/// Why a submission failed
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error("could not encode listing: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Parse(String),
}

/// HTTP client bound to the listing endpoint
#[derive(Debug, Clone)]
pub struct ListingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ListingClient {
    /// Create a client for `endpoint`
    ///
    /// Without a timeout, requests wait as long as the transport allows.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default HTTP client");
            reqwest::Client::new()
        });

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// POST the listing as JSON and parse the JSON reply
    pub async fn submit(&self, listing: &Listing) -> Result<Value, SubmitError> {
        let body = listing.to_json().map_err(|e| SubmitError::Encode(e.to_string()))?;
        tracing::info!(id = listing.id, endpoint = %self.endpoint, "submitting listing");

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| SubmitError::Parse(e.to_string()))
    }
}

/// Log the outcome and tell the user, returns `true` on success
pub fn report_outcome(result: &Result<Value, SubmitError>, notifier: &mut impl Notifier) -> bool {
    match result {
        Ok(data) => {
            tracing::info!(response = %data, "listing created");
            notifier.notify(SUCCESS_MESSAGE, NotifyKind::Info);
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "listing submission failed");
            notifier.notify(FAILURE_MESSAGE, NotifyKind::Error);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod test_backend {
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use std::sync::{Arc, Mutex};

    /// A received request: its Content-Type header and raw body
    pub type Received = Arc<Mutex<Vec<(Option<String>, String)>>>;

    /// Serve `/addListing` on an ephemeral port, answering every POST with
    /// `status` and `body`. Returns the endpoint URL and the request log.
    pub async fn spawn(status: StatusCode, body: &'static str) -> (String, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let log = received.clone();

        let app = Router::new().route(
            "/addListing",
            post(move |headers: HeaderMap, request: String| {
                let log = log.clone();
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    log.lock().unwrap().push((content_type, request));
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/addListing"), received)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NotificationCenter;
    use crate::state::data::{ListingDraft, MediaItem};
    use axum::http::StatusCode;

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Record player".to_string(),
            price: "89.99".to_string(),
            description: "Belt drive, new stylus".to_string(),
            media: Some(MediaItem::image("blob:collection-tracker/1")),
        }
    }

    #[tokio::test]
    async fn test_submit_posts_listing_once() {
        let (endpoint, received) = test_backend::spawn(StatusCode::OK, r#"{"ok":true}"#).await;
        let client = ListingClient::new(endpoint, None);
        let listing = Listing::from_draft(&draft());

        let reply = client.submit(&listing).await.unwrap();

        assert_eq!(reply["ok"], true);
        let requests = received.lock().unwrap();
        assert_eq!(requests.len(), 1);

        let (content_type, body) = &requests[0];
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let sent: Value = serde_json::from_str(body).unwrap();
        assert!(sent["id"].is_number());
        assert_eq!(sent["id"], listing.id);
        assert_eq!(sent["title"], "Record player");
        assert_eq!(sent["price"], "89.99");
        assert_eq!(sent["description"], "Belt drive, new stylus");
        assert_eq!(sent["media"]["type"], "image");
    }

    #[tokio::test]
    async fn test_server_error_is_status_failure() {
        let (endpoint, _) = test_backend::spawn(StatusCode::INTERNAL_SERVER_ERROR, "{}").await;
        let client = ListingClient::new(endpoint, None);

        let result = client.submit(&Listing::from_draft(&draft())).await;

        assert!(matches!(result, Err(SubmitError::Status(500))));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_parse_failure() {
        let (endpoint, _) = test_backend::spawn(StatusCode::OK, "created").await;
        let client = ListingClient::new(endpoint, None);

        let result = client.submit(&Listing::from_draft(&draft())).await;

        assert!(matches!(result, Err(SubmitError::Parse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_failure() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ListingClient::new(format!("http://{addr}/addListing"), Some(Duration::from_secs(5)));
        let result = client.submit(&Listing::from_draft(&draft())).await;

        assert!(matches!(result, Err(SubmitError::Network(_))));
    }

    #[test]
    fn test_report_outcome_notifies_user() {
        let mut center = NotificationCenter::new();

        assert!(report_outcome(&Ok(serde_json::json!({})), &mut center));
        let latest = center.visible().next().unwrap();
        assert_eq!((latest.message.as_str(), latest.kind), (SUCCESS_MESSAGE, NotifyKind::Info));

        assert!(!report_outcome(&Err(SubmitError::Status(500)), &mut center));
        let latest = center.visible().next().unwrap();
        assert_eq!((latest.message.as_str(), latest.kind), (FAILURE_MESSAGE, NotifyKind::Error));
    }
}
