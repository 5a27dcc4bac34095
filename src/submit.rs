//! Sending the user-details record to the remote endpoint

use crate::types::{Alert, UserDetails};
use tracing::{debug, error, info};

/// The only way a submission can fail. Connection errors, transport errors
/// and unparseable response bodies all end up here.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// POST the record as JSON and parse whatever JSON comes back.
///
/// The response status is not inspected, only the body.
pub async fn submit_user_details(
    client: &reqwest::Client,
    endpoint: &str,
    details: &UserDetails,
) -> Result<serde_json::Value, SubmitError> {
    debug!(url = endpoint, "Posting user details");
    let response = client.post(endpoint).json(details).send().await?;
    debug!(status = %response.status(), "Response received");
    let body = response.json::<serde_json::Value>().await?;
    Ok(body)
}

/// Submit and turn the outcome into the alert shown to the user.
pub async fn submit_and_report(
    client: &reqwest::Client,
    endpoint: &str,
    details: &UserDetails,
) -> Alert {
    match submit_user_details(client, endpoint, details).await {
        Ok(response) => {
            info!(url = endpoint, response = %response, "Server response");
            Alert::Success
        }
        Err(e) => {
            error!(url = endpoint, error = %e, "Failed to send user details");
            Alert::Failure { error: e.to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<(Option<String>, serde_json::Value)>>>;

    /// Spawn a local server that records every POST to /user-details.
    async fn spawn_recorder() -> (String, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let store = received.clone();
        let app = Router::new().route(
            "/user-details",
            post(move |headers: axum::http::HeaderMap, Json(body): Json<serde_json::Value>| {
                let store = store.clone();
                async move {
                    let content_type = headers
                        .get(axum::http::header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    store.lock().unwrap().push((content_type, body.clone()));
                    Json(serde_json::json!({ "status": "success", "data": body }))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}/user-details", addr), received)
    }

    /// An address nothing is listening on.
    async fn closed_endpoint() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/user-details", addr)
    }

    fn details() -> UserDetails {
        UserDetails {
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            age: "85".into(),
            gender: "Female".into(),
        }
    }

    #[tokio::test]
    async fn posts_once_with_json_body() {
        let (endpoint, received) = spawn_recorder().await;
        let client = reqwest::Client::new();

        let response = submit_user_details(&client, &endpoint, &details()).await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (content_type, body) = &received[0];
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(
            body,
            &serde_json::json!({
                "name": "Grace Hopper",
                "email": "grace@example.com",
                "age": "85",
                "gender": "Female",
            })
        );
        assert_eq!(response["status"], "success");
        assert_eq!(response["data"]["age"], "85");
    }

    /// Log sink for tests: collects formatted events into a shared buffer.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Route this thread's events into a fresh buffer until the guard drops.
    fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    #[tokio::test]
    async fn success_reports_success_alert_and_logs_body() {
        let (endpoint, received) = spawn_recorder().await;
        let client = reqwest::Client::new();
        let (logs, _guard) = capture_logs();

        let alert = submit_and_report(&client, &endpoint, &details()).await;

        assert_eq!(alert, Alert::Success);
        assert_eq!(received.lock().unwrap().len(), 1);

        let logged = logs.contents();
        assert!(logged.contains("INFO"), "{logged}");
        assert!(logged.contains("Server response"), "{logged}");
        assert!(logged.contains(r#""status":"success""#), "{logged}");
        assert!(logged.contains("Grace Hopper"), "{logged}");
        assert!(!logged.contains("Failed to send user details"), "{logged}");
    }

    #[tokio::test]
    async fn network_failure_reports_failure_alert() {
        let endpoint = closed_endpoint().await;
        let client = reqwest::Client::new();

        let err = submit_user_details(&client, &endpoint, &details()).await.unwrap_err();
        assert!(matches!(err, SubmitError::RequestFailed(_)));

        let (logs, _guard) = capture_logs();
        let alert = submit_and_report(&client, &endpoint, &details()).await;
        assert!(!alert.is_success());
        assert_eq!(alert.message(), "Failed to send user details");
        assert!(alert.detail().is_some_and(|d| d.starts_with("request failed")));

        let logged = logs.contents();
        assert!(logged.contains("ERROR"), "{logged}");
        assert!(logged.contains("Failed to send user details"), "{logged}");
        assert!(!logged.contains("Server response"), "{logged}");
    }

    #[tokio::test]
    async fn non_json_response_is_a_failure() {
        let app = Router::new().route("/user-details", post(|| async { "accepted" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let endpoint = format!("http://{}/user-details", addr);

        let alert = submit_and_report(&reqwest::Client::new(), &endpoint, &details()).await;
        assert!(matches!(alert, Alert::Failure { .. }));
    }

    #[tokio::test]
    async fn error_status_with_json_body_still_counts_as_sent() {
        let app = Router::new().route(
            "/user-details",
            post(|| async {
                (
                    axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                    Json(serde_json::json!({ "detail": "age must be an integer" })),
                )
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        let endpoint = format!("http://{}/user-details", addr);
        let (logs, _guard) = capture_logs();

        let alert = submit_and_report(&reqwest::Client::new(), &endpoint, &details()).await;
        assert_eq!(alert, Alert::Success);
        assert!(logs.contents().contains("age must be an integer"));
    }
}
