//! Submission lifecycle: spawn the request, guard against double submits,
//! hand the result back to the UI thread.

use super::App;
use crate::submit::submit_and_report;
use crate::types::*;
use eframe::egui;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Owns the HTTP client and the state shared with the in-flight request.
pub struct Submission {
    state: Arc<Mutex<SubmitState>>,
    client: reqwest::Client,
}

impl Submission {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubmitState::Idle)),
            client,
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(*self.state.lock().unwrap(), SubmitState::Sending)
    }

    /// Spawn one POST of `details` on `runtime`. `on_done` runs after the
    /// result has been stored. Returns false if a request is already in flight.
    pub fn start(
        &self,
        runtime: &tokio::runtime::Handle,
        endpoint: String,
        details: UserDetails,
        on_done: impl FnOnce() + Send + 'static,
    ) -> bool {
        {
            let mut s = self.state.lock().unwrap();
            if matches!(*s, SubmitState::Sending) {
                debug!("Submission already in flight, ignoring");
                return false;
            }
            *s = SubmitState::Sending;
        }

        let state = self.state.clone();
        let client = self.client.clone();
        runtime.spawn(async move {
            let alert = submit_and_report(&client, &endpoint, &details).await;
            *state.lock().unwrap() = SubmitState::Finished(alert);
            on_done();
        });
        true
    }

    /// Take a finished result, resetting to idle. `None` while idle or sending.
    pub fn take_finished(&self) -> Option<Alert> {
        let mut s = self.state.lock().unwrap();
        if matches!(*s, SubmitState::Finished(_)) {
            match std::mem::take(&mut *s) {
                SubmitState::Finished(alert) => Some(alert),
                _ => None,
            }
        } else {
            None
        }
    }
}

impl App {
    /// Form submit action
    pub fn submit_form(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        let started = self.submission.start(
            self.runtime.handle(),
            self.endpoint.clone(),
            self.details.clone(),
            move || ctx.request_repaint(),
        );
        if started {
            info!(url = %self.endpoint, "Submitting user details");
        }
    }

    /// Move a finished submission into the alert modal
    pub fn poll_submission(&mut self) {
        if let Some(alert) = self.submission.take_finished() {
            self.alert = Some(alert);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Json, Router};
    use std::sync::mpsc;
    use std::time::Duration;

    fn spawn_server(runtime: &tokio::runtime::Runtime, hits: Arc<Mutex<Vec<serde_json::Value>>>) -> String {
        let app = Router::new().route(
            "/user-details",
            post(move |Json(body): Json<serde_json::Value>| {
                let hits = hits.clone();
                async move {
                    // slow enough that a second click lands while in flight
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    hits.lock().unwrap().push(body.clone());
                    Json(serde_json::json!({ "status": "success", "data": body }))
                }
            }),
        );
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();
        runtime.spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/user-details", addr)
    }

    fn details() -> UserDetails {
        UserDetails {
            name: "Alan".into(),
            email: "alan@example.com".into(),
            age: "41".into(),
            gender: "Male".into(),
        }
    }

    #[test]
    fn one_request_per_submission() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let hits = Arc::new(Mutex::new(Vec::new()));
        let endpoint = spawn_server(&runtime, hits.clone());
        let submission = Submission::new(reqwest::Client::new());
        let (tx, rx) = mpsc::channel();

        let tx2 = tx.clone();
        assert!(submission.start(runtime.handle(), endpoint.clone(), details(), move || {
            tx2.send(()).unwrap();
        }));
        assert!(submission.is_sending());
        assert!(!submission.start(runtime.handle(), endpoint, details(), move || {
            tx.send(()).unwrap();
        }));
        assert!(submission.take_finished().is_none());

        rx.recv_timeout(Duration::from_secs(10)).unwrap();
        let alert = submission.take_finished().unwrap();
        assert!(alert.is_success());
        assert!(!submission.is_sending());
        assert!(submission.take_finished().is_none());

        let hits = hits.lock().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0], serde_json::to_value(details()).unwrap());
    }

    #[test]
    fn failure_is_reported_and_submission_can_retry() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let closed = {
            let listener = runtime
                .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
                .unwrap();
            format!("http://{}/user-details", listener.local_addr().unwrap())
        };
        let submission = Submission::new(reqwest::Client::new());

        let (tx, rx) = mpsc::channel();
        assert!(submission.start(runtime.handle(), closed.clone(), details(), move || {
            tx.send(()).unwrap();
        }));
        rx.recv_timeout(Duration::from_secs(10)).unwrap();
        let alert = submission.take_finished().unwrap();
        assert!(matches!(alert, Alert::Failure { .. }));

        // idle again, a new submission is accepted
        let (tx, rx) = mpsc::channel();
        assert!(submission.start(runtime.handle(), closed, details(), move || {
            tx.send(()).unwrap();
        }));
        rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(!submission.take_finished().unwrap().is_success());
    }
}
