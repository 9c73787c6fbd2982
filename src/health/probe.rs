//! One-shot HTTP health probe.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

use crate::config::HealthSettings;
use crate::ui::{hints, UserInterface};

/// Longest response excerpt quoted back to the user.
const MAX_DETAIL_CHARS: usize = 200;

/// Result of probing the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthOutcome {
    /// The endpoint answered `{"status": "healthy"}`.
    Healthy,
    /// The endpoint answered, but not with a healthy payload.
    Unhealthy { detail: String },
    /// Nothing answered (connection refused, timeout).
    Unreachable { reason: String },
    /// Any other failure.
    Failed { reason: String },
}

impl HealthOutcome {
    /// Whether the server reported itself healthy.
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthOutcome::Healthy)
    }
}

/// Probes `http://localhost:<port><path>`.
#[derive(Debug, Clone)]
pub struct HealthProber {
    port: u16,
    path: String,
    timeout: Duration,
}

impl HealthProber {
    /// Create a prober for `port` using the configured path and timeout.
    pub fn new(port: u16, settings: &HealthSettings) -> Self {
        Self {
            port,
            path: settings.path.clone(),
            timeout: settings.timeout(),
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The URL that will be requested.
    pub fn url(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        format!("http://localhost:{}{}", self.port, path)
    }

    /// Issue the request and classify the answer.
    pub fn check(&self) -> HealthOutcome {
        let url = self.url();
        tracing::debug!("GET {}", url);

        let client = match Client::builder()
            .user_agent("devstrap")
            .timeout(self.timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                return HealthOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        let response = match client.get(&url).send() {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                return HealthOutcome::Unreachable {
                    reason: e.to_string(),
                }
            }
            Err(e) => {
                return HealthOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        let status = response.status();
        match response.text() {
            Ok(body) => evaluate(status, &body),
            Err(e) if e.is_timeout() => HealthOutcome::Unreachable {
                reason: e.to_string(),
            },
            Err(e) => HealthOutcome::Failed {
                reason: e.to_string(),
            },
        }
    }

    /// Probe and report the outcome to the user.
    pub fn probe(&self, ui: &mut dyn UserInterface) -> HealthOutcome {
        let outcome = self.check();
        match &outcome {
            HealthOutcome::Healthy => {
                ui.success(&format!("Server is healthy at port {}", self.port));
            }
            HealthOutcome::Unhealthy { detail } => {
                ui.warning(&format!("Server responded but not healthy: {}", detail));
            }
            HealthOutcome::Unreachable { reason } => {
                ui.error(&format!("Server is not responding at port {}", self.port));
                ui.command_output(reason);
                ui.info(&hints::after_unreachable_health(self.port));
            }
            HealthOutcome::Failed { reason } => {
                ui.error(&format!("Health check failed: {}", reason));
            }
        }
        outcome
    }
}

/// Classify an HTTP answer from the health endpoint.
pub fn evaluate(status: StatusCode, body: &str) -> HealthOutcome {
    let payload: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => {
            return HealthOutcome::Unhealthy {
                detail: format!("HTTP {} with non-JSON body: {}", status.as_u16(), excerpt(body)),
            }
        }
    };

    let healthy = payload.get("status").and_then(Value::as_str) == Some("healthy");
    if healthy && status.is_success() {
        return HealthOutcome::Healthy;
    }

    let detail = if status.is_success() {
        excerpt(&payload.to_string())
    } else {
        format!("HTTP {}: {}", status.as_u16(), excerpt(&payload.to_string()))
    };
    HealthOutcome::Unhealthy { detail }
}

fn excerpt(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= MAX_DETAIL_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(MAX_DETAIL_CHARS).collect();
    format!("{}…", cut)
}
