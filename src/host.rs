//! Messaging mini-app host handshake.
//!
//! The webview runs the host's init call and reports how it went. A failed
//! or missing handshake never blocks the app: it continues as an anonymous
//! session.

use log::{error, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum HandshakeOutcome {
    #[serde(rename_all = "camelCase")]
    Ready { user_id: Option<String> },
    #[serde(rename_all = "camelCase")]
    Failed { reason: String },
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum HostContext {
    #[serde(rename_all = "camelCase")]
    Authenticated { user_id: String },
    #[serde(rename_all = "camelCase")]
    Anonymous { session_id: Uuid },
}

impl HostContext {
    pub fn anonymous() -> Self {
        HostContext::Anonymous {
            session_id: Uuid::new_v4(),
        }
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

pub fn resolve(outcome: HandshakeOutcome) -> HostContext {
    match outcome {
        HandshakeOutcome::Ready {
            user_id: Some(user_id),
        } if !user_id.trim().is_empty() => {
            info!("Host handshake completed");
            HostContext::Authenticated { user_id }
        }
        HandshakeOutcome::Ready { .. } => {
            info!("Host handshake completed without a user; continuing anonymously");
            HostContext::anonymous()
        }
        HandshakeOutcome::Failed { reason } => {
            error!("Host initialization failed, continuing without host: {reason}");
            HostContext::anonymous()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_with_user_authenticates() {
        let context = resolve(HandshakeOutcome::Ready {
            user_id: Some("U123".into()),
        });
        assert_eq!(
            context,
            HostContext::Authenticated {
                user_id: "U123".into()
            }
        );
    }

    #[test]
    fn failure_falls_back_to_anonymous() {
        let context = resolve(HandshakeOutcome::Failed {
            reason: "liff.init rejected".into(),
        });
        assert!(matches!(context, HostContext::Anonymous { .. }));
    }

    #[test]
    fn blank_user_is_anonymous() {
        let context = resolve(HandshakeOutcome::Ready {
            user_id: Some("  ".into()),
        });
        assert!(matches!(context, HostContext::Anonymous { .. }));
    }

    #[test]
    fn outcome_parses_from_webview_payload() {
        let outcome: HandshakeOutcome =
            serde_json::from_str(r#"{"status":"failed","reason":"timeout"}"#).expect("parse");
        assert_eq!(
            outcome,
            HandshakeOutcome::Failed {
                reason: "timeout".into()
            }
        );
    }
}
