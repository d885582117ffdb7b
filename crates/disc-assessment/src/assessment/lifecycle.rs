use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEventKind {
    TestStarted,
    TestCompleted,
}

impl LifecycleEventKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::TestStarted => "test_started",
            Self::TestCompleted => "test_completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifecycleEvent {
    pub kind: LifecycleEventKind,
    pub session_id: SessionId,
    pub occurred_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

impl LifecycleEvent {
    pub fn started(session_id: SessionId) -> Self {
        Self {
            kind: LifecycleEventKind::TestStarted,
            session_id,
            occurred_at: Utc::now(),
            profile: None,
        }
    }

    pub fn completed(session_id: SessionId, profile: impl Into<String>) -> Self {
        Self {
            kind: LifecycleEventKind::TestCompleted,
            session_id,
            occurred_at: Utc::now(),
            profile: Some(profile.into()),
        }
    }
}

/// Outbound analytics hook. Delivery failures never affect scoring.
pub trait LifecycleSink: Send + Sync {
    fn record(&self, event: LifecycleEvent) -> Result<(), SinkError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("lifecycle sink unavailable: {0}")]
    Unavailable(String),
}

/// Default sink that writes each event to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLifecycleSink;

impl LifecycleSink for TracingLifecycleSink {
    fn record(&self, event: LifecycleEvent) -> Result<(), SinkError> {
        info!(
            event = event.kind.label(),
            session = %event.session_id,
            profile = event.profile.as_deref().unwrap_or("-"),
            "assessment lifecycle"
        );
        Ok(())
    }
}

pub(crate) fn notify<S>(sink: &S, event: LifecycleEvent)
where
    S: LifecycleSink + ?Sized,
{
    let kind = event.kind;
    if let Err(err) = sink.record(event) {
        warn!(event = kind.label(), error = %err, "lifecycle event dropped");
    }
}
