use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::domain::{Answer, AnswerSet, QuestionCatalog};
use crate::assessment::engine::AssessmentEngine;
use crate::assessment::lifecycle::{LifecycleEvent, LifecycleEventKind, LifecycleSink, SinkError};

#[derive(Default, Clone)]
pub(super) struct MemorySink {
    events: Arc<Mutex<Vec<LifecycleEvent>>>,
}

impl MemorySink {
    pub(super) fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }

    pub(super) fn kinds(&self) -> Vec<LifecycleEventKind> {
        self.events().into_iter().map(|event| event.kind).collect()
    }
}

impl LifecycleSink for MemorySink {
    fn record(&self, event: LifecycleEvent) -> Result<(), SinkError> {
        self.events.lock().expect("sink mutex poisoned").push(event);
        Ok(())
    }
}

pub(super) struct OfflineSink;

impl LifecycleSink for OfflineSink {
    fn record(&self, _event: LifecycleEvent) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("analytics endpoint down".to_string()))
    }
}

pub(super) fn standard_engine() -> (Arc<AssessmentEngine<MemorySink>>, MemorySink) {
    let sink = MemorySink::default();
    let engine = AssessmentEngine::standard(Arc::new(sink.clone()));
    (Arc::new(engine), sink)
}

pub(super) fn uniform_answers(ranks: [u8; 4]) -> AnswerSet {
    AnswerSet::filled(
        QuestionCatalog::standard().len(),
        Answer::from_ranks(ranks).expect("valid ranks"),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
