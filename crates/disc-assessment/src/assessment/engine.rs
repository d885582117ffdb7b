use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::catalog::{CatalogImportError, CatalogImporter};
use super::domain::{AnswerSet, QuestionCatalog, ScoreVector};
use super::lifecycle::{notify, LifecycleEvent, LifecycleSink, SessionId};
use super::resolver::{ProfileResolver, ProfileTable, Resolution};
use super::scoring::{aggregate, ScoringError};
use super::session::AssessmentSession;
use super::validation::{validate, Completeness};
use crate::config::AssessmentConfig;

/// Scored and resolved outcome for one completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub session_id: SessionId,
    pub question_count: usize,
    pub scores: ScoreVector,
    pub resolution: Resolution,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

/// Composes the question catalog, profile resolver, and lifecycle sink.
pub struct AssessmentEngine<S> {
    catalog: Arc<QuestionCatalog>,
    resolver: Arc<ProfileResolver>,
    sink: Arc<S>,
}

impl<S> AssessmentEngine<S>
where
    S: LifecycleSink + 'static,
{
    pub fn new(catalog: QuestionCatalog, table: ProfileTable, sink: Arc<S>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            resolver: Arc::new(ProfileResolver::new(table)),
            sink,
        }
    }

    pub fn standard(sink: Arc<S>) -> Self {
        Self::new(QuestionCatalog::standard(), ProfileTable::standard(), sink)
    }

    /// Uses the CSV overrides named in `config`, falling back to the built-in data.
    pub fn from_config(config: &AssessmentConfig, sink: Arc<S>) -> Result<Self, CatalogImportError> {
        let catalog = match &config.question_catalog {
            Some(path) => CatalogImporter::questions_from_path(path)?,
            None => QuestionCatalog::standard(),
        };
        let table = match &config.profile_table {
            Some(path) => CatalogImporter::profiles_from_path(path)?,
            None => ProfileTable::standard(),
        };

        info!(
            questions = catalog.len(),
            profiles = table.len(),
            custom_questions = config.question_catalog.is_some(),
            custom_profiles = config.profile_table.is_some(),
            "assessment catalog loaded"
        );
        Ok(Self::new(catalog, table, sink))
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn profile_table(&self) -> &ProfileTable {
        self.resolver.table()
    }

    pub fn question_count(&self) -> usize {
        self.catalog.len()
    }

    /// Records a test start and returns the id assigned to it.
    pub fn record_started(&self) -> SessionId {
        let id = next_session_id();
        notify(self.sink.as_ref(), LifecycleEvent::started(id.clone()));
        id
    }

    pub fn start_session(&self) -> AssessmentSession {
        AssessmentSession::new(self.record_started(), self.question_count())
    }

    pub fn progress(&self, answers: &AnswerSet) -> Completeness {
        validate(answers, self.question_count())
    }

    pub fn complete(&self, session: &AssessmentSession) -> Result<AssessmentResult, ScoringError> {
        self.finish(session.id().clone(), session.answers())
    }

    /// Scores a standalone submission that did not go through a session.
    pub fn evaluate(&self, answers: &AnswerSet) -> Result<AssessmentResult, ScoringError> {
        self.evaluate_for(None, answers)
    }

    /// Scores a submission under the id handed out by [`Self::record_started`], or a fresh id.
    pub fn evaluate_for(
        &self,
        session_id: Option<SessionId>,
        answers: &AnswerSet,
    ) -> Result<AssessmentResult, ScoringError> {
        self.finish(session_id.unwrap_or_else(next_session_id), answers)
    }

    fn finish(
        &self,
        session_id: SessionId,
        answers: &AnswerSet,
    ) -> Result<AssessmentResult, ScoringError> {
        let question_count = self.question_count();
        let scores = aggregate(answers, question_count).map_err(|err| {
            debug!(session = %session_id, error = %err, "assessment submission refused");
            err
        })?;
        let resolution = self.resolver.resolve(&scores);

        info!(
            session = %session_id,
            profile = %resolution.profile.name,
            tier = resolution.tier.label(),
            d = scores.d,
            i = scores.i,
            s = scores.s,
            c = scores.c,
            "assessment completed"
        );
        notify(
            self.sink.as_ref(),
            LifecycleEvent::completed(session_id.clone(), resolution.profile.name.clone()),
        );

        Ok(AssessmentResult {
            session_id,
            question_count,
            scores,
            resolution,
        })
    }
}
