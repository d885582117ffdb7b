//! DISC questionnaire: answer validation, scoring, and profile resolution.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod lifecycle;
pub mod report;
pub mod resolver;
pub mod router;
pub mod scoring;
pub mod session;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{AnswerSheetImporter, CatalogImportError, CatalogImporter};
pub use domain::{
    Answer, AnswerSet, Category, CategoryDescription, Profile, ProfileKey, ProfileKeyError,
    Question, QuestionCatalog, RankValue, RankValueError, ScoreVector, Selection,
    NOT_FOUND_PROFILE_NAME,
};
pub use engine::{AssessmentEngine, AssessmentResult};
pub use lifecycle::{
    LifecycleEvent, LifecycleEventKind, LifecycleSink, SessionId, SinkError,
    TracingLifecycleSink,
};
pub use report::{export_report, AssessmentReport, ExportError, ExportFormat};
pub use resolver::{
    rank_categories, MatchTier, ProfileEntryView, ProfileResolver, ProfileTable,
    ProfileTableError, Resolution,
};
pub use router::{assessment_router, AnswerSubmission};
pub use scoring::{aggregate, ScoringError};
pub use session::{AssessmentSession, SessionError};
pub use validation::{check_answer, is_answer_complete, is_complete, validate, AnswerDefect, Completeness};
