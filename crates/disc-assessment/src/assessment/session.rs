use super::domain::{AnswerSet, Category, RankValue, Selection};
use super::lifecycle::SessionId;
use super::validation::{is_complete, validate, Completeness};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("question {} does not exist; the catalog has {count} questions", .index + 1)]
    UnknownQuestion { index: usize, count: usize },
}

/// One respondent's in-progress answers.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    id: SessionId,
    question_count: usize,
    answers: AnswerSet,
}

impl AssessmentSession {
    pub fn new(id: SessionId, question_count: usize) -> Self {
        Self {
            id,
            question_count,
            answers: AnswerSet::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    fn ensure_known(&self, index: usize) -> Result<(), SessionError> {
        if index < self.question_count {
            Ok(())
        } else {
            Err(SessionError::UnknownQuestion {
                index,
                count: self.question_count,
            })
        }
    }

    /// Applies a click on `rank` under `category` for question `index`.
    pub fn select(
        &mut self,
        index: usize,
        category: Category,
        rank: RankValue,
    ) -> Result<Selection, SessionError> {
        self.ensure_known(index)?;
        Ok(self.answers.select(index, category, rank))
    }

    pub fn assign(
        &mut self,
        index: usize,
        category: Category,
        rank: RankValue,
    ) -> Result<Selection, SessionError> {
        self.ensure_known(index)?;
        Ok(self.answers.assign(index, category, rank))
    }

    pub fn clear(
        &mut self,
        index: usize,
        category: Category,
    ) -> Result<Option<RankValue>, SessionError> {
        self.ensure_known(index)?;
        Ok(self.answers.clear(index, category))
    }

    pub fn progress(&self) -> Completeness {
        validate(&self.answers, self.question_count)
    }

    pub fn is_complete(&self) -> bool {
        is_complete(&self.answers, self.question_count)
    }
}
