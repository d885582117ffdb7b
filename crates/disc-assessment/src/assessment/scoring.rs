use super::domain::{AnswerSet, RankValue, ScoreVector};
use super::validation::{check_answer, AnswerDefect};

/// Contract violations raised when an answer set reaches scoring before it is ready.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("question {} is not fully answered", .question + 1)]
    Incomplete { question: usize },
    #[error("expected answers for {expected} questions, found {actual}")]
    QuestionCountMismatch { expected: usize, actual: usize },
    #[error("question {} assigns rank {rank} to more than one category", .question + 1)]
    InvalidAnswer { question: usize, rank: RankValue },
}

/// Sums every category's ranks across a complete answer set.
pub fn aggregate(answers: &AnswerSet, question_count: usize) -> Result<ScoreVector, ScoringError> {
    if answers.len() > question_count || answers.indices().any(|index| index >= question_count) {
        return Err(ScoringError::QuestionCountMismatch {
            expected: question_count,
            actual: answers.len(),
        });
    }

    let mut scores = ScoreVector::default();
    for question in 0..question_count {
        let answer = answers
            .get(question)
            .ok_or(ScoringError::Incomplete { question })?;

        check_answer(answer).map_err(|defect| match defect {
            AnswerDefect::Missing { .. } => ScoringError::Incomplete { question },
            AnswerDefect::DuplicateRank { rank } => ScoringError::InvalidAnswer { question, rank },
        })?;

        for (category, rank) in answer.assigned() {
            scores.add(category, rank);
        }
    }

    Ok(scores)
}
