use super::domain::{Answer, AnswerSet, Category, RankValue};
use serde::Serialize;

/// Why a single answer is not yet usable for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnswerDefect {
    #[error("no rank chosen for {category}")]
    Missing { category: Category },
    #[error("rank {rank} is assigned to more than one category")]
    DuplicateRank { rank: RankValue },
}

/// Checks that all four categories hold pairwise distinct ranks.
pub fn check_answer(answer: &Answer) -> Result<(), AnswerDefect> {
    let mut seen = [false; RankValue::MAX as usize + 1];

    for category in Category::ordered() {
        let rank = answer
            .get(category)
            .ok_or(AnswerDefect::Missing { category })?;
        let slot = &mut seen[usize::from(rank.get())];
        if *slot {
            return Err(AnswerDefect::DuplicateRank { rank });
        }
        *slot = true;
    }

    Ok(())
}

pub fn is_answer_complete(answer: &Answer) -> bool {
    check_answer(answer).is_ok()
}

/// True when exactly `question_count` answers cover `0..question_count` and all are complete.
pub fn is_complete(answers: &AnswerSet, question_count: usize) -> bool {
    answers.len() == question_count
        && answers
            .iter()
            .all(|(index, answer)| index < question_count && is_answer_complete(answer))
}

/// Progress snapshot used to drive the progress indicator and submit gate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Completeness {
    pub answered: usize,
    pub total: usize,
    pub progress_pct: f32,
    pub complete: bool,
    /// Zero-based indices still missing, partial, or carrying duplicate ranks.
    pub outstanding: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unexpected: Vec<usize>,
}

pub fn validate(answers: &AnswerSet, question_count: usize) -> Completeness {
    let outstanding: Vec<usize> = (0..question_count)
        .filter(|index| !answers.get(*index).map(is_answer_complete).unwrap_or(false))
        .collect();
    let unexpected: Vec<usize> = answers
        .indices()
        .filter(|index| *index >= question_count)
        .collect();

    let answered = question_count - outstanding.len();
    let progress_pct = if question_count == 0 {
        0.0
    } else {
        answered as f32 / question_count as f32 * 100.0
    };

    Completeness {
        answered,
        total: question_count,
        progress_pct,
        complete: outstanding.is_empty() && unexpected.is_empty(),
        outstanding,
        unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(value: u8) -> RankValue {
        RankValue::new(value).expect("valid rank")
    }

    fn full(ranks: [u8; 4]) -> Answer {
        Answer::from_ranks(ranks).expect("valid ranks")
    }

    #[test]
    fn complete_answer_is_a_permutation() {
        assert_eq!(check_answer(&full([2, 4, 1, 3])), Ok(()));
    }

    #[test]
    fn missing_category_is_reported_in_declared_order() {
        let mut answer = full([4, 3, 2, 1]);
        answer.clear(Category::S);
        answer.clear(Category::I);
        assert_eq!(
            check_answer(&answer),
            Err(AnswerDefect::Missing {
                category: Category::I
            })
        );
    }

    #[test]
    fn duplicate_rank_is_reported() {
        assert_eq!(
            check_answer(&full([4, 4, 2, 1])),
            Err(AnswerDefect::DuplicateRank { rank: rank(4) })
        );
    }

    #[test]
    fn set_requires_exact_question_count() {
        let answers = AnswerSet::filled(3, full([4, 3, 2, 1]));
        assert!(is_complete(&answers, 3));
        assert!(!is_complete(&answers, 4));
        assert!(!is_complete(&answers, 2));
    }

    #[test]
    fn out_of_range_index_blocks_completion() {
        let mut answers = AnswerSet::filled(3, full([4, 3, 2, 1]));
        answers.remove(2);
        answers.insert(7, full([4, 3, 2, 1]));

        assert!(!is_complete(&answers, 3));
        let report = validate(&answers, 3);
        assert_eq!(report.outstanding, vec![2]);
        assert_eq!(report.unexpected, vec![7]);
        assert!(!report.complete);
    }

    #[test]
    fn clearing_a_rank_reopens_the_question() {
        let mut answers = AnswerSet::filled(10, full([4, 3, 2, 1]));
        assert!(validate(&answers, 10).complete);

        answers.select(5, Category::D, rank(4));

        let report = validate(&answers, 10);
        assert_eq!(answers.get(5).and_then(|a| a.get(Category::D)), None);
        assert_eq!(report.outstanding, vec![5]);
        assert_eq!(report.answered, 9);
        assert!((report.progress_pct - 90.0).abs() < f32::EPSILON);
        assert!(!report.complete);
    }

    #[test]
    fn empty_set_has_every_question_outstanding() {
        let report = validate(&AnswerSet::new(), 4);
        assert_eq!(report.answered, 0);
        assert_eq!(report.outstanding, vec![0, 1, 2, 3]);
        assert_eq!(report.progress_pct, 0.0);
    }
}
