use super::super::domain::{Category, ScoreVector};

/// Orders categories by score, highest first. Equal scores keep D, I, S, C order.
pub fn rank_categories(scores: &ScoreVector) -> [Category; 4] {
    let mut ranking = Category::ordered();
    ranking.sort_by(|a, b| {
        scores
            .get(*b)
            .cmp(&scores.get(*a))
            .then_with(|| a.cmp(b))
    });
    ranking
}
