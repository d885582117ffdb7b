use super::super::domain::{Category, CategoryDescription, RankValue};
use super::super::engine::AssessmentResult;
use super::views::{AssessmentReport, ChartEntry, DominantCategoryView};

impl AssessmentReport {
    /// Builds the presentation view using the standard category descriptions.
    pub fn build(result: &AssessmentResult) -> Self {
        Self::build_with(result, CategoryDescription::standard)
    }

    pub fn build_with<F>(result: &AssessmentResult, describe: F) -> Self
    where
        F: Fn(Category) -> CategoryDescription,
    {
        let scores = &result.scores;
        let total = scores.total();

        let chart = Category::ordered()
            .into_iter()
            .map(|category| {
                let value = scores.get(category);
                ChartEntry {
                    category,
                    letter: category.letter(),
                    label: category.label(),
                    value,
                    color: category.color(),
                    share_pct: if total == 0 {
                        0.0
                    } else {
                        value as f32 / total as f32 * 100.0
                    },
                }
            })
            .collect();

        let dominant = result
            .resolution
            .dominant
            .iter()
            .enumerate()
            .map(|(offset, category)| {
                let description = describe(*category);
                DominantCategoryView {
                    position: offset + 1,
                    category: *category,
                    title: description.title,
                    points: description.points,
                }
            })
            .collect();

        let profile = &result.resolution.profile;
        let max_score = u32::try_from(result.question_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(u32::from(RankValue::MAX));

        AssessmentReport {
            session_id: result.session_id.clone(),
            profile_name: profile.name.clone(),
            profile_summary: profile.summary.clone(),
            match_tier: result.resolution.tier,
            match_tier_label: result.resolution.tier.label(),
            matched_key: result
                .resolution
                .matched_key
                .as_ref()
                .map(|key| key.to_string()),
            ranking: result.resolution.ranking,
            max_score,
            chart,
            dominant,
        }
    }
}
