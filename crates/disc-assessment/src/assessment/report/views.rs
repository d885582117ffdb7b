use super::super::domain::Category;
use super::super::lifecycle::SessionId;
use super::super::resolver::MatchTier;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub category: Category,
    pub letter: char,
    pub label: &'static str,
    pub value: u32,
    pub color: &'static str,
    pub share_pct: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantCategoryView {
    pub position: usize,
    pub category: Category,
    pub title: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub session_id: SessionId,
    pub profile_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_summary: Option<String>,
    pub match_tier: MatchTier,
    pub match_tier_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<String>,
    pub ranking: [Category; 4],
    pub max_score: u32,
    pub chart: Vec<ChartEntry>,
    pub dominant: Vec<DominantCategoryView>,
}
