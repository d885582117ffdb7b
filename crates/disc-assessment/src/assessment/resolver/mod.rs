mod ranking;
mod table;

pub use ranking::rank_categories;
pub use table::{ProfileEntryView, ProfileTable, ProfileTableError};

use super::domain::{Category, Profile, ProfileKey, ScoreVector};
use serde::Serialize;

/// Lookup level that produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Triple,
    Pair,
    Single,
    Fallback,
}

impl MatchTier {
    /// Tiers tried in priority order; the fallback is implied when all miss.
    pub const fn lookup_order() -> [Self; 3] {
        [Self::Triple, Self::Pair, Self::Single]
    }

    pub const fn arity(self) -> Option<usize> {
        match self {
            Self::Triple => Some(3),
            Self::Pair => Some(2),
            Self::Single => Some(1),
            Self::Fallback => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Triple => "3-letter match",
            Self::Pair => "2-letter match",
            Self::Single => "1-letter match",
            Self::Fallback => "no matching profile",
        }
    }
}

/// Outcome of mapping a score vector onto the profile table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub profile: Profile,
    pub tier: MatchTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<ProfileKey>,
    pub ranking: [Category; 4],
    pub dominant: [Category; 2],
}

/// Stateless resolver over a read-only profile table.
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    table: ProfileTable,
}

impl ProfileResolver {
    pub fn new(table: ProfileTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &ProfileTable {
        &self.table
    }

    pub fn resolve(&self, scores: &ScoreVector) -> Resolution {
        let ranking = rank_categories(scores);
        let dominant = [ranking[0], ranking[1]];

        for tier in MatchTier::lookup_order() {
            let Some(arity) = tier.arity() else {
                continue;
            };
            let Ok(key) = ProfileKey::new(&ranking[..arity]) else {
                continue;
            };

            if let Some(profile) = self.table.get(&key) {
                return Resolution {
                    profile: profile.clone(),
                    tier,
                    matched_key: Some(key),
                    ranking,
                    dominant,
                };
            }
        }

        Resolution {
            profile: Profile::not_found(),
            tier: MatchTier::Fallback,
            matched_key: None,
            ranking,
            dominant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> ProfileKey {
        raw.parse().expect("valid key")
    }

    fn singles() -> Vec<(ProfileKey, Profile)> {
        vec![
            (key("D"), Profile::new("Driver")),
            (key("I"), Profile::new("Promoter")),
            (key("S"), Profile::new("Supporter")),
            (key("C"), Profile::new("Analyst")),
        ]
    }

    #[test]
    fn prefers_three_letter_key() {
        let mut entries = singles();
        entries.push((key("ID"), Profile::new("Persuader")));
        entries.push((key("IDC"), Profile::new("Strategist")));
        let resolver = ProfileResolver::new(ProfileTable::from_entries(entries));

        let resolution = resolver.resolve(&ScoreVector::new(120, 160, 40, 80));

        assert_eq!(resolution.profile.name, "Strategist");
        assert_eq!(resolution.tier, MatchTier::Triple);
        assert_eq!(resolution.matched_key, Some(key("IDC")));
        assert_eq!(resolution.dominant, [Category::I, Category::D]);
    }

    #[test]
    fn falls_back_to_pair_then_single() {
        let mut entries = singles();
        entries.push((key("ID"), Profile::new("Persuader")));
        let resolver = ProfileResolver::new(ProfileTable::from_entries(entries));

        let pair = resolver.resolve(&ScoreVector::new(120, 160, 40, 80));
        assert_eq!(pair.profile.name, "Persuader");
        assert_eq!(pair.tier, MatchTier::Pair);

        let single = resolver.resolve(&ScoreVector::new(60, 100, 80, 160));
        assert_eq!(single.profile.name, "Analyst");
        assert_eq!(single.tier, MatchTier::Single);
        assert_eq!(single.matched_key, Some(key("C")));
    }

    #[test]
    fn empty_table_yields_not_found_profile() {
        let resolver = ProfileResolver::new(ProfileTable::new());
        let resolution = resolver.resolve(&ScoreVector::new(100, 100, 100, 100));

        assert_eq!(resolution.profile, Profile::not_found());
        assert_eq!(resolution.tier, MatchTier::Fallback);
        assert!(resolution.matched_key.is_none());
        assert_eq!(resolution.dominant, [Category::D, Category::I]);
    }

    #[test]
    fn ties_resolve_identically_every_time() {
        let mut entries = singles();
        entries.push((key("DI"), Profile::new("Pioneer")));
        let resolver = ProfileResolver::new(ProfileTable::from_entries(entries));
        let scores = ScoreVector::new(100, 100, 100, 100);

        let first = resolver.resolve(&scores);
        for _ in 0..10 {
            assert_eq!(resolver.resolve(&scores), first);
        }
        assert_eq!(first.profile.name, "Pioneer");
    }
}
