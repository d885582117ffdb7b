use super::super::domain::{Category, Profile, ProfileKey};
use serde::Serialize;
use std::collections::BTreeMap;

/// Curated mapping from category keys to named profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileTable {
    entries: BTreeMap<ProfileKey, Profile>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ProfileKey, Profile)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, key: ProfileKey, profile: Profile) -> Option<Profile> {
        self.entries.insert(key, profile)
    }

    pub fn get(&self, key: &ProfileKey) -> Option<&Profile> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProfileKey, &Profile)> + '_ {
        self.entries.iter()
    }

    pub fn missing_single_keys(&self) -> Vec<Category> {
        Category::ordered()
            .into_iter()
            .filter(|category| {
                ProfileKey::new(&[*category])
                    .map(|key| !self.entries.contains_key(&key))
                    .unwrap_or(true)
            })
            .collect()
    }

    /// Single-letter keys guarantee every ranking resolves without the fallback.
    pub fn ensure_single_coverage(&self) -> Result<(), ProfileTableError> {
        let missing = self.missing_single_keys();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ProfileTableError::MissingSingleKeys(missing))
        }
    }

    pub fn entries(&self) -> Vec<ProfileEntryView> {
        self.entries
            .iter()
            .map(|(key, profile)| ProfileEntryView {
                key: key.to_string(),
                arity: key.arity(),
                name: profile.name.clone(),
                summary: profile.summary.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileEntryView {
    pub key: String,
    pub arity: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileTableError {
    #[error("profile table is missing single-letter keys: {}", letters(.0))]
    MissingSingleKeys(Vec<Category>),
}

fn letters(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| category.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
