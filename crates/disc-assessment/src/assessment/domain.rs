use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The four behavioural dimensions. Declaration order is the tie-break order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    D,
    I,
    S,
    C,
}

impl Category {
    pub const fn ordered() -> [Self; 4] {
        [Self::D, Self::I, Self::S, Self::C]
    }

    pub const fn letter(self) -> char {
        match self {
            Self::D => 'D',
            Self::I => 'I',
            Self::S => 'S',
            Self::C => 'C',
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::D => "Dominance",
            Self::I => "Influence",
            Self::S => "Steadiness",
            Self::C => "Conscientiousness",
        }
    }

    /// Bar colour used by the results chart.
    pub const fn color(self) -> &'static str {
        match self {
            Self::D => "#ef4444",
            Self::I => "#f97316",
            Self::S => "#22c55e",
            Self::C => "#3b82f6",
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'D' => Some(Self::D),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'C' => Some(Self::C),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut chars = value.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Self::from_letter(letter).ok_or_else(|| CategoryParseError(value.to_string()))
            }
            _ => Err(CategoryParseError(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown DISC category '{0}'")]
pub struct CategoryParseError(pub String);

/// Forced-choice rank in 1..=4, where 4 means "most like me".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct RankValue(u8);

impl RankValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(value: u8) -> Result<Self, RankValueError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RankValueError(value))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every rank in the order the choices are offered, highest first.
    pub const fn all() -> [Self; 4] {
        [Self(4), Self(3), Self(2), Self(1)]
    }
}

impl TryFrom<u8> for RankValue {
    type Error = RankValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RankValue> for u8 {
    fn from(value: RankValue) -> Self {
        value.0
    }
}

impl fmt::Display for RankValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rank value {0} is outside 1..=4")]
pub struct RankValueError(pub u8);

/// What a single selection did to an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum Selection {
    Assigned,
    Reassigned { from: Category },
    Cleared,
}

/// Ranks chosen for one question. Unset categories are `None`, never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answer {
    #[serde(rename = "D", default, skip_serializing_if = "Option::is_none")]
    d: Option<RankValue>,
    #[serde(rename = "I", default, skip_serializing_if = "Option::is_none")]
    i: Option<RankValue>,
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    s: Option<RankValue>,
    #[serde(rename = "C", default, skip_serializing_if = "Option::is_none")]
    c: Option<RankValue>,
}

impl Answer {
    /// Sets all four ranks as given (D, I, S, C) without enforcing exclusivity.
    pub fn from_ranks(ranks: [u8; 4]) -> Result<Self, RankValueError> {
        let [d, i, s, c] = ranks;
        Ok(Self {
            d: Some(RankValue::new(d)?),
            i: Some(RankValue::new(i)?),
            s: Some(RankValue::new(s)?),
            c: Some(RankValue::new(c)?),
        })
    }

    pub fn get(&self, category: Category) -> Option<RankValue> {
        match category {
            Category::D => self.d,
            Category::I => self.i,
            Category::S => self.s,
            Category::C => self.c,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<RankValue> {
        match category {
            Category::D => &mut self.d,
            Category::I => &mut self.i,
            Category::S => &mut self.s,
            Category::C => &mut self.c,
        }
    }

    /// Gives `rank` to `category`, clearing whichever other category held it.
    pub fn assign(&mut self, category: Category, rank: RankValue) -> Selection {
        let mut displaced = None;
        for other in Category::ordered() {
            if other != category && self.get(other) == Some(rank) {
                *self.slot_mut(other) = None;
                displaced = Some(other);
            }
        }

        *self.slot_mut(category) = Some(rank);
        match displaced {
            Some(from) => Selection::Reassigned { from },
            None => Selection::Assigned,
        }
    }

    /// Click semantics: choosing the rank a category already holds deselects it.
    pub fn select(&mut self, category: Category, rank: RankValue) -> Selection {
        if self.get(category) == Some(rank) {
            *self.slot_mut(category) = None;
            return Selection::Cleared;
        }

        self.assign(category, rank)
    }

    pub fn clear(&mut self, category: Category) -> Option<RankValue> {
        self.slot_mut(category).take()
    }

    pub fn assigned(&self) -> impl Iterator<Item = (Category, RankValue)> + '_ {
        Category::ordered()
            .into_iter()
            .filter_map(|category| self.get(category).map(|rank| (category, rank)))
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned().count()
    }
}

/// Answers keyed by zero-based question index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<usize, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every question in `0..question_count` answered identically.
    pub fn filled(question_count: usize, answer: Answer) -> Self {
        Self {
            answers: (0..question_count).map(|index| (index, answer)).collect(),
        }
    }

    pub fn insert(&mut self, question: usize, answer: Answer) -> Option<Answer> {
        self.answers.insert(question, answer)
    }

    pub fn remove(&mut self, question: usize) -> Option<Answer> {
        self.answers.remove(&question)
    }

    pub fn get(&self, question: usize) -> Option<&Answer> {
        self.answers.get(&question)
    }

    pub fn assign(&mut self, question: usize, category: Category, rank: RankValue) -> Selection {
        self.answers.entry(question).or_default().assign(category, rank)
    }

    pub fn select(&mut self, question: usize, category: Category, rank: RankValue) -> Selection {
        self.answers.entry(question).or_default().select(category, rank)
    }

    pub fn clear(&mut self, question: usize, category: Category) -> Option<RankValue> {
        self.answers
            .get_mut(&question)
            .and_then(|answer| answer.clear(category))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Answer)> + '_ {
        self.answers.iter().map(|(index, answer)| (*index, answer))
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.answers.keys().copied()
    }
}

/// The four phrases offered for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOptions {
    #[serde(rename = "D")]
    pub d: String,
    #[serde(rename = "I")]
    pub i: String,
    #[serde(rename = "S")]
    pub s: String,
    #[serde(rename = "C")]
    pub c: String,
}

impl QuestionOptions {
    pub fn phrase(&self, category: Category) -> &str {
        match category {
            Category::D => &self.d,
            Category::I => &self.i,
            Category::S => &self.s,
            Category::C => &self.c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub label: String,
    pub options: QuestionOptions,
}

impl Question {
    pub fn new(label: impl Into<String>, phrases: [&str; 4]) -> Self {
        let [d, i, s, c] = phrases;
        Self {
            label: label.into(),
            options: QuestionOptions {
                d: d.to_string(),
                i: i.to_string(),
                s: s.to_string(),
                c: c.to_string(),
            },
        }
    }
}

/// Ordered, read-only list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

/// Summed ranks per category across a complete answer set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreVector {
    #[serde(rename = "D")]
    pub d: u32,
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "S")]
    pub s: u32,
    #[serde(rename = "C")]
    pub c: u32,
}

impl ScoreVector {
    pub const fn new(d: u32, i: u32, s: u32, c: u32) -> Self {
        Self { d, i, s, c }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::D => self.d,
            Category::I => self.i,
            Category::S => self.s,
            Category::C => self.c,
        }
    }

    pub(crate) fn add(&mut self, category: Category, rank: RankValue) {
        let slot = match category {
            Category::D => &mut self.d,
            Category::I => &mut self.i,
            Category::S => &mut self.s,
            Category::C => &mut self.c,
        };
        *slot += u32::from(rank.get());
    }

    pub fn total(&self) -> u32 {
        self.d + self.i + self.s + self.c
    }
}

pub const NOT_FOUND_PROFILE_NAME: &str = "No matching profile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Profile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: None,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn not_found() -> Self {
        Self::new(NOT_FOUND_PROFILE_NAME)
    }
}

/// One to three distinct category letters in rank order, e.g. `IDC`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProfileKey(Vec<Category>);

impl ProfileKey {
    pub const MAX_ARITY: usize = 3;

    pub fn new(categories: &[Category]) -> Result<Self, ProfileKeyError> {
        if categories.is_empty() {
            return Err(ProfileKeyError::Empty);
        }
        if categories.len() > Self::MAX_ARITY {
            return Err(ProfileKeyError::TooLong(categories.len()));
        }
        for (position, category) in categories.iter().enumerate() {
            if categories[..position].contains(category) {
                return Err(ProfileKeyError::RepeatedCategory(*category));
            }
        }

        Ok(Self(categories.to_vec()))
    }

    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn categories(&self) -> &[Category] {
        &self.0
    }
}

impl fmt::Display for ProfileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in &self.0 {
            write!(f, "{category}")?;
        }
        Ok(())
    }
}

impl FromStr for ProfileKey {
    type Err = ProfileKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let categories = value
            .trim()
            .chars()
            .map(|letter| Category::from_letter(letter).ok_or(ProfileKeyError::UnknownLetter(letter)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&categories)
    }
}

impl TryFrom<String> for ProfileKey {
    type Error = ProfileKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProfileKey> for String {
    fn from(value: ProfileKey) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileKeyError {
    #[error("profile key is empty")]
    Empty,
    #[error("profile key has {0} letters; at most 3 are allowed")]
    TooLong(usize),
    #[error("'{0}' is not a DISC category letter")]
    UnknownLetter(char),
    #[error("category {0} appears more than once in the key")]
    RepeatedCategory(Category),
}

/// Detail text shown for a dominant category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDescription {
    pub category: Category,
    pub title: &'static str,
    pub points: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(value: u8) -> RankValue {
        RankValue::new(value).expect("valid rank")
    }

    #[test]
    fn rank_value_rejects_zero_and_five() {
        assert_eq!(RankValue::new(0), Err(RankValueError(0)));
        assert_eq!(RankValue::new(5), Err(RankValueError(5)));
        assert_eq!(rank(4).get(), 4);
    }

    #[test]
    fn selecting_the_held_rank_again_clears_it() {
        let mut answer = Answer::default();
        assert_eq!(answer.select(Category::D, rank(3)), Selection::Assigned);
        assert_eq!(answer.select(Category::D, rank(3)), Selection::Cleared);
        assert_eq!(answer.get(Category::D), None);
        assert_eq!(answer.assigned_count(), 0);
    }

    #[test]
    fn assigning_a_taken_rank_moves_it() {
        let mut answer = Answer::default();
        answer.select(Category::D, rank(4));
        let outcome = answer.select(Category::I, rank(4));

        assert_eq!(outcome, Selection::Reassigned { from: Category::D });
        assert_eq!(answer.get(Category::D), None);
        assert_eq!(answer.get(Category::I), Some(rank(4)));
    }

    #[test]
    fn assign_is_idempotent_where_select_toggles() {
        let mut answer = Answer::default();
        answer.assign(Category::S, rank(2));
        assert_eq!(answer.assign(Category::S, rank(2)), Selection::Assigned);
        assert_eq!(answer.get(Category::S), Some(rank(2)));
    }

    #[test]
    fn answer_json_uses_category_letters_and_omits_unset() {
        let mut answer = Answer::default();
        answer.select(Category::C, rank(1));
        let json = serde_json::to_value(answer).expect("serialize");
        assert_eq!(json, serde_json::json!({ "C": 1 }));

        let parsed: Answer =
            serde_json::from_str(r#"{"D":4,"I":null}"#).expect("deserialize");
        assert_eq!(parsed.get(Category::D), Some(rank(4)));
        assert_eq!(parsed.get(Category::I), None);

        assert!(serde_json::from_str::<Answer>(r#"{"D":0}"#).is_err());
        assert!(serde_json::from_str::<Answer>(r#"{"X":1}"#).is_err());
    }

    #[test]
    fn answer_set_round_trips_string_indices() {
        let set: AnswerSet =
            serde_json::from_str(r#"{"0":{"D":4,"I":3,"S":2,"C":1}}"#).expect("deserialize");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0).and_then(|a| a.get(Category::S)), Some(rank(2)));
    }

    #[test]
    fn profile_key_parses_and_validates() {
        let key: ProfileKey = "idc".parse().expect("key parses");
        assert_eq!(key.categories(), &[Category::I, Category::D, Category::C]);
        assert_eq!(key.to_string(), "IDC");

        assert_eq!("".parse::<ProfileKey>(), Err(ProfileKeyError::Empty));
        assert_eq!("DISC".parse::<ProfileKey>(), Err(ProfileKeyError::TooLong(4)));
        assert_eq!(
            "DX".parse::<ProfileKey>(),
            Err(ProfileKeyError::UnknownLetter('X'))
        );
        assert_eq!(
            "DD".parse::<ProfileKey>(),
            Err(ProfileKeyError::RepeatedCategory(Category::D))
        );
    }

    #[test]
    fn category_parses_single_letters_only() {
        assert_eq!("s".parse::<Category>(), Ok(Category::S));
        assert!("SI".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }
}
