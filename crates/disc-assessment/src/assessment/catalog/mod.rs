mod parser;
mod standard;

use super::domain::{
    AnswerSet, Category, Profile, ProfileKey, Question, QuestionCatalog, QuestionOptions,
    RankValue,
};
use super::resolver::{ProfileTable, ProfileTableError};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum CatalogImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Invalid { line: u64, reason: String },
    Coverage(ProfileTableError),
}

impl CatalogImportError {
    fn invalid(line: u64, reason: impl Into<String>) -> Self {
        Self::Invalid {
            line,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for CatalogImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogImportError::Io(err) => write!(f, "failed to read CSV file: {}", err),
            CatalogImportError::Csv(err) => write!(f, "invalid CSV data: {}", err),
            CatalogImportError::Invalid { line, reason } => {
                write!(f, "line {}: {}", line, reason)
            }
            CatalogImportError::Coverage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CatalogImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogImportError::Io(err) => Some(err),
            CatalogImportError::Csv(err) => Some(err),
            CatalogImportError::Invalid { .. } => None,
            CatalogImportError::Coverage(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<ProfileTableError> for CatalogImportError {
    fn from(err: ProfileTableError) -> Self {
        Self::Coverage(err)
    }
}

/// Loads question catalogs (`label,D,I,S,C`) and profile tables (`key,name[,summary]`).
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn questions_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<QuestionCatalog, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::questions_from_reader(file)
    }

    pub fn questions_from_reader<R: Read>(reader: R) -> Result<QuestionCatalog, CatalogImportError> {
        let mut questions = Vec::new();

        for row in parser::parse_questions(reader)? {
            if row.label.is_empty() {
                return Err(CatalogImportError::invalid(row.line, "question label is blank"));
            }
            if let Some(category) = Category::ordered()
                .into_iter()
                .zip(row.phrases.iter())
                .find_map(|(category, phrase)| phrase.is_empty().then_some(category))
            {
                return Err(CatalogImportError::invalid(
                    row.line,
                    format!("phrase for {category} is blank"),
                ));
            }

            let [d, i, s, c] = row.phrases;
            questions.push(Question {
                label: row.label,
                options: QuestionOptions { d, i, s, c },
            });
        }

        if questions.is_empty() {
            return Err(CatalogImportError::invalid(0, "question catalog is empty"));
        }

        Ok(QuestionCatalog::new(questions))
    }

    pub fn profiles_from_path<P: AsRef<Path>>(path: P) -> Result<ProfileTable, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::profiles_from_reader(file)
    }

    pub fn profiles_from_reader<R: Read>(reader: R) -> Result<ProfileTable, CatalogImportError> {
        let mut table = ProfileTable::new();

        for row in parser::parse_profiles(reader)? {
            let key: ProfileKey = row
                .key
                .parse()
                .map_err(|err| CatalogImportError::invalid(row.line, format!("{err}")))?;
            if row.name.is_empty() {
                return Err(CatalogImportError::invalid(row.line, "profile name is blank"));
            }

            let mut profile = Profile::new(row.name);
            profile.summary = row.summary;

            if table.insert(key.clone(), profile).is_some() {
                return Err(CatalogImportError::invalid(
                    row.line,
                    format!("duplicate profile key {key}"),
                ));
            }
        }

        table.ensure_single_coverage()?;
        Ok(table)
    }
}

/// Loads a respondent's answers from `question,D,I,S,C` rows with 1-based question numbers.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSet, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Cells are applied left to right; a rank reused within a row moves to the later category.
    /// Each question number may appear on one row only.
    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerSet, CatalogImportError> {
        let mut answers = AnswerSet::new();
        let mut seen = HashSet::new();

        for row in parser::parse_answer_rows(reader)? {
            let Some(index) = row.question.checked_sub(1) else {
                return Err(CatalogImportError::invalid(
                    row.line,
                    "question numbers start at 1",
                ));
            };
            if !seen.insert(index) {
                return Err(CatalogImportError::invalid(
                    row.line,
                    format!("duplicate question {}", row.question),
                ));
            }

            for (category, cell) in Category::ordered().into_iter().zip(row.cells.iter()) {
                let Some(raw) = cell else {
                    continue;
                };
                let rank = raw
                    .parse::<u8>()
                    .ok()
                    .and_then(|value| RankValue::new(value).ok())
                    .ok_or_else(|| {
                        CatalogImportError::invalid(
                            row.line,
                            format!("rank '{raw}' for {category} must be 1-4"),
                        )
                    })?;
                answers.assign(index, category, rank);
            }
        }

        Ok(answers)
    }
}
