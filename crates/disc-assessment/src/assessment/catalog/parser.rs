use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ParsedQuestion {
    pub(crate) line: u64,
    pub(crate) label: String,
    pub(crate) phrases: [String; 4],
}

#[derive(Debug)]
pub(crate) struct ParsedProfile {
    pub(crate) line: u64,
    pub(crate) key: String,
    pub(crate) name: String,
    pub(crate) summary: Option<String>,
}

#[derive(Debug)]
pub(crate) struct ParsedAnswerRow {
    pub(crate) line: u64,
    pub(crate) question: usize,
    /// Raw cells in D, I, S, C order; blank cells are `None`.
    pub(crate) cells: [Option<String>; 4],
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    label: String,
    #[serde(rename = "D")]
    d: String,
    #[serde(rename = "I")]
    i: String,
    #[serde(rename = "S")]
    s: String,
    #[serde(rename = "C")]
    c: String,
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    key: String,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question: usize,
    #[serde(rename = "D", default, deserialize_with = "empty_string_as_none")]
    d: Option<String>,
    #[serde(rename = "I", default, deserialize_with = "empty_string_as_none")]
    i: Option<String>,
    #[serde(rename = "S", default, deserialize_with = "empty_string_as_none")]
    s: Option<String>,
    #[serde(rename = "C", default, deserialize_with = "empty_string_as_none")]
    c: Option<String>,
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

/// Deserializes every row while keeping the source line for error reporting.
fn parse_rows<R, T, U, F>(reader: R, mut convert: F) -> Result<Vec<U>, csv::Error>
where
    R: Read,
    T: for<'de> Deserialize<'de>,
    F: FnMut(u64, T) -> U,
{
    let mut csv_reader = csv_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|position| position.line()).unwrap_or(0);
        let row: T = record.deserialize(Some(&headers))?;
        rows.push(convert(line, row));
    }

    Ok(rows)
}

pub(crate) fn parse_questions<R: Read>(reader: R) -> Result<Vec<ParsedQuestion>, csv::Error> {
    parse_rows(reader, |line, row: QuestionRow| ParsedQuestion {
        line,
        label: row.label,
        phrases: [row.d, row.i, row.s, row.c],
    })
}

pub(crate) fn parse_profiles<R: Read>(reader: R) -> Result<Vec<ParsedProfile>, csv::Error> {
    parse_rows(reader, |line, row: ProfileRow| ParsedProfile {
        line,
        key: row.key,
        name: row.name,
        summary: row.summary,
    })
}

pub(crate) fn parse_answer_rows<R: Read>(reader: R) -> Result<Vec<ParsedAnswerRow>, csv::Error> {
    parse_rows(reader, |line, row: AnswerRow| ParsedAnswerRow {
        line,
        question: row.question,
        cells: [row.d, row.i, row.s, row.c],
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
