use std::io::Cursor;
use std::path::PathBuf;

use disc_assessment::assessment::{
    aggregate, AnswerSheetImporter, CatalogImportError, CatalogImporter, Category, ProfileKey,
    ProfileResolver, ProfileTableError, RankValue, ScoreVector,
};

fn sample_answers() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_answers.csv")
}

#[test]
fn sample_answer_sheet_scores_the_idcs_pattern() {
    let answers = AnswerSheetImporter::from_path(sample_answers()).expect("sample sheet imports");

    assert_eq!(answers.len(), 40);
    let scores = aggregate(&answers, 40).expect("sample sheet is complete");
    assert_eq!(scores, ScoreVector::new(120, 160, 40, 80));
}

#[test]
fn later_cell_wins_when_a_row_repeats_a_rank() {
    let answers = AnswerSheetImporter::from_reader(Cursor::new(
        "question,D,I,S,C\n1,4,4,2,1\n",
    ))
    .expect("sheet imports");

    let answer = answers.get(0).expect("question 1 present");
    assert_eq!(answer.get(Category::D), None);
    assert_eq!(answer.get(Category::I), RankValue::new(4).ok());
    assert_eq!(answer.assigned_count(), 3);
}

#[test]
fn blank_cells_stay_unset() {
    let answers = AnswerSheetImporter::from_reader(Cursor::new(
        "question,D,I,S,C\n2,1,,3,\n",
    ))
    .expect("sheet imports");

    let answer = answers.get(1).expect("question 2 present");
    assert_eq!(answer.get(Category::I), None);
    assert_eq!(answer.get(Category::C), None);
    assert_eq!(answer.assigned_count(), 2);
}

#[test]
fn answer_sheet_rejects_zero_question_and_bad_rank() {
    let zero = AnswerSheetImporter::from_reader(Cursor::new("question,D,I,S,C\n0,1,2,3,4\n"))
        .expect_err("question 0 rejected");
    assert!(matches!(zero, CatalogImportError::Invalid { line: 2, .. }));

    let rank = AnswerSheetImporter::from_reader(Cursor::new("question,D,I,S,C\n1,5,2,3,4\n"))
        .expect_err("rank 5 rejected");
    match rank {
        CatalogImportError::Invalid { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("rank '5' for D"));
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn imported_profiles_drive_resolution() {
    let table = CatalogImporter::profiles_from_reader(Cursor::new(
        "key,name,summary\nD,Driver,\nI,Promoter,Talks first\nS,Supporter,\nC,Analyst,\nID,Persuader,Sells the plan\n",
    ))
    .expect("profiles import");

    let resolution = ProfileResolver::new(table).resolve(&ScoreVector::new(120, 160, 40, 80));
    assert_eq!(resolution.profile.name, "Persuader");
    assert_eq!(resolution.profile.summary.as_deref(), Some("Sells the plan"));
    assert_eq!(resolution.matched_key, "ID".parse::<ProfileKey>().ok());
}

#[test]
fn profile_import_without_single_letters_fails() {
    let error = CatalogImporter::profiles_from_reader(Cursor::new("key,name\nIDC,Strategist\n"))
        .expect_err("coverage enforced");

    match error {
        CatalogImportError::Coverage(ProfileTableError::MissingSingleKeys(missing)) => {
            assert_eq!(missing, Category::ordered().to_vec());
        }
        other => panic!("expected coverage error, got {other:?}"),
    }
}

#[test]
fn missing_catalog_file_surfaces_io_error() {
    let error = CatalogImporter::questions_from_path("does/not/exist.csv")
        .expect_err("missing file");
    assert!(matches!(error, CatalogImportError::Io(_)));
}
