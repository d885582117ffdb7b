use crate::infra::{parse_format, parse_ranks};
use chrono::Local;
use clap::{Args, Subcommand};
use disc_assessment::assessment::{
    export_report, AnswerSheetImporter, AssessmentEngine, AssessmentReport, Category,
    CatalogImporter, ExportFormat, QuestionCatalog, RankValue, TracingLifecycleSink,
};
use disc_assessment::config::AssessmentConfig;
use disc_assessment::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogSourceArgs {
    /// Question catalog CSV (`label,D,I,S,C`). Defaults to DISC_QUESTIONS_CSV or the built-in set.
    #[arg(long)]
    pub(crate) questions: Option<PathBuf>,
    /// Profile table CSV (`key,name[,summary]`). Defaults to DISC_PROFILES_CSV or the built-in set.
    #[arg(long)]
    pub(crate) profiles: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ReportOutputArgs {
    /// Report format: text or json
    #[arg(long, value_parser = parse_format, default_value = "text")]
    pub(crate) format: ExportFormat,
    /// Write the report to this path instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Write the report to DISC_Result_Report.<ext> in the current directory
    #[arg(long, conflicts_with = "output")]
    pub(crate) export: bool,
}

impl ReportOutputArgs {
    fn destination(&self) -> Option<PathBuf> {
        match (&self.output, self.export) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(self.format.default_file_name())),
            (None, false) => None,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answer sheet CSV (`question,D,I,S,C`, 1-based question numbers)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    #[command(flatten)]
    pub(crate) source: CatalogSourceArgs,
    #[command(flatten)]
    pub(crate) report: ReportOutputArgs,
}

#[derive(Subcommand, Debug)]
pub(crate) enum CatalogCommand {
    /// List every question with its four phrases
    Questions(CatalogSourceArgs),
    /// List the profile table ordered by key
    Profiles(CatalogSourceArgs),
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Rank pattern applied to every question, in D,I,S,C order
    #[arg(long, value_parser = parse_ranks, default_value = "3,4,1,2")]
    pub(crate) ranks: [RankValue; 4],
    #[command(flatten)]
    pub(crate) source: CatalogSourceArgs,
    #[command(flatten)]
    pub(crate) report: ReportOutputArgs,
}

fn load_engine(
    source: &CatalogSourceArgs,
) -> Result<AssessmentEngine<TracingLifecycleSink>, AppError> {
    let defaults = AssessmentConfig::from_env();
    let config = AssessmentConfig {
        question_catalog: source.questions.clone().or(defaults.question_catalog),
        profile_table: source.profiles.clone().or(defaults.profile_table),
    };
    Ok(AssessmentEngine::from_config(
        &config,
        Arc::new(TracingLifecycleSink),
    )?)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = load_engine(&args.source)?;
    let answers = AnswerSheetImporter::from_path(&args.answers)?;

    let completeness = engine.progress(&answers);
    let result = match engine.evaluate(&answers) {
        Ok(result) => result,
        Err(err) => {
            println!(
                "Answer sheet incomplete: {}/{} questions answered ({:.0}%)",
                completeness.answered, completeness.total, completeness.progress_pct
            );
            if !completeness.outstanding.is_empty() {
                let numbers: Vec<String> = completeness
                    .outstanding
                    .iter()
                    .map(|index| (index + 1).to_string())
                    .collect();
                println!("Outstanding questions: {}", numbers.join(", "));
            }
            return Err(err.into());
        }
    };

    emit_report(&AssessmentReport::build(&result), &args.report)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = load_engine(&args.source)?;
    let mut session = engine.start_session();

    println!("DISC assessment demo");
    println!(
        "Answering {} questions with D={} I={} S={} C={}",
        session.question_count(),
        args.ranks[0],
        args.ranks[1],
        args.ranks[2],
        args.ranks[3]
    );

    for question in 0..session.question_count() {
        for (category, rank) in Category::ordered().into_iter().zip(args.ranks) {
            session.select(question, category, rank)?;
        }
    }

    let progress = session.progress();
    println!(
        "Progress: {}/{} ({:.0}%)\n",
        progress.answered, progress.total, progress.progress_pct
    );

    let result = engine.complete(&session)?;
    emit_report(&AssessmentReport::build(&result), &args.report)
}

pub(crate) fn run_catalog(command: CatalogCommand) -> Result<(), AppError> {
    match command {
        CatalogCommand::Questions(source) => {
            let catalog = match &source.questions {
                Some(path) => CatalogImporter::questions_from_path(path)?,
                None => load_engine(&source)?.catalog().clone(),
            };
            render_questions(&catalog);
        }
        CatalogCommand::Profiles(source) => {
            let engine = load_engine(&source)?;
            println!("Profile table ({} entries)", engine.profile_table().len());
            for entry in engine.profile_table().entries() {
                match entry.summary {
                    Some(summary) => println!("- {:<3} {} | {}", entry.key, entry.name, summary),
                    None => println!("- {:<3} {}", entry.key, entry.name),
                }
            }
        }
    }

    Ok(())
}

fn render_questions(catalog: &QuestionCatalog) {
    println!("Question catalog ({} questions)", catalog.len());
    for (offset, question) in catalog.questions().iter().enumerate() {
        println!("{}. {}", offset + 1, question.label);
        for category in Category::ordered() {
            println!("   {} {}", category, question.options.phrase(category));
        }
    }
}

fn emit_report(report: &AssessmentReport, output: &ReportOutputArgs) -> Result<(), AppError> {
    match output.destination() {
        Some(path) => {
            export_report(report, output.format, &path)?;
            println!("Report written to {}", path.display());
        }
        None => {
            println!("Generated {}", Local::now().format("%Y-%m-%d %H:%M"));
            print!("{}", output.format.render(report)?);
        }
    }
    Ok(())
}
