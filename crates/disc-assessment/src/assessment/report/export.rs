use super::views::AssessmentReport;
use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

const CHART_WIDTH: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl ExportFormat {
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::Text => "DISC_Result_Report.txt",
            Self::Json => "DISC_Result_Report.json",
        }
    }

    pub fn render(self, report: &AssessmentReport) -> Result<String, ExportError> {
        match self {
            Self::Text => Ok(render_text(report)),
            Self::Json => Ok(serde_json::to_string_pretty(report)?),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unsupported report format '{other}' (use text or json)")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Plain-text report with a horizontal bar chart scaled to the maximum possible score.
pub fn render_text(report: &AssessmentReport) -> String {
    let mut out = String::new();

    writeln!(&mut out, "DISC Analysis Report").expect("write title");
    writeln!(&mut out, "Session: {}", report.session_id).expect("write session");
    match &report.matched_key {
        Some(key) => writeln!(
            &mut out,
            "Profile: {} ({}, key {})",
            report.profile_name, report.match_tier_label, key
        )
        .expect("write profile"),
        None => writeln!(&mut out, "Profile: {}", report.profile_name).expect("write profile"),
    }
    if let Some(summary) = &report.profile_summary {
        writeln!(&mut out, "  {summary}").expect("write summary");
    }

    writeln!(&mut out, "\nBehaviour chart (max {})", report.max_score).expect("write chart header");
    for entry in &report.chart {
        let filled = if report.max_score == 0 {
            0
        } else {
            (entry.value.min(report.max_score) * CHART_WIDTH / report.max_score) as usize
        };
        writeln!(
            &mut out,
            "  {} {:<18} {:>4} | {}",
            entry.letter,
            entry.label,
            entry.value,
            "#".repeat(filled)
        )
        .expect("write chart row");
    }

    writeln!(&mut out, "\nDominant styles").expect("write dominant header");
    for dominant in &report.dominant {
        writeln!(&mut out, "{}. {}", dominant.position, dominant.title).expect("write dominant");
        for point in dominant.points {
            writeln!(&mut out, "   - {point}").expect("write dominant point");
        }
    }

    out
}

pub fn export_report(
    report: &AssessmentReport,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let rendered = format.render(report)?;
    std::fs::write(path, rendered)?;
    Ok(())
}
