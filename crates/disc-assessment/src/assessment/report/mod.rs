mod export;
mod summary;
pub mod views;

pub use export::{export_report, render_text, ExportError, ExportFormat};
pub use views::AssessmentReport;
