// guard-core/src/infrastructure/report/html.rs
//
// Turns flattened validation records into a standalone HTML page.

use chrono::Utc;
use minijinja::{Environment, context};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::domain::results::FlatValidationRecord;
use crate::domain::target::ValidationConfig;
use crate::error::GuardError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::report::ReportRenderer;

pub const REPORT_FILE_NAME: &str = "validation_report.html";

const REPORT_TEMPLATE: &str = include_str!("validation_report.html");

pub struct HtmlReportRenderer {
    env: Environment<'static>,
    output_dir: PathBuf,
}

impl HtmlReportRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        let mut env = Environment::new();
        env.add_template(REPORT_FILE_NAME, REPORT_TEMPLATE)?;
        Ok(Self {
            env,
            output_dir: output_dir.into(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn render_html(
        &self,
        target: &ValidationConfig,
        records: &[FlatValidationRecord],
    ) -> Result<String, InfrastructureError> {
        let passed = records
            .iter()
            .filter(|r| r.test_status.is_success())
            .count();
        let template = self.env.get_template(REPORT_FILE_NAME)?;
        let html = template.render(context! {
            target => target,
            records => records,
            passed => passed,
            failed => records.len() - passed,
            generated_at => Utc::now().to_rfc3339(),
        })?;
        Ok(html)
    }
}

impl ReportRenderer for HtmlReportRenderer {
    fn render(
        &self,
        target: &ValidationConfig,
        records: &[FlatValidationRecord],
    ) -> Result<PathBuf, GuardError> {
        let html = self.render_html(target, records)?;
        let path = self.output_dir.join(REPORT_FILE_NAME);
        atomic_write(&path, html)?;
        info!(path = %path.display(), "Validation report written");
        Ok(path)
    }
}
