use anyhow::{Context, Result};
use handlebars::Handlebars;

use super::helpers::{ReportHelper, register_helpers};
use crate::diff::ReportModel;

const REPORT_TEMPLATE_NAME: &str = "report";
const DEFAULT_REPORT_TEMPLATE: &str = include_str!("report.md.hbs");

/// Renders a report model into markdown using Handlebars
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    /// Create a renderer using the built-in report template
    pub fn new(helpers: &[ReportHelper]) -> Result<Self> {
        Self::with_template(helpers, DEFAULT_REPORT_TEMPLATE)
    }

    /// Create a renderer for a custom template source
    pub fn with_template(helpers: &[ReportHelper], template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Output is markdown, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        register_helpers(&mut handlebars, helpers);

        handlebars
            .register_template_string(REPORT_TEMPLATE_NAME, template)
            .context("Failed to compile report template")?;

        Ok(Self { handlebars })
    }

    /// Render the report
    pub fn render(&self, model: &ReportModel) -> Result<String> {
        self.handlebars
            .render(REPORT_TEMPLATE_NAME, model)
            .context("Failed to render report")
    }
}
