use crate::context::Context;
use crate::diff::{ReportMode, ReportModel, compute_edits, reconcile};
use crate::manifest::CollectionIndex;
use crate::template::{ReportHelper, ReportRenderer};
use anyhow::{Context as AnyhowContext, Result};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, enabled, info_span};

/// Inputs and switches of the report command
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub source: PathBuf,
    pub target: PathBuf,
    pub mode: ReportMode,
    pub normalize: bool,
    /// Custom Handlebars template instead of the built-in one
    pub template: Option<PathBuf>,
    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,
    /// Print change counts on stderr
    pub summary: bool,
}

/// Handles the report command - compares two manifest files
pub struct ReportCommand;

impl ReportCommand {
    /// Execute the report command
    pub fn execute(ctx: &Context, options: &ReportOptions) -> Result<()> {
        let model = Self::build_model(ctx, options)?;
        let report = Self::render(ctx, options, &model)?;

        // Nothing is emitted until the whole report rendered
        match &options.output {
            Some(path) => {
                ctx.fs.write(path, &report)?;
                ctx.output
                    .success(&format!("Report written to {}", path.display()));
            }
            None => ctx.output.report(&report)?,
        }

        if options.summary {
            ctx.output.key_value("Source", &options.source.display().to_string());
            ctx.output.key_value("Target", &options.target.display().to_string());
            let summary = model.summary();
            if summary.total_changes() == 0 {
                ctx.output.info("No changes");
            } else {
                ctx.output.info(&summary.to_string());
            }
        }

        Ok(())
    }

    /// Load both inputs and assemble the report model
    pub fn build_model(ctx: &Context, options: &ReportOptions) -> Result<ReportModel> {
        let source = Self::load(ctx, &options.source, options.normalize)?;
        let target = Self::load(ctx, &options.target, options.normalize)?;

        let model = ReportModel::build(
            reconcile(&source, &target),
            options.mode,
            options.source.display().to_string(),
            options.target.display().to_string(),
        );

        // Line counts need a full diff per record, only worth it when logged
        if enabled!(Level::DEBUG) {
            for record in model.changed_records() {
                let (inserted, deleted) = compute_edits(&record.source, &record.target).line_counts();
                debug!(key = %record.identity.key(), inserted, deleted, "Resource changed");
            }
        }
        debug!(
            visible = model.visible_records().count(),
            "Report rows selected"
        );

        Ok(model)
    }

    fn load(ctx: &Context, path: &Path, normalize: bool) -> Result<CollectionIndex> {
        let _span = info_span!("load", path = %path.display()).entered();

        let raw = ctx.fs.read_to_string(path)?;
        let index = CollectionIndex::build(&raw, normalize)
            .with_context(|| format!("Failed to load manifests from {}", path.display()))?;

        if index.is_empty() {
            ctx.output
                .warning(&format!("No documents found in {}", path.display()));
        }

        Ok(index)
    }

    fn render(ctx: &Context, options: &ReportOptions, model: &ReportModel) -> Result<String> {
        let renderer = match &options.template {
            Some(path) => {
                let template = ctx.fs.read_to_string(path)?;
                ReportRenderer::with_template(&ReportHelper::ALL, &template).with_context(|| {
                    format!("Invalid report template {}", path.display())
                })?
            }
            None => ReportRenderer::new(&ReportHelper::ALL)?,
        };

        renderer.render(model)
    }
}
