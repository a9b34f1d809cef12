mod commands;
mod context;
mod diff;
mod error;
mod logging;
mod manifest;
mod output;
mod template;
mod traits;

#[cfg(test)]
mod test_helpers;

use clap::Parser;
use commands::{ReportCommand, ReportOptions};
use context::Context;
use diff::ReportMode;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mdiff")]
#[command(about = "Compare two sets of manifests and render a markdown change report", long_about = None)]
#[command(version)]
struct Cli {
    /// Manifest file describing the state before the change
    #[arg(long, env = "MDIFF_SOURCE")]
    source: PathBuf,

    /// Manifest file describing the state after the change
    #[arg(long, env = "MDIFF_TARGET")]
    target: PathBuf,

    /// Report mode: list every resource, or only changed ones
    #[arg(long, value_enum, default_value_t = ReportMode::Full, env = "MDIFF_MODE")]
    mode: ReportMode,

    /// Compare canonical re-serializations instead of the original text
    #[arg(long, env = "MDIFF_NORMALIZE")]
    normalize: bool,

    /// Render with this Handlebars template instead of the built-in one
    #[arg(long)]
    template: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print change counts on stderr
    #[arg(long)]
    summary: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for ReportOptions {
    fn from(cli: Cli) -> Self {
        ReportOptions {
            source: cli.source,
            target: cli.target,
            mode: cli.mode,
            normalize: cli.normalize,
            template: cli.template,
            output: cli.output,
            summary: cli.summary,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = Context::new();
    let options = ReportOptions::from(cli);

    match ReportCommand::execute(&ctx, &options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ctx.output.error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mode_defaults_to_full() {
        let cli = Cli::try_parse_from(["mdiff", "--source", "a.yaml", "--target", "b.yaml"]).unwrap();
        assert_eq!(cli.mode, ReportMode::Full);
        assert!(!cli.normalize);
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let result = Cli::try_parse_from([
            "mdiff", "--source", "a.yaml", "--target", "b.yaml", "--mode", "partial",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = Cli::try_parse_from([
            "mdiff", "--source", "a.yaml", "--target", "b.yaml", "--mode", "diff", "--normalize",
        ])
        .unwrap();
        let options = ReportOptions::from(cli);
        assert_eq!(options.mode, ReportMode::Diff);
        assert!(options.normalize);
        assert_eq!(options.source, PathBuf::from("a.yaml"));
    }
}
