//! Analyze command - extract profile fields from a résumé and score it.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cvscan_core::{ResumeAnalyzer, ResumeReport};

use super::config::load_config;

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input résumé (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Required skill (repeatable, or comma-separated)
    #[arg(short, long = "skill", value_delimiter = ',')]
    skills: Vec<String>,

    /// Required skills as a JSON array, e.g. '["Python","SQL"]'
    #[arg(long)]
    skills_json: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

pub fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let required = required_skills(&args)?;
    debug!("Required skills: {:?}", required);

    let analyzer = ResumeAnalyzer::new(&config)?;

    // Same path as an upload: bytes go through a transient copy that is
    // removed afterwards.
    let data = fs::read(&args.input)?;
    let file_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let report = analyzer.analyze_upload(&data, &file_name, &required)?;
    info!("Analyzed {} ({:?})", args.input.display(), report.status);

    let output = format_report(&report, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if report.is_unreadable() {
        eprintln!(
            "{} {}",
            style("⚠").yellow(),
            report.message.as_deref().unwrap_or_default()
        );
    }

    Ok(())
}

/// Collect required skills from `--skill` flags and `--skills-json`.
fn required_skills(args: &AnalyzeArgs) -> anyhow::Result<Vec<String>> {
    let mut skills = args.skills.clone();

    if let Some(json) = &args.skills_json {
        let parsed: Vec<String> = serde_json::from_str(json)
            .map_err(|e| anyhow::anyhow!("Invalid --skills-json value: {}", e))?;
        skills.extend(parsed);
    }

    Ok(skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

fn format_report(report: &ResumeReport, pretty: bool) -> anyhow::Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}
