use std::io::{self, Write};

use anyhow::{bail, Context};
use console::style;
use serde::Serialize;

use crate::config::Config;
use crate::loader::parse_snapshot;
use crate::validate::{has_errors, validate, Severity, Violation};

#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub source: String,
    pub valid: bool,
    pub errors: usize,
    pub warnings: usize,
    pub violations: &'a [Violation],
}

/// Validate the snapshot and report every violation. Always strict: a parse
/// failure or any error-severity violation fails the command.
pub fn exec(config: &Config, json: bool) -> anyhow::Result<()> {
    let payload = config
        .source
        .read()
        .with_context(|| format!("Failed to read {}", config.source))?;
    let data = parse_snapshot(&payload)
        .with_context(|| format!("{} does not match the snapshot schema", config.source))?;

    let violations = validate(&data);
    let errors = violations.iter().filter(|v| v.is_error()).count();
    let report = CheckReport {
        source: config.source.to_string(),
        valid: !has_errors(&violations),
        errors,
        warnings: violations.len() - errors,
        violations: &violations,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        output_report(&mut out, &report)?;
    }

    if !report.valid {
        bail!("{} failed validation with {} error(s)", report.source, report.errors);
    }
    Ok(())
}

fn output_report<W: Write>(out: &mut W, report: &CheckReport<'_>) -> io::Result<()> {
    if report.violations.is_empty() {
        writeln!(out, "{} {} is valid", style("✔").green(), report.source)?;
        return Ok(());
    }

    for v in report.violations {
        let tag = match v.severity {
            Severity::Error => style("error").red().bold(),
            Severity::Warning => style("warning").yellow().bold(),
        };
        writeln!(out, "{tag}: {} {}", style(&v.path).cyan(), v.message)?;
    }
    writeln!(
        out,
        "\n{} error(s), {} warning(s) in {}",
        report.errors, report.warnings, report.source
    )
}
