use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;
use donation_tally_engine::Summary;
use serde::Serialize;
use std::fmt::{self, Write};
use std::path::Path;

const RULE: &str = "----------------------------------------------";

#[derive(Serialize)]
struct Report<'a> {
    version: &'static str,
    variant: &'static str,
    path: &'a Path,
    #[serde(flatten)]
    summary: &'a Summary,
}

impl<'a> Report<'a> {
    fn new(summary: &'a Summary, config: &'a Config) -> Self {
        Self {
            version: crate::VERSION,
            variant: config.variant.description(),
            path: &config.path,
            summary,
        }
    }
}

/// Render `summary` in the requested format.
pub fn render(summary: &Summary, config: &Config, format: OutputFormat) -> Result<String> {
    let report = Report::new(summary, config);
    let rendered = match format {
        OutputFormat::Table => render_table(&report)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
    };
    Ok(rendered)
}

pub fn print_summary(summary: &Summary, config: &Config, format: OutputFormat) -> Result<()> {
    print!("{}", render(summary, config, format)?);
    Ok(())
}

fn render_table(report: &Report<'_>) -> std::result::Result<String, fmt::Error> {
    let summary = report.summary;
    let mut out = String::new();

    writeln!(out, "donation_tally v{} · {}", report.version, report.variant)?;
    writeln!(out, "file: {}", report.path.display())?;
    writeln!(out)?;

    writeln!(out, "{:<26}{:>12}", "Total lines", summary.total_lines)?;
    match &summary.most_common_first_name {
        Some(top) => writeln!(
            out,
            "{:<26}{:>12}  ({} occurrences)",
            "Most common first name", top.name, top.count
        )?,
        None => writeln!(out, "{:<26}{:>12}", "Most common first name", "-")?,
    }

    writeln!(out)?;
    writeln!(out, "Captured names")?;
    writeln!(out, "{:>9}     NAME", "INDEX")?;
    writeln!(out, "{RULE}")?;
    if summary.captured_names.is_empty() {
        writeln!(out, "{:>9}     (none)", "-")?;
    }
    for (index, name) in &summary.captured_names {
        writeln!(out, "{index:>9}     {name}")?;
    }

    writeln!(out)?;
    writeln!(out, "Donations per month")?;
    writeln!(out, "{:>9}{:>16}", "MONTH", "DONATIONS")?;
    writeln!(out, "{RULE}")?;
    for (bucket, count) in &summary.donations {
        writeln!(out, "{:>9}{count:>16}", bucket.to_string())?;
    }
    writeln!(out, "---")?;
    let total: u64 = summary.donations.values().sum();
    writeln!(
        out,
        "{:>9}{total:>16}      TOTAL ({} months)",
        "",
        summary.donations.len()
    )?;

    Ok(out)
}
