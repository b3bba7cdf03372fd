// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use script_encoder_engine::stats::{FileReport, RunResult, Summary};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct ErrorEntry<'a> {
    path: &'a Path,
    message: String,
}

#[derive(Serialize)]
struct Document<'a> {
    files: &'a [FileReport],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ErrorEntry<'a>>,
    summary: Summary,
}

impl<'a> Document<'a> {
    fn new(result: &'a RunResult) -> Self {
        Self {
            files: &result.reports,
            errors: error_entries(result),
            summary: result.summary(),
        }
    }
}

fn error_entries(result: &RunResult) -> Vec<ErrorEntry<'_>> {
    result
        .errors
        .iter()
        .map(|(path, err)| ErrorEntry { path, message: err.to_string() })
        .collect()
}

/// Print a run's reports to stdout in the requested format.
///
/// # Errors
/// Returns an error if writing or serialization fails.
pub fn print_results(result: &RunResult, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(result, format, &mut out)?;
    out.flush()?;
    Ok(())
}

/// # Errors
/// Returns an error if writing or serialization fails.
pub fn render<W: Write>(result: &RunResult, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(result, out)?,
        OutputFormat::Csv => render_csv(result, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &Document::new(result))?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for report in &result.reports {
                serde_json::to_writer(&mut *out, report)?;
                writeln!(out)?;
            }
            for entry in error_entries(result) {
                serde_json::to_writer(&mut *out, &entry)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &Document::new(result))?,
    }
    Ok(())
}

fn action_label(report: &FileReport) -> String {
    match report.reason {
        Some(reason) => format!("{} ({})", report.action.as_str(), reason.as_str()),
        None => report.action.as_str().to_string(),
    }
}

fn render_table<W: Write>(result: &RunResult, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{:<12} {:<28} PATH", "VERDICT", "ACTION")?;
    writeln!(out, "----------------------------------------------")?;
    for report in &result.reports {
        writeln!(
            out,
            "{:<12} {:<28} {}",
            report.verdict.label(),
            action_label(report),
            report.path.display()
        )?;
    }
    for (path, err) in &result.errors {
        writeln!(out, "{:<12} {:<28} {} ({err})", "-", "failed", path.display())?;
    }
    writeln!(out, "----------------------------------------------")?;

    let s = result.summary();
    writeln!(
        out,
        "{} files: {} converted, {} skipped, {} failed",
        s.total, s.converted, s.skipped, s.failed
    )
}

fn render_csv<W: Write>(result: &RunResult, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "path,verdict,action,reason,bytes_in,bytes_out")?;
    for r in &result.reports {
        writeln!(
            out,
            "{},{},{},{},{},{}",
            escape_csv(&r.path.display().to_string()),
            r.verdict.label(),
            r.action.as_str(),
            r.reason.map(|x| x.as_str()).unwrap_or_default(),
            r.bytes_in,
            r.bytes_out
        )?;
    }
    for (path, err) in &result.errors {
        writeln!(
            out,
            "{},,failed,{},,",
            escape_csv(&path.display().to_string()),
            escape_csv(&err.to_string())
        )?;
    }
    Ok(())
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use script_encoder_core::Verdict;
    use script_encoder_engine::error::EngineError;
    use script_encoder_engine::stats::{Action, SkipReason};
    use std::path::PathBuf;

    fn sample() -> RunResult {
        RunResult {
            reports: vec![
                FileReport {
                    path: PathBuf::from("Assets/Player.cs"),
                    verdict: Verdict::ShiftJis,
                    action: Action::Converted,
                    reason: None,
                    bytes_in: 40,
                    bytes_out: 55,
                    lossy: false,
                },
                FileReport::skipped(
                    PathBuf::from("Assets/Done.cs"),
                    Verdict::Utf8,
                    SkipReason::AlreadyUtf8Bom,
                    12,
                ),
            ],
            errors: vec![(PathBuf::from("Assets/Locked.cs"), EngineError::Config("denied".into()))],
        }
    }

    fn rendered(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render(&sample(), format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_lists_files_and_summary() {
        let out = rendered(OutputFormat::Table);
        assert!(out.starts_with("VERDICT"));
        assert!(out.lines().next().unwrap().ends_with("PATH"));
        assert!(out.contains("shift_jis"));
        assert!(out.contains("skipped (already-utf8-bom)"));
        assert!(out.contains("Assets/Locked.cs"));
        assert!(out.contains("3 files: 1 converted, 1 skipped, 1 failed"));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let out = rendered(OutputFormat::Csv);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "path,verdict,action,reason,bytes_in,bytes_out");
        assert_eq!(lines[1], "Assets/Player.cs,shift_jis,converted,,40,55");
        assert_eq!(lines[2], "Assets/Done.cs,utf-8,skipped,already-utf8-bom,12,12");
        assert_eq!(
            lines[3],
            "Assets/Locked.cs,,failed,Invalid configuration: denied,,"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn json_document_shape() {
        let out = rendered(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["files"][0]["verdict"], "shift_jis");
        assert_eq!(value["files"][0]["action"], "converted");
        assert!(value["files"][0].get("reason").is_none());
        assert_eq!(value["files"][1]["reason"], "already-utf8-bom");
        assert_eq!(value["errors"][0]["path"], "Assets/Locked.cs");
        assert_eq!(value["summary"]["converted"], 1);
    }

    #[test]
    fn jsonl_is_one_object_per_line() {
        let out = rendered(OutputFormat::Jsonl);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let _: serde_json::Value = serde_json::from_str(line).unwrap();
        }
    }

    #[test]
    fn yaml_contains_summary() {
        let out = rendered(OutputFormat::Yaml);
        assert!(out.contains("summary:"));
        assert!(out.contains("verdict: shift_jis"));
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(escape_csv("a,b.cs"), "\"a,b.cs\"");
        assert_eq!(escape_csv("plain.cs"), "plain.cs");
    }
}
