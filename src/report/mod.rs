pub mod json;
pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::model::EvaluationResult;
use crate::report::json::render_evaluation_json;
use crate::report::text::render_report_text;

pub const JSON_FILE_NAME: &str = "evaluation.json";
pub const TEXT_FILE_NAME: &str = "report.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub text: PathBuf,
}

/// Trims trailing zeros so whole scores print as "4" rather than "4.00".
pub fn format_score(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

pub fn format_normalized(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{:.3}", x),
        None => "n/a".to_string(),
    }
}

pub fn render(
    result: &EvaluationResult,
    format: OutputFormat,
    raw: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => render_evaluation_json(result),
        OutputFormat::Text => {
            let mut out = render_report_text(result);
            if raw {
                out.push_str("\nRaw JSON\n--------\n");
                out.push_str(&render_evaluation_json(result)?);
                out.push('\n');
            }
            Ok(out)
        }
    }
}

pub fn write_reports(
    result: &EvaluationResult,
    out_dir: &Path,
    raw: bool,
) -> Result<ReportPaths, CliError> {
    fs::create_dir_all(out_dir)
        .map_err(|e| CliError::io("creating output directory", out_dir, e))?;

    let json_path = out_dir.join(JSON_FILE_NAME);
    write_text(&json_path, &render_evaluation_json(result)?)?;

    let text_path = out_dir.join(TEXT_FILE_NAME);
    write_text(&text_path, &render(result, OutputFormat::Text, raw)?)?;

    Ok(ReportPaths {
        json: json_path,
        text: text_path,
    })
}

fn write_text(path: &Path, contents: &str) -> Result<(), CliError> {
    let file = File::create(path).map_err(|e| CliError::io("creating report", path, e))?;
    let mut w = BufWriter::new(file);
    w.write_all(contents.as_bytes())
        .and_then(|_| w.flush())
        .map_err(|e| CliError::io("writing report", path, e))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
