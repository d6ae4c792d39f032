//! JSON report types printed by `convert --json` and `check --json`.

use serde::Serialize;

pub const REPORT_FORMAT: &str = "slugify-report/1";

/// Top-level JSON object: `kind` names the command, `data` holds its results.
#[derive(Serialize)]
pub struct Report<T> {
    pub format: &'static str,
    pub kind: &'static str,
    pub data: T,
}

pub fn report<T>(kind: &'static str, data: T) -> Report<T> {
    Report {
        format: REPORT_FORMAT,
        kind,
        data,
    }
}

#[derive(Serialize)]
pub struct ConvertResult {
    pub input: String,
    pub slug: String,
}

#[derive(Serialize)]
pub struct ConvertData {
    pub total: usize,
    pub results: Vec<ConvertResult>,
}

#[derive(Serialize)]
pub struct CheckResult {
    pub value: String,
    pub valid: bool,
    /// Slug the value would normalize to; omitted when already valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Serialize)]
pub struct CheckData {
    pub total: usize,
    pub invalid: usize,
    pub results: Vec<CheckResult>,
}
