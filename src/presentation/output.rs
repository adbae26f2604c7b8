//! Output Rendering
//!
//! Renders resolutions and directive reports as text or JSON.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::application::{DirectiveReport, ResolveOutcome};
use crate::domain::value_objects::ExecutionDomain;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// What to print and how to print paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Restrict output to one domain
    pub domain: Option<ExecutionDomain>,
    /// Print paths relative to the resolved directory
    pub relative: bool,
}

impl RenderOptions {
    fn wants(&self, domain: ExecutionDomain) -> bool {
        self.domain.is_none_or(|only| only == domain)
    }

    fn display_path(&self, root: &Path, path: &Path) -> PathBuf {
        if self.relative {
            if let Ok(relative) = path.strip_prefix(root) {
                return relative.to_path_buf();
            }
        }
        path.to_path_buf()
    }
}

/// Render a resolution in the requested format
pub fn render_outcome(
    outcome: &ResolveOutcome,
    options: &RenderOptions,
) -> serde_json::Result<String> {
    match options.format {
        OutputFormat::Text => Ok(render_outcome_text(outcome, options)),
        OutputFormat::Json => render_outcome_json(outcome, options),
    }
}

/// One section per domain, one path per line
pub fn render_outcome_text(outcome: &ResolveOutcome, options: &RenderOptions) -> String {
    let mut out = String::new();
    for (domain, paths) in outcome.resolution.iter() {
        if !options.wants(domain) {
            continue;
        }
        let _ = writeln!(out, "{} ({})", domain, paths.len());
        for path in paths {
            let _ = writeln!(
                out,
                "  {}",
                options.display_path(&outcome.root, path).display()
            );
        }
    }
    out
}

/// `{"root": ..., "client": [...], "server": [...], "shared": [...]}`
pub fn render_outcome_json(
    outcome: &ResolveOutcome,
    options: &RenderOptions,
) -> serde_json::Result<String> {
    let mut object = serde_json::Map::new();
    object.insert(
        "root".to_string(),
        serde_json::to_value(&outcome.root)?,
    );
    for (domain, paths) in outcome.resolution.iter() {
        if !options.wants(domain) {
            continue;
        }
        let shown: Vec<PathBuf> = paths
            .iter()
            .map(|path| options.display_path(&outcome.root, path))
            .collect();
        object.insert(domain.to_string(), serde_json::to_value(shown)?);
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(object))
}

/// Render a directive report in the requested format
pub fn render_directives(
    file: &Path,
    reports: &[DirectiveReport],
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "file": file,
            "directives": reports,
        })),
        OutputFormat::Text => Ok(render_directives_text(file, reports)),
    }
}

pub fn render_directives_text(file: &Path, reports: &[DirectiveReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} directives)", file.display(), reports.len());
    for report in reports {
        let status = if report.participates {
            "used"
        } else if report.valid || report.target.is_some() {
            "ignored"
        } else {
            "invalid"
        };
        let _ = write!(out, "  [{}] {}", status, report.text);
        if let Some(target) = &report.target {
            let _ = write!(out, " -> {}", target.display());
        }
        out.push('\n');
    }
    out
}
