//! Source document in, rendered report out.

use crate::Result;
use crate::browser;
use crate::diagnostics;
use crate::render;

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Markdown summary read from the working directory.
pub const INPUT_FILE: &str = "STREETBITE_EXECUTIVE_SUMMARY.md";

/// Report written next to it.
pub const OUTPUT_FILE: &str = "StreetBite_Report.html";

/// Raw Markdown text; never parsed here (the browser does that).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    text: String,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn read(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| {
            diagnostics::error_message(format!("read source document {}", path.display()))
        })?;
        Ok(Self::new(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Complete HTML document derived from a [`SourceDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    html: String,
}

impl RenderedReport {
    pub fn new(html: String) -> Self {
        Self { html }
    }

    #[cfg(test)]
    pub fn into_html(self) -> String {
        self.html
    }

    /// Write as UTF-8, replacing whatever is at `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.html).with_context(|| {
            diagnostics::error_message(format!("write report {}", path.display()))
        })
    }
}

/// Result of a generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Generated { output: PathBuf },
    MissingInput { input: PathBuf },
}

/// Turns `INPUT_FILE` into `OUTPUT_FILE` inside one directory.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    root: PathBuf,
}

impl ReportGenerator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn in_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("resolve current directory")?;
        Ok(Self::new(cwd))
    }

    pub fn input_path(&self) -> PathBuf {
        self.root.join(INPUT_FILE)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(OUTPUT_FILE)
    }

    /// Check the input, then read, render and write. Nothing is written
    /// when the input is missing.
    pub fn generate(&self) -> Result<Outcome> {
        let input = self.input_path();
        if !input.exists() {
            return Ok(Outcome::MissingInput { input });
        }

        let source = SourceDocument::read(&input)?;
        let report = render::render_report(&source)?;
        let output = self.output_path();
        report.write(&output)?;
        Ok(Outcome::Generated { output })
    }

    /// [`generate`](Self::generate), report the result, and optionally open
    /// the written file. A viewer that fails to launch is only a warning.
    pub fn run(&self, open: bool) -> Result<Outcome> {
        let outcome = self.generate()?;
        match &outcome {
            Outcome::MissingInput { input } => {
                eprintln!(
                    "{}",
                    diagnostics::error_message(format!("{} not found!", input.display()))
                );
            }
            Outcome::Generated { output } => {
                diagnostics::success(format!("Successfully generated {}", OUTPUT_FILE));
                if open {
                    open_report(output);
                }
            }
        }
        Ok(outcome)
    }
}

fn open_report(output: &Path) {
    let abs = match fs::canonicalize(output) {
        Ok(p) => p,
        Err(e) => {
            diagnostics::warn(format!("cannot resolve {}: {}", output.display(), e));
            return;
        }
    };
    let opened = browser::file_url(&abs).and_then(|url| browser::open_in_browser(&url));
    if let Err(e) = opened {
        diagnostics::warn(format!("{:#}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn dir_with_summary(text: &str) -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(INPUT_FILE), text).unwrap();
        tmp
    }

    #[test]
    fn missing_input_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let generator = ReportGenerator::new(tmp.path());

        let outcome = generator.generate().unwrap();

        assert_eq!(
            outcome,
            Outcome::MissingInput {
                input: tmp.path().join(INPUT_FILE)
            }
        );
        assert!(!generator.output_path().exists());
    }

    #[test]
    fn missing_input_leaves_existing_output_alone() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(OUTPUT_FILE), "stale").unwrap();

        ReportGenerator::new(tmp.path()).run(false).unwrap();

        assert_eq!(fs::read_to_string(tmp.path().join(OUTPUT_FILE)).unwrap(), "stale");
    }

    #[test]
    fn writes_report_with_embedded_markdown() {
        let tmp = dir_with_summary("# StreetBite\n\nFind vendors near you.");
        let generator = ReportGenerator::new(tmp.path());

        let outcome = generator.generate().unwrap();

        assert_eq!(
            outcome,
            Outcome::Generated {
                output: generator.output_path()
            }
        );
        let html = fs::read_to_string(generator.output_path()).unwrap();
        assert!(html.contains("const md = `# StreetBite\n\nFind vendors near you.`;"));
    }

    #[test]
    fn overwrites_previous_report() {
        let tmp = dir_with_summary("fresh");
        fs::write(tmp.path().join(OUTPUT_FILE), "x".repeat(100_000)).unwrap();

        ReportGenerator::new(tmp.path()).generate().unwrap();

        let html = fs::read_to_string(tmp.path().join(OUTPUT_FILE)).unwrap();
        assert!(html.contains("const md = `fresh`;"));
        assert!(!html.contains("xxxx"));
    }

    #[test]
    fn same_input_same_bytes() {
        let tmp = dir_with_summary("## Metrics\n\n`DAU` grew ${fast}.");
        let generator = ReportGenerator::new(tmp.path());

        generator.generate().unwrap();
        let first = fs::read(generator.output_path()).unwrap();
        generator.generate().unwrap();
        let second = fs::read(generator.output_path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(INPUT_FILE), [0xff, 0xfe, 0x00]).unwrap();

        let err = ReportGenerator::new(tmp.path()).generate().unwrap_err();

        assert!(format!("{:#}", err).contains(INPUT_FILE));
        assert!(!tmp.path().join(OUTPUT_FILE).exists());
    }
}
