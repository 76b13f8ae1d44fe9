//! Report rendering (HTML).

mod html;

use crate::Result;
use crate::escape::LiteralEscaper;
use crate::report::{RenderedReport, SourceDocument};

/// Escape the source text and embed it into the report template.
pub fn render_report(source: &SourceDocument) -> Result<RenderedReport> {
    let escaper = LiteralEscaper::new()?;
    let html = html::render_html_report(&escaper.escape(source.text()));
    Ok(RenderedReport::new(html))
}
