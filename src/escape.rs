//! Escaping of Markdown text for embedding inside a JS template literal.

use crate::Result;

use regex::Regex;

/// Markup that could end the enclosing `<script>` element early: a closing
/// script tag in any letter case, or a comment opener (which lets a later
/// `<script>` push the tokenizer into its double-escaped state).
const SCRIPT_BREAKOUT_RE: &str = r"(?i)<(/script|!--)";

/// Rewrites source text so it can sit between the backticks of
/// `const md = `...`;` without ending the literal, starting an
/// interpolation, or closing the enclosing `<script>` element.
#[derive(Debug, Clone)]
pub struct LiteralEscaper {
    breakout: Regex,
}

impl LiteralEscaper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            breakout: Regex::new(SCRIPT_BREAKOUT_RE)?,
        })
    }

    /// Escape backticks and `${`, then `</script` and `<!--`.
    pub fn escape(&self, text: &str) -> String {
        let escaped = escape_literal_delimiters(text);
        // `\/` and `\!` inside a template literal still evaluate to `/` and `!`.
        self.breakout.replace_all(&escaped, r"<\$1").into_owned()
    }
}

/// Prefix every backtick and every `${` with a backslash.
///
/// A run of backslashes directly in front of one of those is doubled first,
/// so it cannot swallow the added escape. Backslashes anywhere else are
/// copied as-is.
fn escape_literal_delimiters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_backslashes = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            pending_backslashes += 1;
            continue;
        }

        let delimiter = c == '`' || (c == '$' && chars.peek() == Some(&'{'));
        let run = if delimiter {
            pending_backslashes * 2
        } else {
            pending_backslashes
        };
        out.extend(std::iter::repeat('\\').take(run));
        pending_backslashes = 0;

        if delimiter {
            out.push('\\');
        }
        out.push(c);
    }
    out.extend(std::iter::repeat('\\').take(pending_backslashes));

    out
}
