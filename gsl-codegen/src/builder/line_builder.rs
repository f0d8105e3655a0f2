//! Line builder for generating indented, region-annotated code.

use gsl_regen::{Flavor, close_tag, open_tag, void_tag};

use super::Indent;

/// Comment leader placed before region markers.
const COMMENT: &str = "// ";

/// Builds output as a list of lines with managed indentation.
///
/// Blank lines carry no indentation, so generated files never end up with
/// trailing whitespace.
///
/// # Example
///
/// ```
/// use gsl_codegen::builder::LineBuilder;
///
/// let mut b = LineBuilder::javascript();
/// b.block("function run() {", "}", |b| {
///     b.region("run-body", |b| {
///         b.line("return 1;");
///     });
/// });
///
/// assert_eq!(
///     b.build(),
///     vec![
///         "function run() {",
///         "  // <default GSL customizable: run-body>",
///         "  return 1;",
///         "  // </GSL customizable: run-body>",
///         "}",
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LineBuilder {
    indent_level: usize,
    indent: Indent,
    lines: Vec<String>,
}

impl LineBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            lines: Vec::new(),
        }
    }

    /// Create a builder with 2-space indentation.
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// Add a line at the current indentation.
    pub fn line(&mut self, s: impl AsRef<str>) -> &mut Self {
        let s = s.as_ref();
        if s.is_empty() {
            return self.blank();
        }
        let line = format!("{}{}", self.indent.at(self.indent_level), s);
        self.lines.push(line);
        self
    }

    /// Add several lines at the current indentation.
    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.line(line);
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit `header`, the body one level deeper, then `close`.
    pub fn block(
        &mut self,
        header: impl AsRef<str>,
        close: impl AsRef<str>,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.line(header);
        self.indent();
        body(self);
        self.dedent();
        self.line(close)
    }

    /// Emit a bounded region whose default body is written by `body`.
    pub fn region(&mut self, id: &str, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.line(format!("{COMMENT}{}", open_tag(id, Flavor::Default)));
        body(self);
        self.line(format!("{COMMENT}{}", close_tag(id)))
    }

    /// Emit an insertion point marker.
    pub fn insertion_point(&mut self, id: &str) -> &mut Self {
        self.line(format!("{COMMENT}{}", void_tag(id, Flavor::Default)))
    }

    /// Add `suffix` to the last emitted line.
    pub fn append(&mut self, suffix: &str) -> &mut Self {
        if let Some(last) = self.lines.last_mut() {
            last.push_str(suffix);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn build(self) -> Vec<String> {
        self.lines
    }
}

impl Default for LineBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}
