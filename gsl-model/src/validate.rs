//! Validation of entity names.

use std::collections::HashMap;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Validation context carrying source information.
///
/// Tracks the current path through the model (e.g. `["hedgehog", "blocks"]`)
/// so errors can say where a bad name lives.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        Self {
            source: self.source,
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` at the current path, e.g. "block in 'hedgehog'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of the `n`-th declaration of `name` in the source.
    pub fn find_span(&self, name: &str, nth: usize) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name, nth)
    }

    /// Check that `name` can be used as a JavaScript identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_js_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name, 0),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name, 0),
            ));
        }

        Ok(())
    }

    /// Validate every name and reject repeats within one scope.
    pub fn validate_names<'n>(
        &self,
        names: impl IntoIterator<Item = &'n str>,
        kind: &str,
    ) -> Result<()> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for name in names {
            self.validate_name(name, kind)?;
            let count = seen.entry(name).or_insert(0);
            if *count > 0 {
                return Err(self.source.duplicate_error(
                    name,
                    self.context_for(kind),
                    self.find_span(name, 0),
                    self.find_span(name, *count),
                ));
            }
            *count += 1;
        }
        Ok(())
    }
}

/// JavaScript reserved words that cannot name a function, class or binding.
pub(crate) const JS_KEYWORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

pub(crate) fn is_js_keyword(name: &str) -> bool {
    JS_KEYWORDS.contains(&name)
}

/// Find the `nth` occurrence of `name = "<name>"` in the TOML source.
///
/// Entities are declared in arrays of tables, so the name always appears as
/// a `name` key. No fallback: better no span than a wrong one.
pub(crate) fn find_name_span(src: &str, name: &str, nth: usize) -> Option<SourceSpan> {
    let patterns = [format!("name = \"{}\"", name), format!("name = '{}'", name)];
    let mut hits: Vec<usize> = patterns
        .iter()
        .flat_map(|pattern| src.match_indices(pattern.as_str()).map(|(pos, _)| pos))
        .collect();
    hits.sort_unstable();

    // Skip 'name = "' to point at the value itself.
    hits.get(nth)
        .map(|pos| SourceSpan::from((pos + 8, name.len())))
}

/// Check that `name` is a valid identifier.
/// Returns None if valid, Some(reason) if invalid.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_digit() => return Some("name cannot start with a digit"),
        Some(c) if !is_ident_char(c) => return Some("name contains an invalid character"),
        Some(_) => {}
    }

    if chars.any(|c| !is_ident_char(c)) {
        return Some("name contains an invalid character");
    }

    None
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
