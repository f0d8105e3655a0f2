//! Indentation configuration for generated code.

/// Indentation width, in spaces, for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// 2-space indentation used by every JavaScript target.
    pub const JAVASCRIPT: Self = Self(2);

    /// The whitespace for `level` nesting levels.
    pub fn at(&self, level: usize) -> String {
        " ".repeat(usize::from(self.0) * level)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVASCRIPT
    }
}
