//! Indentation unit for generated code.

use std::borrow::Cow;

/// Indentation style for one nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, the default for generated sources.
    pub const TWO: Self = Self::Spaces(2);

    /// 4-space indentation (Rust, Python).
    pub const FOUR: Self = Self::Spaces(4);

    /// Tab indentation (Go).
    pub const TAB: Self = Self::Tab;

    /// The text of one indent level.
    pub fn unit(&self) -> Cow<'static, str> {
        match *self {
            Self::Spaces(2) => Cow::Borrowed("  "),
            Self::Spaces(4) => Cow::Borrowed("    "),
            Self::Spaces(width) => Cow::Owned(" ".repeat(usize::from(width))),
            Self::Tab => Cow::Borrowed("\t"),
        }
    }

    /// The prefix for `depth` nesting levels.
    pub fn repeat(&self, depth: usize) -> String {
        self.unit().repeat(depth)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TWO
    }
}
