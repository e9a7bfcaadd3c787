//! Parsed stylesheet.

use crate::Result;

use super::rule::Rule;
use super::stringify::stringify;

/// A parsed stylesheet: an ordered list of rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    /// Top-level rules in source order.
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    /// Create a stylesheet from rules.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a stylesheet from CSS text.
    pub fn from_css(css: &str) -> Result<Self> {
        crate::parser::parse_stylesheet(css)
    }

    /// Serialize back to CSS text.
    pub fn to_css(&self, minify: bool) -> String {
        stringify(&self.rules, minify)
    }

    /// Get the number of top-level rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over top-level rules.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

impl std::fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css(false))
    }
}
