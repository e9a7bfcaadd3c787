//! Rule and declaration nodes.

/// A node in a stylesheet's rule list.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// An ordinary `selector { declarations }` rule.
    Style(StyleRule),
    /// A conditional group such as `@media` or `@supports`.
    Conditional(ConditionalGroup),
    /// An `@keyframes` group.
    Keyframes(KeyframesGroup),
    /// A step inside an `@keyframes` group. Its selectors hold the step
    /// offsets (`from`, `50%`, ...).
    Keyframe(StyleRule),
    /// Any other at-rule, carried through untouched.
    AtRule(AtRule),
    /// A comment between rules.
    Comment(String),
}

impl Rule {
    /// Get the declarations of a style rule or keyframe step.
    pub fn declarations(&self) -> Option<&[DeclarationNode]> {
        match self {
            Rule::Style(rule) | Rule::Keyframe(rule) => Some(&rule.declarations),
            _ => None,
        }
    }

    /// Get the selectors of a style rule or keyframe step.
    pub fn selectors(&self) -> Option<&[String]> {
        match self {
            Rule::Style(rule) | Rule::Keyframe(rule) => Some(&rule.selectors),
            _ => None,
        }
    }
}

/// Selectors paired with a declaration list.
///
/// Shared by [`Rule::Style`] and [`Rule::Keyframe`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleRule {
    /// Comma-separated selectors, each trimmed.
    pub selectors: Vec<String>,
    /// Declarations and the comments between them, in source order.
    pub declarations: Vec<DeclarationNode>,
}

impl StyleRule {
    /// Create a rule from selectors and declarations.
    pub fn new(selectors: Vec<String>, declarations: Vec<DeclarationNode>) -> Self {
        Self {
            selectors,
            declarations,
        }
    }

    /// Create a rule with a single selector.
    pub fn with_selector(selector: impl Into<String>) -> Self {
        Self::new(vec![selector.into()], Vec::new())
    }

    /// Append a declaration.
    pub fn push_declaration(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations
            .push(DeclarationNode::Declaration(Declaration::new(property, value)));
    }

    /// Append a comment.
    pub fn push_comment(&mut self, text: impl Into<String>) {
        self.declarations.push(DeclarationNode::Comment(text.into()));
    }

    /// Iterate over the declarations, skipping comments.
    pub fn iter_declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter_map(DeclarationNode::as_declaration)
    }
}

/// An entry in a declaration list.
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationNode {
    /// A `property: value` pair.
    Declaration(Declaration),
    /// A comment; the text excludes the `/*` and `*/` delimiters.
    Comment(String),
    /// A nested rule, kept as trimmed source text and never converted.
    Nested(String),
}

impl DeclarationNode {
    /// Get the declaration if this node is one.
    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            DeclarationNode::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    /// Get the comment text if this node is a comment.
    pub fn as_comment(&self) -> Option<&str> {
        match self {
            DeclarationNode::Comment(text) => Some(text),
            _ => None,
        }
    }
}

/// A single `property: value` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Property name as written.
    pub property: String,
    /// Raw value text, including any `!important`.
    pub value: String,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// A conditional group rule: `@media`, `@supports`, `@container`,
/// `@document` or `@layer` with a block.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalGroup {
    /// At-keyword without the `@`, including any vendor prefix.
    pub name: String,
    /// Condition text between the keyword and the block.
    pub condition: String,
    /// Nested rules.
    pub rules: Vec<Rule>,
}

/// An `@keyframes` rule.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframesGroup {
    /// At-keyword without the `@` (`keyframes`, `-webkit-keyframes`, ...).
    pub name: String,
    /// Animation name.
    pub animation: String,
    /// Keyframe steps and comments.
    pub keyframes: Vec<Rule>,
}

/// An at-rule the transform does not look into.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// At-keyword without the `@`.
    pub name: String,
    /// Prelude text, possibly empty.
    pub prelude: String,
    /// Rule body.
    pub body: AtRuleBody,
}

/// Body of a pass-through at-rule.
#[derive(Debug, Clone, PartialEq)]
pub enum AtRuleBody {
    /// No block, terminated by `;` (e.g. `@import`, `@charset`).
    Statement,
    /// A declaration block (e.g. `@font-face`, `@page`).
    Declarations(Vec<DeclarationNode>),
    /// Any other block, kept as trimmed source text.
    Raw(String),
}

/// Check whether an at-keyword names a conditional group rule.
pub(crate) fn is_conditional_group(name: &str) -> bool {
    matches!(
        unprefixed(name),
        "media" | "supports" | "container" | "document" | "layer"
    )
}

/// Check whether an at-keyword names a keyframes rule.
pub(crate) fn is_keyframes(name: &str) -> bool {
    unprefixed(name) == "keyframes"
}

/// Check whether an at-keyword's block holds declarations.
pub(crate) fn has_declaration_block(name: &str) -> bool {
    matches!(
        unprefixed(name),
        "font-face" | "page" | "viewport" | "counter-style" | "property" | "font-palette-values"
    )
}

/// Strip a vendor prefix such as `-webkit-` from an at-keyword.
fn unprefixed(name: &str) -> &str {
    name.strip_prefix('-')
        .and_then(|rest| rest.split_once('-'))
        .map(|(_, rest)| rest)
        .unwrap_or(name)
}
