//! Stylesheet tree: rules, declarations and serialization.

mod rule;
mod stringify;
mod stylesheet;

pub use rule::{
    AtRule, AtRuleBody, ConditionalGroup, Declaration, DeclarationNode, KeyframesGroup, Rule,
    StyleRule,
};
pub use stylesheet::Stylesheet;

pub(crate) use rule::{has_declaration_block, is_conditional_group, is_keyframes};
