//! Rule tree walker.

use crate::config::AdaptiveConfig;
use crate::tree::{Rule, StyleRule};

use super::declarations::DeclarationTransformer;

/// Walks a rule list, converting declarations and placing hairline rules.
#[derive(Debug)]
pub(crate) struct RuleWalker<'a> {
    transformer: DeclarationTransformer,
    hairline_class: &'a str,
}

impl<'a> RuleWalker<'a> {
    pub(crate) fn new(config: &'a AdaptiveConfig) -> Self {
        Self {
            transformer: DeclarationTransformer::new(config),
            hairline_class: &config.hairline_class,
        }
    }

    /// Process `rules`, returning the new rule list.
    ///
    /// Each style rule or keyframe step that yields hairline declarations is
    /// followed directly by its hairline rule. Conditional groups are walked
    /// with hairlines enabled, keyframes groups with hairlines disabled.
    pub(crate) fn process_rules(&self, rules: Vec<Rule>, hairlines: bool) -> Vec<Rule> {
        let mut out = Vec::with_capacity(rules.len());

        for rule in rules {
            match rule {
                Rule::Conditional(mut group) => {
                    group.rules = self.process_rules(std::mem::take(&mut group.rules), true);
                    out.push(Rule::Conditional(group));
                }
                Rule::Keyframes(mut group) => {
                    group.keyframes = self.process_rules(std::mem::take(&mut group.keyframes), false);
                    out.push(Rule::Keyframes(group));
                }
                Rule::Style(rule) => self.process_style_rule(rule, hairlines, Rule::Style, &mut out),
                Rule::Keyframe(rule) => {
                    self.process_style_rule(rule, hairlines, Rule::Keyframe, &mut out)
                }
                other => out.push(other),
            }
        }

        out
    }

    fn process_style_rule(
        &self,
        mut rule: StyleRule,
        hairlines: bool,
        kind: fn(StyleRule) -> Rule,
        out: &mut Vec<Rule>,
    ) {
        let hairline_declarations = self.transformer.transform(&mut rule.declarations, hairlines);

        let hairline_rule = (!hairline_declarations.is_empty())
            .then(|| StyleRule::new(self.hairline_selectors(&rule.selectors), hairline_declarations));

        out.push(kind(rule));
        if let Some(hairline_rule) = hairline_rule {
            tracing::debug!(
                "Added hairline rule '{}' with {} declaration(s)",
                hairline_rule.selectors.join(", "),
                hairline_rule.declarations.len()
            );
            out.push(kind(hairline_rule));
        }
    }

    fn hairline_selectors(&self, selectors: &[String]) -> Vec<String> {
        selectors
            .iter()
            .map(|selector| format!(".{} {}", self.hairline_class, selector))
            .collect()
    }
}
