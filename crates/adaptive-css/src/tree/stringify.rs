//! Stylesheet serialization.
//!
//! Pretty output indents nested blocks by two spaces and separates rules with
//! a blank line. Minified output drops comments and all optional whitespace.

use std::fmt::Write as _;

use super::rule::{AtRule, AtRuleBody, ConditionalGroup, DeclarationNode, KeyframesGroup, Rule, StyleRule};

const INDENT: &str = "  ";

/// Serialize a rule list.
pub(crate) fn stringify(rules: &[Rule], minify: bool) -> String {
    let mut writer = CssWriter {
        minify,
        out: String::new(),
    };
    writer.rules(rules, 0, "\n\n");
    writer.out
}

struct CssWriter {
    minify: bool,
    out: String,
}

impl CssWriter {
    fn rules(&mut self, rules: &[Rule], level: usize, separator: &str) {
        let mut first = true;
        for rule in rules {
            if self.minify && matches!(rule, Rule::Comment(_)) {
                continue;
            }
            if !first && !self.minify {
                self.out.push_str(separator);
            }
            first = false;
            self.rule(rule, level);
        }
    }

    fn rule(&mut self, rule: &Rule, level: usize) {
        match rule {
            Rule::Style(style) => self.style_rule(style, level),
            Rule::Keyframe(step) => self.keyframe(step, level),
            Rule::Conditional(group) => self.conditional(group, level),
            Rule::Keyframes(group) => self.keyframes(group, level),
            Rule::AtRule(at_rule) => self.at_rule(at_rule, level),
            Rule::Comment(text) => {
                self.indent(level);
                let _ = write!(self.out, "/*{text}*/");
            }
        }
    }

    fn style_rule(&mut self, rule: &StyleRule, level: usize) {
        if self.minify {
            self.out.push_str(&rule.selectors.join(","));
        } else {
            for (i, selector) in rule.selectors.iter().enumerate() {
                if i > 0 {
                    self.out.push_str(",\n");
                }
                self.indent(level);
                self.out.push_str(selector);
            }
        }
        self.declaration_block(&rule.declarations, level);
    }

    fn keyframe(&mut self, step: &StyleRule, level: usize) {
        self.indent(level);
        self.out
            .push_str(&step.selectors.join(if self.minify { "," } else { ", " }));
        self.declaration_block(&step.declarations, level);
    }

    fn conditional(&mut self, group: &ConditionalGroup, level: usize) {
        self.at_prelude(&group.name, &group.condition, level);
        self.open_block();
        self.rules(&group.rules, level + 1, "\n\n");
        self.close_block(level);
    }

    fn keyframes(&mut self, group: &KeyframesGroup, level: usize) {
        self.at_prelude(&group.name, &group.animation, level);
        self.open_block();
        self.rules(&group.keyframes, level + 1, "\n");
        self.close_block(level);
    }

    fn at_rule(&mut self, at_rule: &AtRule, level: usize) {
        self.at_prelude(&at_rule.name, &at_rule.prelude, level);
        match &at_rule.body {
            AtRuleBody::Statement => self.out.push(';'),
            AtRuleBody::Declarations(declarations) => {
                self.declaration_block(declarations, level);
            }
            AtRuleBody::Raw(raw) if raw.is_empty() => {
                self.out.push_str(if self.minify { "{}" } else { " {}" });
            }
            AtRuleBody::Raw(raw) => {
                self.open_block();
                self.indent(level + 1);
                self.out.push_str(raw);
                self.close_block(level);
            }
        }
    }

    fn declaration_block(&mut self, declarations: &[DeclarationNode], level: usize) {
        if self.minify {
            let body: Vec<String> = declarations
                .iter()
                .filter_map(|node| match node {
                    DeclarationNode::Declaration(decl) => {
                        Some(format!("{}:{}", decl.property, decl.value))
                    }
                    DeclarationNode::Nested(text) => Some(text.clone()),
                    DeclarationNode::Comment(_) => None,
                })
                .collect();
            let _ = write!(self.out, "{{{}}}", body.join(";"));
            return;
        }

        if declarations.is_empty() {
            self.out.push_str(" {}");
            return;
        }

        self.out.push_str(" {");
        for node in declarations {
            self.out.push('\n');
            self.indent(level + 1);
            match node {
                DeclarationNode::Declaration(decl) => {
                    let _ = write!(self.out, "{}: {};", decl.property, decl.value);
                }
                DeclarationNode::Comment(text) => {
                    let _ = write!(self.out, "/*{text}*/");
                }
                DeclarationNode::Nested(text) => self.out.push_str(text),
            }
        }
        self.out.push('\n');
        self.indent(level);
        self.out.push('}');
    }

    fn at_prelude(&mut self, name: &str, prelude: &str, level: usize) {
        self.indent(level);
        self.out.push('@');
        self.out.push_str(name);
        if !prelude.is_empty() {
            self.out.push(' ');
            self.out.push_str(prelude);
        }
    }

    fn open_block(&mut self) {
        self.out.push_str(if self.minify { "{" } else { " {\n" });
    }

    fn close_block(&mut self, level: usize) {
        if !self.minify {
            self.out.push('\n');
            self.indent(level);
        }
        self.out.push('}');
    }

    fn indent(&mut self, level: usize) {
        if !self.minify {
            for _ in 0..level {
                self.out.push_str(INDENT);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn border_rule() -> Rule {
        let mut rule = StyleRule::new(vec![".a".into(), ".b".into()], Vec::new());
        rule.push_declaration("border", "1px solid #ccc");
        rule.push_comment(" note ");
        rule.push_declaration("height", "1rem");
        Rule::Style(rule)
    }

    #[test]
    fn pretty_style_rule() {
        let css = stringify(&[border_rule()], false);
        assert_eq!(
            css,
            ".a,\n.b {\n  border: 1px solid #ccc;\n  /* note */\n  height: 1rem;\n}"
        );
    }

    #[test]
    fn minified_style_rule_drops_comments() {
        let css = stringify(&[Rule::Comment("top".into()), border_rule()], true);
        assert_eq!(css, ".a,.b{border:1px solid #ccc;height:1rem}");
    }

    #[test]
    fn pretty_nested_media() {
        let mut inner = StyleRule::with_selector(".a");
        inner.push_declaration("width", "10px");
        let media = Rule::Conditional(ConditionalGroup {
            name: "media".into(),
            condition: "screen".into(),
            rules: vec![Rule::Style(inner.clone()), Rule::Style(inner)],
        });

        assert_eq!(
            stringify(&[media.clone()], false),
            "@media screen {\n  .a {\n    width: 10px;\n  }\n\n  .a {\n    width: 10px;\n  }\n}"
        );
        assert_eq!(
            stringify(&[media], true),
            "@media screen{.a{width:10px}.a{width:10px}}"
        );
    }

    #[test]
    fn keyframes_and_statements() {
        let mut from = StyleRule::with_selector("from");
        from.push_declaration("left", "0");
        let mut to = StyleRule::with_selector("to");
        to.push_declaration("left", "10px");
        let rules = vec![
            Rule::AtRule(AtRule {
                name: "charset".into(),
                prelude: "\"utf-8\"".into(),
                body: AtRuleBody::Statement,
            }),
            Rule::Keyframes(KeyframesGroup {
                name: "keyframes".into(),
                animation: "slide".into(),
                keyframes: vec![Rule::Keyframe(from), Rule::Keyframe(to)],
            }),
        ];

        assert_eq!(
            stringify(&rules, false),
            "@charset \"utf-8\";\n\n@keyframes slide {\n  from {\n    left: 0;\n  }\n  to {\n    left: 10px;\n  }\n}"
        );
        assert_eq!(
            stringify(&rules, true),
            "@charset \"utf-8\";@keyframes slide{from{left:0}to{left:10px}}"
        );
    }

    #[test]
    fn keyframe_offsets_share_a_line() {
        let mut step = StyleRule::new(vec!["50%".into(), "75%".into()], Vec::new());
        step.push_declaration("top", "2px");
        let rules = vec![Rule::Keyframes(KeyframesGroup {
            name: "keyframes".into(),
            animation: "k".into(),
            keyframes: vec![Rule::Keyframe(step)],
        })];

        assert_eq!(
            stringify(&rules, false),
            "@keyframes k {\n  50%, 75% {\n    top: 2px;\n  }\n}"
        );
        assert_eq!(stringify(&rules, true), "@keyframes k{50%,75%{top:2px}}");
    }

    #[test]
    fn nested_rules_are_written_verbatim() {
        let mut rule = StyleRule::with_selector(".a");
        rule.declarations.push(DeclarationNode::Nested("&:hover { top: 1px }".into()));
        rule.push_declaration("height", "5px");
        let rule = Rule::Style(rule);

        assert_eq!(
            stringify(&[rule.clone()], false),
            ".a {\n  &:hover { top: 1px }\n  height: 5px;\n}"
        );
        assert_eq!(stringify(&[rule], true), ".a{&:hover { top: 1px };height:5px}");
    }

    #[test]
    fn empty_rule_is_kept() {
        let rule = Rule::Style(StyleRule::with_selector(".empty"));
        assert_eq!(stringify(&[rule.clone()], false), ".empty {}");
        assert_eq!(stringify(&[rule], true), ".empty{}");
    }
}
