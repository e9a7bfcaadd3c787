//! Stylesheet parser built on the `cssparser` tokenizer.
//!
//! The parser keeps source text rather than interpreting it: selectors,
//! at-rule preludes and declaration values are stored as the text that was
//! written, minus comments. Comments that stand on their own between rules
//! or between declarations become nodes in the tree, which is what lets a
//! trailing `/* rem */` act on the declaration before it.

use cssparser::{
    Delimiter, ParseError as CssParseError, Parser, ParserInput, SourceLocation, SourcePosition,
    Token,
};

use crate::tree::{
    AtRule, AtRuleBody, ConditionalGroup, Declaration, DeclarationNode, KeyframesGroup, Rule,
    StyleRule, Stylesheet, has_declaration_block, is_conditional_group, is_keyframes,
};
use crate::{Error, Result};

type CssResult<'i, T> = std::result::Result<T, CssParseError<'i, ()>>;

/// Parse CSS text into a [`Stylesheet`].
///
/// # Error Recovery
///
/// A malformed rule or declaration does not fail the parse. It is logged via
/// `tracing::warn!` and skipped, and parsing resumes after it. The function
/// currently always returns `Ok`.
///
/// # Example
///
/// ```
/// use adaptive_css::parse_stylesheet;
///
/// let sheet = parse_stylesheet(".a { border: 1px solid #ccc; } @media print { .b { top: 0; } }").unwrap();
/// assert_eq!(sheet.len(), 2);
/// ```
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    Ok(Stylesheet::new(parse_rule_list(&mut parser, false)))
}

/// Parse rules until the input (or the enclosing block) is exhausted.
///
/// Inside `@keyframes`, qualified rules are keyframe steps.
fn parse_rule_list(parser: &mut Parser<'_, '_>, keyframes: bool) -> Vec<Rule> {
    let mut rules = vec![];

    loop {
        let state = parser.state();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        let parsed = match token {
            Token::WhiteSpace(_) | Token::CDO | Token::CDC | Token::Semicolon => continue,
            Token::Comment(text) => Ok(Rule::Comment(text.to_string())),
            Token::AtKeyword(name) => parse_at_rule(parser, &name),
            _ => {
                parser.reset(&state);
                parse_qualified_rule(parser, keyframes)
            }
        };

        match parsed {
            Ok(rule) => rules.push(rule),
            Err(e) => tracing::warn!("Skipping malformed rule: {}", e),
        }
    }

    rules
}

/// Parse `selectors { declarations }`.
fn parse_qualified_rule<'i>(parser: &mut Parser<'i, '_>, keyframe: bool) -> Result<Rule> {
    let location = parser.current_source_location();
    let prelude = parser
        .parse_until_before(Delimiter::CurlyBracketBlock | Delimiter::Semicolon, |p| {
            collect_text(p)
        })
        .map_err(|e| block_error("selector", e, location))?;

    match parser.next() {
        Ok(Token::CurlyBracketBlock) => {}
        _ => {
            return Err(Error::parse(
                format!("Expected '{{' after '{prelude}'"),
                location.line + 1,
                location.column,
            ));
        }
    }

    let declarations = parser
        .parse_nested_block(|p| parse_declaration_list(p))
        .map_err(|e| block_error("declaration block", e, location))?;

    let selectors = split_selectors(&prelude);
    if selectors.is_empty() {
        return Err(Error::parse("Missing selector", location.line + 1, location.column));
    }

    let rule = StyleRule::new(selectors, declarations);
    Ok(if keyframe {
        Rule::Keyframe(rule)
    } else {
        Rule::Style(rule)
    })
}

/// Parse an at-rule whose keyword has just been consumed.
fn parse_at_rule<'i>(parser: &mut Parser<'i, '_>, name: &str) -> Result<Rule> {
    let location = parser.current_source_location();
    let name = name.to_string();
    let prelude = parser
        .parse_until_before(Delimiter::CurlyBracketBlock | Delimiter::Semicolon, |p| {
            collect_text(p)
        })
        .map_err(|e| block_error("at-rule prelude", e, location))?;

    // Anything but a block is a statement ending at `;` or end of input.
    if !matches!(parser.next(), Ok(Token::CurlyBracketBlock)) {
        return Ok(Rule::AtRule(AtRule {
            name,
            prelude,
            body: AtRuleBody::Statement,
        }));
    }

    let rule = if is_conditional_group(&name) {
        let rules = parser
            .parse_nested_block(|p| Ok::<_, CssParseError<'i, ()>>(parse_rule_list(p, false)))
            .map_err(|e| block_error("group block", e, location))?;
        Rule::Conditional(ConditionalGroup {
            name,
            condition: prelude,
            rules,
        })
    } else if is_keyframes(&name) {
        let keyframes = parser
            .parse_nested_block(|p| Ok::<_, CssParseError<'i, ()>>(parse_rule_list(p, true)))
            .map_err(|e| block_error("keyframes block", e, location))?;
        Rule::Keyframes(KeyframesGroup {
            name,
            animation: prelude,
            keyframes,
        })
    } else if has_declaration_block(&name) {
        let declarations = parser
            .parse_nested_block(|p| parse_declaration_list(p))
            .map_err(|e| block_error("declaration block", e, location))?;
        Rule::AtRule(AtRule {
            name,
            prelude,
            body: AtRuleBody::Declarations(declarations),
        })
    } else {
        let raw = parser
            .parse_nested_block(|p| {
                let start = p.position();
                while p.next_including_whitespace_and_comments().is_ok() {}
                Ok::<_, CssParseError<'i, ()>>(p.slice_from(start).trim().to_string())
            })
            .map_err(|e| block_error("at-rule block", e, location))?;
        Rule::AtRule(AtRule {
            name,
            prelude,
            body: AtRuleBody::Raw(raw),
        })
    };

    Ok(rule)
}

/// Parse the inside of a declaration block.
///
/// Nested rules inside the block are kept as source text.
fn parse_declaration_list<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Vec<DeclarationNode>> {
    let mut nodes = vec![];

    loop {
        let start = parser.position();
        let location = parser.current_source_location();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        let nested = match token {
            Token::WhiteSpace(_) | Token::Semicolon => continue,
            Token::Comment(text) => {
                nodes.push(DeclarationNode::Comment(text.to_string()));
                continue;
            }
            Token::Ident(property) => {
                let state = parser.state();
                if parser.expect_colon().is_ok() {
                    match parse_declaration_value(parser) {
                        Some(value) => nodes.push(DeclarationNode::Declaration(Declaration::new(
                            property.to_string(),
                            value,
                        ))),
                        None => tracing::warn!(
                            "Skipping declaration '{}' at line {}: missing value",
                            property,
                            location.line + 1
                        ),
                    }
                    continue;
                }
                parser.reset(&state);
                skip_declaration(parser, start)
            }
            Token::CurlyBracketBlock => Some(nested_rule_text(parser, start)),
            _ => skip_declaration(parser, start),
        };

        match nested {
            Some(text) => {
                tracing::debug!("Keeping nested rule at line {}", location.line + 1);
                nodes.push(DeclarationNode::Nested(text));
            }
            None => tracing::warn!(
                "Skipping invalid declaration '{}' at line {}, column {}",
                parser.slice_from(start).trim(),
                location.line + 1,
                location.column
            ),
        }
    }

    Ok(nodes)
}

/// Parse a declaration value after its colon, up to but not including `;`.
fn parse_declaration_value(parser: &mut Parser<'_, '_>) -> Option<String> {
    parser
        .parse_until_before(Delimiter::Semicolon, |p| collect_text(p))
        .ok()
        .filter(|value| !value.is_empty())
}

/// Read the remaining tokens back as source text, dropping comments.
///
/// Nested blocks are copied verbatim, comments inside them included.
fn collect_text<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, String> {
    let mut text = String::new();

    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        match token {
            Token::Comment(_) => {}
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                parser.parse_nested_block(|p| {
                    while p.next_including_whitespace_and_comments().is_ok() {}
                    Ok::<_, CssParseError<'i, ()>>(())
                })?;
                text.push_str(parser.slice_from(start));
            }
            _ => text.push_str(parser.slice_from(start)),
        }
    }

    Ok(text.trim().to_string())
}

/// Split a selector list on its top-level commas.
fn split_selectors(prelude: &str) -> Vec<String> {
    let mut input = ParserInput::new(prelude);
    let mut parser = Parser::new(&mut input);
    let mut selectors = vec![];
    let mut segment_start = parser.position();

    loop {
        let before = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        if matches!(token, Token::Comma) {
            push_selector(&mut selectors, parser.slice(segment_start..before));
            segment_start = parser.position();
        }
    }
    push_selector(&mut selectors, parser.slice_from(segment_start));

    selectors
}

fn push_selector(selectors: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        selectors.push(text.to_string());
    }
}

fn block_error(what: &str, e: CssParseError<'_, ()>, location: SourceLocation) -> Error {
    Error::parse(
        format!("Failed to parse {what}: {:?}", e.kind),
        location.line + 1,
        location.column,
    )
}

/// Skip to the end of the current declaration (error recovery).
///
/// A `{}` block ends a nested rule rather than a declaration; the rule's
/// source text from `start` is returned instead of being skipped.
fn skip_declaration(parser: &mut Parser<'_, '_>, start: SourcePosition) -> Option<String> {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return None,
            Ok(Token::CurlyBracketBlock) => return Some(nested_rule_text(parser, start)),
            _ => {}
        }
    }
}

/// Consume the block just read and return the source text from `start`.
fn nested_rule_text<'i>(parser: &mut Parser<'i, '_>, start: SourcePosition) -> String {
    let _ = parser.parse_nested_block(|p| {
        while p.next_including_whitespace_and_comments().is_ok() {}
        Ok::<_, CssParseError<'i, ()>>(())
    });
    parser.slice_from(start).trim().to_string()
}
