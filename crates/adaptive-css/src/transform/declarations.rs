//! Declaration transformer.

use crate::config::AdaptiveConfig;
use crate::tree::{Declaration, DeclarationNode};

use super::convert::{ConversionMode, Converter, Directive};
use super::length::has_px_length;

/// A declaration list entry after directive resolution.
#[derive(Debug, PartialEq)]
enum Entry {
    /// A declaration holding pixel lengths, with the directive that followed it.
    Convert(Declaration, Option<Directive>),
    /// Anything else, kept as is.
    Keep(DeclarationNode),
}

/// Pair each pixel-valued declaration with a directive comment right after it.
///
/// A recognized directive comment is consumed. Unrecognized comments, and
/// comments following declarations without pixel lengths, are kept.
fn pair_directives(nodes: Vec<DeclarationNode>) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(nodes.len());
    let mut nodes = nodes.into_iter().peekable();

    while let Some(node) = nodes.next() {
        match node {
            DeclarationNode::Declaration(decl) if has_px_length(&decl.value) => {
                let directive = nodes
                    .peek()
                    .and_then(DeclarationNode::as_comment)
                    .and_then(Directive::from_comment);
                if directive.is_some() {
                    nodes.next();
                }
                entries.push(Entry::Convert(decl, directive));
            }
            other => entries.push(Entry::Keep(other)),
        }
    }

    entries
}

/// Converts the declarations of a rule and derives its hairline declarations.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DeclarationTransformer {
    converter: Converter,
    default_mode: ConversionMode,
}

impl DeclarationTransformer {
    pub(crate) fn new(config: &AdaptiveConfig) -> Self {
        Self {
            converter: Converter::from_validated(config),
            default_mode: if config.auto_rem {
                ConversionMode::Rem
            } else {
                ConversionMode::Px
            },
        }
    }

    /// Convert `declarations` in place.
    ///
    /// Returns the hairline declarations derived from the original values, in
    /// declaration order. Always empty when `hairlines` is false.
    pub(crate) fn transform(
        &self,
        declarations: &mut Vec<DeclarationNode>,
        hairlines: bool,
    ) -> Vec<DeclarationNode> {
        let mut hairline_declarations = vec![];

        for entry in pair_directives(std::mem::take(declarations)) {
            let (mut decl, directive) = match entry {
                Entry::Keep(node) => {
                    declarations.push(node);
                    continue;
                }
                Entry::Convert(decl, directive) => (decl, directive),
            };

            if hairlines && self.converter.needs_hairline(&decl.value) {
                let value = self.converter.convert_value(&decl.value, ConversionMode::Px, true);
                hairline_declarations.push(DeclarationNode::Declaration(Declaration::new(
                    decl.property.clone(),
                    value,
                )));
            }

            match self.resolve(directive) {
                Some(mode) => {
                    let value = self.converter.convert_value(&decl.value, mode, false);
                    tracing::trace!("{}: {} -> {}", decl.property, decl.value, value);
                    decl.value = value;
                }
                None => tracing::debug!("Leaving '{}: {}' unconverted", decl.property, decl.value),
            }
            declarations.push(DeclarationNode::Declaration(decl));
        }

        hairline_declarations
    }

    /// Mode for a declaration; `None` when it must stay unconverted.
    fn resolve(&self, directive: Option<Directive>) -> Option<ConversionMode> {
        match directive {
            Some(directive) => directive.mode(),
            None => Some(self.default_mode),
        }
    }
}
