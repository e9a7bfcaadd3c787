//! The adaptive transform: px conversion and hairline synthesis.

mod convert;
mod declarations;
mod length;
mod walker;

pub use convert::{ConversionMode, Converter, Directive, round_to};
pub use length::{has_px_length, px_lengths, replace_px_lengths};

use crate::config::AdaptiveConfig;
use crate::parser::parse_stylesheet;
use crate::tree::Stylesheet;
use crate::Result;

use walker::RuleWalker;

/// Stylesheet transform bound to one configuration.
///
/// The configuration is fixed at construction; a single `Adaptive` can be
/// shared across threads and reused for any number of stylesheets.
///
/// # Example
///
/// ```
/// use adaptive_css::{Adaptive, AdaptiveConfig};
///
/// let adaptive = Adaptive::new(AdaptiveConfig::default().base_dpr(3.0)).unwrap();
/// let css = adaptive.parse(".a { border: 1px solid #ccc; }").unwrap();
/// assert_eq!(
///     css,
///     ".a {\n  border: 1px solid #ccc;\n}\n\n.hairlines .a {\n  border: 0.5px solid #ccc;\n}"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Adaptive {
    config: AdaptiveConfig,
}

impl Adaptive {
    /// Create a transform, rejecting out-of-range options.
    pub fn new(config: AdaptiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    /// Parse CSS text, transform it, and serialize the result.
    ///
    /// Output is minified when the configuration asks for it.
    pub fn parse(&self, css: &str) -> Result<String> {
        let mut sheet = parse_stylesheet(css)?;
        self.transform(&mut sheet);
        Ok(sheet.to_css(self.config.minify))
    }

    /// Transform an already parsed stylesheet.
    pub fn transform(&self, sheet: &mut Stylesheet) {
        let walker = RuleWalker::new(&self.config);
        sheet.rules = walker.process_rules(std::mem::take(&mut sheet.rules), true);
    }
}
