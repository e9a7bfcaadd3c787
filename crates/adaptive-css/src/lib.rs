//! Pixel adaptation for high-density displays.
//!
//! This crate rewrites `px` lengths in a stylesheet for a target device pixel
//! ratio and synthesizes hairline rules, featuring:
//!
//! - **Unit conversion**: `px` divided by the device pixel ratio, or `rem`
//!   scaled by a configurable rem unit
//! - **Inline directives**: a `/* rem */`, `/* px */` or `/* no */` comment
//!   right after a declaration overrides how it is converted
//! - **Hairlines**: borders thinner than one device pixel get a companion rule,
//!   scoped by a class, that draws them at one physical pixel
//! - **CSS Parsing**: a tolerant parser and serializer built on `cssparser`
//!
//! # Example
//!
//! ```
//! use adaptive_css::prelude::*;
//!
//! let adaptive = Adaptive::new(AdaptiveConfig::default().rem_unit(64.0))?;
//! let css = adaptive.parse(".a { height: 64px; /* rem */ }")?;
//! assert_eq!(css, ".a {\n  height: 1rem;\n}");
//! # Ok::<(), adaptive_css::Error>(())
//! ```

pub mod config;
pub mod parser;
pub mod transform;
pub mod tree;

mod error;

pub use config::AdaptiveConfig;
pub use error::{Error, Result};
pub use parser::parse_stylesheet;
pub use transform::Adaptive;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::AdaptiveConfig;
    pub use crate::parser::parse_stylesheet;
    pub use crate::transform::{Adaptive, ConversionMode, Converter, Directive};
    pub use crate::tree::{
        AtRule, AtRuleBody, ConditionalGroup, Declaration, DeclarationNode, KeyframesGroup, Rule,
        StyleRule, Stylesheet,
    };
}
