//! Transform configuration.
//!
//! Options can be built in code with the consuming setters, or read from a
//! JSON options object whose camelCase keys are merged over the defaults:
//!
//! ```
//! use adaptive_css::AdaptiveConfig;
//!
//! let config = AdaptiveConfig::default().base_dpr(3.0).hairline_class("hairline");
//! assert_eq!(config.rem_unit, 75.0);
//!
//! let config = AdaptiveConfig::from_json(r#"{ "remUnit": 64, "autoRem": true }"#).unwrap();
//! assert_eq!(config.rem_unit, 64.0);
//! assert_eq!(config.base_dpr, 2.0);
//! ```

use serde::Deserialize;

use crate::{Error, Result};

/// Configuration for an [`Adaptive`](crate::Adaptive) transform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdaptiveConfig {
    /// Device pixel ratio the source stylesheet was authored for.
    pub base_dpr: f64,

    /// Number of pixels in one `rem`.
    pub rem_unit: f64,

    /// Decimal digits kept in converted values.
    pub rem_precision: u32,

    /// Class that scopes synthesized hairline rules.
    pub hairline_class: String,

    /// Convert to `rem` when a declaration carries no directive.
    /// If false, plain `px` conversion is the default.
    pub auto_rem: bool,

    /// Serialize the result without whitespace or comments.
    pub minify: bool,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            base_dpr: 2.0,
            rem_unit: 75.0,
            rem_precision: 6,
            hairline_class: "hairlines".to_string(),
            auto_rem: false,
            minify: false,
        }
    }
}

impl AdaptiveConfig {
    /// Create a configuration with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON options object, filling missing keys with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the base device pixel ratio.
    pub fn base_dpr(mut self, dpr: f64) -> Self {
        self.base_dpr = dpr;
        self
    }

    /// Set the pixel size of one `rem`.
    pub fn rem_unit(mut self, unit: f64) -> Self {
        self.rem_unit = unit;
        self
    }

    /// Set the number of decimal digits kept.
    pub fn rem_precision(mut self, precision: u32) -> Self {
        self.rem_precision = precision;
        self
    }

    /// Set the hairline scoping class.
    pub fn hairline_class(mut self, class: impl Into<String>) -> Self {
        self.hairline_class = class.into();
        self
    }

    /// Enable or disable `rem` as the default conversion.
    pub fn auto_rem(mut self, enabled: bool) -> Self {
        self.auto_rem = enabled;
        self
    }

    /// Enable or disable minified output.
    pub fn minify(mut self, enabled: bool) -> Self {
        self.minify = enabled;
        self
    }

    /// Check that every numeric option is in range.
    ///
    /// The hairline class is not checked; it is written into selectors as given.
    pub fn validate(&self) -> Result<()> {
        if !(self.base_dpr.is_finite() && self.base_dpr > 0.0) {
            return Err(Error::invalid_config(
                "baseDpr",
                format!("must be a finite number greater than 0, got {}", self.base_dpr),
            ));
        }
        if !(self.rem_unit.is_finite() && self.rem_unit > 0.0) {
            return Err(Error::invalid_config(
                "remUnit",
                format!("must be a finite number greater than 0, got {}", self.rem_unit),
            ));
        }
        Ok(())
    }
}
