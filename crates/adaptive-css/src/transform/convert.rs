//! Unit conversion arithmetic.

use crate::config::AdaptiveConfig;
use crate::Result;

use super::length::{px_lengths, replace_px_lengths};

/// Target unit for a converted pixel length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// Root-relative `rem`, scaled by the configured rem unit.
    Rem,
    /// Plain `px`, scaled by the base device pixel ratio.
    Px,
}

impl ConversionMode {
    /// Unit suffix written after converted values.
    pub fn unit(self) -> &'static str {
        match self {
            ConversionMode::Rem => "rem",
            ConversionMode::Px => "px",
        }
    }
}

/// Per-declaration override carried by a trailing comment.
///
/// ```css
/// .a {
///   height: 64px; /* rem */
///   width: 1px;   /* no */
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Convert to `rem`.
    Rem,
    /// Convert to plain `px`.
    Px,
    /// Leave the value unconverted.
    No,
}

impl Directive {
    /// Recognize a directive from comment text.
    ///
    /// Surrounding whitespace is ignored; anything else must match exactly.
    pub fn from_comment(text: &str) -> Option<Self> {
        match text.trim() {
            "rem" => Some(Directive::Rem),
            "px" => Some(Directive::Px),
            "no" => Some(Directive::No),
            _ => None,
        }
    }

    /// Conversion mode requested by this directive, `None` for [`Directive::No`].
    pub fn mode(self) -> Option<ConversionMode> {
        match self {
            Directive::Rem => Some(ConversionMode::Rem),
            Directive::Px => Some(ConversionMode::Px),
            Directive::No => None,
        }
    }
}

/// Conversion arithmetic bound to one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    base_dpr: f64,
    rem_unit: f64,
    precision: u32,
}

impl Converter {
    /// Create a converter from a configuration, rejecting out-of-range
    /// options.
    pub fn new(config: &AdaptiveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Create a converter from a configuration that already passed
    /// [`AdaptiveConfig::validate`].
    pub(crate) fn from_validated(config: &AdaptiveConfig) -> Self {
        Self {
            base_dpr: config.base_dpr,
            rem_unit: config.rem_unit,
            precision: config.rem_precision,
        }
    }

    /// Convert a single pixel magnitude.
    ///
    /// - `0` stays `0`, without a unit.
    /// - `Rem` applies only when the length covers more than half a device
    ///   pixel; shorter lengths fall through to the `px` rules.
    /// - Lengths under one device pixel keep their authored size, except for
    ///   hairlines.
    /// - Everything else is divided by the device pixel ratio, with a floor
    ///   of `0.5px`.
    pub fn convert_length(&self, px: f64, mode: ConversionMode, hairline: bool) -> String {
        if px == 0.0 {
            return "0".to_string();
        }

        let ratio = px / self.base_dpr;
        if mode == ConversionMode::Rem && ratio > 0.5 {
            self.format(px / self.rem_unit, ConversionMode::Rem)
        } else if !hairline && ratio < 1.0 {
            self.format(px, ConversionMode::Px)
        } else {
            self.format(if ratio > 0.5 { ratio } else { 0.5 }, ConversionMode::Px)
        }
    }

    /// Convert every pixel length in a declaration value.
    pub fn convert_value(&self, value: &str, mode: ConversionMode, hairline: bool) -> String {
        replace_px_lengths(value, |px| self.convert_length(px, mode, hairline))
    }

    /// Check whether a value draws something thinner than one device pixel.
    pub fn needs_hairline(&self, value: &str) -> bool {
        px_lengths(value).into_iter().any(|px| {
            let ratio = px / self.base_dpr;
            ratio > 0.0 && ratio < 1.0
        })
    }

    fn format(&self, value: f64, mode: ConversionMode) -> String {
        let rounded = round_to(value, self.precision);
        if rounded == 0.0 {
            "0".to_string()
        } else {
            format!("{rounded}{}", mode.unit())
        }
    }
}

/// Round half away from zero to `precision` decimal digits.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let rounded = (value * factor).round() / factor;
    if rounded.is_finite() { rounded } else { value }
}
