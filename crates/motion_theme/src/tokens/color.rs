//! Semantic color tokens
//!
//! Semantic tokens name a role (accent, positive action, warning surface)
//! rather than a literal color; each maps to a `family.shade` path into the
//! palette. The mapping is data: nothing here touches color math, and an
//! entry pointing at a missing palette key is caught when the theme state
//! resolves tokens at startup.

use serde::{Deserialize, Serialize};

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ColorToken {
    // Layers
    LayerPrimarySurface,

    // Objects
    ObjectAccent,

    ObjectPositive,
    ObjectPositiveHover,
    ObjectPositivePressed,
    ObjectPositiveDisabled,

    ObjectNegative,
    ObjectNegativeHover,
    ObjectNegativePressed,
    ObjectNegativeDisabled,

    ObjectWarn,
    ObjectWarnHover,
    ObjectWarnPressed,
    ObjectWarnDisabled,
}

impl ColorToken {
    /// Full token list, in display order.
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 14] = [
            ColorToken::LayerPrimarySurface,
            ColorToken::ObjectAccent,
            ColorToken::ObjectPositive,
            ColorToken::ObjectPositiveHover,
            ColorToken::ObjectPositivePressed,
            ColorToken::ObjectPositiveDisabled,
            ColorToken::ObjectNegative,
            ColorToken::ObjectNegativeHover,
            ColorToken::ObjectNegativePressed,
            ColorToken::ObjectNegativeDisabled,
            ColorToken::ObjectWarn,
            ColorToken::ObjectWarnHover,
            ColorToken::ObjectWarnPressed,
            ColorToken::ObjectWarnDisabled,
        ];
        &TOKENS
    }

    /// Kebab-case name used for CSS variables.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::LayerPrimarySurface => "layer-primary-surface",
            Self::ObjectAccent => "object-accent",
            Self::ObjectPositive => "object-positive",
            Self::ObjectPositiveHover => "object-positive-hover",
            Self::ObjectPositivePressed => "object-positive-pressed",
            Self::ObjectPositiveDisabled => "object-positive-disabled",
            Self::ObjectNegative => "object-negative",
            Self::ObjectNegativeHover => "object-negative-hover",
            Self::ObjectNegativePressed => "object-negative-pressed",
            Self::ObjectNegativeDisabled => "object-negative-disabled",
            Self::ObjectWarn => "object-warn",
            Self::ObjectWarnHover => "object-warn-hover",
            Self::ObjectWarnPressed => "object-warn-pressed",
            Self::ObjectWarnDisabled => "object-warn-disabled",
        }
    }
}

/// Complete set of semantic color tokens, as palette token paths
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTokens {
    // Layers
    pub layer_primary_surface: String,

    // Objects
    pub object_accent: String,

    pub object_positive: String,
    pub object_positive_hover: String,
    pub object_positive_pressed: String,
    pub object_positive_disabled: String,

    pub object_negative: String,
    pub object_negative_hover: String,
    pub object_negative_pressed: String,
    pub object_negative_disabled: String,

    pub object_warn: String,
    pub object_warn_hover: String,
    pub object_warn_pressed: String,
    pub object_warn_disabled: String,
}

impl ColorTokens {
    /// Get a token's palette path by token key
    pub fn get(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::LayerPrimarySurface => &self.layer_primary_surface,
            ColorToken::ObjectAccent => &self.object_accent,
            ColorToken::ObjectPositive => &self.object_positive,
            ColorToken::ObjectPositiveHover => &self.object_positive_hover,
            ColorToken::ObjectPositivePressed => &self.object_positive_pressed,
            ColorToken::ObjectPositiveDisabled => &self.object_positive_disabled,
            ColorToken::ObjectNegative => &self.object_negative,
            ColorToken::ObjectNegativeHover => &self.object_negative_hover,
            ColorToken::ObjectNegativePressed => &self.object_negative_pressed,
            ColorToken::ObjectNegativeDisabled => &self.object_negative_disabled,
            ColorToken::ObjectWarn => &self.object_warn,
            ColorToken::ObjectWarnHover => &self.object_warn_hover,
            ColorToken::ObjectWarnPressed => &self.object_warn_pressed,
            ColorToken::ObjectWarnDisabled => &self.object_warn_disabled,
        }
    }
}

impl Default for ColorTokens {
    /// The Motion semantic mapping: coral accent, teal positives, the
    /// darker coral range for negatives, floral for warnings.
    fn default() -> Self {
        Self {
            layer_primary_surface: "papaya.050".into(),

            object_accent: "coral.500".into(),

            object_positive: "teal.500".into(),
            object_positive_hover: "teal.700".into(),
            object_positive_pressed: "teal.300".into(),
            object_positive_disabled: "teal.100".into(),

            object_negative: "coral.700".into(),
            object_negative_hover: "coral.900".into(),
            object_negative_pressed: "coral.300".into(),
            object_negative_disabled: "coral.100".into(),

            object_warn: "floral.700".into(),
            object_warn_hover: "floral.800".into(),
            object_warn_pressed: "floral.500".into(),
            object_warn_disabled: "floral.200".into(),
        }
    }
}
