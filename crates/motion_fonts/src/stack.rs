//! Platform font stacks
//!
//! The brand sans is Gilroy everywhere; serif, rounded and mono fall back to
//! what each platform actually ships. iOS resolves its system designs by
//! name, web gets full fallback chains, Android keeps the generic aliases.

use serde::{Deserialize, Serialize};

use crate::GILROY;

/// Target platform for font stack selection.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Platform {
    Ios,
    Android,
    Web,
}

/// The four font roles used across the app's styles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStack {
    pub sans: String,
    pub serif: String,
    pub rounded: String,
    pub mono: String,
}

impl FontStack {
    /// Font stacks for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self {
                sans: GILROY.to_string(),
                // UIFontDescriptorSystemDesign names
                serif: "ui-serif".to_string(),
                rounded: "ui-rounded".to_string(),
                mono: "ui-monospace".to_string(),
            },
            Platform::Android => Self {
                sans: GILROY.to_string(),
                serif: "serif".to_string(),
                rounded: "normal".to_string(),
                mono: "monospace".to_string(),
            },
            Platform::Web => Self {
                sans: format!(
                    "'{GILROY}', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', \
                     Roboto, Helvetica, Arial, sans-serif"
                ),
                serif: "Georgia, 'Times New Roman', serif".to_string(),
                rounded: "'SF Pro Rounded', 'Hiragino Maru Gothic ProN', Meiryo, 'MS PGothic', \
                          sans-serif"
                    .to_string(),
                mono: "SFMono-Regular, Menlo, Monaco, Consolas, 'Liberation Mono', \
                       'Courier New', monospace"
                    .to_string(),
            },
        }
    }
}
