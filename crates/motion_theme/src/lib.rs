//! Motion Design Tokens
//!
//! The color core of the Motion design system: the palette token table, the
//! `hsl(h, s%, l%)` literal grammar, deterministic HSL→hex conversion, and
//! semantic color / radius tokens.
//!
//! # Overview
//!
//! - **Palette**: ordered families of shade scales (`050`..`950`), each shade
//!   an HSL literal. Lookup is by dotted path (`"coral.500"`) and a miss is
//!   always a typed error, never a placeholder color.
//! - **Conversion**: pure HSL→RGB→hex; same input, same `#rrggbb`, on every
//!   platform.
//! - **Tokens**: semantic color tokens mapping roles to palette paths, and
//!   the border radius scale.
//! - **State**: a process-wide immutable [`ThemeState`] built once at
//!   startup; semantic tokens are resolved eagerly so authoring mistakes
//!   fail fast.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use motion_theme::{ColorToken, ThemeState};
//!
//! // Initialize theme at app startup
//! ThemeState::init_default()?;
//!
//! // Access tokens in styling code
//! let theme = ThemeState::get();
//! let accent = theme.color(ColorToken::ObjectAccent); // "#ff6857"
//! let literal = theme.palette().resolve("coral.500")?; // "hsl(6, 100%, 67%)"
//! ```
//!
//! Ad-hoc conversion without the global state:
//!
//! ```rust,ignore
//! use motion_theme::hsl_to_hex;
//!
//! assert_eq!(hsl_to_hex("hsl(0, 0%, 100%)")?, "#ffffff");
//! ```

pub mod error;
pub mod hsl;
pub mod palette;
pub mod palettes;
pub mod state;
pub mod tokens;

// Re-export commonly used types
pub use error::{HslParseError, ThemeError, TokenLookupError};
pub use hsl::{hsl_to_hex, Hsl, Rgb};
pub use palette::{Palette, ShadeScale, TokenPath};
pub use palettes::{motion_palette, BASE_SWATCHES};
pub use state::ThemeState;
pub use tokens::*;
