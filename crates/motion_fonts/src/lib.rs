//! Motion Font Tokens
//!
//! Typography metadata for the Motion design system: the Gilroy family
//! catalog (weights, styles, asset file names), `@font-face` CSS generation
//! for web export, and per-platform font stacks.
//!
//! This crate produces names and CSS strings only. Loading or bundling the
//! actual font assets is the host application's job.
//!
//! ```rust,ignore
//! use motion_fonts::{font_face_css, FontStack, Platform, GILROY};
//!
//! let css = font_face_css(GILROY, "/fonts/Gilroy");
//! let stack = FontStack::for_platform(Platform::Web);
//! assert!(stack.sans.starts_with("'Gilroy'"));
//! ```

mod face;
mod stack;
mod weight;

pub use face::{font_face_css, font_file_names, FontStyle};
pub use stack::{FontStack, Platform};
pub use weight::FontWeight;

/// The Motion brand font family name.
pub const GILROY: &str = "Gilroy";
