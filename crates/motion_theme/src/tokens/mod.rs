//! Design tokens
//!
//! Tokens are stable names for design values:
//! - Semantic colors (token paths into the palette)
//! - Border radii

mod color;
mod radius;

pub use color::*;
pub use radius::*;
