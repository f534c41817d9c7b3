//! Built-in palettes

mod motion;

pub use motion::{motion_palette, BASE_SWATCHES};
