//! Motion Grainy Gradients
//!
//! Pure string composition for the grainy-gradient surfaces used across the
//! Motion design system: a fractal-noise SVG tile encoded as a data URI,
//! layered over a CSS linear gradient and blended with a contrast/brightness
//! filter. The technique layers the noise image on top of the gradient and
//! boosts contrast so the grain reads through the colors.
//!
//! Nothing here renders; callers receive CSS declaration strings and apply
//! them through whatever styling layer they use.
//!
//! ```rust,ignore
//! use motion_gradient::{Direction, GrainyGradient};
//!
//! let gradient = GrainyGradient::new("hsl(6, 100%, 67%)", "hsl(38, 65%, 80%)")
//!     .with_direction(Direction::Diagonal);
//! for (property, value) in gradient.css_declarations() {
//!     println!("{property}: {value};");
//! }
//! ```

mod presets;

pub use presets::{layer_background, GradientPreset};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Gradient axis.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Horizontal,
    #[default]
    Vertical,
    Diagonal,
}

impl Direction {
    /// CSS `linear-gradient` direction keyword.
    pub fn css_keyword(self) -> &'static str {
        match self {
            Self::Horizontal => "to right",
            Self::Vertical => "to bottom",
            Self::Diagonal => "to bottom right",
        }
    }
}

/// Noise tile edge length in CSS pixels. The SVG viewBox matches, so the
/// grain tiles seamlessly at 1:1.
const NOISE_TILE_SIZE: u32 = 200;

/// A two-stop gradient with a grain overlay.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GrainyGradient {
    /// Starting color (any CSS color literal; the palette supplies HSL).
    pub color_start: String,
    /// Ending color.
    pub color_end: String,
    /// Gradient axis.
    pub direction: Direction,
    /// Grain strength in `[0, 1]`. Feeds the contrast/brightness filter;
    /// higher values read as starker grain.
    pub noise_opacity: f64,
}

impl GrainyGradient {
    /// Build a vertical gradient with the default grain strength (0.15).
    pub fn new(color_start: impl Into<String>, color_end: impl Into<String>) -> Self {
        Self {
            color_start: color_start.into(),
            color_end: color_end.into(),
            direction: Direction::default(),
            noise_opacity: 0.15,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_noise_opacity(mut self, noise_opacity: f64) -> Self {
        self.noise_opacity = noise_opacity;
        self
    }

    /// The fractal-noise SVG tile: feTurbulence at base frequency 0.9 with
    /// four octaves and stitched tiles, desaturated to gray.
    pub fn noise_svg() -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {size} {size}\">\
             <filter id=\"noise\">\
             <feTurbulence type=\"fractalNoise\" baseFrequency=\"0.9\" numOctaves=\"4\" \
             stitchTiles=\"stitch\"/>\
             <feColorMatrix type=\"saturate\" values=\"0\"/>\
             </filter>\
             <rect width=\"100%\" height=\"100%\" filter=\"url(#noise)\" opacity=\"1\"/>\
             </svg>",
            size = NOISE_TILE_SIZE,
        )
    }

    /// The noise tile as a base64 `data:image/svg+xml` URI.
    pub fn noise_data_uri() -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(Self::noise_svg())
        )
    }

    /// Layered `background-image` value: noise first (on top), gradient
    /// second (underneath).
    pub fn background_image(&self) -> String {
        format!(
            "url(\"{uri}\"), linear-gradient({direction}, {start}, {end})",
            uri = Self::noise_data_uri(),
            direction = self.direction.css_keyword(),
            start = self.color_start,
            end = self.color_end,
        )
    }

    /// Contrast/brightness filter derived from the grain strength.
    pub fn filter(&self) -> String {
        let contrast = 100.0 + self.noise_opacity * 120.0;
        let brightness = 100.0 + self.noise_opacity * 5.0;
        format!("contrast({contrast}%) brightness({brightness}%)")
    }

    /// Full CSS declaration list for the grainy surface.
    ///
    /// The repeat and size pairs are positional: the noise tile repeats at
    /// its fixed size while the gradient stretches over the whole box.
    pub fn css_declarations(&self) -> Vec<(&'static str, String)> {
        vec![
            ("background-image", self.background_image()),
            ("background-blend-mode", "overlay".to_string()),
            ("background-repeat", "repeat, no-repeat".to_string()),
            (
                "background-size",
                format!("{size}px {size}px, 100% 100%", size = NOISE_TILE_SIZE),
            ),
            ("filter", self.filter()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn direction_keywords_match_css() {
        assert_eq!(Direction::Horizontal.css_keyword(), "to right");
        assert_eq!(Direction::Vertical.css_keyword(), "to bottom");
        assert_eq!(Direction::Diagonal.css_keyword(), "to bottom right");
    }

    #[test]
    fn noise_svg_configures_the_turbulence_filter() {
        let svg = GrainyGradient::noise_svg();
        assert!(svg.contains("type=\"fractalNoise\""));
        assert!(svg.contains("baseFrequency=\"0.9\""));
        assert!(svg.contains("numOctaves=\"4\""));
        assert!(svg.contains("stitchTiles=\"stitch\""));
        assert!(svg.contains("type=\"saturate\" values=\"0\""));
    }

    #[test]
    fn noise_data_uri_is_base64_svg() {
        let uri = GrainyGradient::noise_data_uri();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        // Encoded payload only contains base64 characters.
        let payload = &uri["data:image/svg+xml;base64,".len()..];
        assert!(payload
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')));
    }

    #[test]
    fn background_image_layers_noise_over_the_gradient() {
        let gradient = GrainyGradient::new("hsl(6, 100%, 67%)", "hsl(38, 65%, 80%)")
            .with_direction(Direction::Diagonal);
        let image = gradient.background_image();
        assert!(image.starts_with("url(\"data:image/svg+xml;base64,"));
        assert!(image.ends_with(
            "linear-gradient(to bottom right, hsl(6, 100%, 67%), hsl(38, 65%, 80%))"
        ));
    }

    #[test]
    fn filter_scales_with_noise_opacity() {
        let gradient = GrainyGradient::new("#000000", "#ffffff");
        assert_eq!(gradient.filter(), "contrast(118%) brightness(100.75%)");

        let stark = gradient.with_noise_opacity(0.5);
        assert_eq!(stark.filter(), "contrast(160%) brightness(102.5%)");
    }

    #[test]
    fn declarations_cover_the_layering_contract() {
        let declarations = GrainyGradient::new("#111111", "#222222").css_declarations();
        let properties: Vec<&str> = declarations.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            properties,
            vec![
                "background-image",
                "background-blend-mode",
                "background-repeat",
                "background-size",
                "filter",
            ]
        );
        assert_eq!(declarations[2].1, "repeat, no-repeat");
        assert_eq!(declarations[3].1, "200px 200px, 100% 100%");
    }
}
