//! Named gradient presets drawn from the Motion palette
//!
//! Presets carry token paths, not literal colors, so they pick up whatever
//! palette they are built against. Resolution failures propagate; a preset
//! pointing at a missing shade is an authoring error, not a black box.

use motion_theme::{Palette, ThemeError};

use crate::{Direction, GrainyGradient};

/// Built-in grainy gradient catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradientPreset {
    /// Coral into warm papaya, diagonal.
    CoralSunset,
    /// Light-to-mid carbon grays, vertical.
    DarkNight,
    /// Khaki beige range, horizontal.
    WarmEarth,
    /// Light coral into deep coral, vertical.
    CoralFade,
    /// Papaya into floral white, diagonal.
    LightGlow,
    /// Near-white into mid gray, diagonal.
    Midnight,
    /// Coral into beige, diagonal.
    CoralBeige,
}

impl GradientPreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::CoralSunset => "coral-sunset",
            Self::DarkNight => "dark-night",
            Self::WarmEarth => "warm-earth",
            Self::CoralFade => "coral-fade",
            Self::LightGlow => "light-glow",
            Self::Midnight => "midnight",
            Self::CoralBeige => "coral-beige",
        }
    }

    /// Token paths of the gradient stops, `(start, end)`.
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            Self::CoralSunset => ("coral.500", "papaya.500"),
            Self::DarkNight => ("black.100", "black.500"),
            Self::WarmEarth => ("beige.300", "beige.600"),
            Self::CoralFade => ("coral.300", "coral.700"),
            Self::LightGlow => ("papaya.400", "floral.500"),
            Self::Midnight => ("black.050", "black.400"),
            Self::CoralBeige => ("coral.400", "beige.500"),
        }
    }

    /// Gradient axis.
    pub fn direction(self) -> Direction {
        match self {
            Self::DarkNight | Self::CoralFade => Direction::Vertical,
            Self::WarmEarth => Direction::Horizontal,
            _ => Direction::Diagonal,
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [GradientPreset] {
        const PRESETS: [GradientPreset; 7] = [
            GradientPreset::CoralSunset,
            GradientPreset::DarkNight,
            GradientPreset::WarmEarth,
            GradientPreset::CoralFade,
            GradientPreset::LightGlow,
            GradientPreset::Midnight,
            GradientPreset::CoralBeige,
        ];
        &PRESETS
    }

    /// Build the gradient against a palette.
    pub fn build(self, palette: &Palette) -> Result<GrainyGradient, ThemeError> {
        let (start, end) = self.stops();
        Ok(
            GrainyGradient::new(palette.resolve(start)?, palette.resolve(end)?)
                .with_direction(self.direction()),
        )
    }
}

/// The primary layer background: a 165° papaya gradient with offset stops.
pub fn layer_background(palette: &Palette) -> Result<String, ThemeError> {
    Ok(format!(
        "linear-gradient(165deg, {} 17.06%, {} 76.43%)",
        palette.resolve("papaya.500")?,
        palette.resolve("papaya.300")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use motion_theme::motion_palette;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_preset_builds_against_the_motion_palette() {
        let palette = motion_palette();
        for &preset in GradientPreset::all() {
            let gradient = preset.build(&palette);
            assert!(gradient.is_ok(), "preset {preset:?}");
        }
    }

    #[test]
    fn coral_sunset_carries_the_accent_stops() {
        let palette = motion_palette();
        let gradient = GradientPreset::CoralSunset.build(&palette).unwrap();
        assert_eq!(gradient.color_start, "hsl(6, 100%, 67%)");
        assert_eq!(gradient.color_end, "hsl(38, 65%, 80%)");
        assert_eq!(gradient.direction, Direction::Diagonal);
    }

    #[test]
    fn preset_ids_are_unique() {
        let mut ids: Vec<&str> = GradientPreset::all().iter().map(|p| p.id()).collect();
        ids.sort_unstable();
        let len = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }

    #[test]
    fn presets_fail_against_a_palette_missing_their_stops() {
        let palette = Palette::new().with_family("coral", [("500", "hsl(6, 100%, 67%)")]);
        assert!(GradientPreset::DarkNight.build(&palette).is_err());
    }

    #[test]
    fn layer_background_resolves_both_stops() {
        let css = layer_background(&motion_palette()).unwrap();
        assert_eq!(
            css,
            "linear-gradient(165deg, hsl(38, 65%, 80%) 17.06%, hsl(38, 75%, 91%) 76.43%)"
        );
    }
}
