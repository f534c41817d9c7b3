//! Font weight tokens

use serde::{Deserialize, Serialize};

/// The Gilroy weight scale, named as in the font's own file naming.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Heavy,
}

impl FontWeight {
    /// Numeric CSS `font-weight` value.
    pub fn value(self) -> u16 {
        match self {
            Self::UltraLight => 100,
            Self::Thin => 200,
            Self::Light => 300,
            Self::Regular => 400,
            Self::Medium => 500,
            Self::SemiBold => 600,
            Self::Bold => 700,
            Self::ExtraBold => 800,
            Self::Heavy => 900,
        }
    }

    /// Name as it appears in font file names (`Gilroy-SemiBold.ttf`).
    pub fn name(self) -> &'static str {
        match self {
            Self::UltraLight => "UltraLight",
            Self::Thin => "Thin",
            Self::Light => "Light",
            Self::Regular => "Regular",
            Self::Medium => "Medium",
            Self::SemiBold => "SemiBold",
            Self::Bold => "Bold",
            Self::ExtraBold => "ExtraBold",
            Self::Heavy => "Heavy",
        }
    }

    /// Full weight scale, lightest first.
    pub fn all() -> &'static [FontWeight] {
        const WEIGHTS: [FontWeight; 9] = [
            FontWeight::UltraLight,
            FontWeight::Thin,
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::SemiBold,
            FontWeight::Bold,
            FontWeight::ExtraBold,
            FontWeight::Heavy,
        ];
        &WEIGHTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_runs_from_100_to_900() {
        let values: Vec<u16> = FontWeight::all().iter().map(|w| w.value()).collect();
        assert_eq!(values, vec![100, 200, 300, 400, 500, 600, 700, 800, 900]);
    }
}
