//! The Motion palette
//!
//! Seven families around a vibrant coral accent, a carbon near-black, and a
//! warm cream range (papaya / floral / ivory / beige) for surfaces. Base
//! shades per family: coral 500, black 900, teal 900, papaya 300, floral
//! 300, ivory 300.

use crate::palette::Palette;

/// Token paths of the base swatch per family, in display order. Used by
/// documentation tooling for the condensed palette view.
pub const BASE_SWATCHES: &[&str] = &[
    "coral.500",
    "black.900",
    "teal.900",
    "papaya.300",
    "floral.300",
];

/// Build the Motion color palette.
///
/// Family insertion order is the display order. Shade keys run `050` (the
/// lightest) through `950` (the darkest); `white` carries a single shade.
pub fn motion_palette() -> Palette {
    Palette::new()
        .with_family("white", [("050", "hsl(0, 0%, 100%)")])
        .with_family(
            "coral",
            [
                ("050", "hsl(6, 100%, 97%)"),
                ("100", "hsl(6, 100%, 93%)"),
                ("200", "hsl(6, 100%, 88%)"),
                ("300", "hsl(6, 100%, 82%)"),
                ("400", "hsl(6, 100%, 75%)"),
                ("500", "hsl(6, 100%, 67%)"),
                ("600", "hsl(6, 100%, 57%)"),
                ("700", "hsl(6, 100%, 47%)"),
                ("800", "hsl(6, 100%, 33%)"),
                ("900", "hsl(6, 100%, 20%)"),
                ("950", "hsl(6, 100%, 13%)"),
            ],
        )
        .with_family(
            "black",
            [
                ("050", "hsl(0, 0%, 92%)"),
                ("100", "hsl(0, 0%, 85%)"),
                ("200", "hsl(0, 0%, 75%)"),
                ("300", "hsl(0, 0%, 65%)"),
                ("400", "hsl(0, 0%, 55%)"),
                ("500", "hsl(0, 0%, 45%)"),
                ("600", "hsl(0, 0%, 36%)"),
                ("700", "hsl(0, 0%, 27%)"),
                ("800", "hsl(0, 0%, 18%)"),
                ("900", "hsl(0, 0%, 9%)"),
                ("950", "hsl(0, 0%, 3%)"),
            ],
        )
        .with_family(
            "teal",
            [
                ("050", "hsl(179, 100%, 97%)"),
                ("100", "hsl(179, 95%, 93%)"),
                ("200", "hsl(179, 90%, 88%)"),
                ("300", "hsl(179, 85%, 82%)"),
                ("400", "hsl(179, 80%, 75%)"),
                ("500", "hsl(179, 75%, 67%)"),
                ("600", "hsl(179, 65%, 55%)"),
                ("700", "hsl(179, 55%, 43%)"),
                ("800", "hsl(179, 45%, 31%)"),
                ("900", "hsl(179, 35%, 16%)"),
                ("950", "hsl(179, 25%, 10%)"),
            ],
        )
        .with_family(
            "beige",
            [
                ("050", "hsl(50, 15%, 96%)"),
                ("100", "hsl(50, 15%, 91%)"),
                ("200", "hsl(50, 15%, 85%)"),
                ("300", "hsl(50, 15%, 78%)"),
                ("400", "hsl(50, 15%, 70%)"),
                ("500", "hsl(50, 15%, 60%)"),
                ("600", "hsl(50, 15%, 54%)"),
                ("700", "hsl(50, 15%, 48%)"),
                ("800", "hsl(50, 15%, 36%)"),
                ("900", "hsl(50, 15%, 24%)"),
                ("950", "hsl(50, 15%, 12%)"),
            ],
        )
        .with_family(
            "papaya",
            [
                ("050", "hsl(38, 100%, 98%)"),
                ("100", "hsl(38, 90%, 96%)"),
                ("200", "hsl(38, 80%, 93%)"),
                ("300", "hsl(38, 75%, 91%)"),
                ("400", "hsl(38, 70%, 85%)"),
                ("500", "hsl(38, 65%, 80%)"),
                ("600", "hsl(38, 60%, 75%)"),
                ("700", "hsl(38, 45%, 65%)"),
                ("800", "hsl(38, 40%, 52%)"),
                ("900", "hsl(38, 35%, 45%)"),
                ("950", "hsl(38, 25%, 30%)"),
            ],
        )
        .with_family(
            "floral",
            [
                ("050", "hsl(54, 100%, 99.7%)"),
                ("100", "hsl(54, 100%, 99%)"),
                ("200", "hsl(54, 100%, 98.5%)"),
                ("300", "hsl(54, 100%, 97%)"),
                ("400", "hsl(54, 100%, 95%)"),
                ("500", "hsl(54, 100%, 90%)"),
                ("600", "hsl(54, 100%, 85%)"),
                ("700", "hsl(54, 100%, 75%)"),
                ("800", "hsl(54, 100%, 65%)"),
                ("900", "hsl(54, 100%, 50%)"),
                ("950", "hsl(54, 100%, 35%)"),
            ],
        )
        .with_family(
            "ivory",
            [
                ("050", "hsl(52, 44%, 98%)"),
                ("100", "hsl(52, 44%, 96%)"),
                ("200", "hsl(52, 44%, 94%)"),
                ("300", "hsl(52, 44%, 93%)"),
                ("400", "hsl(52, 44%, 88%)"),
                ("500", "hsl(52, 44%, 82%)"),
                ("600", "hsl(52, 40%, 75%)"),
                ("700", "hsl(52, 35%, 65%)"),
                ("800", "hsl(52, 30%, 50%)"),
                ("900", "hsl(52, 25%, 35%)"),
                ("950", "hsl(52, 20%, 25%)"),
            ],
        )
}
