//! Font face catalog and `@font-face` CSS generation

use serde::{Deserialize, Serialize};

use crate::weight::FontWeight;
use crate::GILROY;

/// Font style variants
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    /// CSS `font-style` value.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }

    /// Suffix appended to the weight name in font file names.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Italic => "Italic",
        }
    }

    pub fn all() -> &'static [FontStyle] {
        const STYLES: [FontStyle; 2] = [FontStyle::Normal, FontStyle::Italic];
        &STYLES
    }
}

/// Asset file name for one weight/style cut, e.g. `Gilroy-SemiBoldItalic.ttf`.
fn file_name(weight: FontWeight, style: FontStyle) -> String {
    format!("{GILROY}-{}{}.ttf", weight.name(), style.file_suffix())
}

/// All 18 Gilroy asset file names, normal cut before italic per weight.
///
/// Mirrors the shipped font directory; the host application maps these to
/// its own asset loading.
pub fn font_file_names() -> Vec<String> {
    FontWeight::all()
        .iter()
        .flat_map(|&weight| {
            FontStyle::all()
                .iter()
                .map(move |&style| file_name(weight, style))
        })
        .collect()
}

/// Generate `@font-face` CSS declarations for web export.
///
/// One block per weight/style pair, `format('truetype')` sources under
/// `base_path`, `font-display: swap` throughout.
pub fn font_face_css(family: &str, base_path: &str) -> String {
    let mut blocks = Vec::with_capacity(FontWeight::all().len() * 2);

    for &weight in FontWeight::all() {
        for &style in FontStyle::all() {
            blocks.push(format!(
                "@font-face {{\n  \
                 font-family: '{family}';\n  \
                 src: url('{base_path}/{file}') format('truetype');\n  \
                 font-weight: {value};\n  \
                 font-style: {css_style};\n  \
                 font-display: swap;\n\
                 }}",
                file = file_name(weight, style),
                value = weight.value(),
                css_style = style.css_value(),
            ));
        }
    }

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_lists_every_cut_once() {
        let names = font_file_names();
        assert_eq!(names.len(), 18);
        assert!(names.contains(&"Gilroy-Regular.ttf".to_string()));
        assert!(names.contains(&"Gilroy-SemiBoldItalic.ttf".to_string()));

        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn css_covers_every_cut() {
        let css = font_face_css(GILROY, "/fonts/Gilroy");
        assert_eq!(css.matches("@font-face").count(), 18);
        assert_eq!(css.matches("font-display: swap;").count(), 18);
        assert_eq!(css.matches("font-style: italic;").count(), 9);
    }

    #[test]
    fn css_block_shape_matches_the_web_export() {
        let css = font_face_css(GILROY, "/fonts/Gilroy");
        let expected = "@font-face {\n  \
             font-family: 'Gilroy';\n  \
             src: url('/fonts/Gilroy/Gilroy-UltraLight.ttf') format('truetype');\n  \
             font-weight: 100;\n  \
             font-style: normal;\n  \
             font-display: swap;\n}";
        assert_eq!(&css[..expected.len()], expected);
    }

    #[test]
    fn base_path_is_not_hardcoded() {
        let css = font_face_css(GILROY, "/assets/type");
        assert!(css.contains("url('/assets/type/Gilroy-Bold.ttf')"));
        assert!(!css.contains("/fonts/Gilroy/"));
    }
}
