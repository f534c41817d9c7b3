use motion_theme::{motion_palette, Hsl, TokenLookupError, BASE_SWATCHES};
use pretty_assertions::assert_eq;

#[test]
fn palette_contains_expected_families_in_order() {
    let palette = motion_palette();
    let names: Vec<&str> = palette.family_names().collect();
    assert_eq!(
        names,
        vec!["white", "coral", "black", "teal", "beige", "papaya", "floral", "ivory"]
    );
}

#[test]
fn full_scale_families_carry_eleven_shades() {
    let palette = motion_palette();
    for family in palette.family_names() {
        let expected = if family == "white" { 1 } else { 11 };
        assert_eq!(
            palette.family(family).unwrap().len(),
            expected,
            "family {family:?}"
        );
    }
    assert_eq!(palette.iter().count(), 78);
}

#[test]
fn resolves_known_literals() {
    let palette = motion_palette();
    assert_eq!(palette.resolve("coral.500").unwrap(), "hsl(6, 100%, 67%)");
    assert_eq!(palette.resolve("black.900").unwrap(), "hsl(0, 0%, 9%)");
    assert_eq!(
        palette.resolve("floral.050").unwrap(),
        "hsl(54, 100%, 99.7%)"
    );
}

#[test]
fn resolves_known_hex_values() {
    let palette = motion_palette();
    for (path, hex) in [
        ("white.050", "#ffffff"),
        ("coral.500", "#ff6857"),
        ("black.900", "#171717"),
        ("ivory.300", "#f5f3e5"),
        ("teal.500", "#6ceae8"),
    ] {
        assert_eq!(palette.resolve_hex(path).unwrap(), hex, "path {path:?}");
    }
}

#[test]
fn every_entry_converts_to_seven_char_hex() {
    let palette = motion_palette();
    for (family, shade, literal) in palette.iter() {
        let hex = palette.resolve_hex(&format!("{family}.{shade}")).unwrap();
        assert_eq!(hex.len(), 7, "{family}.{shade} = {literal}");
        assert!(hex.starts_with('#'));
        assert!(hex[1..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}

#[test]
fn shades_get_darker_down_every_scale() {
    let palette = motion_palette();
    for family in palette.family_names() {
        let lightness: Vec<f64> = palette
            .iter_sorted()
            .filter(|(f, _, _)| *f == family)
            .map(|(_, _, literal)| Hsl::parse(literal).unwrap().l)
            .collect();
        assert!(
            lightness.windows(2).all(|w| w[0] > w[1]),
            "family {family:?} lightness should strictly decrease: {lightness:?}"
        );
    }
}

#[test]
fn achromatic_black_scale_darkens_in_hex_too() {
    let palette = motion_palette();
    let channels: Vec<u8> = palette
        .iter_sorted()
        .filter(|(family, _, _)| *family == "black")
        .map(|(family, shade, _)| {
            let hex = palette.resolve_hex(&format!("{family}.{shade}")).unwrap();
            u8::from_str_radix(&hex[1..3], 16).unwrap()
        })
        .collect();
    assert_eq!(channels.len(), 11);
    assert!(channels.windows(2).all(|w| w[0] > w[1]), "{channels:?}");
}

#[test]
fn sorted_iteration_ascends_within_each_family() {
    let palette = motion_palette();
    for family in palette.family_names() {
        let keys: Vec<u32> = palette
            .iter_sorted()
            .filter(|(f, _, _)| *f == family)
            .map(|(_, shade, _)| shade.parse().unwrap())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "family {family:?}");
    }
}

#[test]
fn missing_lookups_fail_explicitly() {
    let palette = motion_palette();
    assert!(matches!(
        palette.resolve("nonexistent.500"),
        Err(TokenLookupError::UnknownFamily(_))
    ));
    assert!(matches!(
        palette.resolve("coral.999"),
        Err(TokenLookupError::UnknownShade { .. })
    ));
    assert!(matches!(
        palette.resolve("coral"),
        Err(TokenLookupError::MalformedPath(_))
    ));
}

#[test]
fn serialization_preserves_family_order() {
    let json = serde_json::to_string(&motion_palette()).unwrap();
    let positions: Vec<usize> = ["\"white\"", "\"coral\"", "\"black\"", "\"teal\""]
        .iter()
        .map(|needle| json.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn base_swatches_resolve() {
    let palette = motion_palette();
    assert_eq!(BASE_SWATCHES.len(), 5);
    for path in BASE_SWATCHES {
        assert!(palette.resolve(path).is_ok(), "swatch {path:?}");
    }
}
