use motion_theme::{
    motion_palette, ColorToken, ColorTokens, RadiusToken, RadiusTokens, ThemeState,
};

#[test]
fn default_state_resolves_semantic_tokens() {
    let theme = ThemeState::init_default().expect("default tokens must resolve");

    assert_eq!(theme.color_path(ColorToken::ObjectAccent), "coral.500");
    assert_eq!(theme.color(ColorToken::ObjectAccent), "#ff6857");
    assert_eq!(theme.color(ColorToken::LayerPrimarySurface), "#fffbf5");

    assert_eq!(theme.radius(RadiusToken::Md), 12.0);
    assert_eq!(theme.radius(RadiusToken::Full), 9999.0);

    assert!(ThemeState::try_get().is_some());
}

#[test]
fn css_variable_map_covers_every_token() {
    let theme = ThemeState::init_default().expect("default tokens must resolve");
    let vars = theme.to_css_variable_map();

    assert_eq!(vars.len(), ColorToken::all().len());
    for &token in ColorToken::all() {
        let value = &vars[token.css_name()];
        assert!(
            value.starts_with('#') && value.len() == 7,
            "token {token:?} -> {value:?}"
        );
    }
    assert_eq!(vars["object-accent"], "#ff6857");
}

#[test]
fn init_rejects_unresolvable_semantic_mappings() {
    let colors = ColorTokens {
        object_accent: "nonexistent.500".into(),
        ..ColorTokens::default()
    };
    let result = ThemeState::init(motion_palette(), colors, RadiusTokens::default());
    assert!(result.is_err(), "authoring mistakes must fail init");
}

#[test]
fn ad_hoc_paths_resolve_through_the_state() {
    let theme = ThemeState::init_default().expect("default tokens must resolve");
    assert_eq!(theme.resolve_hex("white.050").unwrap(), "#ffffff");
    assert!(theme.resolve_hex("white.900").is_err());
}
