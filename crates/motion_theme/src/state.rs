//! Global theme state singleton
//!
//! The token table is process-wide immutable configuration: it is built once
//! at startup and only ever read afterwards. `ThemeState` therefore has no
//! override or mutation API; every accessor takes `&self` on a value that
//! never changes, so reads need no locking and are safe from any thread.
//!
//! Every semantic color token is resolved to hex during `init`. A token path
//! pointing at a family or shade that does not exist is a design-system
//! authoring mistake and fails startup with a [`ThemeError`] instead of
//! surfacing later as a wrong color.

use std::collections::HashMap;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::error::ThemeError;
use crate::palette::Palette;
use crate::palettes::motion_palette;
use crate::tokens::{ColorToken, ColorTokens, RadiusToken, RadiusTokens};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Immutable theme state - accessed directly by styling code
pub struct ThemeState {
    /// The color token table
    palette: Palette,

    /// Semantic color tokens, as palette paths
    colors: ColorTokens,

    /// Radius tokens
    radii: RadiusTokens,

    /// Hex value per semantic token, resolved once at init
    resolved: FxHashMap<ColorToken, String>,
}

impl ThemeState {
    /// Initialize the global theme state (call once at app startup).
    ///
    /// Resolves every semantic token against the palette; an unresolvable
    /// mapping aborts initialization. A second call is a no-op for the
    /// global slot but still validates its inputs.
    pub fn init(
        palette: Palette,
        colors: ColorTokens,
        radii: RadiusTokens,
    ) -> Result<&'static ThemeState, ThemeError> {
        let mut resolved = FxHashMap::default();
        for &token in ColorToken::all() {
            let path = colors.get(token);
            let hex = palette.resolve_hex(path)?;
            resolved.insert(token, hex);
        }

        tracing::debug!(
            families = palette.family_count(),
            tokens = resolved.len(),
            "ThemeState::init - palette resolved"
        );

        let state = ThemeState {
            palette,
            colors,
            radii,
            resolved,
        };

        let _ = THEME_STATE.set(state);
        Ok(Self::get())
    }

    /// Initialize with the Motion palette and default token sets.
    pub fn init_default() -> Result<&'static ThemeState, ThemeError> {
        Self::init(
            motion_palette(),
            ColorTokens::default(),
            RadiusTokens::default(),
        )
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Palette Access ==========

    /// The underlying color token table
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Resolve an arbitrary `family.shade` path to hex
    pub fn resolve_hex(&self, path: &str) -> Result<String, ThemeError> {
        self.palette.resolve_hex(path)
    }

    // ========== Color Access ==========

    /// Get a semantic token's hex value
    pub fn color(&self, token: ColorToken) -> &str {
        // Every token was resolved during init.
        self.resolved[&token].as_str()
    }

    /// Get a semantic token's palette path
    pub fn color_path(&self, token: ColorToken) -> &str {
        self.colors.get(token)
    }

    /// Get all semantic color tokens
    pub fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    // ========== Radius Access ==========

    /// Get a radius token value
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii.get(token)
    }

    /// Get all radius tokens
    pub fn radii(&self) -> &RadiusTokens {
        &self.radii
    }

    // ========== CSS Variable Generation ==========

    /// Generate a CSS variable map from all semantic color tokens.
    ///
    /// Returns a `HashMap<String, String>` where keys are variable names
    /// (without `--` prefix) and values are hex color strings.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let vars = ThemeState::get().to_css_variable_map();
    /// // vars["object-accent"] == "#ff6857"
    /// ```
    pub fn to_css_variable_map(&self) -> HashMap<String, String> {
        ColorToken::all()
            .iter()
            .map(|&token| (token.css_name().to_string(), self.color(token).to_string()))
            .collect()
    }
}
