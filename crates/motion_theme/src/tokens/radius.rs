//! Border radius tokens

use serde::{Deserialize, Serialize};

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum RadiusToken {
    /// Badges and tags
    Xs,
    /// Small UI elements
    Sm,
    /// Buttons and input fields
    Md,
    /// Cards and containers
    Lg,
    /// Prominent cards
    Xl,
    /// Main content areas
    Xxl,
    /// Screen containers
    Xxxl,
    /// Circular elements
    Full,
}

/// Complete set of radius tokens
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
    pub full: f32,
}

impl RadiusTokens {
    /// Get a radius value by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Xs => self.xs,
            RadiusToken::Sm => self.sm,
            RadiusToken::Md => self.md,
            RadiusToken::Lg => self.lg,
            RadiusToken::Xl => self.xl,
            RadiusToken::Xxl => self.xxl,
            RadiusToken::Xxxl => self.xxxl,
            RadiusToken::Full => self.full,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 24.0,
            xxl: 32.0,
            xxxl: 40.0,
            full: 9999.0,
        }
    }
}
