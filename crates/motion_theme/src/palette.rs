//! The color token table and its resolver
//!
//! A [`Palette`] maps family names (`"coral"`, `"teal"`, ...) to shade scales,
//! and each scale maps shade keys (`"050"`..`"950"`) to `hsl(...)` literal
//! strings. Resolution is a plain two-level lookup: there is no inheritance,
//! no fallback and no default shade, and a miss is always a typed error.
//!
//! Shade keys are opaque strings to the resolver. The conventional keys are
//! numeric and the display-ordered iterator re-sorts them by parsed value,
//! but that ordering policy belongs to callers, not to lookup.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, TokenLookupError};
use crate::hsl::Hsl;

/// One family's shade scale, in insertion order.
pub type ShadeScale = IndexMap<String, String>;

/// A dotted `family.shade` reference into the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenPath<'a> {
    pub family: &'a str,
    pub shade: &'a str,
}

impl<'a> TokenPath<'a> {
    /// Split a dotted path into its two segments.
    ///
    /// Exactly one dot with non-empty segments on both sides is required;
    /// everything else is [`TokenLookupError::MalformedPath`].
    pub fn parse(path: &'a str) -> Result<Self, TokenLookupError> {
        match path.split_once('.') {
            Some((family, shade))
                if !family.is_empty() && !shade.is_empty() && !shade.contains('.') =>
            {
                Ok(Self { family, shade })
            }
            _ => Err(TokenLookupError::MalformedPath(path.to_string())),
        }
    }
}

impl std::fmt::Display for TokenPath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.family, self.shade)
    }
}

/// An ordered table of color families and their shade scales.
///
/// Construct once (typically at startup, see [`crate::state::ThemeState`])
/// and share by reference; there is no mutation API beyond construction.
/// Serializes transparently, so a TOML document of `[family]` tables with
/// `shade = "hsl(...)"` entries deserializes directly into a palette.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    families: IndexMap<String, ShadeScale>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a family with its shade scale. Re-inserting a family name
    /// replaces the scale but keeps the family's original position.
    pub fn with_family<N, K, V>(mut self, name: N, shades: impl IntoIterator<Item = (K, V)>) -> Self
    where
        N: Into<String>,
        K: Into<String>,
        V: Into<String>,
    {
        let scale: ShadeScale = shades
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.families.insert(name.into(), scale);
        self
    }

    /// Number of families.
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Look up a family's shade scale.
    pub fn family(&self, name: &str) -> Option<&ShadeScale> {
        self.families.get(name)
    }

    /// Resolve a dotted `family.shade` path to its HSL literal.
    pub fn resolve(&self, path: &str) -> Result<&str, TokenLookupError> {
        let token = TokenPath::parse(path)?;
        let scale = self
            .families
            .get(token.family)
            .ok_or_else(|| TokenLookupError::UnknownFamily(token.family.to_string()))?;
        scale
            .get(token.shade)
            .map(String::as_str)
            .ok_or_else(|| TokenLookupError::UnknownShade {
                family: token.family.to_string(),
                shade: token.shade.to_string(),
            })
    }

    /// Resolve a path and convert its literal to `#rrggbb` hex.
    pub fn resolve_hex(&self, path: &str) -> Result<String, ThemeError> {
        let literal = self.resolve(path)?;
        Ok(Hsl::parse(literal)?.to_hex())
    }

    /// Iterate `(family, shade, literal)` triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.families.iter().flat_map(|(family, scale)| {
            scale
                .iter()
                .map(move |(shade, literal)| (family.as_str(), shade.as_str(), literal.as_str()))
        })
    }

    /// Iterate triples in display order: families in insertion order, shades
    /// within a family in ascending numeric order of their keys.
    ///
    /// Non-numeric shade keys sort after numeric ones, among themselves by
    /// string. This is the ordering documentation and swatch previews use;
    /// the resolver itself never interprets shade keys.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.families.iter().flat_map(|(family, scale)| {
            let mut shades: Vec<(&str, &str)> = scale
                .iter()
                .map(|(shade, literal)| (shade.as_str(), literal.as_str()))
                .collect();
            shades.sort_by(|(a, _), (b, _)| match (a.parse::<u32>(), b.parse::<u32>()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                (Err(_), Err(_)) => a.cmp(b),
            });
            shades
                .into_iter()
                .map(move |(shade, literal)| (family.as_str(), shade, literal))
        })
    }

    /// Family names in insertion order.
    pub fn family_names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Parse a palette from a TOML document of `[family]` tables.
    pub fn from_toml_str(document: &str) -> Result<Self, ThemeError> {
        toml::from_str(document).map_err(|e| ThemeError::Document(e.to_string()))
    }

    /// Serialize the palette to a TOML document, preserving order.
    pub fn to_toml_string(&self) -> Result<String, ThemeError> {
        toml::to_string(self).map_err(|e| ThemeError::Document(e.to_string()))
    }
}
