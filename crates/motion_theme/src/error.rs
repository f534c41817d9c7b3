use thiserror::Error;

/// A string did not match the `hsl(h, s%, l%)` literal grammar.
///
/// Parse failure is always surfaced; an unparsable literal is never folded
/// into `#000000`, so callers can tell "malformed entry" apart from a real
/// black.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed hsl literal {literal:?}")]
pub struct HslParseError {
    /// The rejected input, for error reports pointing at the token table.
    pub literal: String,
}

/// A dotted token path failed to resolve against the palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenLookupError {
    #[error("token path {0:?} is not of the form \"family.shade\"")]
    MalformedPath(String),

    #[error("unknown color family {0:?}")]
    UnknownFamily(String),

    #[error("family {family:?} has no shade {shade:?}")]
    UnknownShade { family: String, shade: String },
}

/// Any failure produced by the theme crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Parse(#[from] HslParseError),

    #[error(transparent)]
    Lookup(#[from] TokenLookupError),

    #[error("palette document error: {0}")]
    Document(String),
}
