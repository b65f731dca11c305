//! Errors reported by the engine and the palette model.

/// Everything that can go wrong in this crate. None of these are fatal;
/// all are recoverable at the call site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a 3 or 6 digit hex color.
    #[error("invalid color format: {0:?}")]
    InvalidColorFormat(String),
    /// The ids passed to a reorder are not exactly the ids in the palette.
    #[error("reorder ids do not match the palette colors")]
    InvalidReorder,
    /// A palette or palette color was given an empty name.
    #[error("name must not be empty")]
    EmptyName,
    /// Two palette colors, or two palettes, share the same id.
    #[error("duplicate id: {0}")]
    DuplicateId(String),
    /// A notation name other than `hex`, `rgb` or `hsl`.
    #[error("unknown color format: {0:?}")]
    UnknownFormat(String),
    /// A generator name that is not recognized.
    #[error("unknown generator: {0:?}")]
    UnknownGenerator(String),
    /// The configuration could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Shorthand for results with this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
