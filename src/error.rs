use crate::dictionary::DictKind;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building dictionaries or starting a parse.
///
/// None of these can occur in the middle of matching: a dictionary is either
/// built completely or not at all, and a parse either runs to completion or is
/// refused up front.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The same (lower-cased) alias was registered twice in one dictionary.
    #[error("repeated {dict} alias: {alias:?}")]
    DuplicateAlias {
        /// Dictionary the alias was registered into.
        dict: DictKind,
        /// The lower-cased alias.
        alias: String,
    },

    /// An alias with no characters was registered.
    #[error("empty alias registered for label {label:?}")]
    EmptyAlias { label: String },

    /// `parse` was called with an empty string.
    #[error("cannot parse empty input")]
    EmptyInput,
}
