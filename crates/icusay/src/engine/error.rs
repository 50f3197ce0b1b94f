//! Error type for looking up and interpolating translations.

use thiserror::Error;

use crate::format::{CompileError, RenderError};

/// An error returned by [`Translator::say`](crate::Translator::say).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SayError {
    /// No translations have been loaded for the active locale.
    #[error("no translations loaded for locale '{locale}'")]
    NoTranslationsLoaded { locale: String },

    /// A placeholder in the translation could not be compiled.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// A value could not be rendered by its placeholder's formatter.
    #[error(transparent)]
    Render(#[from] RenderError),
}
