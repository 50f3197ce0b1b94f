//! Translation lookup, the placeholder cache and interpolation.

mod error;
mod interpolator;
mod translations;
mod translator;

pub use error::SayError;
pub use interpolator::{CacheStats, CompiledTemplate, Interpolator, Part, Placeholder};
pub use translations::Translations;
pub use translator::Translator;
