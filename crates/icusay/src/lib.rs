//! ICU-style message formatting.
//!
//! Translation templates contain placeholders such as `{name}`,
//! `{total, number, usd}` or `{count, plural, one {# item} other {# items}}`.
//! [`Translator::say`] looks a template up by key, compiles its placeholders
//! once per key and renders each value for the active locale.
//!
//! ```
//! use icusay::{Translations, Translator, values};
//!
//! let mut translator = Translator::new();
//! let translations: Translations = [(
//!     "balance",
//!     "Hello {name}, you have {amount, number, currency} in your bank account.",
//! )]
//! .into_iter()
//! .collect();
//! translator.set_translations("en", translations);
//!
//! let text = translator
//!     .say("balance", Some(&values! { "name" => "John", "amount" => 12345.67 }))
//!     .unwrap();
//! assert_eq!(
//!     text.as_deref(),
//!     Some("Hello John, you have $12,345.67 in your bank account.")
//! );
//! ```

pub mod engine;
pub mod format;
pub mod parser;
pub mod types;

pub use engine::{CacheStats, CompiledTemplate, Interpolator, SayError, Translations, Translator};
pub use format::{CompileError, FormatContext, Formatter, RenderError, compile_placeholder};
pub use types::{Value, Values};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or chrono dates directly.
///
/// # Example
///
/// ```
/// use icusay::{values, Value};
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
