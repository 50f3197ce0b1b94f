//! Placeholder cache and template interpolation.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::engine::SayError;
use crate::format::{CompileError, FormatContext, Formatter, RenderError, compile_placeholder};
use crate::parser::{Segment, parse_template};
use crate::types::Values;

/// A placeholder occurrence with its compiled formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// The exact text replaced in the template, e.g. `{balance, number, currency}`.
    pub literal: String,
    /// Key into the values map.
    pub name: String,
    pub formatter: Formatter,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    Placeholder(Placeholder),
}

/// A template split into text and compiled placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledTemplate {
    parts: Vec<Part>,
}

impl CompiledTemplate {
    /// Scan and compile a template.
    ///
    /// Returns `None` for templates without placeholders.
    pub fn compile(literal: &str) -> Result<Option<Self>, CompileError> {
        let template = parse_template(literal);
        if template.is_plain() {
            return Ok(None);
        }

        let parts = template
            .segments
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal(text) => Ok(Part::Text(text)),
                Segment::Placeholder(spec) => {
                    let formatter = compile_placeholder(spec.kind_str(), spec.format.as_deref())?;
                    Ok(Part::Placeholder(Placeholder {
                        literal: spec.literal,
                        name: spec.name,
                        formatter,
                    }))
                }
            })
            .collect::<Result<Vec<_>, CompileError>>()?;
        Ok(Some(Self { parts }))
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Iterate the placeholders in template order.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.parts.iter().filter_map(|part| match part {
            Part::Placeholder(placeholder) => Some(placeholder),
            Part::Text(_) => None,
        })
    }

    /// Substitute every placeholder with its formatted value.
    ///
    /// Placeholders whose value is missing keep their literal text.
    pub fn render(
        &self,
        values: &Values,
        locales: &[&str],
        context: &FormatContext,
    ) -> Result<String, RenderError> {
        let mut output = String::new();
        for part in &self.parts {
            match part {
                Part::Text(text) => output.push_str(text),
                Part::Placeholder(placeholder) => match values.get(&placeholder.name) {
                    Some(value) => {
                        output.push_str(&placeholder.formatter.format(value, locales, context)?);
                    }
                    None => {
                        warn!(name = %placeholder.name, "no value for placeholder");
                        output.push_str(&placeholder.literal);
                    }
                },
            }
        }
        Ok(output)
    }
}

/// Placeholder cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// Interpolates translation templates, compiling each key's placeholders once.
///
/// Compiled templates are cached by translation key, not by template text:
/// two keys with identical text are compiled independently, and a key is
/// never recompiled until [`reset_placeholder_cache`](Self::reset_placeholder_cache).
///
/// # Example
///
/// ```
/// use icusay::{Interpolator, values};
///
/// let interpolator = Interpolator::default();
/// let text = interpolator
///     .interpolate("greeting", "Hello {name}!", Some(&values! { "name" => "Ada" }), &["en"])
///     .unwrap();
/// assert_eq!(text, "Hello Ada!");
/// ```
#[derive(Default)]
pub struct Interpolator {
    context: FormatContext,
    cache: RefCell<HashMap<String, Option<Rc<CompiledTemplate>>>>,
    stats: Cell<CacheStats>,
}

impl From<FormatContext> for Interpolator {
    fn from(context: FormatContext) -> Self {
        Self {
            context,
            cache: RefCell::default(),
            stats: Cell::default(),
        }
    }
}

impl Interpolator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> &FormatContext {
        &self.context
    }

    /// The compiled template for `key`, compiling `literal` on first use.
    ///
    /// `None` means the template has no placeholders. Compile errors are not
    /// cached.
    pub fn placeholders(
        &self,
        key: &str,
        literal: &str,
    ) -> Result<Option<Rc<CompiledTemplate>>, CompileError> {
        if let Some(cached) = self.cache.borrow().get(key) {
            self.record(|stats| stats.hits += 1);
            return Ok(cached.clone());
        }

        self.record(|stats| stats.misses += 1);
        debug!(key, "compiling template");
        let compiled = CompiledTemplate::compile(literal)?.map(Rc::new);
        self.cache
            .borrow_mut()
            .insert(key.to_string(), compiled.clone());
        Ok(compiled)
    }

    /// Interpolate `values` into the template cached under `key`.
    ///
    /// Without values, or for templates without placeholders, the literal is
    /// returned unchanged.
    pub fn interpolate(
        &self,
        key: &str,
        literal: &str,
        values: Option<&Values>,
        locales: &[&str],
    ) -> Result<String, SayError> {
        let compiled = self.placeholders(key, literal)?;
        match (compiled, values) {
            (Some(template), Some(values)) => Ok(template.render(values, locales, &self.context)?),
            _ => Ok(literal.to_string()),
        }
    }

    /// Forget every compiled template.
    pub fn reset_placeholder_cache(&self) {
        debug!(entries = self.cache_len(), "resetting placeholder cache");
        self.cache.borrow_mut().clear();
    }

    /// Number of keys in the placeholder cache, including templates without
    /// placeholders.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Cumulative hit and miss counts since construction.
    pub fn cache_stats(&self) -> CacheStats {
        self.stats.get()
    }

    fn record(&self, update: impl FnOnce(&mut CacheStats)) {
        let mut stats = self.stats.get();
        update(&mut stats);
        self.stats.set(stats);
    }
}
