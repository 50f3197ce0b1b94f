//! Implementation of the `icusay eval` command.

use chrono::DateTime;
use icusay::format::{CurrencyCode, FormatContext};
use icusay::{Interpolator, Value, Values};
use miette::IntoDiagnostic;
use serde::Serialize;
use serde_json::json;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Locale tag for formatting (e.g., en, de-AT, ru)
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// Locale used when --lang is not a well-formed tag
    #[arg(long, default_value = "en")]
    pub fallback: String,

    /// Template string to render
    #[arg(long, required = true)]
    pub template: String,

    /// Parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Currency for `currency` number formats when the locale has none
    #[arg(long, value_parser = parse_currency)]
    pub currency: Option<CurrencyCode>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((key.to_string(), value.to_string()))
}

fn parse_currency(s: &str) -> Result<CurrencyCode, String> {
    s.parse()
        .map_err(|_| format!("unknown currency code '{}'", s))
}

/// Read a parameter as an integer, float or RFC 3339 date, falling back to text.
fn infer_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else if let Ok(date) = DateTime::parse_from_rfc3339(&raw) {
        Value::from(date)
    } else {
        Value::from(raw)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let context = match args.currency {
        Some(currency) => FormatContext::builder().default_currency(currency).build(),
        None => FormatContext::default(),
    };
    let interpolator = Interpolator::from(context);

    let values: Values = args
        .params
        .into_iter()
        .map(|(name, raw)| (name, infer_value(raw)))
        .collect();

    let locales = [args.lang.as_str(), args.fallback.as_str()];
    match interpolator.interpolate("eval", &args.template, Some(&values), &locales) {
        Ok(result) => {
            if args.json {
                let output = EvalResult { result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = json!({
                    "error": e.to_string()
                });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
