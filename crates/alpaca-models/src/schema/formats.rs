/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Decoders for string formats and numeric coercions used by the wire models.

use super::output::{mismatch, FieldPath};
use alpaca_core::ValidationErrors;
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static DATE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

// fraction is optional and up to nanoseconds; offset may be `Z` or `+hh:mm`
static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{1,9})?(Z|[+-]\d{2}:\d{2})$")
    .expect("static date-time pattern")
});

static TIME_OF_DAY: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("static time pattern"));

static STOCK_SYMBOL: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Z]{1,5}(\.[A-Z])?$").expect("static symbol pattern"));

/// `YYYY-MM-DD`
pub fn date(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<NaiveDate> {
  let parsed = value
    .as_str()
    .filter(|s| DATE.is_match(s))
    .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
  match parsed {
    Some(d) => Some(d),
    None => mismatch(path, "date (YYYY-MM-DD)", value, issues),
  }
}

/// RFC 3339 timestamp, normalised to UTC.
pub fn date_time(
  value: &Value,
  path: &FieldPath,
  issues: &mut ValidationErrors,
) -> Option<DateTime<Utc>> {
  let parsed = value
    .as_str()
    .filter(|s| DATE_TIME.is_match(s))
    .and_then(|s| DateTime::parse_from_rfc3339(s).ok());
  match parsed {
    Some(dt) => Some(dt.with_timezone(&Utc)),
    None => mismatch(path, "date-time (YYYY-MM-DDTHH:MM:SS[.ffffff]Z)", value, issues),
  }
}

/// Query form of a timestamp: microsecond precision, `Z` suffix.
pub fn wire_date_time(dt: &DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `HH:MM` as used by the market calendar.
pub fn time_of_day(
  value: &Value,
  path: &FieldPath,
  issues: &mut ValidationErrors,
) -> Option<NaiveTime> {
  let parsed = value
    .as_str()
    .filter(|s| TIME_OF_DAY.is_match(s))
    .and_then(|s| NaiveTime::parse_from_str(s, "%H:%M").ok());
  match parsed {
    Some(t) => Some(t),
    None => mismatch(path, "time (HH:MM)", value, issues),
  }
}

/// Upper-case ticker with an optional one letter share class, e.g. `BRK.B`.
pub fn stock_symbol(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<String> {
  match value.as_str() {
    Some(s) if STOCK_SYMBOL.is_match(s) => Some(s.to_string()),
    _ => mismatch(path, "stock symbol", value, issues),
  }
}

/// Whether `symbol` has the stock ticker shape.
pub(crate) fn is_stock_symbol(symbol: &str) -> bool {
  STOCK_SYMBOL.is_match(symbol)
}

pub fn non_empty(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<String> {
  match value.as_str() {
    Some(s) if !s.is_empty() => Some(s.to_string()),
    _ => mismatch(path, "non-empty string", value, issues),
  }
}

/// String of exactly `len` characters.
pub fn exact_len(len: usize) -> impl Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<String> {
  move |value: &Value, path: &FieldPath, issues: &mut ValidationErrors| match value.as_str() {
    Some(s) if s.chars().count() == len => Some(s.to_string()),
    _ => mismatch(path, &format!("string of length {}", len), value, issues),
  }
}

/// String of at most `len` characters.
pub fn max_len(len: usize) -> impl Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<String> {
  move |value: &Value, path: &FieldPath, issues: &mut ValidationErrors| match value.as_str() {
    Some(s) if s.chars().count() <= len => Some(s.to_string()),
    _ => mismatch(path, &format!("string of at most {} characters", len), value, issues),
  }
}

/// Numbers that upstream sends either as JSON numbers or as decimal strings.
pub fn coerce_number(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<f64> {
  let parsed = match value {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
    _ => None,
  };
  match parsed {
    Some(n) => Some(n),
    None => mismatch(path, "number or numeric string", value, issues),
  }
}

/// Integers that upstream sends either as JSON numbers or as strings.
pub fn coerce_integer(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<i64> {
  let parsed = match value {
    Value::Number(n) => n.as_i64(),
    Value::String(s) => s.trim().parse::<i64>().ok(),
    _ => None,
  };
  match parsed {
    Some(n) => Some(n),
    None => mismatch(path, "integer or integer string", value, issues),
  }
}

pub fn uint_u16(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<u16> {
  match value.as_u64().and_then(|n| u16::try_from(n).ok()) {
    Some(n) => Some(n),
    None => mismatch(path, "integer between 0 and 65535", value, issues),
  }
}

pub fn uint_u32(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<u32> {
  match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
    Some(n) => Some(n),
    None => mismatch(path, "unsigned 32-bit integer", value, issues),
  }
}

pub fn uint_u64(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<u64> {
  match value.as_u64() {
    Some(n) => Some(n),
    None => mismatch(path, "unsigned integer", value, issues),
  }
}
