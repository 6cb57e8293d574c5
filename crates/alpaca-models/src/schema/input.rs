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

//! Input side of the schema layer: constraint checks and wire encoding of
//! caller supplied queries and bodies.

use super::formats::{is_stock_symbol, wire_date_time};
use super::output::FieldPath;
use alpaca_core::ValidationErrors;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
  String(String),
  Integer(i64),
  Number(f64),
  Bool(bool),
  /// Sent as an empty value (`key=`)
  Null,
}

impl fmt::Display for QueryValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      QueryValue::String(s) => f.write_str(s),
      QueryValue::Integer(n) => write!(f, "{}", n),
      QueryValue::Number(n) => write!(f, "{}", n),
      QueryValue::Bool(b) => write!(f, "{}", b),
      QueryValue::Null => Ok(()),
    }
  }
}

impl From<&str> for QueryValue {
  fn from(value: &str) -> Self {
    QueryValue::String(value.to_string())
  }
}

impl From<String> for QueryValue {
  fn from(value: String) -> Self {
    QueryValue::String(value)
  }
}

impl From<i64> for QueryValue {
  fn from(value: i64) -> Self {
    QueryValue::Integer(value)
  }
}

impl From<u32> for QueryValue {
  fn from(value: u32) -> Self {
    QueryValue::Integer(i64::from(value))
  }
}

impl From<f64> for QueryValue {
  fn from(value: f64) -> Self {
    QueryValue::Number(value)
  }
}

impl From<bool> for QueryValue {
  fn from(value: bool) -> Self {
    QueryValue::Bool(value)
  }
}

impl From<NaiveDate> for QueryValue {
  fn from(value: NaiveDate) -> Self {
    QueryValue::String(value.format("%Y-%m-%d").to_string())
  }
}

impl From<DateTime<Utc>> for QueryValue {
  fn from(value: DateTime<Utc>) -> Self {
    QueryValue::String(wire_date_time(&value))
  }
}

/// Ordered query parameters after validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(String, QueryValue)>);

impl QueryParams {
  pub fn new() -> Self {
    Self::default()
  }

  /// Set `key`, replacing an earlier value.
  pub fn set(&mut self, key: &str, value: impl Into<QueryValue>) {
    let value = value.into();
    match self.0.iter_mut().find(|(k, _)| k == key) {
      Some(slot) => slot.1 = value,
      None => self.0.push((key.to_string(), value)),
    }
  }

  /// Set `key` only when a value is present.
  pub fn set_opt<V: Into<QueryValue>>(&mut self, key: &str, value: Option<V>) {
    if let Some(value) = value {
      self.set(key, value);
    }
  }

  /// Set `key` to the comma separated `values`, when present.
  pub fn set_joined<S: AsRef<str>>(&mut self, key: &str, values: Option<&[S]>) {
    if let Some(values) = values {
      let joined = values.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
      self.set(key, joined);
    }
  }

  pub fn get(&self, key: &str) -> Option<&QueryValue> {
    self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

/// Validation and encoding of a query string model.
pub trait QuerySchema {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors>;
}

/// Validation and encoding of a JSON body model.
pub trait BodySchema {
  fn parse_input(&self) -> Result<Value, ValidationErrors>;
}

/// Encode a checked body model through its `Serialize` impl.
pub fn encode_body<T: Serialize>(body: &T) -> Result<Value, ValidationErrors> {
  serde_json::to_value(body).map_err(|e| {
    let mut issues = ValidationErrors::new();
    issues.add(FieldPath::root().to_string(), "JSON encodable body", e.to_string());
    issues
  })
}

/// `serialize_with` for numbers the API takes as decimal strings.
pub fn decimal_string<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
  T: fmt::Display,
  S: Serializer,
{
  match value {
    Some(number) => serializer.collect_str(number),
    None => serializer.serialize_none(),
  }
}

/// Schema slot of endpoints that take no query or no body. It has no values,
/// so such an endpoint can only be called with `None` in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Never {}

impl QuerySchema for Never {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    match *self {}
  }
}

impl BodySchema for Never {
  fn parse_input(&self) -> Result<Value, ValidationErrors> {
    match *self {}
  }
}

/// Accumulates constraint failures of an input model.
#[derive(Debug, Default)]
pub struct InputCheck {
  issues: ValidationErrors,
}

impl InputCheck {
  pub fn new() -> Self {
    Self::default()
  }

  fn fail(&mut self, field: &str, expected: impl Into<String>, actual: impl Into<String>) {
    self.issues.add(FieldPath::root().key(field).to_string(), expected, actual);
  }

  /// Unwrap a required field, recording it as missing when absent.
  pub fn required<'v, T>(&mut self, field: &str, value: Option<&'v T>) -> Option<&'v T> {
    if value.is_none() {
      self.fail(field, "required field", super::MISSING);
    }
    value
  }

  pub fn non_empty(&mut self, field: &str, value: &str) {
    if value.is_empty() {
      self.fail(field, "non-empty string", "empty string");
    }
  }

  pub fn max_len(&mut self, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
      self.fail(field, format!("at most {} characters", max), format!("{} characters", len));
    }
  }

  pub fn exact_len(&mut self, field: &str, value: &str, len: usize) {
    let actual = value.chars().count();
    if actual != len {
      self.fail(field, format!("string of length {}", len), format!("{} characters", actual));
    }
  }

  pub fn range(&mut self, field: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
      self.fail(field, format!("integer between {} and {}", min, max), value.to_string());
    }
  }

  pub fn at_most(&mut self, field: &str, value: i64, max: i64) {
    if value > max {
      self.fail(field, format!("integer of at most {}", max), value.to_string());
    }
  }

  pub fn positive(&mut self, field: &str, value: f64) {
    if !(value.is_finite() && value > 0.0) {
      self.fail(field, "positive number", value.to_string());
    }
  }

  pub fn max_items(&mut self, field: &str, len: usize, max: usize) {
    if len > max {
      self.fail(field, format!("at most {} items", max), format!("{} items", len));
    }
  }

  pub fn symbol(&mut self, field: &str, value: &str) {
    if !is_stock_symbol(value) {
      self.fail(field, "stock symbol", format!("{:?}", value));
    }
  }

  pub fn uuid(&mut self, field: &str, value: &str) {
    if Uuid::parse_str(value).is_err() {
      self.fail(field, "uuid", format!("{:?}", value));
    }
  }

  /// Check that `value` matches a caller supplied predicate.
  pub fn ensure(&mut self, field: &str, ok: bool, expected: &str, actual: impl Into<String>) {
    if !ok {
      self.fail(field, expected, actual);
    }
  }

  pub fn finish(self) -> Result<(), ValidationErrors> {
    self.issues.into_result()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_null_renders_empty() {
    assert_eq!(QueryValue::Null.to_string(), "");
    assert_eq!(QueryValue::from(1.5).to_string(), "1.5");
    assert_eq!(QueryValue::from(2.0).to_string(), "2");
    assert_eq!(QueryValue::from(true).to_string(), "true");
  }

  #[test]
  fn test_set_replaces_and_keeps_order() {
    let mut params = QueryParams::new();
    params.set("a", "1");
    params.set("b", 2i64);
    params.set("a", "3");
    let pairs: Vec<(String, String)> =
      params.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    assert_eq!(
      pairs,
      vec![("a".to_string(), "3".to_string()), ("b".to_string(), "2".to_string())]
    );
  }

  #[test]
  fn test_set_joined_and_optional() {
    let mut params = QueryParams::new();
    params.set_joined("symbols", Some(&["AAPL", "MSFT"][..]));
    params.set_joined::<&str>("none", None);
    params.set_opt::<bool>("skipped", None);
    assert_eq!(params.len(), 1);
    assert_eq!(params.get("symbols"), Some(&QueryValue::from("AAPL,MSFT")));
  }

  #[test]
  fn test_date_values() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(QueryValue::from(day).to_string(), "2024-03-01");
  }

  #[derive(Serialize)]
  struct Priced {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
    price: Option<f64>,
  }

  #[test]
  fn test_encode_body_with_decimal_strings() {
    let body = encode_body(&Priced { price: Some(101.5) }).unwrap();
    assert_eq!(body, serde_json::json!({"price": "101.5"}));
    assert_eq!(encode_body(&Priced { price: None }).unwrap(), serde_json::json!({}));
  }

  #[test]
  fn test_input_check_collects_everything() {
    let mut check = InputCheck::new();
    check.required::<String>("type", None);
    check.range("limit", 0, 1, 10_000);
    check.symbol("symbol", "aapl");
    check.max_len("client_order_id", &"x".repeat(129), 128);
    check.exact_len("cusips[0]", "123", 12);
    let issues = check.finish().unwrap_err();
    assert_eq!(issues.len(), 5);
    assert_eq!(issues.at("$.type").unwrap().actual, "missing");
    assert!(issues.at("$.limit").is_some());
    assert!(issues.at("$.cusips[0]").is_some());
  }

  #[test]
  fn test_input_check_passes_clean_values() {
    let mut check = InputCheck::new();
    check.symbol("symbol", "BRK.B");
    check.uuid("order_id", "904837e3-3b76-47ec-b432-046db621571b");
    check.positive("qty", 1.0);
    assert!(check.finish().is_ok());
  }
}
