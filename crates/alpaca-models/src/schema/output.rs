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

//! Response side of the schema layer: the [`Decode`] contract and the
//! helpers decoders are built from.

use alpaca_core::ValidationErrors;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use strum::VariantNames;
use uuid::Uuid;

/// Placeholder for the `actual` side of a missing required field.
pub const MISSING: &str = "missing";

/// Location inside a JSON document, rendered as `$.bars[0].t`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
  Key(String),
  Index(usize),
}

impl FieldPath {
  pub fn root() -> Self {
    Self::default()
  }

  /// Path of the member `key` below this one.
  pub fn key(&self, key: &str) -> Self {
    let mut next = self.clone();
    next.0.push(Segment::Key(key.to_string()));
    next
  }

  /// Path of the array element `index` below this one.
  pub fn index(&self, index: usize) -> Self {
    let mut next = self.clone();
    next.0.push(Segment::Index(index));
    next
  }
}

impl fmt::Display for FieldPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("$")?;
    for segment in &self.0 {
      match segment {
        Segment::Key(key) => write!(f, ".{}", key)?,
        Segment::Index(index) => write!(f, "[{}]", index)?,
      }
    }
    Ok(())
  }
}

/// Short description of a JSON value for the `actual` side of an issue.
pub fn describe(value: &Value) -> String {
  match value {
    Value::Null => "null".to_string(),
    Value::Bool(b) => format!("boolean {}", b),
    Value::Number(n) => format!("number {}", n),
    Value::String(s) => {
      let mut shown: String = s.chars().take(40).collect();
      if s.chars().count() > 40 {
        shown.push_str("...");
      }
      format!("string {:?}", shown)
    }
    Value::Array(items) => format!("array of {} items", items.len()),
    Value::Object(_) => "object".to_string(),
  }
}

/// Record that `value` is not what `expected` describes and yield nothing.
pub fn mismatch<T>(
  path: &FieldPath,
  expected: &str,
  value: &Value,
  issues: &mut ValidationErrors,
) -> Option<T> {
  issues.add(path.to_string(), expected, describe(value));
  None
}

/// Structural decoding of a JSON value into a typed model.
///
/// Implementations return `None` only after recording at least one issue,
/// and keep going after a bad field so that a single pass reports every
/// problem in the document.
pub trait Decode: Sized {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self>;
}

impl Decode for String {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    match value {
      Value::String(s) => Some(s.clone()),
      other => mismatch(path, "string", other, issues),
    }
  }
}

impl Decode for bool {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    match value {
      Value::Bool(b) => Some(*b),
      other => mismatch(path, "boolean", other, issues),
    }
  }
}

impl Decode for f64 {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    match value.as_f64() {
      Some(n) => Some(n),
      None => mismatch(path, "number", value, issues),
    }
  }
}

impl Decode for i64 {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    match value.as_i64() {
      Some(n) => Some(n),
      None => mismatch(path, "integer", value, issues),
    }
  }
}

impl Decode for Uuid {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    match value.as_str().map(Uuid::parse_str) {
      Some(Ok(id)) => Some(id),
      _ => mismatch(path, "uuid", value, issues),
    }
  }
}

/// Unconstrained values are carried through as-is.
impl Decode for Value {
  fn decode(value: &Value, _path: &FieldPath, _issues: &mut ValidationErrors) -> Option<Self> {
    Some(value.clone())
  }
}

/// `null` decodes to `None`; anything else must decode as `T`.
impl<T: Decode> Decode for Option<T> {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    nullable(T::decode)(value, path, issues)
  }
}

impl<T: Decode> Decode for Vec<T> {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    array_of(T::decode)(value, path, issues)
  }
}

/// Objects used as dictionaries, e.g. per-symbol results.
impl<T: Decode> Decode for BTreeMap<String, T> {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let Value::Object(map) = value else {
      return mismatch(path, "object", value, issues);
    };
    let mut out = BTreeMap::new();
    let mut complete = true;
    for (key, item) in map {
      match T::decode(item, &path.key(key), issues) {
        Some(decoded) => {
          out.insert(key.clone(), decoded);
        }
        None => complete = false,
      }
    }
    complete.then_some(out)
  }
}

/// Lift a decoder so that `null` yields `Some(None)`.
pub fn nullable<T, F>(decode: F) -> impl Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<Option<T>>
where
  F: Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
{
  move |value: &Value, path: &FieldPath, issues: &mut ValidationErrors| match value {
    Value::Null => Some(None),
    other => decode(other, path, issues).map(Some),
  }
}

/// Decode every element of an array with `decode`.
pub fn array_of<T, F>(decode: F) -> impl Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<Vec<T>>
where
  F: Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
{
  move |value: &Value, path: &FieldPath, issues: &mut ValidationErrors| {
    let Value::Array(items) = value else {
      return mismatch(path, "array", value, issues);
    };
    let mut out = Vec::with_capacity(items.len());
    let mut complete = true;
    for (i, item) in items.iter().enumerate() {
      match decode(item, &path.index(i), issues) {
        Some(decoded) => out.push(decoded),
        None => complete = false,
      }
    }
    complete.then_some(out)
  }
}

/// Array decoder that also caps the element count.
pub fn max_items<T: Decode>(
  max: usize,
) -> impl Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<Vec<T>> {
  move |value: &Value, path: &FieldPath, issues: &mut ValidationErrors| {
    let items = Vec::<T>::decode(value, path, issues)?;
    if items.len() > max {
      return mismatch(path, &format!("at most {} items", max), value, issues);
    }
    Some(items)
  }
}

/// Decode a string member of a closed set of wire values.
pub fn enumerated<E: FromStr + VariantNames>(
  value: &Value,
  path: &FieldPath,
  issues: &mut ValidationErrors,
) -> Option<E> {
  match value.as_str().map(E::from_str) {
    Some(Ok(variant)) => Some(variant),
    _ => mismatch(path, &format!("one of {}", E::VARIANTS.join(", ")), value, issues),
  }
}

/// Cursor over one JSON object that tracks which members were read.
pub struct ObjectReader<'a> {
  map: &'a Map<String, Value>,
  path: FieldPath,
  issues: &'a mut ValidationErrors,
  seen: HashSet<&'static str>,
}

impl<'a> ObjectReader<'a> {
  /// Start reading `value`, which must be a JSON object.
  pub fn open(value: &'a Value, path: &FieldPath, issues: &'a mut ValidationErrors) -> Option<Self> {
    match value {
      Value::Object(map) => Some(Self { map, path: path.clone(), issues, seen: HashSet::new() }),
      other => mismatch(path, "object", other, issues),
    }
  }

  /// Member that must be present.
  pub fn required<T: Decode>(&mut self, key: &'static str) -> Option<T> {
    self.required_with(key, T::decode)
  }

  pub fn required_with<T, F>(&mut self, key: &'static str, decode: F) -> Option<T>
  where
    F: Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
  {
    self.seen.insert(key);
    let path = self.path.key(key);
    match self.map.get(key) {
      Some(value) => decode(value, &path, &mut *self.issues),
      None => {
        self.issues.add(path.to_string(), "required field", MISSING);
        None
      }
    }
  }

  /// Member that may be absent but is never `null`.
  pub fn optional<T: Decode>(&mut self, key: &'static str) -> Option<Option<T>> {
    self.optional_with(key, T::decode)
  }

  pub fn optional_with<T, F>(&mut self, key: &'static str, decode: F) -> Option<Option<T>>
  where
    F: Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
  {
    self.seen.insert(key);
    match self.map.get(key) {
      Some(value) => decode(value, &self.path.key(key), &mut *self.issues).map(Some),
      None => Some(None),
    }
  }

  /// Member that may be absent or `null`.
  pub fn nullable<T: Decode>(&mut self, key: &'static str) -> Option<Option<T>> {
    self.nullable_with(key, T::decode)
  }

  pub fn nullable_with<T, F>(&mut self, key: &'static str, decode: F) -> Option<Option<T>>
  where
    F: Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
  {
    self.seen.insert(key);
    match self.map.get(key) {
      Some(Value::Null) | None => Some(None),
      Some(value) => decode(value, &self.path.key(key), &mut *self.issues).map(Some),
    }
  }

  /// Reject members that were never read.
  pub fn finish_strict(self) {
    for key in self.map.keys() {
      if !self.seen.contains(key.as_str()) {
        self.issues.add(self.path.key(key).to_string(), "no such field", "unexpected field");
      }
    }
  }

  /// Drop members that were never read.
  pub fn finish_tolerant(self) {}
}

/// Run `decode` from the document root and collect the outcome.
pub fn run<T, F>(value: &Value, decode: F) -> Result<T, ValidationErrors>
where
  F: Fn(&Value, &FieldPath, &mut ValidationErrors) -> Option<T>,
{
  let mut issues = ValidationErrors::new();
  let decoded = decode(value, &FieldPath::root(), &mut issues);
  match decoded {
    Some(output) if issues.is_empty() => Ok(output),
    _ => {
      if issues.is_empty() {
        issues.add("$", "valid value", describe(value));
      }
      Err(issues)
    }
  }
}

/// Schema applied to a successful response body.
///
/// Every [`Decode`] type is a response schema of itself. Marker types
/// implement it directly when the model is reshaped on the way out, such as
/// unwrapping an envelope.
pub trait ResponseSchema {
  type Output;

  /// `false` for endpoints that answer with an empty body.
  const EXPECTS_CONTENT: bool = true;

  fn parse_output(value: &Value) -> Result<Self::Output, ValidationErrors>;
}

impl<T: Decode> ResponseSchema for T {
  type Output = T;

  fn parse_output(value: &Value) -> Result<T, ValidationErrors> {
    run(value, T::decode)
  }
}

/// Response schema of endpoints that return nothing worth decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoContent;

impl ResponseSchema for NoContent {
  type Output = ();
  const EXPECTS_CONTENT: bool = false;

  fn parse_output(_value: &Value) -> Result<(), ValidationErrors> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  struct Point {
    x: f64,
    label: Option<String>,
  }

  impl Decode for Point {
    fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
      let mut obj = ObjectReader::open(value, path, issues)?;
      let x = obj.required("x");
      let label = obj.nullable("label");
      obj.finish_strict();
      Some(Point { x: x?, label: label? })
    }
  }

  struct LoosePoint {
    x: f64,
  }

  impl Decode for LoosePoint {
    fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
      let mut obj = ObjectReader::open(value, path, issues)?;
      let x = obj.required("x");
      obj.finish_tolerant();
      Some(LoosePoint { x: x? })
    }
  }

  #[test]
  fn test_field_path_display() {
    let path = FieldPath::root().key("bars").index(0).key("t");
    assert_eq!(path.to_string(), "$.bars[0].t");
    assert_eq!(FieldPath::root().to_string(), "$");
  }

  #[test]
  fn test_strict_object_rejects_unknown_member() {
    let issues = Point::parse_output(&json!({"x": 1.5, "extra": true})).err().unwrap();
    assert_eq!(issues.len(), 1);
    let issue = issues.at("$.extra").unwrap();
    assert_eq!(issue.actual, "unexpected field");
  }

  #[test]
  fn test_tolerant_object_drops_unknown_member() {
    let point = LoosePoint::parse_output(&json!({"x": 2, "extra": true})).unwrap();
    assert_eq!(point.x, 2.0);
  }

  #[test]
  fn test_missing_and_mistyped_members_are_all_reported() {
    let issues = Point::parse_output(&json!({"label": 7})).err().unwrap();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues.at("$.x").unwrap().actual, MISSING);
    assert_eq!(issues.at("$.label").unwrap().expected, "string");
  }

  #[test]
  fn test_nullable_member_accepts_null_and_absence() {
    let point = Point::parse_output(&json!({"x": 0, "label": null})).unwrap();
    assert!(point.label.is_none());
    assert_eq!(point.x, 0.0);
    let point = Point::parse_output(&json!({"x": 0, "label": "a"})).unwrap();
    assert_eq!(point.label.as_deref(), Some("a"));
  }

  #[test]
  fn test_array_reports_element_index() {
    let issues = Vec::<Point>::parse_output(&json!([{"x": 1}, {"x": "no"}])).err().unwrap();
    assert_eq!(issues.at("$[1].x").unwrap().actual, "string \"no\"");
  }

  #[test]
  fn test_non_object_root() {
    let issues = Point::parse_output(&json!([1, 2])).err().unwrap();
    assert_eq!(issues.at("$").unwrap().expected, "object");
    assert_eq!(issues.at("$").unwrap().actual, "array of 2 items");
  }

  #[test]
  fn test_max_items() {
    let decode = max_items::<i64>(2);
    let mut issues = ValidationErrors::new();
    assert!(decode(&json!([1, 2, 3]), &FieldPath::root(), &mut issues).is_none());
    assert_eq!(issues.len(), 1);
    assert!(run(&json!([1, 2]), max_items::<i64>(2)).is_ok());
  }

  #[test]
  fn test_map_decoding() {
    let map = BTreeMap::<String, i64>::parse_output(&json!({"AAPL": 1, "MSFT": 2})).unwrap();
    assert_eq!(map.get("MSFT"), Some(&2));
    let issues = BTreeMap::<String, i64>::parse_output(&json!({"AAPL": "x"})).err().unwrap();
    assert!(issues.at("$.AAPL").is_some());
  }

  #[test]
  fn test_integer_rejects_fraction() {
    assert!(i64::parse_output(&json!(3)).is_ok());
    assert!(i64::parse_output(&json!(3.5)).is_err());
  }

  #[test]
  fn test_no_content_ignores_body() {
    assert!(!NoContent::EXPECTS_CONTENT);
    assert!(NoContent::parse_output(&Value::Null).is_ok());
  }

  #[test]
  fn test_describe_truncates_long_strings() {
    let long = "x".repeat(50);
    let shown = describe(&Value::String(long));
    assert!(shown.ends_with("...\""));
  }
}
