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

use std::fmt;
use thiserror::Error;

/// The main error type for alpaca-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Credentials could not be resolved
  #[error("Missing credentials: {0}")]
  MissingCredentials(String),

  /// A request URL could not be assembled from the host template and path
  #[error("Invalid URL `{url}`: {reason}")]
  InvalidUrl { url: String, reason: String },

  /// Caller payload or upstream response did not match the declared schema
  #[error("{endpoint}: invalid {stage}: {issues}")]
  Validation { endpoint: String, stage: Stage, issues: ValidationErrors },

  /// Response status differs from the endpoint's ok status
  #[error("{message}")]
  Api { endpoint: String, status: u16, message: String },

  /// One or more items of a batch response failed
  #[error("{message}")]
  Aggregate { endpoint: String, message: String, failures: Vec<ItemFailure> },

  /// Ok status, but the body is not valid JSON
  #[error("{endpoint}: response body is not valid JSON: {source}")]
  Decode {
    endpoint: String,
    #[source]
    source: serde_json::Error,
  },

  /// Network failure before any status code was available
  #[error("Transport error: {0}")]
  Transport(String),
}

/// Result type alias for alpaca-* crates
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
  /// Status code carried by an [`Error::Api`], if any.
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Api { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Validation issues carried by an [`Error::Validation`], if any.
  pub fn issues(&self) -> Option<&ValidationErrors> {
    match self {
      Error::Validation { issues, .. } => Some(issues),
      _ => None,
    }
  }

  /// Per-item failures carried by an [`Error::Aggregate`].
  pub fn failures(&self) -> &[ItemFailure] {
    match self {
      Error::Aggregate { failures, .. } => failures,
      _ => &[],
    }
  }
}

/// Which half of the pipeline rejected a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  /// Caller-supplied query or body
  Input,
  /// Upstream response payload
  Output,
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Stage::Input => write!(f, "input"),
      Stage::Output => write!(f, "response"),
    }
  }
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
  /// Location of the field, e.g. `$.bars[0].t`
  pub path: String,
  /// What the schema declared
  pub expected: String,
  /// What was found
  pub actual: String,
}

impl ValidationError {
  pub fn new(
    path: impl Into<String>,
    expected: impl Into<String>,
    actual: impl Into<String>,
  ) -> Self {
    Self { path: path.into(), expected: expected.into(), actual: actual.into() }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: expected {}, got {}", self.path, self.expected, self.actual)
  }
}

impl std::error::Error for ValidationError {}

/// Every failure collected while validating one value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, error: ValidationError) {
    self.0.push(error);
  }

  /// Record a failure at `path`.
  pub fn add(
    &mut self,
    path: impl Into<String>,
    expected: impl Into<String>,
    actual: impl Into<String>,
  ) {
    self.0.push(ValidationError::new(path, expected, actual));
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
    self.0.iter()
  }

  /// First failure recorded at exactly `path`.
  pub fn at(&self, path: &str) -> Option<&ValidationError> {
    self.0.iter().find(|e| e.path == path)
  }

  /// `Ok(())` when nothing was recorded.
  pub fn into_result(self) -> std::result::Result<(), ValidationErrors> {
    if self.is_empty() { Ok(()) } else { Err(self) }
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, error) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str("; ")?;
      }
      write!(f, "{}", error)?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
  fn from(error: ValidationError) -> Self {
    Self(vec![error])
  }
}

impl<'a> IntoIterator for &'a ValidationErrors {
  type Item = &'a ValidationError;
  type IntoIter = std::slice::Iter<'a, ValidationError>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

/// One failed item of a batch response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
  /// Identifying key (symbol or order id)
  pub key: String,
  /// Per-item status reported upstream
  pub status: u16,
  /// Human readable description
  pub message: String,
}

impl fmt::Display for ItemFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.message)
  }
}
