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

//! Immutable endpoint declarations
//!
//! An [`Endpoint`] ties a [`Declaration`] (name, method, path, ok status and
//! status messages) to the query, body and response schemas it is invoked
//! with. Declarations are `static` items; each endpoint module exposes its
//! own as a `CATALOG` slice.

use alpaca_core::{Error, Method, Result};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;
use std::marker::PhantomData;

/// Escaped in substituted path values; RFC 3986 unreserved bytes pass through.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Schema-independent part of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
  /// Operation name used as the prefix of every error message
  pub name: &'static str,
  pub method: Method,
  /// Relative path; `{param}` placeholders are filled per call
  pub path: &'static str,
  /// The single status treated as success
  pub ok_status: u16,
  /// Messages for documented non-ok statuses
  pub status_messages: &'static [(u16, &'static str)],
}

impl Declaration {
  /// Fill `{param}` placeholders in the path.
  ///
  /// Each value becomes exactly one percent-encoded segment. Values that are
  /// empty, that decode to `.` or `..`, or that contain `/`, `?` or `#` are
  /// rejected, and every placeholder must be given.
  pub fn resolve_path(&self, params: &[(&str, &str)]) -> Result<String> {
    let mut encoded = Vec::with_capacity(params.len());
    for (name, value) in params {
      if !is_single_segment(value) {
        return Err(Error::InvalidUrl {
          url: self.path.to_string(),
          reason: format!("invalid value `{}` for path parameter `{}`", value, name),
        });
      }
      encoded.push((*name, utf8_percent_encode(value, PATH_SEGMENT).to_string()));
    }
    let encoded: Vec<(&str, &str)> =
      encoded.iter().map(|(name, value)| (*name, value.as_str())).collect();

    let path = substitute(self.path, &encoded);
    if path.contains('{') {
      return Err(Error::InvalidUrl {
        url: path,
        reason: format!("unresolved path parameter in `{}`", self.path),
      });
    }
    Ok(path)
  }

  /// Configured message for `status`, with path parameters substituted.
  pub fn message_for(&self, status: u16, params: &[(&str, &str)]) -> Option<String> {
    self
      .status_messages
      .iter()
      .find(|(code, _)| *code == status)
      .map(|(_, message)| substitute(message, params))
  }

  /// Message of the error raised for a non-ok `status`.
  pub fn failure_message(&self, status: u16, status_text: &str, params: &[(&str, &str)]) -> String {
    self.message_for(status, params).unwrap_or_else(|| {
      format!("{}: Undocumented response {}: {}", self.name, status, status_text)
    })
  }
}

impl fmt::Display for Declaration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({} {})", self.name, self.method, self.path)
  }
}

fn is_single_segment(value: &str) -> bool {
  let decoded = percent_decode_str(value).decode_utf8_lossy();
  !matches!(decoded.as_ref(), "" | "." | "..") && !decoded.contains(['/', '?', '#'])
}

fn substitute(template: &str, params: &[(&str, &str)]) -> String {
  params
    .iter()
    .fold(template.to_string(), |out, (name, value)| out.replace(&format!("{{{}}}", name), value))
}

/// A declaration bound to its query (`Q`), body (`B`) and response (`R`)
/// schemas.
pub struct Endpoint<Q, B, R> {
  pub decl: Declaration,
  schemas: PhantomData<fn() -> (Q, B, R)>,
}

impl<Q, B, R> Endpoint<Q, B, R> {
  pub const fn new(name: &'static str, method: Method, path: &'static str, ok_status: u16) -> Self {
    Endpoint {
      decl: Declaration { name, method, path, ok_status, status_messages: &[] },
      schemas: PhantomData,
    }
  }

  pub const fn with_messages(self, status_messages: &'static [(u16, &'static str)]) -> Self {
    Endpoint {
      decl: Declaration {
        name: self.decl.name,
        method: self.decl.method,
        path: self.decl.path,
        ok_status: self.decl.ok_status,
        status_messages,
      },
      schemas: PhantomData,
    }
  }

  pub const fn name(&self) -> &'static str {
    self.decl.name
  }
}

// no bounds on the schema parameters, so not derived
impl<Q, B, R> Clone for Endpoint<Q, B, R> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<Q, B, R> Copy for Endpoint<Q, B, R> {}

impl<Q, B, R> fmt::Debug for Endpoint<Q, B, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Endpoint").field(&self.decl).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alpaca_models::schema::{NoContent, Never};

  static DELETE_THING: Endpoint<Never, Never, NoContent> =
    Endpoint::new("Delete Thing", Method::Delete, "v2/things/{thing_id}", 204)
      .with_messages(&[(404, "Thing Not Found: {thing_id}")]);

  #[test]
  fn test_const_construction() {
    assert_eq!(DELETE_THING.name(), "Delete Thing");
    assert_eq!(DELETE_THING.decl.ok_status, 204);
    assert_eq!(DELETE_THING.decl.status_messages.len(), 1);
    assert_eq!(DELETE_THING.decl.to_string(), "Delete Thing (DELETE v2/things/{thing_id})");
  }

  #[test]
  fn test_resolve_path() {
    let decl = DELETE_THING.decl;
    assert_eq!(decl.resolve_path(&[("thing_id", "abc")]).unwrap(), "v2/things/abc");
    assert!(matches!(decl.resolve_path(&[]), Err(Error::InvalidUrl { .. })));
    assert!(decl.resolve_path(&[("thing_id", "a/b")]).is_err());
    assert!(decl.resolve_path(&[("thing_id", "")]).is_err());
  }

  #[test]
  fn test_resolve_path_rejects_dot_segments() {
    let decl = DELETE_THING.decl;
    for value in [".", "..", "%2e", "%2E%2e", ".%2e", "%2F", "a%2fb", "%3F"] {
      let err = decl.resolve_path(&[("thing_id", value)]).unwrap_err();
      assert!(matches!(err, Error::InvalidUrl { .. }), "accepted {:?}", value);
    }
  }

  #[test]
  fn test_resolve_path_encodes_each_value() {
    let decl = DELETE_THING.decl;
    assert_eq!(decl.resolve_path(&[("thing_id", "BRK.B")]).unwrap(), "v2/things/BRK.B");
    assert_eq!(decl.resolve_path(&[("thing_id", "a b")]).unwrap(), "v2/things/a%20b");
    assert_eq!(decl.resolve_path(&[("thing_id", "%41")]).unwrap(), "v2/things/%2541");
    assert_eq!(decl.resolve_path(&[("thing_id", "{x}")]).unwrap(), "v2/things/%7Bx%7D");
  }

  #[test]
  fn test_failure_message() {
    let decl = DELETE_THING.decl;
    let params = [("thing_id", "abc")];
    assert_eq!(decl.failure_message(404, "Not Found", &params), "Thing Not Found: abc");
    assert_eq!(
      decl.failure_message(500, "Internal Server Error", &params),
      "Delete Thing: Undocumented response 500: Internal Server Error"
    );
  }
}
