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

//! Request builder: base URL + path + prepared payload + credentials

use alpaca_core::{Credentials, Error, Method, Result, KEY_ID_HEADER, SECRET_KEY_HEADER};
use alpaca_models::schema::QueryParams;
use reqwest::header::HeaderValue;
use serde_json::Value;
use url::Url;

pub const ACCEPT: &str = "accept";
pub const CONTENT_TYPE: &str = "content-type";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Fully qualified request, ready for the transport.
#[derive(Clone, PartialEq)]
pub struct PreparedRequest {
  pub method: Method,
  pub url: Url,
  pub headers: Vec<(&'static str, String)>,
  pub body: Option<Vec<u8>>,
}

impl PreparedRequest {
  /// Value of the first header named `name`, compared case-insensitively.
  pub fn header(&self, name: &str) -> Option<&str> {
    self
      .headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

// the secret header is left out
impl std::fmt::Debug for PreparedRequest {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PreparedRequest")
      .field("method", &self.method)
      .field("url", &self.url.as_str())
      .field("body_len", &self.body.as_ref().map(Vec::len))
      .finish()
  }
}

/// Assemble the request for `path` below `base_url`.
///
/// Every query entry is set in order; a null value is sent as an empty string
/// so the key still reaches the server.
pub fn build_request(
  base_url: &Url,
  path: &str,
  method: Method,
  query: Option<&QueryParams>,
  body: Option<&Value>,
  credentials: &Credentials,
) -> Result<PreparedRequest> {
  let mut url = base_url.join(path).map_err(|e| Error::InvalidUrl {
    url: format!("{}{}", base_url, path),
    reason: e.to_string(),
  })?;

  if let Some(query) = query.filter(|q| !q.is_empty()) {
    let mut pairs = url.query_pairs_mut();
    for (key, value) in query.iter() {
      pairs.append_pair(key, &value.to_string());
    }
  }

  let mut headers = vec![
    (ACCEPT, JSON_MEDIA_TYPE.to_string()),
    (KEY_ID_HEADER, credentials.key_id.clone()),
    (SECRET_KEY_HEADER, credentials.secret_key.clone()),
  ];

  let body = match body {
    Some(value) => {
      headers.push((CONTENT_TYPE, JSON_MEDIA_TYPE.to_string()));
      Some(value.to_string().into_bytes())
    }
    None => None,
  };

  Ok(PreparedRequest { method, url, headers, body })
}

/// Reject credentials that cannot travel in an HTTP header.
pub fn check_credentials(credentials: &Credentials) -> Result<()> {
  for (name, value) in
    [(KEY_ID_HEADER, &credentials.key_id), (SECRET_KEY_HEADER, &credentials.secret_key)]
  {
    if value.is_empty() || HeaderValue::from_str(value).is_err() {
      return Err(Error::Config(format!("{} is empty or not a valid header value", name)));
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use alpaca_models::schema::QueryValue;
  use serde_json::json;

  fn base() -> Url {
    Url::parse("https://paper-api.alpaca.markets/").unwrap()
  }

  fn creds() -> Credentials {
    Credentials::new("key", "secret")
  }

  #[test]
  fn test_path_joins_below_base() {
    let request = build_request(&base(), "v2/account", Method::Get, None, None, &creds()).unwrap();
    assert_eq!(request.url.as_str(), "https://paper-api.alpaca.markets/v2/account");
    assert!(request.body.is_none());
    assert_eq!(request.header("content-type"), None);
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert_eq!(request.header("apca-api-key-id"), Some("key"));
    assert_eq!(request.header(SECRET_KEY_HEADER), Some("secret"));
  }

  #[test]
  fn test_colon_paths() {
    let request =
      build_request(&base(), "v2/watchlists:by_name", Method::Get, None, None, &creds()).unwrap();
    assert_eq!(request.url.path(), "/v2/watchlists:by_name");
  }

  #[test]
  fn test_query_keeps_null_keys() {
    let mut query = QueryParams::new();
    query.set("symbols", "AAPL,MSFT");
    query.set("limit", 10i64);
    query.set("nested", QueryValue::Null);
    let request =
      build_request(&base(), "v2/orders", Method::Get, Some(&query), None, &creds()).unwrap();
    assert_eq!(request.url.query(), Some("symbols=AAPL%2CMSFT&limit=10&nested="));
  }

  #[test]
  fn test_empty_query_adds_nothing() {
    let request =
      build_request(&base(), "v2/orders", Method::Get, Some(&QueryParams::new()), None, &creds())
        .unwrap();
    assert_eq!(request.url.query(), None);
  }

  #[test]
  fn test_body_sets_content_type() {
    let body = json!({"symbol": "AAPL", "qty": "1"});
    let request =
      build_request(&base(), "v2/orders", Method::Post, None, Some(&body), &creds()).unwrap();
    assert_eq!(request.header(CONTENT_TYPE), Some(JSON_MEDIA_TYPE));
    let sent: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent, body);
  }

  #[test]
  fn test_debug_hides_secret() {
    let request = build_request(&base(), "v2/clock", Method::Get, None, None, &creds()).unwrap();
    assert!(!format!("{:?}", request).contains("secret"));
  }

  #[test]
  fn test_check_credentials() {
    assert!(check_credentials(&creds()).is_ok());
    assert!(check_credentials(&Credentials::new("key", "bad\nsecret")).is_err());
    assert!(check_credentials(&Credentials::new("", "secret")).is_err());
  }
}
