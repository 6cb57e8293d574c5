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

//! HTTP transport layer for the Alpaca API
//!
//! One prepared request is one network call. There is no retry, no backoff
//! and no client-side timeout: dropping the future cancels the call.

use crate::request::PreparedRequest;
use alpaca_core::{Error, Method, Result};
use reqwest::header::HeaderMap;
use reqwest::Client;
use tracing::{debug, instrument};

/// What came back over the wire, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
  pub status: u16,
  /// Canonical reason phrase of `status`, empty when there is none
  pub status_text: String,
  pub headers: HeaderMap,
  pub body: Vec<u8>,
}

/// HTTP transport shared by every endpoint group.
#[derive(Debug, Clone, Default)]
pub struct Transport {
  client: Client,
}

impl Transport {
  pub fn new() -> Self {
    Self { client: Client::new() }
  }

  /// Wrap a preconfigured `reqwest` client (proxies, TLS roots, ...).
  pub fn with_client(client: Client) -> Self {
    Self { client }
  }

  /// Send `request` once and read the whole body.
  #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
  pub async fn execute(&self, request: &PreparedRequest) -> Result<RawResponse> {
    let mut builder = self.client.request(to_reqwest(request.method), request.url.clone());
    for (name, value) in &request.headers {
      builder = builder.header(*name, value.as_str());
    }
    if let Some(body) = &request.body {
      builder = builder.body(body.clone());
    }

    let response =
      builder.send().await.map_err(|e| Error::Transport(format!("Request failed: {}", e)))?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
      .bytes()
      .await
      .map_err(|e| Error::Transport(format!("Failed to read response body: {}", e)))?;

    debug!(status = status.as_u16(), bytes = body.len(), "response received");

    Ok(RawResponse {
      status: status.as_u16(),
      status_text: status.canonical_reason().unwrap_or_default().to_string(),
      headers,
      body: body.to_vec(),
    })
  }
}

fn to_reqwest(method: Method) -> reqwest::Method {
  match method {
    Method::Get => reqwest::Method::GET,
    Method::Options => reqwest::Method::OPTIONS,
    Method::Put => reqwest::Method::PUT,
    Method::Delete => reqwest::Method::DELETE,
    Method::Post => reqwest::Method::POST,
    Method::Patch => reqwest::Method::PATCH,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_method_mapping() {
    for method in
      [Method::Get, Method::Options, Method::Put, Method::Delete, Method::Post, Method::Patch]
    {
      assert_eq!(to_reqwest(method).as_str(), method.as_str());
    }
  }
}
