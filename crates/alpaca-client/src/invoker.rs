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

//! Endpoint invoker: validate input, send, check status, validate output

use crate::endpoint::{Declaration, Endpoint};
use crate::request::build_request;
use crate::transport::Transport;
use alpaca_core::{ApiBase, Config, Error, Result, Stage, ValidationErrors};
use alpaca_models::schema::{BodySchema, QuerySchema, ResponseSchema};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Per-call payload: path parameters, query and body.
///
/// `Q` and `B` are the endpoint's input schemas; endpoints that take no query
/// or body use [`Never`](alpaca_models::schema::Never), so a value cannot be
/// passed for them.
pub struct Call<'a, Q, B> {
  pub path_params: &'a [(&'a str, &'a str)],
  pub query: Option<&'a Q>,
  pub body: Option<&'a B>,
}

impl<'a, Q, B> Call<'a, Q, B> {
  pub fn new() -> Self {
    Call { path_params: &[], query: None, body: None }
  }

  pub fn path(mut self, path_params: &'a [(&'a str, &'a str)]) -> Self {
    self.path_params = path_params;
    self
  }

  pub fn query(mut self, query: &'a Q) -> Self {
    self.query = Some(query);
    self
  }

  pub fn body(mut self, body: &'a B) -> Self {
    self.body = Some(body);
    self
  }
}

impl<Q, B> Default for Call<'_, Q, B> {
  fn default() -> Self {
    Self::new()
  }
}

/// Runs endpoint declarations against one API base.
#[derive(Debug, Clone)]
pub struct Invoker {
  base: ApiBase,
  base_url: Url,
  config: Arc<Config>,
  transport: Arc<Transport>,
}

impl Invoker {
  pub fn new(base: ApiBase, config: Arc<Config>, transport: Arc<Transport>) -> Result<Self> {
    let base_url = config.base_url(base)?;
    Ok(Self { base, base_url, config, transport })
  }

  pub fn base(&self) -> ApiBase {
    self.base
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// Run one logical operation.
  ///
  /// Fails with [`Error::Validation`] before anything is sent when the query
  /// or body is rejected, with [`Error::Api`] when the status is not the
  /// endpoint's ok status, and with [`Error::Decode`] or
  /// [`Error::Validation`] when an ok response does not match the response
  /// schema.
  #[instrument(
    name = "invoke",
    skip(self, endpoint, call),
    fields(endpoint = endpoint.decl.name, method = %endpoint.decl.method, path = endpoint.decl.path)
  )]
  pub async fn invoke<Q, B, R>(
    &self,
    endpoint: &Endpoint<Q, B, R>,
    call: Call<'_, Q, B>,
  ) -> Result<R::Output>
  where
    Q: QuerySchema,
    B: BodySchema,
    R: ResponseSchema,
  {
    let decl = &endpoint.decl;

    let query = match call.query {
      Some(query) => {
        Some(query.parse_input().map_err(|issues| rejected(decl, Stage::Input, issues))?)
      }
      None => None,
    };
    let body = match call.body {
      Some(body) => {
        Some(body.parse_input().map_err(|issues| rejected(decl, Stage::Input, issues))?)
      }
      None => None,
    };

    let path = decl.resolve_path(call.path_params)?;
    let request = build_request(
      &self.base_url,
      &path,
      decl.method,
      query.as_ref(),
      body.as_ref(),
      &self.config.credentials,
    )?;
    debug!(url = %request.url, "sending request");

    let response = self.transport.execute(&request).await?;

    if response.status != decl.ok_status {
      let message = decl.failure_message(response.status, &response.status_text, call.path_params);
      warn!(status = response.status, %message, "unexpected status");
      return Err(Error::Api { endpoint: decl.name.to_string(), status: response.status, message });
    }

    if !R::EXPECTS_CONTENT {
      return R::parse_output(&Value::Null).map_err(|issues| rejected(decl, Stage::Output, issues));
    }

    let value: Value = serde_json::from_slice(&response.body).map_err(|source| {
      error!(error = %source, "response body is not JSON");
      Error::Decode { endpoint: decl.name.to_string(), source }
    })?;

    R::parse_output(&value).map_err(|issues| {
      error!(%issues, "response failed validation");
      rejected(decl, Stage::Output, issues)
    })
  }
}

fn rejected(decl: &Declaration, stage: Stage, issues: ValidationErrors) -> Error {
  Error::Validation { endpoint: decl.name.to_string(), stage, issues }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::endpoints::orders::CREATE_ORDER;
  use alpaca_core::test_utils::test_config;
  use alpaca_models::CreateOrderBody;

  #[test]
  fn test_invoker_resolves_base_url() {
    let config = Arc::new(test_config("http://127.0.0.1:1"));
    let invoker = Invoker::new(ApiBase::Data, config, Arc::new(Transport::new())).unwrap();
    assert_eq!(invoker.base(), ApiBase::Data);
    assert_eq!(invoker.base_url().as_str(), "http://127.0.0.1:1/data/");
  }

  #[test]
  fn test_input_rejected_without_network() {
    let config = Arc::new(test_config("http://127.0.0.1:1"));
    let invoker = Invoker::new(ApiBase::Paper, config, Arc::new(Transport::new())).unwrap();
    let body = CreateOrderBody::default();

    let err = tokio_test::block_on(invoker.invoke(&CREATE_ORDER, Call::new().body(&body)));
    match err.unwrap_err() {
      Error::Validation { stage, issues, .. } => {
        assert_eq!(stage, Stage::Input);
        assert!(issues.at("$.type").is_some());
        assert!(issues.at("$.time_in_force").is_some());
      }
      other => panic!("unexpected error: {:?}", other),
    }
  }
}
