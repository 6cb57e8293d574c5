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

//! Wire-level types shared by the request builder and the endpoint catalog

use serde::{Deserialize, Serialize};

/// HTTP methods the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
  Get,
  Options,
  Put,
  Delete,
  Post,
  Patch,
}

impl std::fmt::Display for Method {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Method {
  /// Upper-case method token as sent on the wire.
  pub const fn as_str(&self) -> &'static str {
    match self {
      Method::Get => "GET",
      Method::Options => "OPTIONS",
      Method::Put => "PUT",
      Method::Delete => "DELETE",
      Method::Post => "POST",
      Method::Patch => "PATCH",
    }
  }
}

/// The API host an endpoint group talks to.
///
/// Each variant maps to the `{base}` label of the host template, e.g.
/// `paper-api` in `https://paper-api.alpaca.markets/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiBase {
  /// Paper trading account
  Paper,
  /// Live trading account
  Live,
  /// Market data
  Data,
  /// Broker sandbox
  Broker,
}

impl std::fmt::Display for ApiBase {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

impl ApiBase {
  /// Host label substituted for `{base}`.
  pub const fn label(&self) -> &'static str {
    match self {
      ApiBase::Paper => "paper-api",
      ApiBase::Live => "live",
      ApiBase::Data => "data",
      ApiBase::Broker => "broker-api.sandbox",
    }
  }

  /// Trading base for the account mode.
  pub const fn trading(paper: bool) -> Self {
    if paper { ApiBase::Paper } else { ApiBase::Live }
  }
}
