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

//! Configuration management for the Alpaca client

use crate::error::{Error, Result};
use crate::types::ApiBase;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// API key id / secret pair sent with every request.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
  /// Value of the `APCA-API-KEY-ID` header
  pub key_id: String,

  /// Value of the `APCA-API-SECRET-KEY` header
  pub secret_key: String,
}

impl Credentials {
  pub fn new(key_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
    Self { key_id: key_id.into(), secret_key: secret_key.into() }
  }

  /// Load the pair from `APCA_API_KEY_ID` / `APCA_API_SECRET_KEY`.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let key_id = env::var("APCA_API_KEY_ID")
      .map_err(|_| Error::MissingCredentials("APCA_API_KEY_ID not set".to_string()))?;
    let secret_key = env::var("APCA_API_SECRET_KEY")
      .map_err(|_| Error::MissingCredentials("APCA_API_SECRET_KEY not set".to_string()))?;

    Ok(Self { key_id, secret_key })
  }
}

// never print the secret
impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("key_id", &self.key_id)
      .field("secret_key", &"<redacted>")
      .finish()
  }
}

/// Main configuration struct for the Alpaca client
///
/// Deserializing runs the same host template check as
/// [`Config::with_host_template`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "ConfigFile")]
pub struct Config {
  /// Key pair injected into every request
  pub credentials: Credentials,

  /// Paper trading (`paper-api`) instead of live trading
  pub paper: bool,

  /// Host template; `{base}` is replaced with the API base label
  pub host_template: String,
}

/// Unchecked shape of a serialized [`Config`].
#[derive(Deserialize)]
struct ConfigFile {
  credentials: Credentials,
  #[serde(default = "default_paper")]
  paper: bool,
  #[serde(default = "default_host_template")]
  host_template: String,
}

fn default_paper() -> bool {
  true
}

fn default_host_template() -> String {
  crate::DEFAULT_HOST_TEMPLATE.to_string()
}

impl TryFrom<ConfigFile> for Config {
  type Error = Error;

  fn try_from(file: ConfigFile) -> Result<Self> {
    Config::new(file.credentials, file.paper).with_host_template(file.host_template)
  }
}

impl Config {
  /// Create a config for explicit credentials with the default host template.
  pub fn new(credentials: Credentials, paper: bool) -> Self {
    Config { credentials, paper, host_template: crate::DEFAULT_HOST_TEMPLATE.to_string() }
  }

  /// Use explicit credentials when given, otherwise load them from the environment.
  pub fn resolve(credentials: Option<Credentials>, paper: bool) -> Result<Self> {
    let credentials = match credentials {
      Some(credentials) => credentials,
      None => Credentials::from_env()?,
    };
    Ok(Self::new(credentials, paper))
  }

  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let credentials = Credentials::from_env()?;

    let paper = match env::var("APCA_PAPER") {
      Ok(value) => parse_flag(&value)
        .ok_or_else(|| Error::Config(format!("Invalid APCA_PAPER: {}", value)))?,
      Err(_) => true,
    };

    let config = Config::new(credentials, paper);
    match env::var("APCA_HOST_TEMPLATE") {
      Ok(template) => config.with_host_template(template),
      Err(_) => Ok(config),
    }
  }

  /// Replace the host template after checking it yields a valid URL.
  pub fn with_host_template(mut self, template: impl Into<String>) -> Result<Self> {
    let template = template.into();
    if !template.contains(crate::BASE_PLACEHOLDER) {
      return Err(Error::Config(format!(
        "host template `{}` must contain {}",
        template,
        crate::BASE_PLACEHOLDER
      )));
    }
    self.host_template = template;
    self.base_url(ApiBase::Paper)?;
    Ok(self)
  }

  /// Trading base for the configured account mode.
  pub fn trading_base(&self) -> ApiBase {
    ApiBase::trading(self.paper)
  }

  /// Base URL for `base`, always ending in `/` so endpoint paths join below it.
  pub fn base_url(&self, base: ApiBase) -> Result<url::Url> {
    let mut raw = self.host_template.replace(crate::BASE_PLACEHOLDER, base.label());
    if !raw.ends_with('/') {
      raw.push('/');
    }
    url::Url::parse(&raw).map_err(|e| Error::InvalidUrl { url: raw.clone(), reason: e.to_string() })
  }
}

fn parse_flag(value: &str) -> Option<bool> {
  match value.trim().to_ascii_lowercase().as_str() {
    "1" | "true" | "yes" => Some(true),
    "0" | "false" | "no" => Some(false),
    _ => None,
  }
}
