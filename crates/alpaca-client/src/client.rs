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

use crate::endpoint::Declaration;
use crate::endpoints::{
  account::AccountEndpoints,
  assets::{AssetEndpoints, OptionEndpoints, TreasuryEndpoints},
  calendar::CalendarEndpoints,
  orders::OrderEndpoints,
  positions::PositionEndpoints,
  stocks::StockEndpoints,
  watchlists::WatchlistEndpoints,
};
use crate::endpoints::lookup;
use crate::invoker::Invoker;
use crate::request::check_credentials;
use crate::transport::Transport;
use alpaca_core::{ApiBase, Config, Credentials, Error, Result};
use std::sync::Arc;

/// Main Alpaca API client
///
/// Hands out endpoint groups that share one configuration and one HTTP
/// transport. The client is cheap to clone and safe to share between tasks;
/// concurrent calls are independent of each other.
///
/// # Examples
///
/// ```ignore
/// use alpaca_client::AlpacaClient;
/// use alpaca_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///   let client = AlpacaClient::new(Config::from_env()?)?;
///
///   let clock = client.calendar().clock().await?;
///   println!("market open: {}", clock.is_open);
///
///   let positions = client.positions().list().await?;
///   println!("{} open positions", positions.len());
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AlpacaClient {
  config: Arc<Config>,
  transport: Arc<Transport>,
  trading: Invoker,
  data: Invoker,
  broker: Invoker,
}

impl AlpacaClient {
  /// Create a client from an explicit configuration.
  ///
  /// # Errors
  ///
  /// Fails when the credentials cannot be sent as headers or the host
  /// template does not yield valid base URLs.
  pub fn new(config: Config) -> Result<Self> {
    Self::with_transport(config, Transport::new())
  }

  /// Create a client over a caller-built transport.
  pub fn with_transport(config: Config, transport: Transport) -> Result<Self> {
    check_credentials(&config.credentials)?;

    let config = Arc::new(config);
    let transport = Arc::new(transport);
    let trading = Invoker::new(config.trading_base(), config.clone(), transport.clone())?;
    let data = Invoker::new(ApiBase::Data, config.clone(), transport.clone())?;
    let broker = Invoker::new(ApiBase::Broker, config.clone(), transport.clone())?;

    Ok(Self { config, transport, trading, data, broker })
  }

  /// Use `credentials` when given, otherwise load them from the environment.
  ///
  /// ```rust,no_run
  /// use alpaca_client::AlpacaClient;
  ///
  /// let client = AlpacaClient::connect(None, true).expect("credentials in the environment");
  /// ```
  pub fn connect(credentials: Option<Credentials>, paper: bool) -> Result<Self> {
    Self::new(Config::resolve(credentials, paper)?)
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Whether trading calls go to the paper account.
  pub fn is_paper(&self) -> bool {
    self.config.paper
  }

  /// Account details, portfolio history and configurations
  pub fn account(&self) -> AccountEndpoints {
    AccountEndpoints::new(self.trading.clone())
  }

  /// Tradable assets
  pub fn assets(&self) -> AssetEndpoints {
    AssetEndpoints::new(self.trading.clone())
  }

  /// Option contracts
  pub fn options(&self) -> OptionEndpoints {
    OptionEndpoints::new(self.trading.clone())
  }

  /// US treasuries
  pub fn treasuries(&self) -> TreasuryEndpoints {
    TreasuryEndpoints::new(self.trading.clone())
  }

  /// Open positions
  pub fn positions(&self) -> PositionEndpoints {
    PositionEndpoints::new(self.trading.clone())
  }

  /// Orders
  pub fn orders(&self) -> OrderEndpoints {
    OrderEndpoints::new(self.trading.clone())
  }

  /// Watchlists
  pub fn watchlists(&self) -> WatchlistEndpoints {
    WatchlistEndpoints::new(self.trading.clone())
  }

  /// Market calendar and clock
  pub fn calendar(&self) -> CalendarEndpoints {
    CalendarEndpoints::new(self.trading.clone())
  }

  /// Stock market data
  pub fn stocks(&self) -> StockEndpoints {
    StockEndpoints::new(self.data.clone())
  }

  /// Invoker bound to the broker sandbox.
  ///
  /// No broker endpoints are declared here; callers run their own
  /// [`Endpoint`](crate::Endpoint) declarations through the same pipeline.
  pub fn broker(&self) -> &Invoker {
    &self.broker
  }

  /// Catalog declaration named `name` with the invoker for the base it is
  /// served from under this configuration.
  pub fn operation(&self, name: &str) -> Result<(&'static Declaration, Invoker)> {
    let (domain, decl) =
      lookup(name).ok_or_else(|| Error::Config(format!("unknown operation `{}`", name)))?;
    Ok((decl, self.invoker(domain.base(self.is_paper()))?))
  }

  /// Invoker for `base`, for declarations outside the catalog.
  pub fn invoker(&self, base: ApiBase) -> Result<Invoker> {
    match base {
      ApiBase::Data => Ok(self.data.clone()),
      ApiBase::Broker => Ok(self.broker.clone()),
      base if base == self.trading.base() => Ok(self.trading.clone()),
      base => Invoker::new(base, self.config.clone(), self.transport.clone()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alpaca_core::test_utils::test_config;

  #[test]
  fn test_invokers_follow_config() {
    let client = AlpacaClient::new(test_config("http://127.0.0.1:9")).unwrap();
    assert!(client.is_paper());
    assert_eq!(
      client.invoker(ApiBase::Paper).unwrap().base_url().as_str(),
      "http://127.0.0.1:9/paper-api/"
    );
    assert_eq!(client.invoker(ApiBase::Data).unwrap().base(), ApiBase::Data);
    assert_eq!(client.broker().base_url().as_str(), "http://127.0.0.1:9/broker-api.sandbox/");
  }

  #[test]
  fn test_live_mode_uses_live_base() {
    let mut config = test_config("http://127.0.0.1:9");
    config.paper = false;
    let client = AlpacaClient::new(config).unwrap();
    assert_eq!(
      client.invoker(ApiBase::Live).unwrap().base_url().as_str(),
      "http://127.0.0.1:9/live/"
    );
  }

  #[test]
  fn test_operation_resolves_its_base() {
    let client = AlpacaClient::new(test_config("http://127.0.0.1:9")).unwrap();
    let (decl, invoker) = client.operation("Get Account").unwrap();
    assert_eq!(decl.path, "v2/account");
    assert_eq!(invoker.base(), ApiBase::Paper);

    let (_, invoker) = client.operation("Snapshots").unwrap();
    assert_eq!(invoker.base_url().as_str(), "http://127.0.0.1:9/data/");

    assert!(matches!(client.operation("Get Option Chain"), Err(Error::Config(_))));
  }

  #[test]
  fn test_rejects_header_unsafe_credentials() {
    let mut config = test_config("http://127.0.0.1:9");
    config.credentials = Credentials::new("id", "line\nbreak");
    assert!(matches!(AlpacaClient::new(config), Err(Error::Config(_))));
  }

  #[test]
  fn test_client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AlpacaClient>();
  }
}
