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

//! Account, portfolio history and account configuration endpoints

use crate::endpoint::{Declaration, Endpoint};
use crate::invoker::{Call, Invoker};
use alpaca_core::{Method, Result};
use alpaca_models::schema::Never;
use alpaca_models::{Account, AccountConfigurations, History, HistoryQuery};
use tracing::instrument;

pub static GET_ACCOUNT: Endpoint<Never, Never, Account> =
  Endpoint::new("Get Account", Method::Get, "v2/account", 200);

pub static GET_PORTFOLIO_HISTORY: Endpoint<HistoryQuery, Never, History> =
  Endpoint::new("Get Account Portfolio History", Method::Get, "v2/account/portfolio/history", 200);

pub static GET_CONFIGURATIONS: Endpoint<Never, Never, AccountConfigurations> =
  Endpoint::new("Get Account Configurations", Method::Get, "v2/account/configurations", 200);

pub static UPDATE_CONFIGURATIONS: Endpoint<Never, AccountConfigurations, AccountConfigurations> =
  Endpoint::new("Account Configurations", Method::Patch, "v2/account/configurations", 200);

pub static CATALOG: &[&Declaration] = &[
  &GET_ACCOUNT.decl,
  &GET_PORTFOLIO_HISTORY.decl,
  &GET_CONFIGURATIONS.decl,
  &UPDATE_CONFIGURATIONS.decl,
];

/// Account endpoints on the trading base.
#[derive(Debug, Clone)]
pub struct AccountEndpoints {
  invoker: Invoker,
}

impl AccountEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  /// Balances, buying power and status of the account.
  ///
  /// ```ignore
  /// let account = client.account().get().await?;
  /// println!("buying power: {:?}", account.buying_power);
  /// ```
  #[instrument(skip(self))]
  pub async fn get(&self) -> Result<Account> {
    self.invoker.invoke(&GET_ACCOUNT, Call::new()).await
  }

  /// Equity and profit/loss over time, pivoted into one frame per timestamp.
  #[instrument(skip(self, query))]
  pub async fn portfolio_history(&self, query: &HistoryQuery) -> Result<History> {
    self.invoker.invoke(&GET_PORTFOLIO_HISTORY, Call::new().query(query)).await
  }

  #[instrument(skip(self))]
  pub async fn configurations(&self) -> Result<AccountConfigurations> {
    self.invoker.invoke(&GET_CONFIGURATIONS, Call::new()).await
  }

  /// Replace the account configurations and return what the server stored.
  #[instrument(skip(self, configurations))]
  pub async fn update_configurations(
    &self,
    configurations: &AccountConfigurations,
  ) -> Result<AccountConfigurations> {
    self.invoker.invoke(&UPDATE_CONFIGURATIONS, Call::new().body(configurations)).await
  }
}
