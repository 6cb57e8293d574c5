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

//! Instrument endpoints: assets, option contracts and US treasuries

use crate::endpoint::{Declaration, Endpoint};
use crate::invoker::{Call, Invoker};
use alpaca_core::{Method, Result};
use alpaca_models::schema::Never;
use alpaca_models::{
  Asset, AssetsQuery, OptionContract, OptionContracts, OptionContractsQuery, Treasuries,
  TreasuriesQuery, Treasury,
};
use tracing::instrument;

pub static GET_ASSETS: Endpoint<AssetsQuery, Never, Vec<Asset>> =
  Endpoint::new("Get Assets", Method::Get, "v2/assets", 200);

pub static GET_ASSET: Endpoint<Never, Never, Asset> =
  Endpoint::new("Get Asset", Method::Get, "v2/assets/{symbol_or_asset_id}", 200)
    .with_messages(&[(404, "Asset Not Found: {symbol_or_asset_id}")]);

pub static GET_OPTION_CONTRACTS: Endpoint<OptionContractsQuery, Never, OptionContracts> =
  Endpoint::new("Get Option Contracts", Method::Get, "v2/options/contracts", 200);

pub static GET_OPTION_CONTRACT: Endpoint<Never, Never, OptionContract> =
  Endpoint::new("Get Option Contract", Method::Get, "v2/options/contracts/{symbol_or_id}", 200)
    .with_messages(&[(404, "Option Contract Not Found: {symbol_or_id}")]);

pub static GET_TREASURIES: Endpoint<TreasuriesQuery, Never, Treasuries> =
  Endpoint::new("Get Treasuries", Method::Get, "v2/treasuries", 200).with_messages(&[
    (400, "Bad Request"),
    (403, "Forbidden"),
    (429, "Too Many Requests"),
    (500, "Internal Server Error"),
  ]);

pub static CATALOG: &[&Declaration] = &[
  &GET_ASSETS.decl,
  &GET_ASSET.decl,
  &GET_OPTION_CONTRACTS.decl,
  &GET_OPTION_CONTRACT.decl,
  &GET_TREASURIES.decl,
];

/// Tradable assets.
#[derive(Debug, Clone)]
pub struct AssetEndpoints {
  invoker: Invoker,
}

impl AssetEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  #[instrument(skip(self, query))]
  pub async fn list(&self, query: &AssetsQuery) -> Result<Vec<Asset>> {
    self.invoker.invoke(&GET_ASSETS, Call::new().query(query)).await
  }

  /// Look up one asset by symbol or asset id.
  ///
  /// A 404 fails with `Asset Not Found: <symbol_or_asset_id>`.
  #[instrument(skip(self))]
  pub async fn get(&self, symbol_or_asset_id: &str) -> Result<Asset> {
    let path = [("symbol_or_asset_id", symbol_or_asset_id)];
    self.invoker.invoke(&GET_ASSET, Call::new().path(&path)).await
  }
}

/// Option contracts.
#[derive(Debug, Clone)]
pub struct OptionEndpoints {
  invoker: Invoker,
}

impl OptionEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  /// Contracts matching `query`, unwrapped from the `option_contracts` envelope.
  #[instrument(skip(self, query))]
  pub async fn contracts(&self, query: &OptionContractsQuery) -> Result<Vec<OptionContract>> {
    self.invoker.invoke(&GET_OPTION_CONTRACTS, Call::new().query(query)).await
  }

  #[instrument(skip(self))]
  pub async fn contract(&self, symbol_or_id: &str) -> Result<OptionContract> {
    let path = [("symbol_or_id", symbol_or_id)];
    self.invoker.invoke(&GET_OPTION_CONTRACT, Call::new().path(&path)).await
  }
}

/// US treasury bonds.
#[derive(Debug, Clone)]
pub struct TreasuryEndpoints {
  invoker: Invoker,
}

impl TreasuryEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  #[instrument(skip(self, query))]
  pub async fn list(&self, query: &TreasuriesQuery) -> Result<Vec<Treasury>> {
    self.invoker.invoke(&GET_TREASURIES, Call::new().query(query)).await
  }
}
