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

//! Watchlist endpoints, addressed either by name or by id

use crate::endpoint::{Declaration, Endpoint};
use crate::invoker::{Call, Invoker};
use alpaca_core::{Method, Result};
use alpaca_models::schema::{NoContent, Never};
use alpaca_models::{
  AddSymbolsBody, CreateWatchlistBody, UpdateWatchlistBody, Watchlist, WatchlistNameQuery,
};
use tracing::instrument;

pub static GET_ALL_WATCHLISTS: Endpoint<Never, Never, Vec<Watchlist>> =
  Endpoint::new("Get All Watchlists", Method::Get, "v2/watchlists", 200);

pub static CREATE_WATCHLIST: Endpoint<Never, CreateWatchlistBody, Watchlist> =
  Endpoint::new("Create Watchlist", Method::Post, "v2/watchlists", 200);

pub static GET_WATCHLIST_BY_NAME: Endpoint<WatchlistNameQuery, Never, Watchlist> =
  Endpoint::new("Get Watchlist by Name", Method::Get, "v2/watchlists:by_name", 200);

pub static GET_WATCHLIST: Endpoint<Never, Never, Watchlist> =
  Endpoint::new("Get Watchlist by ID", Method::Get, "v2/watchlists/{watchlist_id}", 200);

pub static UPDATE_WATCHLIST_BY_NAME: Endpoint<WatchlistNameQuery, UpdateWatchlistBody, Watchlist> =
  Endpoint::new("Update Watchlist by Name", Method::Put, "v2/watchlists:by_name", 200);

pub static UPDATE_WATCHLIST: Endpoint<Never, UpdateWatchlistBody, Watchlist> =
  Endpoint::new("Update Watchlist by ID", Method::Put, "v2/watchlists/{watchlist_id}", 200);

pub static ADD_SYMBOLS_BY_NAME: Endpoint<WatchlistNameQuery, AddSymbolsBody, Watchlist> =
  Endpoint::new("Add Symbols to Watchlist by Name", Method::Post, "v2/watchlists:by_name", 200);

pub static ADD_SYMBOLS: Endpoint<Never, AddSymbolsBody, Watchlist> = Endpoint::new(
  "Add Symbols to Watchlist by ID",
  Method::Post,
  "v2/watchlists/{watchlist_id}",
  200,
);

pub static DELETE_WATCHLIST_BY_NAME: Endpoint<WatchlistNameQuery, Never, NoContent> =
  Endpoint::new("Delete Watchlist by Name", Method::Delete, "v2/watchlists:by_name", 204);

pub static DELETE_WATCHLIST: Endpoint<Never, Never, NoContent> =
  Endpoint::new("Delete Watchlist by ID", Method::Delete, "v2/watchlists/{watchlist_id}", 204)
    .with_messages(&[(404, "Watchlist Not Found: {watchlist_id}")]);

pub static REMOVE_SYMBOL: Endpoint<Never, Never, NoContent> = Endpoint::new(
  "Remove Symbol from Watchlist by ID",
  Method::Delete,
  "v2/watchlists/{watchlist_id}/{symbol}",
  200,
);

pub static CATALOG: &[&Declaration] = &[
  &GET_ALL_WATCHLISTS.decl,
  &CREATE_WATCHLIST.decl,
  &GET_WATCHLIST_BY_NAME.decl,
  &GET_WATCHLIST.decl,
  &UPDATE_WATCHLIST_BY_NAME.decl,
  &UPDATE_WATCHLIST.decl,
  &ADD_SYMBOLS_BY_NAME.decl,
  &ADD_SYMBOLS.decl,
  &DELETE_WATCHLIST_BY_NAME.decl,
  &DELETE_WATCHLIST.decl,
  &REMOVE_SYMBOL.decl,
];

#[derive(Debug, Clone)]
pub struct WatchlistEndpoints {
  invoker: Invoker,
}

impl WatchlistEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<Watchlist>> {
    self.invoker.invoke(&GET_ALL_WATCHLISTS, Call::new()).await
  }

  #[instrument(skip(self, body))]
  pub async fn create(&self, body: &CreateWatchlistBody) -> Result<Watchlist> {
    self.invoker.invoke(&CREATE_WATCHLIST, Call::new().body(body)).await
  }

  #[instrument(skip(self))]
  pub async fn get_by_name(&self, name: &str) -> Result<Watchlist> {
    let query = WatchlistNameQuery::new(name);
    self.invoker.invoke(&GET_WATCHLIST_BY_NAME, Call::new().query(&query)).await
  }

  #[instrument(skip(self))]
  pub async fn get(&self, watchlist_id: &str) -> Result<Watchlist> {
    let path = [("watchlist_id", watchlist_id)];
    self.invoker.invoke(&GET_WATCHLIST, Call::new().path(&path)).await
  }

  /// Rename the list and/or replace its symbols.
  #[instrument(skip(self, body))]
  pub async fn update_by_name(&self, name: &str, body: &UpdateWatchlistBody) -> Result<Watchlist> {
    let query = WatchlistNameQuery::new(name);
    self.invoker.invoke(&UPDATE_WATCHLIST_BY_NAME, Call::new().query(&query).body(body)).await
  }

  #[instrument(skip(self, body))]
  pub async fn update(&self, watchlist_id: &str, body: &UpdateWatchlistBody) -> Result<Watchlist> {
    let path = [("watchlist_id", watchlist_id)];
    self.invoker.invoke(&UPDATE_WATCHLIST, Call::new().path(&path).body(body)).await
  }

  #[instrument(skip(self, body))]
  pub async fn add_symbols_by_name(&self, name: &str, body: &AddSymbolsBody) -> Result<Watchlist> {
    let query = WatchlistNameQuery::new(name);
    self.invoker.invoke(&ADD_SYMBOLS_BY_NAME, Call::new().query(&query).body(body)).await
  }

  #[instrument(skip(self, body))]
  pub async fn add_symbols(&self, watchlist_id: &str, body: &AddSymbolsBody) -> Result<Watchlist> {
    let path = [("watchlist_id", watchlist_id)];
    self.invoker.invoke(&ADD_SYMBOLS, Call::new().path(&path).body(body)).await
  }

  #[instrument(skip(self))]
  pub async fn delete_by_name(&self, name: &str) -> Result<()> {
    let query = WatchlistNameQuery::new(name);
    self.invoker.invoke(&DELETE_WATCHLIST_BY_NAME, Call::new().query(&query)).await
  }

  /// Delete a watchlist; a 404 fails with `Watchlist Not Found: <id>`.
  #[instrument(skip(self))]
  pub async fn delete(&self, watchlist_id: &str) -> Result<()> {
    let path = [("watchlist_id", watchlist_id)];
    self.invoker.invoke(&DELETE_WATCHLIST, Call::new().path(&path)).await
  }

  #[instrument(skip(self))]
  pub async fn remove_symbol(&self, watchlist_id: &str, symbol: &str) -> Result<()> {
    let path = [("watchlist_id", watchlist_id), ("symbol", symbol)];
    self.invoker.invoke(&REMOVE_SYMBOL, Call::new().path(&path)).await
  }
}
