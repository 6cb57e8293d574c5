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

//! Stock market data on the `data` base

use crate::endpoint::{Declaration, Endpoint};
use crate::invoker::{Call, Invoker};
use alpaca_core::{Method, Result};
use alpaca_models::schema::{Decode, Never};
use alpaca_models::{
  AuctionStats, Bar, CodeTable, ConditionCodesQuery, HistoricalQuery, Latest, MultiHistoricalQuery,
  MultiPage, MultiStockQuery, Page, Quote, StockQuery, StockSnapshot, Tick, TickType, Trade,
};
use tracing::instrument;

type Single<R> = Endpoint<StockQuery, Never, R>;
type Multi<R> = Endpoint<MultiStockQuery, Never, R>;
type Historical<R> = Endpoint<HistoricalQuery, Never, Page<R>>;
type MultiHistorical<R> = Endpoint<MultiHistoricalQuery, Never, MultiPage<R>>;

pub static LATEST_BAR: Single<Bar> =
  Endpoint::new("Latest bar (single symbol)", Method::Get, "v2/stocks/{symbol}/bars/latest", 200);

pub static LATEST_BARS: Multi<Latest<Bar>> =
  Endpoint::new("Latest Bars", Method::Get, "v2/stocks/bars/latest", 200);

pub static LATEST_QUOTE: Single<Quote> = Endpoint::new(
  "Latest quote (single symbol)",
  Method::Get,
  "v2/stocks/{symbol}/quotes/latest",
  200,
);

pub static LATEST_QUOTES: Multi<Latest<Quote>> =
  Endpoint::new("Latest quotes", Method::Get, "v2/stocks/quotes/latest", 200);

pub static LATEST_TRADE: Single<Trade> = Endpoint::new(
  "Latest trade (single symbol)",
  Method::Get,
  "v2/stocks/{symbol}/trades/latest",
  200,
);

pub static LATEST_TRADES: Multi<Latest<Trade>> =
  Endpoint::new("Latest trades", Method::Get, "v2/stocks/trades/latest", 200);

pub static AUCTIONS: Historical<AuctionStats> = Endpoint::new(
  "Historical auctions (single symbol)",
  Method::Get,
  "v2/stocks/{symbol}/auctions",
  200,
);

pub static MULTI_AUCTIONS: MultiHistorical<AuctionStats> =
  Endpoint::new("Historical auctions", Method::Get, "v2/stocks/auctions", 200);

pub static BARS: Historical<Bar> =
  Endpoint::new("Historical bars (single symbol)", Method::Get, "v2/stocks/{symbol}/bars", 200);

pub static MULTI_BARS: MultiHistorical<Bar> =
  Endpoint::new("Historical bars", Method::Get, "v2/stocks/bars", 200);

pub static QUOTES: Historical<Quote> = Endpoint::new(
  "Historical quotes (single symbol)",
  Method::Get,
  "v2/stocks/{symbol}/quotes",
  200,
);

pub static MULTI_QUOTES: MultiHistorical<Quote> =
  Endpoint::new("Historical quotes", Method::Get, "v2/stocks/quotes", 200);

pub static TRADES: Historical<Trade> = Endpoint::new(
  "Historical trades (single symbol)",
  Method::Get,
  "v2/stocks/{symbol}/trades",
  200,
);

pub static MULTI_TRADES: MultiHistorical<Trade> =
  Endpoint::new("Historical trades", Method::Get, "v2/stocks/trades", 200);

pub static SNAPSHOT: Single<StockSnapshot> =
  Endpoint::new("Snapshot", Method::Get, "v2/stocks/{symbol}/snapshot", 200);

pub static SNAPSHOTS: Multi<Vec<StockSnapshot>> =
  Endpoint::new("Snapshots", Method::Get, "v2/stocks/snapshots", 200);

pub static CONDITION_CODES: Endpoint<ConditionCodesQuery, Never, CodeTable> =
  Endpoint::new("Condition codes", Method::Get, "v2/stocks/meta/conditions/{tick_type}", 200);

pub static EXCHANGE_CODES: Endpoint<Never, Never, CodeTable> =
  Endpoint::new("Exchange codes", Method::Get, "v2/stocks/meta/exchanges", 200);

pub static CATALOG: &[&Declaration] = &[
  &LATEST_BAR.decl,
  &LATEST_BARS.decl,
  &LATEST_QUOTE.decl,
  &LATEST_QUOTES.decl,
  &LATEST_TRADE.decl,
  &LATEST_TRADES.decl,
  &AUCTIONS.decl,
  &MULTI_AUCTIONS.decl,
  &BARS.decl,
  &MULTI_BARS.decl,
  &QUOTES.decl,
  &MULTI_QUOTES.decl,
  &TRADES.decl,
  &MULTI_TRADES.decl,
  &SNAPSHOT.decl,
  &SNAPSHOTS.decl,
  &CONDITION_CODES.decl,
  &EXCHANGE_CODES.decl,
];

/// Stock bars, quotes, trades, auctions and snapshots.
#[derive(Debug, Clone)]
pub struct StockEndpoints {
  invoker: Invoker,
}

impl StockEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  async fn single<R>(&self, endpoint: &Single<R>, symbol: &str, query: &StockQuery) -> Result<R>
  where
    R: Decode,
  {
    let path = [("symbol", symbol)];
    self.invoker.invoke(endpoint, Call::new().path(&path).query(query)).await
  }

  async fn history<T>(
    &self,
    endpoint: &Historical<T>,
    symbol: &str,
    query: &HistoricalQuery,
  ) -> Result<Page<T>>
  where
    T: Tick,
  {
    let path = [("symbol", symbol)];
    self.invoker.invoke(endpoint, Call::new().path(&path).query(query)).await
  }

  #[instrument(skip(self, query))]
  pub async fn latest_bar(&self, symbol: &str, query: &StockQuery) -> Result<Bar> {
    self.single(&LATEST_BAR, symbol, query).await
  }

  #[instrument(skip(self, query))]
  pub async fn latest_bars(&self, query: &MultiStockQuery) -> Result<Latest<Bar>> {
    self.invoker.invoke(&LATEST_BARS, Call::new().query(query)).await
  }

  #[instrument(skip(self, query))]
  pub async fn latest_quote(&self, symbol: &str, query: &StockQuery) -> Result<Quote> {
    self.single(&LATEST_QUOTE, symbol, query).await
  }

  #[instrument(skip(self, query))]
  pub async fn latest_quotes(&self, query: &MultiStockQuery) -> Result<Latest<Quote>> {
    self.invoker.invoke(&LATEST_QUOTES, Call::new().query(query)).await
  }

  #[instrument(skip(self, query))]
  pub async fn latest_trade(&self, symbol: &str, query: &StockQuery) -> Result<Trade> {
    self.single(&LATEST_TRADE, symbol, query).await
  }

  #[instrument(skip(self, query))]
  pub async fn latest_trades(&self, query: &MultiStockQuery) -> Result<Latest<Trade>> {
    self.invoker.invoke(&LATEST_TRADES, Call::new().query(query)).await
  }

  /// Opening and closing auctions per day.
  #[instrument(skip(self, query))]
  pub async fn auctions(&self, symbol: &str, query: &HistoricalQuery) -> Result<Page<AuctionStats>> {
    self.history(&AUCTIONS, symbol, query).await
  }

  #[instrument(skip(self, query))]
  pub async fn multi_auctions(
    &self,
    query: &MultiHistoricalQuery,
  ) -> Result<MultiPage<AuctionStats>> {
    self.invoker.invoke(&MULTI_AUCTIONS, Call::new().query(query)).await
  }

  /// One page of bars; pass `next_page_token` back as `page_token` for the next.
  ///
  /// ```ignore
  /// let window =
  ///   HistoricalQuery { timeframe: Some("1Day".into()), limit: Some(50), ..Default::default() };
  /// let page = client.stocks().bars("AAPL", &window).await?;
  /// for bar in &page.items {
  ///   println!("{} close {}", bar.timestamp, bar.closing_price);
  /// }
  /// ```
  #[instrument(skip(self, query))]
  pub async fn bars(&self, symbol: &str, query: &HistoricalQuery) -> Result<Page<Bar>> {
    self.history(&BARS, symbol, query).await
  }

  #[instrument(skip(self, query))]
  pub async fn multi_bars(&self, query: &MultiHistoricalQuery) -> Result<MultiPage<Bar>> {
    self.invoker.invoke(&MULTI_BARS, Call::new().query(query)).await
  }

  #[instrument(skip(self, query))]
  pub async fn quotes(&self, symbol: &str, query: &HistoricalQuery) -> Result<Page<Quote>> {
    self.history(&QUOTES, symbol, query).await
  }

  #[instrument(skip(self, query))]
  pub async fn multi_quotes(&self, query: &MultiHistoricalQuery) -> Result<MultiPage<Quote>> {
    self.invoker.invoke(&MULTI_QUOTES, Call::new().query(query)).await
  }

  #[instrument(skip(self, query))]
  pub async fn trades(&self, symbol: &str, query: &HistoricalQuery) -> Result<Page<Trade>> {
    self.history(&TRADES, symbol, query).await
  }

  #[instrument(skip(self, query))]
  pub async fn multi_trades(&self, query: &MultiHistoricalQuery) -> Result<MultiPage<Trade>> {
    self.invoker.invoke(&MULTI_TRADES, Call::new().query(query)).await
  }

  #[instrument(skip(self, query))]
  pub async fn snapshot(&self, symbol: &str, query: &StockQuery) -> Result<StockSnapshot> {
    self.single(&SNAPSHOT, symbol, query).await
  }

  #[instrument(skip(self, query))]
  pub async fn snapshots(&self, query: &MultiStockQuery) -> Result<Vec<StockSnapshot>> {
    self.invoker.invoke(&SNAPSHOTS, Call::new().query(query)).await
  }

  /// Condition code descriptions for trades or quotes on one tape.
  #[instrument(skip(self, query))]
  pub async fn condition_codes(
    &self,
    tick_type: TickType,
    query: &ConditionCodesQuery,
  ) -> Result<CodeTable> {
    let tick_type = tick_type.to_string();
    let path = [("tick_type", tick_type.as_str())];
    self.invoker.invoke(&CONDITION_CODES, Call::new().path(&path).query(query)).await
  }

  #[instrument(skip(self))]
  pub async fn exchange_codes(&self) -> Result<CodeTable> {
    self.invoker.invoke(&EXCHANGE_CODES, Call::new()).await
  }
}
