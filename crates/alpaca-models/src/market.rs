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

//! Stock market data: bars, quotes, trades, auctions and snapshots
//!
//! Upstream uses one or two letter keys for ticks (`t`, `o`, `bx`, ...). The
//! models here carry descriptive names instead; the mapping is documented on
//! each field.

use crate::enums::{Currency, ExchangeCode, SortDirection, StockFeed, Tape, TradeUpdate};
use crate::schema::{
  date, date_time, mismatch, stock_symbol, uint_u32, uint_u64, Decode, FieldPath, InputCheck,
  ObjectReader, QueryParams, QuerySchema,
};
use alpaca_core::ValidationErrors;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Smallest and largest page sizes of the historical endpoints.
pub const HISTORICAL_LIMIT: (i64, i64) = (1, 10_000);

/// OHLC bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
  /// `t`
  pub timestamp: DateTime<Utc>,
  /// `o`
  pub opening_price: f64,
  /// `h`
  pub high_price: f64,
  /// `l`
  pub low_price: f64,
  /// `c`
  pub closing_price: f64,
  /// `v`
  pub volume: i64,
  /// `n`
  pub trade_count: i64,
  /// `vw`, volume weighted average price
  pub vwap: f64,
}

impl Decode for Bar {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let timestamp = obj.required_with("t", date_time);
    let opening_price = obj.required("o");
    let high_price = obj.required("h");
    let low_price = obj.required("l");
    let closing_price = obj.required("c");
    let volume = obj.required("v");
    let trade_count = obj.required("n");
    let vwap = obj.required("vw");
    obj.finish_strict();

    Some(Bar {
      timestamp: timestamp?,
      opening_price: opening_price?,
      high_price: high_price?,
      low_price: low_price?,
      closing_price: closing_price?,
      volume: volume?,
      trade_count: trade_count?,
      vwap: vwap?,
    })
  }
}

/// NBBO quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
  /// `t`
  pub timestamp: DateTime<Utc>,
  /// `bx`
  pub bid_exchange: String,
  /// `bp`
  pub bid_price: f64,
  /// `bs`
  pub bid_size: u32,
  /// `ax`
  pub ask_exchange: String,
  /// `ap`
  pub ask_price: f64,
  /// `as`
  pub ask_size: u32,
  /// `c`
  pub condition_flags: Vec<String>,
  /// `z`
  pub exchange_code: ExchangeCode,
}

impl Decode for Quote {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let timestamp = obj.required_with("t", date_time);
    let bid_exchange = obj.required("bx");
    let bid_price = obj.required("bp");
    let bid_size = obj.required_with("bs", uint_u32);
    let ask_exchange = obj.required("ax");
    let ask_price = obj.required("ap");
    let ask_size = obj.required_with("as", uint_u32);
    let condition_flags = obj.required("c");
    let exchange_code = obj.required("z");
    obj.finish_strict();

    Some(Quote {
      timestamp: timestamp?,
      bid_exchange: bid_exchange?,
      bid_price: bid_price?,
      bid_size: bid_size?,
      ask_exchange: ask_exchange?,
      ask_price: ask_price?,
      ask_size: ask_size?,
      condition_flags: condition_flags?,
      exchange_code: exchange_code?,
    })
  }
}

/// Trade print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
  /// `t`
  pub timestamp: DateTime<Utc>,
  /// `x`
  pub exchange: String,
  /// `p`
  pub price: f64,
  /// `s`
  pub size: u32,
  /// `i`
  pub id: u64,
  /// `c`
  pub condition_flags: Vec<String>,
  /// `z`
  pub exchange_code: ExchangeCode,
  /// `u`
  pub update: Option<TradeUpdate>,
}

impl Decode for Trade {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let timestamp = obj.required_with("t", date_time);
    let exchange = obj.required("x");
    let price = obj.required("p");
    let size = obj.required_with("s", uint_u32);
    let id = obj.required_with("i", uint_u64);
    let condition_flags = obj.required("c");
    let exchange_code = obj.required("z");
    let update = obj.optional("u");
    obj.finish_strict();

    Some(Trade {
      timestamp: timestamp?,
      exchange: exchange?,
      price: price?,
      size: size?,
      id: id?,
      condition_flags: condition_flags?,
      exchange_code: exchange_code?,
      update: update?,
    })
  }
}

/// Opening or closing auction print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Auction {
  /// `t`
  pub timestamp: DateTime<Utc>,
  /// `x`
  pub exchange: String,
  /// `p`
  pub price: f64,
  /// `s`
  pub size: u64,
  /// `c`
  pub condition: String,
}

impl Decode for Auction {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let timestamp = obj.required_with("t", date_time);
    let exchange = obj.required("x");
    let price = obj.required("p");
    let size = obj.required_with("s", uint_u64);
    let condition = obj.required("c");
    obj.finish_strict();

    Some(Auction {
      timestamp: timestamp?,
      exchange: exchange?,
      price: price?,
      size: size?,
      condition: condition?,
    })
  }
}

/// Auctions of one trading day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuctionStats {
  /// `d`
  pub date: NaiveDate,
  /// `o`
  pub opening: Vec<Auction>,
  /// `c`
  pub closing: Vec<Auction>,
}

impl Decode for AuctionStats {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let day = obj.required_with("d", date);
    let opening = obj.required("o");
    let closing = obj.required("c");
    obj.finish_strict();

    Some(AuctionStats { date: day?, opening: opening?, closing: closing? })
  }
}

/// A market data record type and the envelope key its lists travel under.
pub trait Tick: Decode {
  const KEY: &'static str;
}

impl Tick for Bar {
  const KEY: &'static str = "bars";
}

impl Tick for Quote {
  const KEY: &'static str = "quotes";
}

impl Tick for Trade {
  const KEY: &'static str = "trades";
}

impl Tick for AuctionStats {
  const KEY: &'static str = "auctions";
}

/// Object keyed by stock symbol.
fn symbol_map<T: Decode>(
  value: &Value,
  path: &FieldPath,
  issues: &mut ValidationErrors,
) -> Option<BTreeMap<String, T>> {
  let map = BTreeMap::<String, T>::decode(value, path, issues)?;
  let mut valid = true;
  for key in map.keys() {
    if stock_symbol(&Value::from(key.as_str()), &path.key(key), issues).is_none() {
      valid = false;
    }
  }
  valid.then_some(map)
}

/// Latest records of several symbols.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Latest<T> {
  pub items: Vec<T>,
  pub currency: Currency,
}

impl<T: Tick> Decode for Latest<T> {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let items = obj.required(T::KEY);
    let currency = obj.required("currency");
    obj.finish_tolerant();

    Some(Latest { items: items?, currency: currency? })
  }
}

/// One page of historical records of a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
  pub symbol: Option<String>,
  pub items: Vec<T>,
  pub next_page_token: Option<String>,
  pub currency: Option<Currency>,
}

impl<T: Tick> Decode for Page<T> {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let symbol = obj.optional_with("symbol", stock_symbol);
    let items = obj.required(T::KEY);
    let next_page_token = obj.required("next_page_token");
    let currency = obj.optional("currency");
    obj.finish_tolerant();

    Some(Page {
      symbol: symbol?,
      items: items?,
      next_page_token: next_page_token?,
      currency: currency?,
    })
  }
}

/// One page of historical records keyed by symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiPage<T> {
  pub items: BTreeMap<String, Vec<T>>,
  pub next_page_token: Option<String>,
  pub currency: Currency,
}

impl<T: Tick> Decode for MultiPage<T> {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let items = obj.required_with(T::KEY, symbol_map);
    let next_page_token = obj.required("next_page_token");
    let currency = obj.required("currency");
    obj.finish_tolerant();

    Some(MultiPage { items: items?, next_page_token: next_page_token?, currency: currency? })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockSnapshot {
  pub symbol: String,
  pub currency: Currency,
  pub daily_bar: Bar,
  pub latest_quote: Quote,
  pub latest_trade: Trade,
  pub minute_bar: Bar,
  pub prev_daily_bar: Bar,
}

impl Decode for StockSnapshot {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let symbol = obj.required_with("symbol", stock_symbol);
    let currency = obj.required("currency");
    let daily_bar = obj.required("dailyBar");
    let latest_quote = obj.required("latestQuote");
    let latest_trade = obj.required("latestTrade");
    let minute_bar = obj.required("minuteBar");
    let prev_daily_bar = obj.required("prevDailyBar");
    obj.finish_strict();

    Some(StockSnapshot {
      symbol: symbol?,
      currency: currency?,
      daily_bar: daily_bar?,
      latest_quote: latest_quote?,
      latest_trade: latest_trade?,
      minute_bar: minute_bar?,
      prev_daily_bar: prev_daily_bar?,
    })
  }
}

/// Single character code to description, as served by the meta endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodeTable(pub BTreeMap<char, String>);

impl CodeTable {
  pub fn get(&self, code: char) -> Option<&str> {
    self.0.get(&code).map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl Decode for CodeTable {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let raw = BTreeMap::<String, String>::decode(value, path, issues)?;
    let mut table = BTreeMap::new();
    let mut valid = true;
    for (code, description) in raw {
      let mut chars = code.chars();
      match (chars.next(), chars.next()) {
        (Some(c), None) => {
          table.insert(c, description);
        }
        _ => {
          let key_path = path.key(&code);
          mismatch::<()>(&key_path, "single character code", &Value::from(code), issues);
          valid = false;
        }
      }
    }
    valid.then_some(CodeTable(table))
  }
}

/// Feed and currency of a single-symbol request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockQuery {
  pub feed: Option<StockFeed>,
  pub currency: Option<Currency>,
}

impl QuerySchema for StockQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut params = QueryParams::new();
    params.set_opt("feed", self.feed);
    params.set_opt("currency", self.currency);
    Ok(params)
  }
}

fn check_symbols(check: &mut InputCheck, symbols: &[String]) {
  for (i, symbol) in symbols.iter().enumerate() {
    check.symbol(&format!("symbols[{}]", i), symbol);
  }
}

/// Multi-symbol request; symbols are sent comma separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiStockQuery {
  pub symbols: Vec<String>,
  pub feed: Option<StockFeed>,
  pub currency: Option<Currency>,
}

impl MultiStockQuery {
  pub fn new<S: Into<String>>(symbols: impl IntoIterator<Item = S>) -> Self {
    Self { symbols: symbols.into_iter().map(Into::into).collect(), ..Default::default() }
  }
}

impl QuerySchema for MultiStockQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    check_symbols(&mut check, &self.symbols);
    check.finish()?;

    let mut params = QueryParams::new();
    params.set_joined("symbols", Some(self.symbols.as_slice()));
    params.set_opt("feed", self.feed);
    params.set_opt("currency", self.currency);
    Ok(params)
  }
}

/// Time window and paging of the historical endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalQuery {
  /// Bar aggregation such as `1Min` or `1Day`; only read by the bars endpoints
  pub timeframe: Option<String>,
  pub start: Option<DateTime<Utc>>,
  pub end: Option<DateTime<Utc>>,
  pub limit: Option<i64>,
  pub asof: Option<NaiveDate>,
  pub feed: Option<StockFeed>,
  pub currency: Option<Currency>,
  pub page_token: Option<String>,
  pub sort: Option<SortDirection>,
}

impl HistoricalQuery {
  fn check(&self, check: &mut InputCheck) {
    if let Some(timeframe) = &self.timeframe {
      check.non_empty("timeframe", timeframe);
    }
    if let Some(limit) = self.limit {
      check.range("limit", limit, HISTORICAL_LIMIT.0, HISTORICAL_LIMIT.1);
    }
  }

  fn encode(&self, params: &mut QueryParams) {
    params.set_opt("timeframe", self.timeframe.as_deref());
    params.set_opt("start", self.start);
    params.set_opt("end", self.end);
    params.set_opt("limit", self.limit);
    params.set_opt("asof", self.asof);
    params.set_opt("feed", self.feed);
    params.set_opt("currency", self.currency);
    params.set_opt("page_token", self.page_token.as_deref());
    params.set_opt("sort", self.sort);
  }
}

impl QuerySchema for HistoricalQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    self.check(&mut check);
    check.finish()?;

    let mut params = QueryParams::new();
    self.encode(&mut params);
    Ok(params)
  }
}

/// Historical request over several symbols.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiHistoricalQuery {
  pub symbols: Vec<String>,
  pub window: HistoricalQuery,
}

impl MultiHistoricalQuery {
  pub fn new<S: Into<String>>(symbols: impl IntoIterator<Item = S>, window: HistoricalQuery) -> Self {
    Self { symbols: symbols.into_iter().map(Into::into).collect(), window }
  }
}

impl QuerySchema for MultiHistoricalQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    check_symbols(&mut check, &self.symbols);
    self.window.check(&mut check);
    check.finish()?;

    let mut params = QueryParams::new();
    params.set_joined("symbols", Some(self.symbols.as_slice()));
    self.window.encode(&mut params);
    Ok(params)
  }
}

/// Tape selector of the condition codes endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionCodesQuery {
  pub tape: Tape,
}

impl QuerySchema for ConditionCodesQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut params = QueryParams::new();
    params.set("tape", self.tape);
    Ok(params)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::ResponseSchema;
  use alpaca_core::test_utils::assert_approx_eq;
  use serde_json::json;

  fn bar_json() -> Value {
    json!({
      "t": "2024-01-02T05:00:00Z",
      "o": 187.15, "h": 188.44, "l": 183.885, "c": 185.64,
      "v": 82488674, "n": 1009074, "vw": 185.9465
    })
  }

  fn quote_json() -> Value {
    json!({
      "t": "2024-01-02T20:59:59.985Z",
      "bx": "V", "bp": 185.6, "bs": 1,
      "ax": "V", "ap": 185.65, "as": 2,
      "c": ["R"], "z": "C"
    })
  }

  fn trade_json() -> Value {
    json!({
      "t": "2024-01-02T20:59:59.985Z",
      "x": "V", "p": 185.64, "s": 100, "i": 52983525029461u64,
      "c": ["@"], "z": "C"
    })
  }

  #[test]
  fn test_bar_renames_fields() {
    let bar = Bar::parse_output(&bar_json()).unwrap();
    assert_approx_eq(bar.opening_price, 187.15);
    assert_approx_eq(bar.vwap, 185.9465);
    assert_eq!(bar.volume, 82488674);
    assert_eq!(bar.trade_count, 1009074);
  }

  #[test]
  fn test_bar_is_strict_and_reports_paths() {
    let mut body = bar_json();
    body["x"] = json!(1);
    body["v"] = json!(1.5);
    let issues = Bar::parse_output(&body).unwrap_err();
    assert_eq!(issues.len(), 2);
    assert!(issues.at("$.x").is_some());
    assert_eq!(issues.at("$.v").unwrap().expected, "integer");
  }

  #[test]
  fn test_quote_and_trade() {
    let quote = Quote::parse_output(&quote_json()).unwrap();
    assert_eq!(quote.ask_size, 2);
    assert_eq!(quote.exchange_code, ExchangeCode::C);

    let trade = Trade::parse_output(&trade_json()).unwrap();
    assert_eq!(trade.id, 52983525029461);
    assert!(trade.update.is_none());

    let mut corrected = trade_json();
    corrected["u"] = json!("cancelled");
    assert_eq!(Trade::parse_output(&corrected).unwrap().update, Some(TradeUpdate::Cancelled));
  }

  #[test]
  fn test_page_allows_null_token() {
    let page = Page::<Bar>::parse_output(&json!({
      "symbol": "AAPL",
      "bars": [bar_json()],
      "next_page_token": null
    }))
    .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.symbol.as_deref(), Some("AAPL"));
    assert!(page.next_page_token.is_none());
  }

  #[test]
  fn test_page_error_paths_include_index() {
    let issues = Page::<Bar>::parse_output(&json!({
      "bars": [bar_json(), {"t": "yesterday"}],
      "next_page_token": "abc"
    }))
    .unwrap_err();
    assert!(issues.at("$.bars[1].t").is_some());
    assert!(issues.at("$.bars[1].o").is_some());
  }

  #[test]
  fn test_multi_page_validates_symbol_keys() {
    let page = MultiPage::<Quote>::parse_output(&json!({
      "quotes": {"AAPL": [quote_json()], "BRK.B": []},
      "next_page_token": null,
      "currency": "USD"
    }))
    .unwrap();
    assert_eq!(page.items["AAPL"].len(), 1);

    let issues = MultiPage::<Quote>::parse_output(&json!({
      "quotes": {"aapl": []},
      "next_page_token": null,
      "currency": "USD"
    }))
    .unwrap_err();
    assert!(issues.at("$.quotes.aapl").is_some());
  }

  #[test]
  fn test_latest_envelope_is_tolerant() {
    let latest = Latest::<Trade>::parse_output(&json!({
      "trades": [trade_json()],
      "currency": "USD",
      "extra": 1
    }))
    .unwrap();
    assert_eq!(latest.items.len(), 1);
    assert_eq!(latest.currency, Currency::Usd);
  }

  #[test]
  fn test_auctions() {
    let page = Page::<AuctionStats>::parse_output(&json!({
      "auctions": [{
        "d": "2024-01-02",
        "o": [{"t": "2024-01-02T14:30:00.123456Z", "x": "P", "p": 187.15, "s": 300, "c": "Q"}],
        "c": []
      }],
      "currency": "USD",
      "next_page_token": null
    }))
    .unwrap();
    assert_eq!(page.items[0].opening[0].size, 300);
    assert_eq!(page.currency, Some(Currency::Usd));
  }

  #[test]
  fn test_snapshot_is_strict() {
    let snapshot = json!({
      "symbol": "AAPL",
      "currency": "USD",
      "dailyBar": bar_json(),
      "latestQuote": quote_json(),
      "latestTrade": trade_json(),
      "minuteBar": bar_json(),
      "prevDailyBar": bar_json()
    });
    let parsed = StockSnapshot::parse_output(&snapshot).unwrap();
    assert_eq!(parsed.latest_trade.size, 100);

    let mut extra = snapshot;
    extra["latestBar"] = bar_json();
    assert!(StockSnapshot::parse_output(&extra).unwrap_err().at("$.latestBar").is_some());
  }

  #[test]
  fn test_code_table() {
    let table = CodeTable::parse_output(&json!({"A": "NYSE American", "V": "IEX"})).unwrap();
    assert_eq!(table.get('V'), Some("IEX"));
    assert_eq!(table.len(), 2);

    let issues = CodeTable::parse_output(&json!({"AB": "too long"})).unwrap_err();
    assert!(issues.at("$.AB").is_some());
  }

  #[test]
  fn test_multi_stock_query() {
    let params = MultiStockQuery::new(["AAPL", "MSFT"]).parse_input().unwrap();
    assert_eq!(params.get("symbols").unwrap().to_string(), "AAPL,MSFT");

    let issues = MultiStockQuery::new(["AAPL", "msft"]).parse_input().unwrap_err();
    assert!(issues.at("$.symbols[1]").is_some());
  }

  #[test]
  fn test_historical_query_limit_bounds() {
    let window = HistoricalQuery { limit: Some(0), ..Default::default() };
    assert!(window.parse_input().unwrap_err().at("$.limit").is_some());

    let window = HistoricalQuery {
      limit: Some(10_000),
      sort: Some(SortDirection::Desc),
      start: Some(DateTime::from_timestamp(1_704_153_600, 0).unwrap()),
      ..Default::default()
    };
    let params = MultiHistoricalQuery::new(["AAPL"], window).parse_input().unwrap();
    assert_eq!(params.get("limit").unwrap().to_string(), "10000");
    assert_eq!(params.get("sort").unwrap().to_string(), "desc");
    assert_eq!(params.get("start").unwrap().to_string(), "2024-01-02T00:00:00.000000Z");
  }

  #[test]
  fn test_condition_codes_query() {
    let params = ConditionCodesQuery { tape: Tape::B }.parse_input().unwrap();
    assert_eq!(params.get("tape").unwrap().to_string(), "B");
  }
}
