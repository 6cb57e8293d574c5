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

//! Endpoint groups against a mock server, one scenario per domain.

mod common;

use alpaca_client::{
  AccountConfigurations, HistoricalQuery, HistoryQuery, OrderQueryStatus, OrdersQuery,
  TreasuriesQuery, UpdateWatchlistBody,
};
use alpaca_core::test_utils::assert_approx_eq;
use chrono::{TimeZone, Utc};
use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_watchlist_by_name() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/paper-api/v2/watchlists:by_name"))
    .and(query_param("name", "tech"))
    .respond_with(ResponseTemplate::new(200).set_body_json(watchlist_json("tech")))
    .expect(1)
    .mount(&server)
    .await;

  let watchlist = client.watchlists().get_by_name("tech").await.unwrap();
  assert_eq!(watchlist.name, "tech");
  assert_eq!(watchlist.id.to_string(), WATCHLIST_ID);
  assert_eq!(watchlist.assets.unwrap()[0].symbol, "AAPL");
}

#[tokio::test]
async fn test_empty_watchlist_name_is_rejected() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(watchlist_json("")))
    .expect(0)
    .mount(&server)
    .await;

  let err = client.watchlists().get_by_name("").await.unwrap_err();
  assert!(err.issues().unwrap().at("$.name").is_some());
}

#[tokio::test]
async fn test_delete_watchlist_not_found() {
  let (server, client) = setup().await;

  Mock::given(method("DELETE"))
    .and(path(format!("/paper-api/v2/watchlists/{}", WATCHLIST_ID)))
    .respond_with(ResponseTemplate::new(404))
    .mount(&server)
    .await;

  let err = client.watchlists().delete(WATCHLIST_ID).await.unwrap_err();
  assert_eq!(err.to_string(), format!("Watchlist Not Found: {}", WATCHLIST_ID));
}

#[tokio::test]
async fn test_update_watchlist_sends_body() {
  let (server, client) = setup().await;

  Mock::given(method("PUT"))
    .and(path(format!("/paper-api/v2/watchlists/{}", WATCHLIST_ID)))
    .and(body_json(json!({"name": "renamed", "symbols": ["AAPL"]})))
    .respond_with(ResponseTemplate::new(200).set_body_json(watchlist_json("renamed")))
    .expect(1)
    .mount(&server)
    .await;

  let body = UpdateWatchlistBody {
    name: Some("renamed".to_string()),
    symbols: Some(vec!["AAPL".to_string()]),
  };
  let watchlist = client.watchlists().update(WATCHLIST_ID, &body).await.unwrap();
  assert_eq!(watchlist.name, "renamed");
}

#[tokio::test]
async fn test_treasuries_input_checked_before_sending() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"us_treasuries": []})))
    .expect(0)
    .mount(&server)
    .await;

  let query = TreasuriesQuery {
    cusips: Some(vec!["912797GL5".to_string()]),
    ..Default::default()
  };
  let err = client.treasuries().list(&query).await.unwrap_err();
  assert!(err.issues().unwrap().at("$.cusips[0]").is_some());
  assert!(err.to_string().starts_with("Get Treasuries: invalid input"));
}

#[tokio::test]
async fn test_update_account_configurations() {
  let (server, client) = setup().await;

  Mock::given(method("PATCH"))
    .and(path("/paper-api/v2/account/configurations"))
    .and(body_json(json!({"no_shorting": true, "max_margin_multiplier": "4"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "dtbp_check": "entry",
      "trade_confirm_email": "all",
      "suspend_trade": false,
      "no_shorting": true,
      "fractional_trading": true,
      "max_margin_multiplier": "4",
      "pdt_check": "entry",
      "ptp_no_exception_entry": false
    })))
    .expect(1)
    .mount(&server)
    .await;

  let update = AccountConfigurations {
    no_shorting: Some(true),
    max_margin_multiplier: Some(4),
    ..Default::default()
  };
  let config = client.account().update_configurations(&update).await.unwrap();
  assert_eq!(config.max_margin_multiplier, Some(4));
  assert_eq!(config.no_shorting, Some(true));
}

#[tokio::test]
async fn test_invalid_margin_multiplier_never_sent() {
  let (server, client) = setup().await;

  Mock::given(method("PATCH"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
    .expect(0)
    .mount(&server)
    .await;

  let update = AccountConfigurations { max_margin_multiplier: Some(3), ..Default::default() };
  let err = client.account().update_configurations(&update).await.unwrap_err();
  assert!(err.issues().unwrap().at("$.max_margin_multiplier").is_some());
}

#[tokio::test]
async fn test_portfolio_history_is_pivoted_into_frames() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/paper-api/v2/account/portfolio/history"))
    .and(query_param("period", "1W"))
    .and(query_param("timeframe", "1D"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "timestamp": [1704171600, 1704258000],
      "equity": [100000.0, 100250.5],
      "profit_loss": [0.0, 250.5],
      "profit_loss_pct": [0.0, 0.002505],
      "base_value": 100000.0,
      "base_value_asof": "2024-01-01",
      "timeframe": "1D"
    })))
    .expect(1)
    .mount(&server)
    .await;

  let query = HistoryQuery {
    period: Some("1W".to_string()),
    timeframe: Some("1D".to_string()),
    ..Default::default()
  };
  let history = client.account().portfolio_history(&query).await.unwrap();

  assert_eq!(history.frames.len(), 2);
  assert_eq!(history.frames[1].timestamp, 1704258000);
  assert_approx_eq(history.frames[1].equity, 100250.5);
  assert_approx_eq(history.frames[1].profit_loss, 250.5);
  assert_eq!(history.timeframe, "1D");
}

#[tokio::test]
async fn test_portfolio_history_rejects_misaligned_arrays() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/paper-api/v2/account/portfolio/history"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "timestamp": [1704171600, 1704258000],
      "equity": [100000.0],
      "profit_loss": [0.0, 250.5],
      "profit_loss_pct": [0.0, 0.002505],
      "base_value": 100000.0,
      "timeframe": "1D"
    })))
    .mount(&server)
    .await;

  let err = client.account().portfolio_history(&HistoryQuery::default()).await.unwrap_err();
  assert!(err.issues().unwrap().at("$.equity").is_some());
}

#[tokio::test]
async fn test_list_orders_filters() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/paper-api/v2/orders"))
    .and(query_param("status", "all"))
    .and(query_param("limit", "50"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([order_json("AAPL")])))
    .expect(1)
    .mount(&server)
    .await;

  let query =
    OrdersQuery { status: Some(OrderQueryStatus::All), limit: Some(50), ..Default::default() };
  let orders = client.orders().list(&query).await.unwrap();
  assert_eq!(orders.len(), 1);
}

#[tokio::test]
async fn test_stock_bars_page() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/data/v2/stocks/AAPL/bars"))
    .and(query_param("timeframe", "1Day"))
    .and(query_param("start", "2024-01-02T00:00:00.000000Z"))
    .and(query_param("limit", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "bars": [bar_json(), bar_json()],
      "symbol": "AAPL",
      "next_page_token": "QUFQTHxEfDIwMjQtMDEtMDM=",
      "currency": "USD"
    })))
    .expect(1)
    .mount(&server)
    .await;

  let query = HistoricalQuery {
    timeframe: Some("1Day".to_string()),
    start: Some(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap()),
    limit: Some(2),
    ..Default::default()
  };
  let page = client.stocks().bars("AAPL", &query).await.unwrap();

  assert_eq!(page.symbol.as_deref(), Some("AAPL"));
  assert_eq!(page.items.len(), 2);
  assert_eq!(page.next_page_token.as_deref(), Some("QUFQTHxEfDIwMjQtMDEtMDM="));
}

#[tokio::test]
async fn test_stock_bars_limit_out_of_range() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .respond_with(ResponseTemplate::new(200))
    .expect(0)
    .mount(&server)
    .await;

  let query = HistoricalQuery { limit: Some(10_001), ..Default::default() };
  let err = client.stocks().bars("AAPL", &query).await.unwrap_err();
  assert!(err.issues().unwrap().at("$.limit").is_some());
}
