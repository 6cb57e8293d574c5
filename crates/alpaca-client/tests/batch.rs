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

//! Multi-status batch endpoints succeed only when every item does.

mod common;

use alpaca_client::{CloseAllPositionsQuery, Error};
use common::*;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn close_item(symbol: &str, status: u16) -> Value {
  if status == 200 {
    json!({"symbol": symbol, "status": status, "body": order_json(symbol)})
  } else {
    json!({
      "symbol": symbol,
      "status": status,
      "body": {"code": 40010001, "message": "position not found"}
    })
  }
}

#[tokio::test]
async fn test_close_all_positions_reports_each_failed_item() {
  let (server, client) = setup().await;

  let items = json!([close_item("AAPL", 200), close_item("MSFT", 200), close_item("TSLA", 500)]);
  Mock::given(method("DELETE"))
    .and(path("/paper-api/v2/positions"))
    .respond_with(ResponseTemplate::new(207).set_body_json(items))
    .expect(1)
    .mount(&server)
    .await;

  let err = client.positions().close_all(&CloseAllPositionsQuery::default()).await.unwrap_err();

  assert_eq!(err.to_string(), "Close All Positions: 1 of 3 items failed");
  let failures = err.failures();
  assert_eq!(failures.len(), 1);
  assert_eq!(failures[0].key, "TSLA");
  assert_eq!(failures[0].status, 500);
  assert_eq!(failures[0].message, "Close All Positions: Failed to close TSLA: 500");
}

#[tokio::test]
async fn test_close_all_positions_returns_every_order() {
  let (server, client) = setup().await;

  let items = json!([close_item("AAPL", 200), close_item("MSFT", 200), close_item("TSLA", 200)]);
  Mock::given(method("DELETE"))
    .and(path("/paper-api/v2/positions"))
    .and(query_param("cancel_orders", "true"))
    .respond_with(ResponseTemplate::new(207).set_body_json(items))
    .expect(1)
    .mount(&server)
    .await;

  let query = CloseAllPositionsQuery { cancel_orders: Some(true) };
  let results = client.positions().close_all(&query).await.unwrap();

  assert_eq!(results.len(), 3);
  let symbols: Vec<_> = results.iter().map(|r| r.symbol.as_str()).collect();
  assert_eq!(symbols, ["AAPL", "MSFT", "TSLA"]);
  assert!(results.iter().all(|r| r.order.is_some() && r.error.is_none()));
}

#[tokio::test]
async fn test_close_all_positions_envelope_failure() {
  let (server, client) = setup().await;

  Mock::given(method("DELETE"))
    .and(path("/paper-api/v2/positions"))
    .respond_with(ResponseTemplate::new(500))
    .mount(&server)
    .await;

  let err = client.positions().close_all(&CloseAllPositionsQuery::default()).await.unwrap_err();
  assert_eq!(err.to_string(), "Close All Positions: Failed to liquidate");
  assert!(err.failures().is_empty());
}

#[tokio::test]
async fn test_close_all_positions_with_empty_portfolio() {
  let (server, client) = setup().await;

  Mock::given(method("DELETE"))
    .and(path("/paper-api/v2/positions"))
    .respond_with(ResponseTemplate::new(207).set_body_json(json!([])))
    .mount(&server)
    .await;

  let results = client.positions().close_all(&CloseAllPositionsQuery::default()).await.unwrap();
  assert!(results.is_empty());
}

#[tokio::test]
async fn test_delete_all_orders_aggregates_failures() {
  let (server, client) = setup().await;

  let failing = "0a9b8f4e-1c2d-4e5f-8a9b-0c1d2e3f4a5b";
  Mock::given(method("DELETE"))
    .and(path("/paper-api/v2/orders"))
    .respond_with(ResponseTemplate::new(207).set_body_json(json!([
      {"id": ORDER_ID, "status": 200},
      {"id": failing, "status": 500, "body": {"message": "internal error"}}
    ])))
    .expect(1)
    .mount(&server)
    .await;

  let err = client.orders().delete_all().await.unwrap_err();

  match &err {
    Error::Aggregate { endpoint, failures, .. } => {
      assert_eq!(endpoint, "Delete All Orders");
      assert_eq!(failures.len(), 1);
      assert_eq!(failures[0].key, failing);
      assert_eq!(
        failures[0].message,
        format!("Delete All Orders: Failed to delete order {}: 500", failing)
      );
    }
    other => panic!("expected an aggregate error, got {:?}", other),
  }
  assert_eq!(err.to_string(), "Delete All Orders: 1 of 2 items failed");
}

#[tokio::test]
async fn test_delete_all_orders_success() {
  let (server, client) = setup().await;

  Mock::given(method("DELETE"))
    .and(path("/paper-api/v2/orders"))
    .respond_with(ResponseTemplate::new(207).set_body_json(json!([
      {"id": ORDER_ID, "status": 200}
    ])))
    .mount(&server)
    .await;

  let cancelled = client.orders().delete_all().await.unwrap();
  assert_eq!(cancelled.len(), 1);
  assert_eq!(cancelled[0].id.to_string(), ORDER_ID);
}

#[tokio::test]
async fn test_batch_item_shape_is_still_validated() {
  let (server, client) = setup().await;

  Mock::given(method("DELETE"))
    .and(path("/paper-api/v2/orders"))
    .respond_with(ResponseTemplate::new(207).set_body_json(json!([
      {"id": "not-a-uuid", "status": 200}
    ])))
    .mount(&server)
    .await;

  let err = client.orders().delete_all().await.unwrap_err();
  assert!(err.issues().and_then(|issues| issues.at("$[0].id")).is_some());
}
