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

//! Open positions and position liquidation

use crate::enums::{AssetClass, Exchange, PositionSide};
use crate::orders::Order;
use crate::schema::{
  coerce_number, uint_u16, Decode, FieldPath, InputCheck, ObjectReader, QueryParams, QuerySchema,
};
use alpaca_core::{ValidationErrors, BATCH_ITEM_OK_STATUS};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
  pub asset_id: Uuid,
  pub symbol: String,
  pub exchange: Exchange,
  pub asset_class: AssetClass,
  pub avg_entry_price: f64,
  pub qty: f64,
  pub qty_available: Option<f64>,
  pub side: PositionSide,
  pub market_value: f64,
  pub cost_basis: f64,
  pub unrealized_pl: f64,
  pub unrealized_plpc: f64,
  pub unrealized_intraday_pl: f64,
  pub unrealized_intraday_plpc: f64,
  pub current_price: f64,
  pub lastday_price: f64,
  pub change_today: f64,
  pub asset_marginable: bool,
}

impl Decode for Position {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let asset_id = obj.required("asset_id");
    let symbol = obj.required("symbol");
    let exchange = obj.required("exchange");
    let asset_class = obj.required("asset_class");
    let avg_entry_price = obj.required_with("avg_entry_price", coerce_number);
    let qty = obj.required_with("qty", coerce_number);
    let qty_available = obj.optional_with("qty_available", coerce_number);
    let side = obj.required("side");
    let market_value = obj.required_with("market_value", coerce_number);
    let cost_basis = obj.required_with("cost_basis", coerce_number);
    let unrealized_pl = obj.required_with("unrealized_pl", coerce_number);
    let unrealized_plpc = obj.required_with("unrealized_plpc", coerce_number);
    let unrealized_intraday_pl = obj.required_with("unrealized_intraday_pl", coerce_number);
    let unrealized_intraday_plpc = obj.required_with("unrealized_intraday_plpc", coerce_number);
    let current_price = obj.required_with("current_price", coerce_number);
    let lastday_price = obj.required_with("lastday_price", coerce_number);
    let change_today = obj.required_with("change_today", coerce_number);
    let asset_marginable = obj.required("asset_marginable");
    obj.finish_tolerant();

    Some(Position {
      asset_id: asset_id?,
      symbol: symbol?,
      exchange: exchange?,
      asset_class: asset_class?,
      avg_entry_price: avg_entry_price?,
      qty: qty?,
      qty_available: qty_available?,
      side: side?,
      market_value: market_value?,
      cost_basis: cost_basis?,
      unrealized_pl: unrealized_pl?,
      unrealized_plpc: unrealized_plpc?,
      unrealized_intraday_pl: unrealized_intraday_pl?,
      unrealized_intraday_plpc: unrealized_intraday_plpc?,
      current_price: current_price?,
      lastday_price: lastday_price?,
      change_today: change_today?,
      asset_marginable: asset_marginable?,
    })
  }
}

/// How much of a position to liquidate. Sent as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClosePositionQuery {
  /// Number of shares
  Qty(f64),
  /// Percentage of the position, 0 to 100
  Percentage(f64),
}

impl QuerySchema for ClosePositionQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    let (key, amount) = match *self {
      ClosePositionQuery::Qty(qty) => ("qty", qty),
      ClosePositionQuery::Percentage(pct) => ("percentage", pct),
    };
    check.positive(key, amount);
    check.finish()?;

    let mut params = QueryParams::new();
    params.set(key, amount.to_string());
    Ok(params)
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloseAllPositionsQuery {
  /// Cancel open orders before liquidating
  pub cancel_orders: Option<bool>,
}

impl QuerySchema for CloseAllPositionsQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut params = QueryParams::new();
    params.set_opt("cancel_orders", self.cancel_orders);
    Ok(params)
  }
}

/// Per-symbol outcome of closing every position.
///
/// Successful items embed the liquidation order. Failed items carry the
/// upstream error body as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClosePositionResult {
  pub symbol: String,
  pub status: u16,
  pub order: Option<Order>,
  pub error: Option<Value>,
}

impl Decode for ClosePositionResult {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let symbol = obj.required("symbol");
    let status = obj.required_with("status", uint_u16)?;
    let (order, error) = if status == BATCH_ITEM_OK_STATUS {
      (obj.required::<Order>("body").map(Some), Some(None))
    } else {
      (Some(None), obj.optional::<Value>("body"))
    };
    obj.finish_tolerant();

    Some(ClosePositionResult { symbol: symbol?, status, order: order?, error: error? })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::enums::OrderType;
  use crate::schema::ResponseSchema;
  use serde_json::json;

  fn position_json() -> Value {
    json!({
      "asset_id": "904837e3-3b76-47ec-b432-046db621571b",
      "symbol": "AAPL",
      "exchange": "NASDAQ",
      "asset_class": "us_equity",
      "avg_entry_price": "100.0",
      "qty": "5",
      "qty_available": "4",
      "side": "long",
      "market_value": "600.0",
      "cost_basis": "500.0",
      "unrealized_pl": "100.0",
      "unrealized_plpc": "0.20",
      "unrealized_intraday_pl": "10.0",
      "unrealized_intraday_plpc": "0.0084",
      "current_price": "120.0",
      "lastday_price": "119.0",
      "change_today": "0.0084",
      "asset_marginable": true,
      "cost_basis_extra": "ignored"
    })
  }

  fn order_body() -> Value {
    json!({
      "id": "61e69015-8549-4bfd-b9c3-01e75843f47d",
      "symbol": "AAPL",
      "notional": null,
      "qty": "5",
      "type": "market",
      "side": "sell",
      "time_in_force": "day"
    })
  }

  #[test]
  fn test_position_decodes_and_tolerates_extra_fields() {
    let position = Position::parse_output(&position_json()).unwrap();
    assert_eq!(position.side, PositionSide::Long);
    assert_eq!(position.qty, 5.0);
    assert_eq!(position.qty_available, Some(4.0));
  }

  #[test]
  fn test_position_rejects_order_side() {
    let mut body = position_json();
    body["side"] = json!("buy");
    let issues = Position::parse_output(&body).unwrap_err();
    assert_eq!(issues.len(), 1);
    assert!(issues.at("$.side").is_some());
  }

  #[test]
  fn test_close_position_query() {
    let params = ClosePositionQuery::Percentage(50.0).parse_input().unwrap();
    assert_eq!(params.get("percentage").unwrap().to_string(), "50");
    assert!(params.get("qty").is_none());
    assert!(ClosePositionQuery::Qty(-1.0).parse_input().unwrap_err().at("$.qty").is_some());
  }

  #[test]
  fn test_close_all_results() {
    let results = Vec::<ClosePositionResult>::parse_output(&json!([
      {"symbol": "AAPL", "status": 200, "body": order_body()},
      {"symbol": "TSLA", "status": 500, "body": {"code": 50010000, "message": "internal"}}
    ]))
    .unwrap();
    let order = results[0].order.as_ref().unwrap();
    assert_eq!(order.order_type, OrderType::Market);
    assert!(results[1].order.is_none());
    assert_eq!(results[1].error.as_ref().unwrap()["code"], json!(50010000));
  }

  #[test]
  fn test_close_all_ok_item_needs_order_body() {
    let issues = Vec::<ClosePositionResult>::parse_output(&json!([
      {"symbol": "AAPL", "status": 200, "body": {"message": "nope"}}
    ]))
    .unwrap_err();
    assert!(issues.at("$[0].body.type").is_some());
  }
}
