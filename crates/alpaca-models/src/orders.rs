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

//! Orders: the order model, order submission and order queries

use crate::enums::{
  AssetClass, OrderClass, OrderQueryStatus, OrderSide, OrderStatus, OrderType, PositionIntent,
  SortDirection, TimeInForce,
};
use crate::schema::{
  coerce_number, date_time, decimal_string, encode_body, max_items, max_len, non_empty, nullable,
  uint_u16, BodySchema, Decode, FieldPath, InputCheck, ObjectReader, QueryParams, QuerySchema,
};
use alpaca_core::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Longest accepted client order id.
pub const MAX_CLIENT_ORDER_ID_LEN: usize = 128;

/// Most legs a multi-leg order may carry.
pub const MAX_LEGS: usize = 4;

/// Upper bound of the list-orders page size.
pub const MAX_ORDERS_LIMIT: i64 = 10_000;

/// An order as reported by the trading API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
  pub id: Option<String>,
  pub client_order_id: Option<String>,
  pub created_at: Option<DateTime<Utc>>,
  pub updated_at: Option<DateTime<Utc>>,
  pub submitted_at: Option<DateTime<Utc>>,
  pub filled_at: Option<DateTime<Utc>>,
  pub expired_at: Option<DateTime<Utc>>,
  pub canceled_at: Option<DateTime<Utc>>,
  pub failed_at: Option<DateTime<Utc>>,
  pub replaced_at: Option<DateTime<Utc>>,
  pub replaced_by: Option<Uuid>,
  pub replaces: Option<Uuid>,
  pub asset_id: Option<Uuid>,
  pub symbol: Option<String>,
  pub asset_class: Option<AssetClass>,
  /// Deprecated upstream, see `qty`
  pub notional: Option<f64>,
  pub qty: Option<f64>,
  pub filled_qty: Option<f64>,
  pub filled_avg_price: Option<f64>,
  pub order_class: Option<OrderClass>,
  /// Deprecated upstream, see `order_type`
  pub legacy_order_type: Option<OrderType>,
  pub order_type: OrderType,
  pub side: Option<OrderSide>,
  pub time_in_force: TimeInForce,
  pub limit_price: Option<f64>,
  pub stop_price: Option<f64>,
  pub status: Option<OrderStatus>,
  pub extended_hours: Option<bool>,
  pub legs: Option<Vec<Value>>,
  pub trail_percent: Option<f64>,
  pub trail_price: Option<f64>,
  pub hwm: Option<f64>,
  pub position_intent: Option<PositionIntent>,
}

impl Decode for Order {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let id = obj.optional("id");
    let client_order_id = obj.optional_with("client_order_id", max_len(MAX_CLIENT_ORDER_ID_LEN));
    let created_at = obj.optional_with("created_at", date_time);
    let updated_at = obj.nullable_with("updated_at", date_time);
    let submitted_at = obj.nullable_with("submitted_at", date_time);
    let filled_at = obj.nullable_with("filled_at", date_time);
    let expired_at = obj.nullable_with("expired_at", date_time);
    let canceled_at = obj.nullable_with("canceled_at", date_time);
    let failed_at = obj.nullable_with("failed_at", date_time);
    let replaced_at = obj.nullable_with("replaced_at", date_time);
    let replaced_by = obj.nullable("replaced_by");
    let replaces = obj.nullable("replaces");
    let asset_id = obj.optional("asset_id");
    let symbol = obj.optional_with("symbol", non_empty);
    let asset_class = obj.optional("asset_class");
    // present but possibly null
    let notional = obj.required_with("notional", nullable(coerce_number));
    let qty = obj.required_with("qty", nullable(coerce_number));
    let filled_qty = obj.optional_with("filled_qty", coerce_number);
    let filled_avg_price = obj.nullable_with("filled_avg_price", coerce_number);
    let order_class = obj.optional("order_class");
    let legacy_order_type = obj.optional("order_type");
    let order_type = obj.required("type");
    let side = obj.optional("side");
    let time_in_force = obj.required("time_in_force");
    let limit_price = obj.nullable_with("limit_price", coerce_number);
    let stop_price = obj.nullable_with("stop_price", coerce_number);
    let status = obj.optional("status");
    let extended_hours = obj.optional("extended_hours");
    let legs = obj.nullable_with("legs", max_items::<Value>(MAX_LEGS));
    let trail_percent = obj.nullable_with("trail_percent", coerce_number);
    let trail_price = obj.nullable_with("trail_price", coerce_number);
    let hwm = obj.nullable_with("hwm", coerce_number);
    let position_intent = obj.optional("position_intent");
    obj.finish_tolerant();

    Some(Order {
      id: id?,
      client_order_id: client_order_id?,
      created_at: created_at?,
      updated_at: updated_at?,
      submitted_at: submitted_at?,
      filled_at: filled_at?,
      expired_at: expired_at?,
      canceled_at: canceled_at?,
      failed_at: failed_at?,
      replaced_at: replaced_at?,
      replaced_by: replaced_by?,
      replaces: replaces?,
      asset_id: asset_id?,
      symbol: symbol?,
      asset_class: asset_class?,
      notional: notional?,
      qty: qty?,
      filled_qty: filled_qty?,
      filled_avg_price: filled_avg_price?,
      order_class: order_class?,
      legacy_order_type: legacy_order_type?,
      order_type: order_type?,
      side: side?,
      time_in_force: time_in_force?,
      limit_price: limit_price?,
      stop_price: stop_price?,
      status: status?,
      extended_hours: extended_hours?,
      legs: legs?,
      trail_percent: trail_percent?,
      trail_price: trail_price?,
      hwm: hwm?,
      position_intent: position_intent?,
    })
  }
}

/// Order submission.
///
/// `order_type` and `time_in_force` are required; a body without them is
/// rejected before any request is sent. Quantities and prices go out as
/// decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateOrderBody {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub symbol: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
  pub qty: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
  pub notional: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub side: Option<OrderSide>,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub order_type: Option<OrderType>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub time_in_force: Option<TimeInForce>,
  #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
  pub limit_price: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
  pub stop_price: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
  pub trail_price: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
  pub trail_percent: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub extended_hours: Option<bool>,
  /// Must be a UUID when given
  #[serde(skip_serializing_if = "Option::is_none")]
  pub client_order_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub order_class: Option<OrderClass>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub legs: Option<Vec<Value>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub take_profit: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stop_loss: Option<Value>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub position_intent: Option<PositionIntent>,
}

impl CreateOrderBody {
  /// Market order for `qty` shares, good for the day.
  pub fn market(symbol: impl Into<String>, side: OrderSide, qty: f64) -> Self {
    Self {
      symbol: Some(symbol.into()),
      qty: Some(qty),
      side: Some(side),
      order_type: Some(OrderType::Market),
      time_in_force: Some(TimeInForce::Day),
      ..Default::default()
    }
  }

  /// Limit order for `qty` shares at `limit_price`, good for the day.
  pub fn limit(symbol: impl Into<String>, side: OrderSide, qty: f64, limit_price: f64) -> Self {
    Self {
      order_type: Some(OrderType::Limit),
      limit_price: Some(limit_price),
      ..Self::market(symbol, side, qty)
    }
  }

  pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
    self.time_in_force = Some(time_in_force);
    self
  }

  pub fn with_client_order_id(mut self, client_order_id: impl Into<String>) -> Self {
    self.client_order_id = Some(client_order_id.into());
    self
  }
}

impl BodySchema for CreateOrderBody {
  fn parse_input(&self) -> Result<Value, ValidationErrors> {
    let mut check = InputCheck::new();
    check.required("type", self.order_type.as_ref());
    check.required("time_in_force", self.time_in_force.as_ref());
    if let Some(id) = &self.client_order_id {
      check.uuid("client_order_id", id);
    }
    if let Some(legs) = &self.legs {
      check.max_items("legs", legs.len(), MAX_LEGS);
    }
    check.finish()?;

    encode_body(self)
  }
}

/// Filters of the list-orders endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersQuery {
  pub status: Option<OrderQueryStatus>,
  pub limit: Option<i64>,
  pub after: Option<DateTime<Utc>>,
  pub until: Option<DateTime<Utc>>,
  pub direction: Option<SortDirection>,
  pub nested: Option<bool>,
  pub symbols: Option<Vec<String>>,
  pub side: Option<OrderSide>,
  pub asset_class: Option<Vec<AssetClass>>,
}

impl QuerySchema for OrdersQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    if let Some(limit) = self.limit {
      check.at_most("limit", limit, MAX_ORDERS_LIMIT);
    }
    check.finish()?;

    let mut params = QueryParams::new();
    params.set_opt("status", self.status);
    params.set_opt("limit", self.limit.map(|limit| limit.to_string()));
    params.set_opt("after", self.after);
    params.set_opt("until", self.until);
    params.set_opt("direction", self.direction);
    params.set_opt("nested", self.nested);
    params.set_joined("symbols", self.symbols.as_deref());
    params.set_opt("side", self.side);
    params.set_joined("asset_class", self.asset_class.as_deref());
    Ok(params)
  }
}

/// Query of the get-order endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetOrderQuery {
  /// Include the legs of multi-leg orders
  pub nested: Option<bool>,
}

impl QuerySchema for GetOrderQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut params = QueryParams::new();
    params.set_opt("nested", self.nested);
    Ok(params)
  }
}

/// Lookup by the caller assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOrderIdQuery {
  pub client_order_id: String,
}

impl QuerySchema for ClientOrderIdQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    check.max_len("client_order_id", &self.client_order_id, MAX_CLIENT_ORDER_ID_LEN);
    check.finish()?;

    let mut params = QueryParams::new();
    params.set("client_order_id", self.client_order_id.as_str());
    Ok(params)
  }
}

/// Per-order outcome of cancelling every open order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCancellation {
  pub id: Uuid,
  /// Per-item HTTP status, 200 when the order was cancelled
  pub status: u16,
  pub body: Option<Value>,
}

impl Decode for OrderCancellation {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let id = obj.required("id");
    let status = obj.required_with("status", uint_u16);
    let body = obj.optional("body");
    obj.finish_strict();

    Some(OrderCancellation { id: id?, status: status?, body: body? })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::ResponseSchema;
  use alpaca_core::test_utils::assert_approx_eq;
  use serde_json::json;

  fn order_json() -> Value {
    json!({
      "id": "61e69015-8549-4bfd-b9c3-01e75843f47d",
      "client_order_id": "eb9e2aaa-f71a-4f51-b5b4-52a6c565dad4",
      "created_at": "2024-01-02T14:30:00.123456Z",
      "updated_at": null,
      "submitted_at": "2024-01-02T14:30:00.223456Z",
      "filled_at": null,
      "replaced_by": null,
      "asset_id": "b0b6dd9d-8b9b-48a9-ba46-b9d54906e415",
      "symbol": "AAPL",
      "asset_class": "us_equity",
      "notional": null,
      "qty": "15",
      "filled_qty": "0",
      "filled_avg_price": null,
      "order_class": "simple",
      "order_type": "limit",
      "type": "limit",
      "side": "buy",
      "time_in_force": "day",
      "limit_price": "107.00",
      "stop_price": null,
      "status": "accepted",
      "extended_hours": false,
      "legs": null,
      "subtag": null,
      "source": "access_key"
    })
  }

  #[test]
  fn test_order_decodes_and_tolerates_extra_fields() {
    let order = Order::parse_output(&order_json()).unwrap();
    assert_eq!(order.order_type, OrderType::Limit);
    assert_eq!(order.qty, Some(15.0));
    assert_eq!(order.notional, None);
    assert_approx_eq(order.limit_price.unwrap(), 107.0);
    assert_eq!(order.status, Some(OrderStatus::Accepted));
  }

  #[test]
  fn test_order_requires_type_and_nullable_quantities() {
    let mut body = order_json();
    let map = body.as_object_mut().unwrap();
    map.remove("type");
    map.remove("notional");
    let issues = Order::parse_output(&body).unwrap_err();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues.at("$.type").unwrap().actual, "missing");
    assert_eq!(issues.at("$.notional").unwrap().actual, "missing");
  }

  #[test]
  fn test_order_caps_legs() {
    let mut body = order_json();
    body["legs"] = json!([{}, {}, {}, {}, {}]);
    assert!(Order::parse_output(&body).unwrap_err().at("$.legs").is_some());
  }

  #[test]
  fn test_create_order_body_stringifies_numbers() {
    let body = CreateOrderBody::limit("AAPL", OrderSide::Buy, 2.0, 101.25)
      .with_time_in_force(TimeInForce::Gtc)
      .parse_input()
      .unwrap();
    assert_eq!(body["type"], json!("limit"));
    assert_eq!(body["time_in_force"], json!("gtc"));
    assert_eq!(body["qty"], json!("2"));
    assert_eq!(body["limit_price"], json!("101.25"));
    assert!(body.get("notional").is_none());
  }

  #[test]
  fn test_create_order_body_wire_shape() {
    let body = CreateOrderBody {
      order_class: Some(OrderClass::Bracket),
      take_profit: Some(json!({"limit_price": "110"})),
      position_intent: Some(PositionIntent::BuyToOpen),
      trail_percent: Some(0.5),
      ..CreateOrderBody::market("AAPL", OrderSide::Buy, 3.0)
    };
    assert_eq!(
      body.parse_input().unwrap(),
      json!({
        "symbol": "AAPL",
        "qty": "3",
        "side": "buy",
        "type": "market",
        "time_in_force": "day",
        "trail_percent": "0.5",
        "order_class": "bracket",
        "take_profit": {"limit_price": "110"},
        "position_intent": "buy_to_open"
      })
    );
  }

  #[test]
  fn test_create_order_body_requires_type() {
    let body = CreateOrderBody {
      symbol: Some("AAPL".to_string()),
      qty: Some(1.0),
      time_in_force: Some(TimeInForce::Day),
      ..Default::default()
    };
    let issues = body.parse_input().unwrap_err();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues.at("$.type").unwrap().actual, "missing");
  }

  #[test]
  fn test_create_order_body_client_order_id_must_be_uuid() {
    let body = CreateOrderBody::market("AAPL", OrderSide::Sell, 1.0).with_client_order_id("mine");
    assert!(body.parse_input().unwrap_err().at("$.client_order_id").is_some());
  }

  #[test]
  fn test_orders_query() {
    let query = OrdersQuery {
      status: Some(OrderQueryStatus::Open),
      limit: Some(50),
      symbols: Some(vec!["AAPL".to_string(), "MSFT".to_string()]),
      asset_class: Some(vec![AssetClass::UsEquity, AssetClass::Crypto]),
      ..Default::default()
    };
    let params = query.parse_input().unwrap();
    assert_eq!(params.get("limit"), Some(&"50".into()));
    assert_eq!(params.get("symbols").unwrap().to_string(), "AAPL,MSFT");
    assert_eq!(params.get("asset_class").unwrap().to_string(), "us_equity,crypto");

    let query = OrdersQuery { limit: Some(10_001), ..Default::default() };
    assert!(query.parse_input().is_err());
  }

  #[test]
  fn test_client_order_id_query_length() {
    let query = ClientOrderIdQuery { client_order_id: "x".repeat(129) };
    assert!(query.parse_input().is_err());
    let query = ClientOrderIdQuery { client_order_id: "abc".to_string() };
    assert_eq!(query.parse_input().unwrap().len(), 1);
  }

  #[test]
  fn test_order_cancellation() {
    let items = Vec::<OrderCancellation>::parse_output(&json!([
      {"id": "61e69015-8549-4bfd-b9c3-01e75843f47d", "status": 200},
      {"id": "61e69015-8549-4bfd-b9c3-01e75843f47e", "status": 500, "body": {"message": "x"}}
    ]))
    .unwrap();
    assert_eq!(items[1].status, 500);

    let issues = Vec::<OrderCancellation>::parse_output(&json!([
      {"id": "61e69015-8549-4bfd-b9c3-01e75843f47d", "status": 200, "extra": 1}
    ]))
    .unwrap_err();
    assert!(issues.at("$[0].extra").is_some());
  }
}
