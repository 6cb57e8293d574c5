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

//! Shared fixtures for the wiremock-backed client tests.

#![allow(dead_code)]

use alpaca_client::AlpacaClient;
use alpaca_core::test_utils::test_config;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const ORDER_ID: &str = "61e69015-8549-4bfd-b9c3-01e75843f47d";
pub const ASSET_ID: &str = "b0b6dd9d-8b9b-48a9-ba46-b9d54906e415";
pub const ACCOUNT_ID: &str = "c8f1ef5d-edc0-4f23-9ee4-378f19cb92a4";
pub const WATCHLIST_ID: &str = "3174d6df-7726-44b4-a5bd-7fda5ae6e009";

/// Log to the test writer; `RUST_LOG=alpaca_client=debug` shows the pipeline.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

/// A mock server and a paper-mode client whose bases all live on it.
pub async fn setup() -> (MockServer, AlpacaClient) {
  init_tracing();
  let server = MockServer::start().await;
  let client = AlpacaClient::new(test_config(&server.uri())).expect("client");
  (server, client)
}

pub fn clock_json() -> Value {
  json!({
    "timestamp": "2024-01-02T10:15:00.123456789-05:00",
    "is_open": true,
    "next_open": "2024-01-03T09:30:00-05:00",
    "next_close": "2024-01-02T16:00:00-05:00"
  })
}

pub fn asset_json(symbol: &str) -> Value {
  json!({
    "id": ASSET_ID,
    "class": "us_equity",
    "exchange": "NASDAQ",
    "symbol": symbol,
    "name": "Apple Inc. Common Stock",
    "status": "active",
    "tradable": true,
    "marginable": true,
    "shortable": true,
    "easy_to_borrow": true,
    "fractionable": true,
    "attributes": ["has_options"]
  })
}

pub fn order_json(symbol: &str) -> Value {
  json!({
    "id": ORDER_ID,
    "client_order_id": "eb9e2aaa-f71a-4f51-b5b4-52a6c565dad4",
    "created_at": "2024-01-02T15:00:00.123456Z",
    "updated_at": "2024-01-02T15:00:00.123456Z",
    "submitted_at": "2024-01-02T15:00:00.123456Z",
    "filled_at": null,
    "expired_at": null,
    "canceled_at": null,
    "failed_at": null,
    "replaced_at": null,
    "replaced_by": null,
    "replaces": null,
    "asset_id": ASSET_ID,
    "symbol": symbol,
    "asset_class": "us_equity",
    "notional": null,
    "qty": "1",
    "filled_qty": "0",
    "filled_avg_price": null,
    "order_class": "simple",
    "order_type": "market",
    "type": "market",
    "side": "buy",
    "time_in_force": "day",
    "limit_price": null,
    "stop_price": null,
    "status": "accepted",
    "extended_hours": false,
    "legs": null,
    "trail_percent": null,
    "trail_price": null,
    "hwm": null,
    "subtag": null,
    "source": null
  })
}

pub fn watchlist_json(name: &str) -> Value {
  json!({
    "id": WATCHLIST_ID,
    "account_id": ACCOUNT_ID,
    "created_at": "2024-01-02T15:00:00.123456Z",
    "updated_at": "2024-01-02T15:00:00.123456Z",
    "name": name,
    "assets": [asset_json("AAPL")]
  })
}

pub fn bar_json() -> Value {
  json!({
    "t": "2024-01-02T05:00:00Z",
    "o": 187.15, "h": 188.44, "l": 183.885, "c": 185.64,
    "v": 82488674, "n": 1009074, "vw": 185.9465
  })
}
