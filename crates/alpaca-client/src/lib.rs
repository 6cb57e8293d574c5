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

//! # alpaca-client
//!
//! Async client for the Alpaca trading and market data REST APIs.
//!
//! Every operation goes through the same pipeline:
//!
//! 1. the query and body are validated and converted to their wire form
//!    ([`alpaca_models::schema`]),
//! 2. the request is built with the credential headers and sent once,
//! 3. the status must equal the endpoint's single ok status, otherwise the
//!    call fails with the endpoint's documented message or a generic one,
//! 4. the body is validated and reshaped into the caller's model.
//!
//! Batch endpoints (close all positions, cancel all orders) additionally fail
//! when any item in the 207 response failed, listing each of them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use alpaca_client::{AlpacaClient, CreateOrderBody, OrderSide};
//! use alpaca_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   let client = AlpacaClient::new(Config::from_env()?)?;
//!
//!   let account = client.account().get().await?;
//!   println!("status: {}", account.status);
//!
//!   let body = CreateOrderBody::market("AAPL", OrderSide::Buy, 1.0);
//!   let order = client.orders().create(&body).await?;
//!   println!("submitted {:?}", order.id);
//!   Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, alpaca_core::Error>`. An API error displays
//! as exactly the message the endpoint documents for that status, e.g.
//! `Asset Not Found: ZZZZ`.

#![warn(clippy::all)]

pub mod batch;
pub mod client;
pub mod endpoint;
pub mod endpoints;
pub mod invoker;
pub mod request;
pub mod transport;

// Re-export the main client and common types
pub use alpaca_core::{Config, Credentials, Error, Result};
pub use alpaca_models::*;
pub use client::AlpacaClient;
pub use endpoint::{Declaration, Endpoint};
pub use invoker::{Call, Invoker};

pub use endpoints::{
  account::AccountEndpoints,
  assets::{AssetEndpoints, OptionEndpoints, TreasuryEndpoints},
  calendar::CalendarEndpoints,
  orders::OrderEndpoints,
  positions::PositionEndpoints,
  stocks::StockEndpoints,
  watchlists::WatchlistEndpoints,
};
