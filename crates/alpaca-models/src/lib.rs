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

//! Typed payloads for the Alpaca trading and market data APIs
//!
//! Every model decodes itself from a JSON value through the [`schema`]
//! module, which collects all problems in a payload with their JSON paths
//! instead of stopping at the first one. Request types validate themselves
//! the same way before anything is sent.
//!
//! # Example
//!
//! ```
//! use alpaca_models::schema::ResponseSchema;
//! use alpaca_models::Clock;
//! use serde_json::json;
//!
//! let clock = Clock::parse_output(&json!({
//!   "timestamp": "2024-01-02T10:00:00-05:00",
//!   "is_open": true,
//!   "next_open": "2024-01-03T09:30:00-05:00",
//!   "next_close": "2024-01-02T16:00:00-05:00"
//! }))
//! .unwrap();
//! assert!(clock.is_open);
//! ```

#![warn(clippy::all)]

pub mod schema;

pub mod account;
pub mod assets;
pub mod calendar;
pub mod enums;
pub mod market;
pub mod orders;
pub mod positions;
pub mod watchlists;

pub use account::*;
pub use assets::*;
pub use calendar::*;
pub use enums::*;
pub use market::*;
pub use orders::*;
pub use positions::*;
pub use watchlists::*;
