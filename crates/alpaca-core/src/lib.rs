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

//! # alpaca-core
//!
//! Shared building blocks for the alpaca-* crates: client configuration and
//! credentials, the error taxonomy every endpoint call reports through, and
//! the small set of wire-level types (API base hosts, HTTP methods).

pub mod config;
pub mod error;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, Credentials};
pub use error::{Error, ItemFailure, Result, Stage, ValidationError, ValidationErrors};
pub use types::{ApiBase, Method};

/// Host template used when none is configured. `{base}` is replaced with the
/// label of the [`ApiBase`] an endpoint group talks to.
pub const DEFAULT_HOST_TEMPLATE: &str = "https://{base}.alpaca.markets/";

/// Placeholder substituted in host templates.
pub const BASE_PLACEHOLDER: &str = "{base}";

/// Header carrying the API key id.
pub const KEY_ID_HEADER: &str = "APCA-API-KEY-ID";

/// Header carrying the API secret.
pub const SECRET_KEY_HEADER: &str = "APCA-API-SECRET-KEY";

/// Per-item status that marks success inside a batch (207) response.
pub const BATCH_ITEM_OK_STATUS: u16 = 200;
