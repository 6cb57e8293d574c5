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

//! Market calendar and clock

use crate::endpoint::{Declaration, Endpoint};
use crate::invoker::{Call, Invoker};
use alpaca_core::{Method, Result};
use alpaca_models::schema::Never;
use alpaca_models::{CalendarDay, CalendarQuery, Clock};
use tracing::instrument;

pub static GET_CALENDAR: Endpoint<CalendarQuery, Never, Vec<CalendarDay>> =
  Endpoint::new("Get Market Calendar", Method::Get, "v2/calendar", 200);

pub static GET_CLOCK: Endpoint<Never, Never, Clock> =
  Endpoint::new("Get Market Clock", Method::Get, "v2/clock", 200);

pub static CATALOG: &[&Declaration] = &[&GET_CALENDAR.decl, &GET_CLOCK.decl];

#[derive(Debug, Clone)]
pub struct CalendarEndpoints {
  invoker: Invoker,
}

impl CalendarEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  /// Trading days with their session times.
  #[instrument(skip(self, query))]
  pub async fn calendar(&self, query: &CalendarQuery) -> Result<Vec<CalendarDay>> {
    self.invoker.invoke(&GET_CALENDAR, Call::new().query(query)).await
  }

  /// Whether the market is open now, and the next open and close.
  #[instrument(skip(self))]
  pub async fn clock(&self) -> Result<Clock> {
    self.invoker.invoke(&GET_CLOCK, Call::new()).await
  }
}
