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

use crate::enums::CalendarDateType;
use crate::schema::{
  date, date_time, time_of_day, Decode, FieldPath, ObjectReader, QueryParams, QuerySchema,
};
use alpaca_core::ValidationErrors;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// One trading session of the market calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
  pub date: NaiveDate,
  /// Session open, exchange local time
  pub open: NaiveTime,
  /// Session close, exchange local time
  pub close: NaiveTime,
  pub settlement_date: NaiveDate,
}

impl Decode for CalendarDay {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let day = obj.required_with("date", date);
    let open = obj.required_with("open", time_of_day);
    let close = obj.required_with("close", time_of_day);
    let settlement_date = obj.required_with("settlement_date", date);
    obj.finish_tolerant();

    Some(CalendarDay { date: day?, open: open?, close: close?, settlement_date: settlement_date? })
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarQuery {
  pub start: Option<NaiveDate>,
  pub end: Option<NaiveDate>,
  pub date_type: Option<CalendarDateType>,
}

impl QuerySchema for CalendarQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut params = QueryParams::new();
    params.set_opt("start", self.start);
    params.set_opt("end", self.end);
    params.set_opt("date_type", self.date_type);
    Ok(params)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clock {
  pub timestamp: DateTime<Utc>,
  pub is_open: bool,
  pub next_open: DateTime<Utc>,
  pub next_close: DateTime<Utc>,
}

impl Decode for Clock {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let timestamp = obj.required_with("timestamp", date_time);
    let is_open = obj.required("is_open");
    let next_open = obj.required_with("next_open", date_time);
    let next_close = obj.required_with("next_close", date_time);
    obj.finish_tolerant();

    Some(Clock {
      timestamp: timestamp?,
      is_open: is_open?,
      next_open: next_open?,
      next_close: next_close?,
    })
  }
}
