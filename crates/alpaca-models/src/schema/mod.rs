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

//! Schema validation for request inputs and upstream responses.
//!
//! Every payload crosses this module twice. Caller supplied queries and
//! bodies implement [`QuerySchema`] / [`BodySchema`], which check constraints
//! and encode the wire form before anything is sent. Response payloads are
//! decoded through [`ResponseSchema`], which walks the JSON with a
//! [`FieldPath`] cursor and records every mismatch it finds rather than
//! stopping at the first one.
//!
//! Objects come in two flavours. Strict objects reject keys that were not
//! declared; tolerant objects drop them silently. The choice is made per type
//! when its decoder calls [`ObjectReader::finish_strict`] or
//! [`ObjectReader::finish_tolerant`].

mod formats;
mod input;
mod output;

pub use formats::{
  coerce_integer, coerce_number, date, date_time, exact_len, max_len, non_empty, stock_symbol,
  time_of_day, uint_u16, uint_u32, uint_u64, wire_date_time,
};
pub use input::{
  decimal_string, encode_body, BodySchema, InputCheck, Never, QueryParams, QuerySchema, QueryValue,
};
pub use output::{
  array_of, describe, enumerated, max_items, mismatch, nullable, run, Decode, FieldPath, NoContent,
  ObjectReader, ResponseSchema, MISSING,
};
