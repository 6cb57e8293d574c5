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

//! Batch outcome aggregation for multi-status (207) endpoints

use alpaca_core::{Error, ItemFailure, Result, BATCH_ITEM_OK_STATUS};
use alpaca_models::{ClosePositionResult, OrderCancellation};
use tracing::warn;

/// Fail the whole batch when any item failed.
///
/// Every item for which `is_ok` is false is reported through `identify`; the
/// resulting error carries all of them. When nothing failed the items are
/// returned unchanged.
pub fn aggregate_with<T, P, I>(
  endpoint: &str,
  items: Vec<T>,
  is_ok: P,
  identify: I,
) -> Result<Vec<T>>
where
  P: Fn(&T) -> bool,
  I: Fn(&T) -> ItemFailure,
{
  let failures: Vec<ItemFailure> =
    items.iter().filter(|&item| !is_ok(item)).map(&identify).collect();
  if failures.is_empty() {
    return Ok(items);
  }

  let message = format!("{}: {} of {} items failed", endpoint, failures.len(), items.len());
  warn!(endpoint, failed = failures.len(), total = items.len(), "batch partially failed");
  Err(Error::Aggregate { endpoint: endpoint.to_string(), message, failures })
}

/// One element of a batch response.
pub trait BatchItem {
  /// Symbol or id the item refers to.
  fn key(&self) -> String;

  /// Per-item status.
  fn status(&self) -> u16;

  /// Description used when the item failed.
  fn failure_message(&self, endpoint: &str) -> String;
}

/// [`aggregate_with`] using the item's own status and key.
pub fn aggregate<T: BatchItem>(endpoint: &str, items: Vec<T>) -> Result<Vec<T>> {
  aggregate_with(
    endpoint,
    items,
    |item| item.status() == BATCH_ITEM_OK_STATUS,
    |item| ItemFailure {
      key: item.key(),
      status: item.status(),
      message: item.failure_message(endpoint),
    },
  )
}

impl BatchItem for ClosePositionResult {
  fn key(&self) -> String {
    self.symbol.clone()
  }

  fn status(&self) -> u16 {
    self.status
  }

  fn failure_message(&self, endpoint: &str) -> String {
    format!("{}: Failed to close {}: {}", endpoint, self.symbol, self.status)
  }
}

impl BatchItem for OrderCancellation {
  fn key(&self) -> String {
    self.id.to_string()
  }

  fn status(&self) -> u16 {
    self.status
  }

  fn failure_message(&self, endpoint: &str) -> String {
    format!("{}: Failed to delete order {}: {}", endpoint, self.id, self.status)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn closes(statuses: &[u16]) -> Vec<ClosePositionResult> {
    statuses
      .iter()
      .enumerate()
      .map(|(i, status)| ClosePositionResult {
        symbol: ["AAPL", "MSFT", "TSLA", "NVDA"][i].to_string(),
        status: *status,
        order: None,
        error: None,
      })
      .collect()
  }

  #[test]
  fn test_all_ok_returns_items() {
    let items = aggregate("Close All Positions", closes(&[200, 200, 200])).unwrap();
    assert_eq!(items.len(), 3);
  }

  #[test]
  fn test_single_failure_fails_batch() {
    let err = aggregate("Close All Positions", closes(&[200, 200, 500])).unwrap_err();
    assert_eq!(err.to_string(), "Close All Positions: 1 of 3 items failed");
    assert_eq!(
      err.failures(),
      &[ItemFailure {
        key: "TSLA".to_string(),
        status: 500,
        message: "Close All Positions: Failed to close TSLA: 500".to_string(),
      }]
    );
  }

  #[test]
  fn test_every_failure_is_listed() {
    let err = aggregate("Close All Positions", closes(&[403, 200, 500, 422])).unwrap_err();
    let keys: Vec<_> = err.failures().iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["AAPL", "TSLA", "NVDA"]);
  }

  #[test]
  fn test_empty_batch_is_ok() {
    assert!(aggregate::<OrderCancellation>("Delete All Orders", Vec::new()).unwrap().is_empty());
  }

  #[test]
  fn test_custom_predicate() {
    let err = aggregate_with(
      "Numbers",
      vec![1, 2, 3, 4],
      |n| n % 2 == 0,
      |n| ItemFailure { key: n.to_string(), status: 0, message: format!("odd {}", n) },
    )
    .unwrap_err();
    assert_eq!(err.failures().len(), 2);
    assert_eq!(err.failures()[1].message, "odd 3");
  }

  #[test]
  fn test_order_cancellation_message() {
    let id = "61e69015-8549-4bfd-b9c3-01e75843f47d";
    let item = OrderCancellation { id: id.parse().unwrap(), status: 500, body: None };
    assert_eq!(
      item.failure_message("Delete All Orders"),
      format!("Delete All Orders: Failed to delete order {}: 500", id)
    );
  }
}
