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

//! Endpoint catalog
//!
//! One module per API domain. Each declares its endpoints as `static`
//! [`Endpoint`](crate::endpoint::Endpoint) items, lists them in a `CATALOG`
//! slice, and wraps them in an endpoint group the client hands out.

pub mod account;
pub mod assets;
pub mod calendar;
pub mod orders;
pub mod positions;
pub mod stocks;
pub mod watchlists;

use crate::endpoint::Declaration;
use alpaca_core::ApiBase;

/// Declarations per domain, with the kind of base they are served from.
pub fn domains() -> [(&'static str, Domain, &'static [&'static Declaration]); 7] {
  [
    ("account", Domain::Trading, account::CATALOG),
    ("assets", Domain::Trading, assets::CATALOG),
    ("calendar", Domain::Trading, calendar::CATALOG),
    ("orders", Domain::Trading, orders::CATALOG),
    ("positions", Domain::Trading, positions::CATALOG),
    ("watchlists", Domain::Trading, watchlists::CATALOG),
    ("stocks", Domain::MarketData, stocks::CATALOG),
  ]
}

/// Which host a catalog domain talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
  /// Paper or live trading, per configuration
  Trading,
  /// Market data
  MarketData,
}

impl Domain {
  pub fn base(&self, paper: bool) -> ApiBase {
    match self {
      Domain::Trading => ApiBase::trading(paper),
      Domain::MarketData => ApiBase::Data,
    }
  }
}

/// Find a declaration by its operation name, with the domain serving it.
pub fn lookup(name: &str) -> Option<(Domain, &'static Declaration)> {
  domains()
    .into_iter()
    .flat_map(|(_, domain, catalog)| catalog.iter().map(move |decl| (domain, *decl)))
    .find(|(_, decl)| decl.name == name)
}

/// Every declared endpoint.
pub fn all() -> impl Iterator<Item = &'static Declaration> {
  domains().into_iter().flat_map(|(_, _, catalog)| catalog.iter().copied())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_lookup() {
    let (domain, decl) = lookup("Delete Order").unwrap();
    assert_eq!(domain, Domain::Trading);
    assert_eq!(decl.path, "v2/orders/{order_id}");
    assert_eq!(decl.ok_status, 204);
    assert!(lookup("Get Option Chain").is_none());
    assert_eq!(lookup("Snapshots").unwrap().0, Domain::MarketData);
  }

  #[test]
  fn test_status_messages_are_returned_verbatim() {
    for decl in all() {
      for (code, text) in decl.status_messages {
        assert_ne!(*code, decl.ok_status, "{} documents its ok status", decl.name);
        assert_eq!(decl.message_for(*code, &[]).as_deref(), Some(*text), "{}", decl.name);
        assert_eq!(decl.failure_message(*code, "Status Text", &[]), *text, "{}", decl.name);
      }
    }
  }

  #[test]
  fn test_every_other_status_falls_back_to_generic_message() {
    for decl in all() {
      let status = decl.ok_status + 1;
      assert!(decl.message_for(status, &[]).is_none(), "{} documents {}", decl.name, status);
      assert_eq!(
        decl.failure_message(status, "Status Text", &[]),
        format!("{}: Undocumented response {}: Status Text", decl.name, status)
      );
    }
  }

  #[test]
  fn test_names_are_unique() {
    let names: HashSet<_> = all().map(|decl| decl.name).collect();
    assert_eq!(names.len(), all().count());
  }

  #[test]
  fn test_paths_are_relative() {
    assert!(all().all(|decl| !decl.path.starts_with('/') && decl.path.starts_with("v2/")));
  }

  #[test]
  fn test_domain_bases() {
    assert_eq!(Domain::Trading.base(true), ApiBase::Paper);
    assert_eq!(Domain::Trading.base(false), ApiBase::Live);
    assert_eq!(Domain::MarketData.base(false), ApiBase::Data);
  }
}
