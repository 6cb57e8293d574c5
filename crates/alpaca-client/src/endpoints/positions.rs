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

//! Open positions: list, close and exercise

use crate::batch::aggregate;
use crate::endpoint::{Declaration, Endpoint};
use crate::invoker::{Call, Invoker};
use alpaca_core::{Method, Result};
use alpaca_models::schema::{NoContent, Never};
use alpaca_models::{
  CloseAllPositionsQuery, ClosePositionQuery, ClosePositionResult, Order, Position,
};
use tracing::instrument;

pub static GET_ALL_POSITIONS: Endpoint<Never, Never, Vec<Position>> =
  Endpoint::new("Get All Positions", Method::Get, "v2/positions", 200);

pub static CLOSE_ALL_POSITIONS: Endpoint<CloseAllPositionsQuery, Never, Vec<ClosePositionResult>> =
  Endpoint::new("Close All Positions", Method::Delete, "v2/positions", 207)
    .with_messages(&[(500, "Close All Positions: Failed to liquidate")]);

pub static GET_POSITION: Endpoint<Never, Never, Position> =
  Endpoint::new("Get Position", Method::Get, "v2/positions/{symbol_or_asset_id}", 200);

pub static CLOSE_POSITION: Endpoint<ClosePositionQuery, Never, Order> =
  Endpoint::new("Close Position", Method::Delete, "v2/positions/{symbol_or_asset_id}", 200);

pub static EXERCISE_OPTIONS_POSITION: Endpoint<Never, Never, NoContent> = Endpoint::new(
  "Exercise Options Position",
  Method::Post,
  "v2/positions/{symbol_or_contract_id}/exercise",
  200,
)
.with_messages(&[
  (403, "Exercise Options Position: Available position quantity is not sufficient"),
  (422, "Exercise Options Position: One or more parameters provided are invalid"),
]);

pub static CATALOG: &[&Declaration] = &[
  &GET_ALL_POSITIONS.decl,
  &CLOSE_ALL_POSITIONS.decl,
  &GET_POSITION.decl,
  &CLOSE_POSITION.decl,
  &EXERCISE_OPTIONS_POSITION.decl,
];

#[derive(Debug, Clone)]
pub struct PositionEndpoints {
  invoker: Invoker,
}

impl PositionEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<Position>> {
    self.invoker.invoke(&GET_ALL_POSITIONS, Call::new()).await
  }

  /// Liquidate every open position.
  ///
  /// The server answers 207 with one result per symbol. If any of them is not
  /// 200 the call fails with an aggregate error listing each failed symbol;
  /// otherwise every result is returned with its liquidation order.
  #[instrument(skip(self, query))]
  pub async fn close_all(&self, query: &CloseAllPositionsQuery) -> Result<Vec<ClosePositionResult>> {
    let results = self.invoker.invoke(&CLOSE_ALL_POSITIONS, Call::new().query(query)).await?;
    aggregate(CLOSE_ALL_POSITIONS.name(), results)
  }

  #[instrument(skip(self))]
  pub async fn get(&self, symbol_or_asset_id: &str) -> Result<Position> {
    let path = [("symbol_or_asset_id", symbol_or_asset_id)];
    self.invoker.invoke(&GET_POSITION, Call::new().path(&path)).await
  }

  /// Close all or part of one position; returns the order placed to do it.
  #[instrument(skip(self, query))]
  pub async fn close(
    &self,
    symbol_or_asset_id: &str,
    query: Option<&ClosePositionQuery>,
  ) -> Result<Order> {
    let path = [("symbol_or_asset_id", symbol_or_asset_id)];
    let mut call = Call::new().path(&path);
    call.query = query;
    self.invoker.invoke(&CLOSE_POSITION, call).await
  }

  /// Exercise a held option contract.
  #[instrument(skip(self))]
  pub async fn exercise(&self, symbol_or_contract_id: &str) -> Result<()> {
    let path = [("symbol_or_contract_id", symbol_or_contract_id)];
    self.invoker.invoke(&EXERCISE_OPTIONS_POSITION, Call::new().path(&path)).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_batch_endpoint_expects_multi_status() {
    assert_eq!(CLOSE_ALL_POSITIONS.decl.ok_status, 207);
    assert_eq!(
      CLOSE_ALL_POSITIONS.decl.failure_message(500, "Internal Server Error", &[]),
      "Close All Positions: Failed to liquidate"
    );
  }

  #[test]
  fn test_exercise_path() {
    let path = EXERCISE_OPTIONS_POSITION
      .decl
      .resolve_path(&[("symbol_or_contract_id", "AAPL240119C00100000")])
      .unwrap();
    assert_eq!(path, "v2/positions/AAPL240119C00100000/exercise");
  }
}
