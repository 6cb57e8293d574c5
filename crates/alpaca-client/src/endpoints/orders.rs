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

//! Order endpoints

use crate::batch::aggregate;
use crate::endpoint::{Declaration, Endpoint};
use crate::invoker::{Call, Invoker};
use alpaca_core::{Method, Result};
use alpaca_models::schema::{NoContent, Never};
use alpaca_models::{
  ClientOrderIdQuery, CreateOrderBody, GetOrderQuery, Order, OrderCancellation, OrdersQuery,
};
use tracing::instrument;

pub static CREATE_ORDER: Endpoint<Never, CreateOrderBody, Order> =
  Endpoint::new("Create Order", Method::Post, "v2/orders", 200).with_messages(&[
    (403, "Create Order: 403 Buying power or shares is not sufficient"),
    (422, "Create Order: 422 Input parameters are not recognized"),
  ]);

pub static GET_ORDERS: Endpoint<OrdersQuery, Never, Vec<Order>> =
  Endpoint::new("Get Orders", Method::Get, "v2/orders", 200);

pub static DELETE_ALL_ORDERS: Endpoint<Never, Never, Vec<OrderCancellation>> =
  Endpoint::new("Delete All Orders", Method::Delete, "v2/orders", 207);

pub static GET_ORDER_BY_CLIENT_ID: Endpoint<ClientOrderIdQuery, Never, Order> =
  Endpoint::new("Get Order by Client ID", Method::Get, "v2/orders:by_client_order_id", 200);

pub static GET_ORDER: Endpoint<GetOrderQuery, Never, Order> =
  Endpoint::new("Get Order", Method::Get, "v2/orders/{order_id}", 200);

pub static DELETE_ORDER: Endpoint<Never, Never, NoContent> =
  Endpoint::new("Delete Order", Method::Delete, "v2/orders/{order_id}", 204)
    .with_messages(&[(422, "Delete Order: 422 The order status is not cancelable")]);

pub static CATALOG: &[&Declaration] = &[
  &CREATE_ORDER.decl,
  &GET_ORDERS.decl,
  &DELETE_ALL_ORDERS.decl,
  &GET_ORDER_BY_CLIENT_ID.decl,
  &GET_ORDER.decl,
  &DELETE_ORDER.decl,
];

#[derive(Debug, Clone)]
pub struct OrderEndpoints {
  invoker: Invoker,
}

impl OrderEndpoints {
  pub fn new(invoker: Invoker) -> Self {
    Self { invoker }
  }

  /// Submit an order.
  ///
  /// The body is checked before anything is sent: `type` and
  /// `time_in_force` are required and a `client_order_id` must be a UUID.
  ///
  /// ```ignore
  /// use alpaca_client::{CreateOrderBody, OrderSide};
  ///
  /// let body = CreateOrderBody::market("AAPL", OrderSide::Buy, 1.0);
  /// let order = client.orders().create(&body).await?;
  /// println!("{:?} {:?}", order.id, order.status);
  /// ```
  #[instrument(skip(self, body))]
  pub async fn create(&self, body: &CreateOrderBody) -> Result<Order> {
    self.invoker.invoke(&CREATE_ORDER, Call::new().body(body)).await
  }

  #[instrument(skip(self, query))]
  pub async fn list(&self, query: &OrdersQuery) -> Result<Vec<Order>> {
    self.invoker.invoke(&GET_ORDERS, Call::new().query(query)).await
  }

  /// Cancel every open order.
  ///
  /// Fails with an aggregate error naming each order that could not be
  /// cancelled, even when others were.
  #[instrument(skip(self))]
  pub async fn delete_all(&self) -> Result<Vec<OrderCancellation>> {
    let results = self.invoker.invoke(&DELETE_ALL_ORDERS, Call::new()).await?;
    aggregate(DELETE_ALL_ORDERS.name(), results)
  }

  #[instrument(skip(self))]
  pub async fn by_client_order_id(&self, client_order_id: &str) -> Result<Order> {
    let query = ClientOrderIdQuery { client_order_id: client_order_id.to_string() };
    self.invoker.invoke(&GET_ORDER_BY_CLIENT_ID, Call::new().query(&query)).await
  }

  #[instrument(skip(self, query))]
  pub async fn get(&self, order_id: &str, query: Option<&GetOrderQuery>) -> Result<Order> {
    let path = [("order_id", order_id)];
    let mut call = Call::new().path(&path);
    call.query = query;
    self.invoker.invoke(&GET_ORDER, call).await
  }

  /// Cancel one order. Answers 204 with no body.
  #[instrument(skip(self))]
  pub async fn delete(&self, order_id: &str) -> Result<()> {
    let path = [("order_id", order_id)];
    self.invoker.invoke(&DELETE_ORDER, Call::new().path(&path)).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_catalog() {
    assert_eq!(CATALOG.len(), 6);
    assert_eq!(DELETE_ORDER.decl.ok_status, 204);
    assert_eq!(DELETE_ALL_ORDERS.decl.ok_status, 207);
    assert_eq!(
      CREATE_ORDER.decl.message_for(403, &[]).as_deref(),
      Some("Create Order: 403 Buying power or shares is not sufficient")
    );
  }
}
