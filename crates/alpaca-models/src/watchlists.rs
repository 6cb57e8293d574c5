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

//! Watchlists

use crate::assets::Asset;
use crate::schema::{
  date_time, encode_body, non_empty, BodySchema, Decode, FieldPath, InputCheck, ObjectReader,
  QueryParams, QuerySchema,
};
use alpaca_core::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Watchlist {
  pub id: Uuid,
  pub account_id: Uuid,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub name: String,
  pub assets: Option<Vec<Asset>>,
}

impl Decode for Watchlist {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let id = obj.required("id");
    let account_id = obj.required("account_id");
    let created_at = obj.required_with("created_at", date_time);
    let updated_at = obj.required_with("updated_at", date_time);
    let name = obj.required_with("name", non_empty);
    let assets = obj.optional("assets");
    obj.finish_strict();

    Some(Watchlist {
      id: id?,
      account_id: account_id?,
      created_at: created_at?,
      updated_at: updated_at?,
      name: name?,
      assets: assets?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateWatchlistBody {
  pub name: String,
  pub symbols: Vec<String>,
}

impl CreateWatchlistBody {
  pub fn new(name: impl Into<String>, symbols: Vec<String>) -> Self {
    Self { name: name.into(), symbols }
  }
}

impl BodySchema for CreateWatchlistBody {
  fn parse_input(&self) -> Result<Value, ValidationErrors> {
    let mut check = InputCheck::new();
    check.non_empty("name", &self.name);
    check.finish()?;

    encode_body(self)
  }
}

/// Replacement name and/or symbol list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWatchlistBody {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub symbols: Option<Vec<String>>,
}

impl BodySchema for UpdateWatchlistBody {
  fn parse_input(&self) -> Result<Value, ValidationErrors> {
    let mut check = InputCheck::new();
    if let Some(name) = &self.name {
      check.non_empty("name", name);
    }
    check.finish()?;

    encode_body(self)
  }
}

/// Symbols appended to a watchlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddSymbolsBody {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub symbols: Option<Vec<String>>,
}

impl BodySchema for AddSymbolsBody {
  fn parse_input(&self) -> Result<Value, ValidationErrors> {
    encode_body(self)
  }
}

/// Selects a watchlist by name on the `:by_name` routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistNameQuery {
  pub name: String,
}

impl WatchlistNameQuery {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

impl QuerySchema for WatchlistNameQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    check.non_empty("name", &self.name);
    check.finish()?;

    let mut params = QueryParams::new();
    params.set("name", self.name.as_str());
    Ok(params)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::schema::ResponseSchema;
  use serde_json::json;

  fn watchlist_json() -> Value {
    json!({
      "id": "3174d6df-7726-44b4-a5bd-7fda5ae6e009",
      "account_id": "904837e3-3b76-47ec-b432-046db621571b",
      "created_at": "2024-01-02T14:30:00.123456Z",
      "updated_at": "2024-01-02T14:31:00.123456Z",
      "name": "tech",
      "assets": []
    })
  }

  #[test]
  fn test_watchlist_is_strict() {
    let list = Watchlist::parse_output(&watchlist_json()).unwrap();
    assert_eq!(list.name, "tech");
    assert_eq!(list.assets, Some(vec![]));

    let mut body = watchlist_json();
    body["owner"] = json!("me");
    assert!(Watchlist::parse_output(&body).unwrap_err().at("$.owner").is_some());
  }

  #[test]
  fn test_create_body() {
    let body = CreateWatchlistBody::new("tech", vec!["AAPL".to_string()]).parse_input().unwrap();
    assert_eq!(body, json!({"name": "tech", "symbols": ["AAPL"]}));
    assert!(CreateWatchlistBody::new("", vec![]).parse_input().is_err());
  }

  #[test]
  fn test_update_body_omits_absent_fields() {
    let body = UpdateWatchlistBody { name: Some("renamed".to_string()), symbols: None };
    assert_eq!(body.parse_input().unwrap(), json!({"name": "renamed"}));
    assert_eq!(AddSymbolsBody::default().parse_input().unwrap(), json!({}));
  }

  #[test]
  fn test_name_query() {
    let params = WatchlistNameQuery::new("tech").parse_input().unwrap();
    assert_eq!(params.get("name").unwrap().to_string(), "tech");
    assert!(WatchlistNameQuery::new("").parse_input().is_err());
  }
}
