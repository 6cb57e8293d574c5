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

//! Tradable instruments: equities and crypto assets, option contracts and
//! US treasuries

use crate::enums::{
  ActiveStatus, AssetAttribute, AssetClass, BondStatus, ContractStyle, ContractType,
  CouponFrequency, CouponType, DeliverableType, Exchange, SettlementMethod, SettlementType,
  TreasurySubtype,
};
use crate::schema::{
  coerce_number, date, exact_len, non_empty, run, Decode, FieldPath, InputCheck, ObjectReader,
  QueryParams, QuerySchema, ResponseSchema,
};
use alpaca_core::ValidationErrors;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Upper bound of the option contracts page size.
pub const MAX_CONTRACTS_LIMIT: i64 = 10_000;

/// Upper bound of CUSIPs or ISINs per treasuries request.
pub const MAX_TREASURY_IDS: usize = 1_000;

const TREASURY_ID_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
  pub id: Uuid,
  pub class: AssetClass,
  pub cusip: Option<String>,
  pub exchange: Exchange,
  pub symbol: String,
  pub name: String,
  pub status: ActiveStatus,
  pub tradable: bool,
  pub marginable: bool,
  pub shortable: bool,
  pub easy_to_borrow: bool,
  pub fractionable: bool,
  /// Deprecated upstream, see the long/short requirements
  pub maintenance_margin_requirement: Option<f64>,
  pub margin_requirement_long: Option<f64>,
  pub margin_requirement_short: Option<f64>,
  pub attributes: Option<Vec<AssetAttribute>>,
}

impl Decode for Asset {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let id = obj.required("id");
    let class = obj.required("class");
    let cusip = obj.nullable("cusip");
    let exchange = obj.required("exchange");
    let symbol = obj.required("symbol");
    let name = obj.required_with("name", non_empty);
    let status = obj.required("status");
    let tradable = obj.required("tradable");
    let marginable = obj.required("marginable");
    let shortable = obj.required("shortable");
    let easy_to_borrow = obj.required("easy_to_borrow");
    let fractionable = obj.required("fractionable");
    let maintenance_margin_requirement = obj.optional("maintenance_margin_requirement");
    let margin_requirement_long = obj.optional_with("margin_requirement_long", coerce_number);
    let margin_requirement_short = obj.optional_with("margin_requirement_short", coerce_number);
    let attributes = obj.optional("attributes");
    obj.finish_strict();

    Some(Asset {
      id: id?,
      class: class?,
      cusip: cusip?,
      exchange: exchange?,
      symbol: symbol?,
      name: name?,
      status: status?,
      tradable: tradable?,
      marginable: marginable?,
      shortable: shortable?,
      easy_to_borrow: easy_to_borrow?,
      fractionable: fractionable?,
      maintenance_margin_requirement: maintenance_margin_requirement?,
      margin_requirement_long: margin_requirement_long?,
      margin_requirement_short: margin_requirement_short?,
      attributes: attributes?,
    })
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetsQuery {
  pub status: Option<ActiveStatus>,
  pub asset_class: Option<AssetClass>,
  pub exchange: Option<Exchange>,
  /// Sent comma separated
  pub attributes: Option<Vec<AssetAttribute>>,
}

impl QuerySchema for AssetsQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut params = QueryParams::new();
    params.set_opt("status", self.status);
    params.set_opt("asset_class", self.asset_class);
    params.set_opt("exchange", self.exchange);
    params.set_joined("attributes", self.attributes.as_deref());
    Ok(params)
  }
}

/// What an option contract settles into.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deliverable {
  pub deliverable_type: DeliverableType,
  pub symbol: String,
  pub asset_id: Option<Uuid>,
  pub amount: f64,
  pub allocation_percentage: f64,
  pub settlement_type: SettlementType,
  pub settlement_method: SettlementMethod,
  pub delayed_settlement: bool,
}

impl Decode for Deliverable {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let deliverable_type = obj.required("type");
    let symbol = obj.required("symbol");
    let asset_id = obj.optional("asset_id");
    let amount = obj.required_with("amount", coerce_number);
    let allocation_percentage = obj.required_with("allocation_percentage", coerce_number);
    let settlement_type = obj.required("settlement_type");
    let settlement_method = obj.required("settlement_method");
    let delayed_settlement = obj.required("delayed_settlement");
    obj.finish_strict();

    Some(Deliverable {
      deliverable_type: deliverable_type?,
      symbol: symbol?,
      asset_id: asset_id?,
      amount: amount?,
      allocation_percentage: allocation_percentage?,
      settlement_type: settlement_type?,
      settlement_method: settlement_method?,
      delayed_settlement: delayed_settlement?,
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionContract {
  pub id: Uuid,
  pub symbol: String,
  pub name: String,
  pub status: ActiveStatus,
  pub tradable: bool,
  pub expiration_date: NaiveDate,
  pub root_symbol: Option<String>,
  pub underlying_symbol: String,
  pub underlying_asset_id: Uuid,
  pub contract_type: ContractType,
  pub style: ContractStyle,
  pub strike_price: f64,
  pub multiplier: f64,
  pub size: f64,
  pub open_interest: Option<f64>,
  pub open_interest_date: Option<NaiveDate>,
  pub close_price: Option<f64>,
  pub close_price_date: Option<NaiveDate>,
  pub deliverables: Option<Vec<Deliverable>>,
}

impl Decode for OptionContract {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let id = obj.required("id");
    let symbol = obj.required("symbol");
    let name = obj.required("name");
    let status = obj.required("status");
    let tradable = obj.required("tradable");
    let expiration_date = obj.required_with("expiration_date", date);
    let root_symbol = obj.optional("root_symbol");
    let underlying_symbol = obj.required("underlying_symbol");
    let underlying_asset_id = obj.required("underlying_asset_id");
    let contract_type = obj.required("type");
    let style = obj.required("style");
    let strike_price = obj.required_with("strike_price", coerce_number);
    let multiplier = obj.required_with("multiplier", coerce_number);
    let size = obj.required_with("size", coerce_number);
    let open_interest = obj.optional_with("open_interest", coerce_number);
    let open_interest_date = obj.optional_with("open_interest_date", date);
    let close_price = obj.optional_with("close_price", coerce_number);
    let close_price_date = obj.optional_with("close_price_date", date);
    let deliverables = obj.optional("deliverables");
    obj.finish_strict();

    Some(OptionContract {
      id: id?,
      symbol: symbol?,
      name: name?,
      status: status?,
      tradable: tradable?,
      expiration_date: expiration_date?,
      root_symbol: root_symbol?,
      underlying_symbol: underlying_symbol?,
      underlying_asset_id: underlying_asset_id?,
      contract_type: contract_type?,
      style: style?,
      strike_price: strike_price?,
      multiplier: multiplier?,
      size: size?,
      open_interest: open_interest?,
      open_interest_date: open_interest_date?,
      close_price: close_price?,
      close_price_date: close_price_date?,
      deliverables: deliverables?,
    })
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionContractsQuery {
  pub underlying_symbols: Option<Vec<String>>,
  pub show_deliverables: Option<bool>,
  pub status: Option<ActiveStatus>,
  pub expiration_date: Option<NaiveDate>,
  pub expiration_date_gte: Option<NaiveDate>,
  pub expiration_date_lte: Option<NaiveDate>,
  pub root_symbol: Option<String>,
  pub contract_type: Option<ContractType>,
  pub style: Option<ContractStyle>,
  pub strike_price_gte: Option<f64>,
  pub strike_price_lte: Option<f64>,
  pub page_token: Option<String>,
  pub limit: Option<i64>,
  pub ppind: Option<bool>,
}

impl QuerySchema for OptionContractsQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    if let Some(limit) = self.limit {
      check.at_most("limit", limit, MAX_CONTRACTS_LIMIT);
    }
    check.finish()?;

    let mut params = QueryParams::new();
    params.set_joined("underlying_symbols", self.underlying_symbols.as_deref());
    params.set_opt("show_deliverables", self.show_deliverables);
    params.set_opt("status", self.status);
    params.set_opt("expiration_date", self.expiration_date);
    params.set_opt("expiration_date_gte", self.expiration_date_gte);
    params.set_opt("expiration_date_lte", self.expiration_date_lte);
    params.set_opt("root_symbol", self.root_symbol.as_deref());
    params.set_opt("type", self.contract_type);
    params.set_opt("style", self.style);
    params.set_opt("strike_price_gte", self.strike_price_gte);
    params.set_opt("strike_price_lte", self.strike_price_lte);
    params.set_opt("page_token", self.page_token.as_deref());
    params.set_opt("limit", self.limit);
    params.set_opt("ppind", self.ppind);
    Ok(params)
  }
}

/// `{"option_contracts": [...]}`, unwrapped to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionContracts;

impl ResponseSchema for OptionContracts {
  type Output = Vec<OptionContract>;

  fn parse_output(value: &Value) -> Result<Vec<OptionContract>, ValidationErrors> {
    run(value, |value: &Value, path: &FieldPath, issues: &mut ValidationErrors| {
      let mut obj = ObjectReader::open(value, path, issues)?;
      let contracts: Option<Vec<OptionContract>> = obj.required("option_contracts");
      // pagination cursor; the unwrapped list has nowhere to carry it
      let _: Option<Option<String>> = obj.nullable("next_page_token");
      obj.finish_strict();
      contracts
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Treasury {
  pub cusip: String,
  pub isin: String,
  pub bond_status: BondStatus,
  pub tradable: bool,
  pub subtype: TreasurySubtype,
  pub issue_date: NaiveDate,
  pub maturity_date: NaiveDate,
  pub description: String,
  pub description_short: String,
  pub close_price: Option<f64>,
  pub close_price_date: Option<NaiveDate>,
  pub close_yield_to_maturity: Option<f64>,
  pub close_yield_to_worst: Option<f64>,
  pub coupon: f64,
  pub coupon_type: CouponType,
  pub coupon_frequency: CouponFrequency,
  pub first_coupon_date: Option<NaiveDate>,
  pub next_coupon_date: Option<NaiveDate>,
  pub last_coupon_date: Option<NaiveDate>,
}

impl Decode for Treasury {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let cusip = obj.required_with("cusip", exact_len(TREASURY_ID_LEN));
    let isin = obj.required_with("isin", exact_len(TREASURY_ID_LEN));
    let bond_status = obj.required("bond_status");
    let tradable = obj.required("tradable");
    let subtype = obj.required("subtype");
    let issue_date = obj.required_with("issue_date", date);
    let maturity_date = obj.required_with("maturity_date", date);
    let description = obj.required("description");
    let description_short = obj.required("description_short");
    let close_price = obj.optional_with("close_price", coerce_number);
    let close_price_date = obj.optional_with("close_price_date", date);
    let close_yield_to_maturity = obj.optional_with("close_yield_to_maturity", coerce_number);
    let close_yield_to_worst = obj.optional_with("close_yield_to_worst", coerce_number);
    let coupon = obj.required_with("coupon", coerce_number);
    let coupon_type = obj.required("coupon_type");
    let coupon_frequency = obj.required("coupon_frequency");
    let first_coupon_date = obj.optional_with("first_coupon_date", date);
    let next_coupon_date = obj.optional_with("next_coupon_date", date);
    let last_coupon_date = obj.optional_with("last_coupon_date", date);
    obj.finish_strict();

    Some(Treasury {
      cusip: cusip?,
      isin: isin?,
      bond_status: bond_status?,
      tradable: tradable?,
      subtype: subtype?,
      issue_date: issue_date?,
      maturity_date: maturity_date?,
      description: description?,
      description_short: description_short?,
      close_price: close_price?,
      close_price_date: close_price_date?,
      close_yield_to_maturity: close_yield_to_maturity?,
      close_yield_to_worst: close_yield_to_worst?,
      coupon: coupon?,
      coupon_type: coupon_type?,
      coupon_frequency: coupon_frequency?,
      first_coupon_date: first_coupon_date?,
      next_coupon_date: next_coupon_date?,
      last_coupon_date: last_coupon_date?,
    })
  }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreasuriesQuery {
  pub subtype: Option<TreasurySubtype>,
  pub bond_status: Option<BondStatus>,
  /// At most 1000 twelve character CUSIPs
  pub cusips: Option<Vec<String>>,
  /// At most 1000 twelve character ISINs
  pub isins: Option<Vec<String>>,
}

fn check_ids(check: &mut InputCheck, field: &str, ids: Option<&[String]>) {
  let Some(ids) = ids else { return };
  check.max_items(field, ids.len(), MAX_TREASURY_IDS);
  for (i, id) in ids.iter().enumerate() {
    check.exact_len(&format!("{}[{}]", field, i), id, TREASURY_ID_LEN);
  }
}

impl QuerySchema for TreasuriesQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    check_ids(&mut check, "cusips", self.cusips.as_deref());
    check_ids(&mut check, "isins", self.isins.as_deref());
    check.finish()?;

    let mut params = QueryParams::new();
    params.set_opt("subtype", self.subtype);
    params.set_opt("bond_status", self.bond_status);
    params.set_joined("cusips", self.cusips.as_deref());
    params.set_joined("isins", self.isins.as_deref());
    Ok(params)
  }
}

/// `{"us_treasuries": [...]}`, unwrapped to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Treasuries;

impl ResponseSchema for Treasuries {
  type Output = Vec<Treasury>;

  fn parse_output(value: &Value) -> Result<Vec<Treasury>, ValidationErrors> {
    run(value, |value: &Value, path: &FieldPath, issues: &mut ValidationErrors| {
      let mut obj = ObjectReader::open(value, path, issues)?;
      let treasuries: Option<Vec<Treasury>> = obj.required("us_treasuries");
      obj.finish_strict();
      treasuries
    })
  }
}
