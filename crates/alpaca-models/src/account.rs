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

//! Trading account, portfolio history and account configuration models

use crate::enums::{
  AccountStatus, CashflowFilter, Currency, DayTradeCheck, IntradayReporting, OptionsLevel,
  PnlReset, TradeConfirmEmail,
};
use crate::schema::{
  coerce_integer, coerce_number, date, date_time, decimal_string, encode_body, mismatch, BodySchema,
  Decode, FieldPath, InputCheck, ObjectReader, QueryParams, QuerySchema,
};
use alpaca_core::ValidationErrors;
use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::LazyLock;
use uuid::Uuid;

/// The trading account behind the configured credentials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
  pub id: Uuid,
  pub account_number: Option<String>,
  pub status: AccountStatus,
  pub currency: Option<Currency>,
  pub cash: Option<f64>,
  /// Deprecated upstream, see `equity`
  pub portfolio_value: Option<f64>,
  pub non_marginable_buying_power: Option<f64>,
  pub accrued_fees: Option<f64>,
  pub pending_transfer_in: Option<f64>,
  pub pending_transfer_out: Option<f64>,
  pub pattern_day_trader: Option<bool>,
  pub trade_suspended_by_user: Option<bool>,
  pub trading_blocked: Option<bool>,
  pub transfers_blocked: Option<bool>,
  pub account_blocked: Option<bool>,
  pub created_at: Option<DateTime<Utc>>,
  pub shorting_enabled: Option<bool>,
  pub long_market_value: Option<f64>,
  pub short_market_value: Option<f64>,
  pub equity: Option<f64>,
  pub last_equity: Option<f64>,
  /// Buying power multiplier (1, 2 or 4)
  pub multiplier: Option<i64>,
  pub buying_power: Option<f64>,
  pub maintenance_margin: Option<f64>,
  pub initial_margin: Option<f64>,
  pub sma: Option<f64>,
  pub daytrade_count: Option<i64>,
  pub balance_asof: Option<NaiveDate>,
  pub last_maintenance_margin: Option<f64>,
  pub daytrading_buying_power: Option<f64>,
  pub regt_buying_power: Option<f64>,
  pub options_buying_power: Option<f64>,
  pub options_approved_level: Option<OptionsLevel>,
  pub options_trading_level: Option<OptionsLevel>,
  pub intraday_adjustments: Option<f64>,
  pub pending_reg_taf_fees: Option<f64>,

  // Sent by the live API without a documented shape; carried opaque.
  pub effective_buying_power: Option<Value>,
  pub position_market_value: Option<Value>,
  pub bod_dtbp: Option<Value>,
  pub crypto_tier: Option<Value>,
  pub admin_configurations: Option<Value>,
  pub user_configurations: Option<Value>,
  pub crypto_status: Option<Value>,
}

impl Decode for Account {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let id = obj.required("id");
    let account_number = obj.optional("account_number");
    let status = obj.required("status");
    let currency = obj.optional("currency");
    let cash = obj.optional_with("cash", coerce_number);
    let portfolio_value = obj.optional_with("portfolio_value", coerce_number);
    let non_marginable_buying_power = obj.optional_with("non_marginable_buying_power", coerce_number);
    let accrued_fees = obj.optional_with("accrued_fees", coerce_number);
    let pending_transfer_in = obj.optional_with("pending_transfer_in", coerce_number);
    let pending_transfer_out = obj.optional_with("pending_transfer_out", coerce_number);
    let pattern_day_trader = obj.optional("pattern_day_trader");
    let trade_suspended_by_user = obj.optional("trade_suspended_by_user");
    let trading_blocked = obj.optional("trading_blocked");
    let transfers_blocked = obj.optional("transfers_blocked");
    let account_blocked = obj.optional("account_blocked");
    let created_at = obj.optional_with("created_at", date_time);
    let shorting_enabled = obj.optional("shorting_enabled");
    let long_market_value = obj.optional_with("long_market_value", coerce_number);
    let short_market_value = obj.optional_with("short_market_value", coerce_number);
    let equity = obj.optional_with("equity", coerce_number);
    let last_equity = obj.optional_with("last_equity", coerce_number);
    let multiplier = obj.optional_with("multiplier", coerce_integer);
    let buying_power = obj.optional_with("buying_power", coerce_number);
    let maintenance_margin = obj.optional_with("maintenance_margin", coerce_number);
    let initial_margin = obj.optional_with("initial_margin", coerce_number);
    let sma = obj.optional_with("sma", coerce_number);
    let daytrade_count = obj.optional("daytrade_count");
    let balance_asof = obj.optional_with("balance_asof", date);
    let last_maintenance_margin = obj.optional_with("last_maintenance_margin", coerce_number);
    let daytrading_buying_power = obj.optional_with("daytrading_buying_power", coerce_number);
    let regt_buying_power = obj.optional_with("regt_buying_power", coerce_number);
    let options_buying_power = obj.optional_with("options_buying_power", coerce_number);
    let options_approved_level = obj.optional("options_approved_level");
    let options_trading_level = obj.optional("options_trading_level");
    let intraday_adjustments = obj.optional_with("intraday_adjustments", coerce_number);
    let pending_reg_taf_fees = obj.optional_with("pending_reg_taf_fees", coerce_number);
    let effective_buying_power = obj.optional("effective_buying_power");
    let position_market_value = obj.optional("position_market_value");
    let bod_dtbp = obj.optional("bod_dtbp");
    let crypto_tier = obj.optional("crypto_tier");
    let admin_configurations = obj.optional("admin_configurations");
    let user_configurations = obj.optional("user_configurations");
    let crypto_status = obj.optional("crypto_status");
    obj.finish_strict();

    Some(Account {
      id: id?,
      account_number: account_number?,
      status: status?,
      currency: currency?,
      cash: cash?,
      portfolio_value: portfolio_value?,
      non_marginable_buying_power: non_marginable_buying_power?,
      accrued_fees: accrued_fees?,
      pending_transfer_in: pending_transfer_in?,
      pending_transfer_out: pending_transfer_out?,
      pattern_day_trader: pattern_day_trader?,
      trade_suspended_by_user: trade_suspended_by_user?,
      trading_blocked: trading_blocked?,
      transfers_blocked: transfers_blocked?,
      account_blocked: account_blocked?,
      created_at: created_at?,
      shorting_enabled: shorting_enabled?,
      long_market_value: long_market_value?,
      short_market_value: short_market_value?,
      equity: equity?,
      last_equity: last_equity?,
      multiplier: multiplier?,
      buying_power: buying_power?,
      maintenance_margin: maintenance_margin?,
      initial_margin: initial_margin?,
      sma: sma?,
      daytrade_count: daytrade_count?,
      balance_asof: balance_asof?,
      last_maintenance_margin: last_maintenance_margin?,
      daytrading_buying_power: daytrading_buying_power?,
      regt_buying_power: regt_buying_power?,
      options_buying_power: options_buying_power?,
      options_approved_level: options_approved_level?,
      options_trading_level: options_trading_level?,
      intraday_adjustments: intraday_adjustments?,
      pending_reg_taf_fees: pending_reg_taf_fees?,
      effective_buying_power: effective_buying_power?,
      position_market_value: position_market_value?,
      bod_dtbp: bod_dtbp?,
      crypto_tier: crypto_tier?,
      admin_configurations: admin_configurations?,
      user_configurations: user_configurations?,
      crypto_status: crypto_status?,
    })
  }
}

static HISTORY_PERIOD: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d+[DWMA]$").expect("static period pattern"));

static HISTORY_TIMEFRAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\d+(Min|[HD])$").expect("static timeframe pattern"));

/// Query of the portfolio history endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryQuery {
  /// Window length such as `1D`, `2W`, `3M` or `1A`
  pub period: Option<String>,
  /// Bucket size such as `1Min`, `15Min`, `1H` or `1D`
  pub timeframe: Option<String>,
  pub intraday_reporting: Option<IntradayReporting>,
  pub start: Option<DateTime<Utc>>,
  pub pnl_reset: Option<PnlReset>,
  pub end: Option<DateTime<Utc>>,
  /// Deprecated upstream, see `intraday_reporting`
  pub extended_hours: Option<bool>,
  pub cashflow_types: Option<CashflowFilter>,
}

impl QuerySchema for HistoryQuery {
  fn parse_input(&self) -> Result<QueryParams, ValidationErrors> {
    let mut check = InputCheck::new();
    if let Some(period) = &self.period {
      check.ensure("period", HISTORY_PERIOD.is_match(period), "period like 1D, 2W, 3M or 1A", period);
    }
    if let Some(timeframe) = &self.timeframe {
      check.ensure(
        "timeframe",
        HISTORY_TIMEFRAME.is_match(timeframe),
        "timeframe like 1Min, 1H or 1D",
        timeframe,
      );
    }
    check.finish()?;

    let mut params = QueryParams::new();
    params.set_opt("period", self.period.as_deref());
    params.set_opt("timeframe", self.timeframe.as_deref());
    params.set_opt("intraday_reporting", self.intraday_reporting);
    params.set_opt("start", self.start);
    params.set_opt("pnl_reset", self.pnl_reset);
    params.set_opt("end", self.end);
    params.set_opt("extended_hours", self.extended_hours);
    params.set_opt("cashflow_types", self.cashflow_types);
    Ok(params)
  }
}

/// One sample of the portfolio history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryFrame {
  /// Unix epoch seconds
  pub timestamp: i64,
  pub equity: f64,
  pub profit_loss: f64,
  pub profit_loss_pct: f64,
}

/// Portfolio history, pivoted from parallel arrays into frames.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct History {
  pub frames: Vec<HistoryFrame>,
  pub base_value: f64,
  pub base_value_asof: Option<NaiveDate>,
  pub timeframe: String,
  pub cashflow: Option<Map<String, Value>>,
}

fn timeframe(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<String> {
  match value.as_str() {
    Some(s) if HISTORY_TIMEFRAME.is_match(s) => Some(s.to_string()),
    _ => mismatch(path, "timeframe like 1Min, 1H or 1D", value, issues),
  }
}

fn json_object(
  value: &Value,
  path: &FieldPath,
  issues: &mut ValidationErrors,
) -> Option<Map<String, Value>> {
  match value {
    Value::Object(map) => Some(map.clone()),
    other => mismatch(path, "object", other, issues),
  }
}

impl Decode for History {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let timestamp: Option<Vec<i64>> = obj.required("timestamp");
    let equity: Option<Vec<f64>> = obj.required("equity");
    let profit_loss: Option<Vec<f64>> = obj.required("profit_loss");
    let profit_loss_pct: Option<Vec<f64>> = obj.required("profit_loss_pct");
    let base_value = obj.required("base_value");
    let base_value_asof = obj.optional_with("base_value_asof", date);
    let timeframe = obj.required_with("timeframe", timeframe);
    let cashflow = obj.optional_with("cashflow", json_object);
    obj.finish_tolerant();

    let (timestamp, equity, profit_loss, profit_loss_pct) =
      (timestamp?, equity?, profit_loss?, profit_loss_pct?);

    let expected = format!("array of {} items, one per timestamp", timestamp.len());
    let mut aligned = true;
    let lengths = [
      ("equity", equity.len()),
      ("profit_loss", profit_loss.len()),
      ("profit_loss_pct", profit_loss_pct.len()),
    ];
    for (key, len) in lengths {
      if len != timestamp.len() {
        issues.add(path.key(key).to_string(), expected.as_str(), format!("array of {} items", len));
        aligned = false;
      }
    }
    if !aligned {
      return None;
    }

    let frames = timestamp
      .into_iter()
      .zip(equity)
      .zip(profit_loss)
      .zip(profit_loss_pct)
      .map(|(((timestamp, equity), profit_loss), profit_loss_pct)| HistoryFrame {
        timestamp,
        equity,
        profit_loss,
        profit_loss_pct,
      })
      .collect();

    Some(History {
      frames,
      base_value: base_value?,
      base_value_asof: base_value_asof?,
      timeframe: timeframe?,
      cashflow: cashflow?,
    })
  }
}

/// Account level trading configuration.
///
/// The same model is read from the configurations endpoint and sent back to
/// update it. On the wire `max_margin_multiplier` is the string `"1"`, `"2"`
/// or `"4"`; here it is a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AccountConfigurations {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dtbp_check: Option<DayTradeCheck>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trade_confirm_email: Option<TradeConfirmEmail>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub suspend_trade: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub no_shorting: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fractional_trading: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none", serialize_with = "decimal_string")]
  pub max_margin_multiplier: Option<u8>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max_options_trading_level: Option<OptionsLevel>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pdt_check: Option<DayTradeCheck>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ptp_no_exception_entry: Option<bool>,
}

const MARGIN_MULTIPLIERS: [u8; 3] = [1, 2, 4];

fn margin_multiplier(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<u8> {
  match value.as_str().and_then(|s| s.parse::<u8>().ok()) {
    Some(m) if MARGIN_MULTIPLIERS.contains(&m) => Some(m),
    _ => mismatch(path, "one of \"1\", \"2\", \"4\"", value, issues),
  }
}

impl Decode for AccountConfigurations {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    let mut obj = ObjectReader::open(value, path, issues)?;
    let dtbp_check = obj.optional("dtbp_check");
    let trade_confirm_email = obj.optional("trade_confirm_email");
    let suspend_trade = obj.optional("suspend_trade");
    let no_shorting = obj.optional("no_shorting");
    let fractional_trading = obj.optional("fractional_trading");
    let max_margin_multiplier = obj.optional_with("max_margin_multiplier", margin_multiplier);
    let max_options_trading_level = obj.optional("max_options_trading_level");
    let pdt_check = obj.optional("pdt_check");
    let ptp_no_exception_entry = obj.optional("ptp_no_exception_entry");
    obj.finish_tolerant();

    Some(AccountConfigurations {
      dtbp_check: dtbp_check?,
      trade_confirm_email: trade_confirm_email?,
      suspend_trade: suspend_trade?,
      no_shorting: no_shorting?,
      fractional_trading: fractional_trading?,
      max_margin_multiplier: max_margin_multiplier?,
      max_options_trading_level: max_options_trading_level?,
      pdt_check: pdt_check?,
      ptp_no_exception_entry: ptp_no_exception_entry?,
    })
  }
}

impl BodySchema for AccountConfigurations {
  fn parse_input(&self) -> Result<Value, ValidationErrors> {
    let mut check = InputCheck::new();
    if let Some(m) = self.max_margin_multiplier {
      let allowed = MARGIN_MULTIPLIERS.contains(&m);
      check.ensure("max_margin_multiplier", allowed, "one of 1, 2, 4", m.to_string());
    }
    check.finish()?;

    encode_body(self)
  }
}
