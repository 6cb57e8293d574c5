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

//! Closed sets of wire values shared across the models.
//!
//! Each enum parses from, and renders to, the exact string the API uses.

use crate::schema::{enumerated, mismatch, Decode, FieldPath, QueryValue};
use alpaca_core::ValidationErrors;
use serde::{Serialize, Serializer};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString, VariantNames};

/// Decode / serialize / query support for string-valued enums.
macro_rules! wire_enum {
  ($($name:ident),+ $(,)?) => {
    $(
      impl Decode for $name {
        fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
          enumerated(value, path, issues)
        }
      }

      impl Serialize for $name {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
          serializer.collect_str(self)
        }
      }

      impl From<$name> for QueryValue {
        fn from(value: $name) -> Self {
          QueryValue::String(value.to_string())
        }
      }
    )+
  };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
  Usd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Exchange {
  Amex,
  Arca,
  Bats,
  Nyse,
  Nasdaq,
  Nysearca,
  Otc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
  Onboarding,
  SubmissionFailed,
  Submitted,
  AccountUpdated,
  ApprovalPending,
  Active,
  Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum AssetClass {
  UsEquity,
  UsOption,
  Crypto,
}

/// Tradability state of an asset or option contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum ActiveStatus {
  Active,
  Inactive,
  Suspended,
  Delisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum AssetAttribute {
  PtpNoException,
  PtpWithException,
  Ipo,
  HasOptions,
  OptionsLateClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum OrderClass {
  Simple,
  Bracket,
  Oco,
  Oto,
  Mleg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum OrderSide {
  Buy,
  Sell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum PositionSide {
  Long,
  Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum OrderType {
  Market,
  Limit,
  Stop,
  StopLimit,
  TrailingStop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum TimeInForce {
  Day,
  Gtc,
  Opg,
  Cls,
  Ioc,
  Fok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum PositionIntent {
  BuyToOpen,
  BuyToClose,
  SellToOpen,
  SellToClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum OrderStatus {
  New,
  PartiallyFilled,
  Filled,
  DoneForDay,
  Canceled,
  Expired,
  Replaced,
  PendingCancel,
  PendingReplace,
  Accepted,
  PendingNew,
  AcceptedForBidding,
  Stopped,
  Rejected,
  Suspended,
  Calculated,
}

/// Order filter of the list-orders query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum OrderQueryStatus {
  Open,
  Closed,
  All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
  Asc,
  Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum IntradayReporting {
  MarketHours,
  ExtendedHours,
  Continuous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum PnlReset {
  PerDay,
  NoReset,
}

/// Account activity codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ActivityType {
  Fill,
  Trans,
  Misc,
  Acatc,
  Acats,
  Cfee,
  Csd,
  Csw,
  Div,
  Divcgl,
  Divcgs,
  Divfee,
  Divft,
  Divnra,
  Divroc,
  Divtw,
  Divtxex,
  Fee,
  Int,
  Intnra,
  Inttw,
  Jnl,
  Jnlc,
  Jnls,
  Ma,
  Nc,
  Opasn,
  Opca,
  Opcsh,
  Opexc,
  Opexp,
  Optrd,
  Ptc,
  Ptr,
  Reorg,
  Spin,
  Split,
}

/// Cash flow filter of the portfolio history query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CashflowFilter {
  All,
  Nothing,
  Activity(ActivityType),
}

impl From<CashflowFilter> for QueryValue {
  fn from(value: CashflowFilter) -> Self {
    match value {
      CashflowFilter::All => QueryValue::from("ALL"),
      CashflowFilter::Nothing => QueryValue::from("NONE"),
      CashflowFilter::Activity(activity) => activity.into(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum TradeConfirmEmail {
  All,
  #[strum(serialize = "none")]
  Disabled,
}

/// Which side of a round trip the day trade checks run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum DayTradeCheck {
  Both,
  Entry,
  Exit,
}

/// Options approval level, sent as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionsLevel {
  Disabled = 0,
  CoveredCall = 1,
  Long = 2,
  Spreads = 3,
}

impl OptionsLevel {
  pub fn from_level(level: u64) -> Option<Self> {
    match level {
      0 => Some(OptionsLevel::Disabled),
      1 => Some(OptionsLevel::CoveredCall),
      2 => Some(OptionsLevel::Long),
      3 => Some(OptionsLevel::Spreads),
      _ => None,
    }
  }

  pub fn level(self) -> u8 {
    self as u8
  }
}

impl Decode for OptionsLevel {
  fn decode(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
    match value.as_u64().and_then(OptionsLevel::from_level) {
      Some(level) => Some(level),
      None => mismatch(path, "one of 0, 1, 2, 3", value, issues),
    }
  }
}

impl Serialize for OptionsLevel {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(self.level())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum DeliverableType {
  Cash,
  Equity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SettlementMethod {
  Btob,
  Cadf,
  Cafx,
  Ccc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
pub enum SettlementType {
  #[strum(serialize = "T+0")]
  T0,
  #[strum(serialize = "T+1")]
  T1,
  #[strum(serialize = "T+2")]
  T2,
  #[strum(serialize = "T+3")]
  T3,
  #[strum(serialize = "T+4")]
  T4,
  #[strum(serialize = "T+5")]
  T5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum ContractType {
  Call,
  Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum ContractStyle {
  American,
  European,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum TreasurySubtype {
  Bond,
  Bill,
  Note,
  Strips,
  Tips,
  Floating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum BondStatus {
  Outstanding,
  Matured,
  PreIssuance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum CouponType {
  Fixed,
  Floating,
  Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum CouponFrequency {
  Annual,
  SemiAnnual,
  Quarterly,
  Monthly,
  Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CalendarDateType {
  Trading,
  Settlement,
}

/// Market data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum StockFeed {
  Sip,
  Iex,
  DelayedSip,
  Boats,
  Overnight,
  Otc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
pub enum Tape {
  A,
  B,
  C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum TickType {
  Trade,
  Quote,
}

/// Exchange code attached to quotes and trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
pub enum ExchangeCode {
  A,
  B,
  C,
  N,
  O,
}

/// Correction flag on a trade print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum TradeUpdate {
  Cancelled,
  Incorrect,
  Corrected,
}

wire_enum!(
  Currency,
  Exchange,
  AccountStatus,
  AssetClass,
  ActiveStatus,
  AssetAttribute,
  OrderClass,
  OrderSide,
  PositionSide,
  OrderType,
  TimeInForce,
  PositionIntent,
  OrderStatus,
  OrderQueryStatus,
  SortDirection,
  IntradayReporting,
  PnlReset,
  ActivityType,
  TradeConfirmEmail,
  DayTradeCheck,
  DeliverableType,
  SettlementMethod,
  SettlementType,
  ContractType,
  ContractStyle,
  TreasurySubtype,
  BondStatus,
  CouponType,
  CouponFrequency,
  CalendarDateType,
  StockFeed,
  Tape,
  TickType,
  ExchangeCode,
  TradeUpdate,
);
