/*
[INPUT]:  Quidax API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When Quidax lists new currencies, pairs or networks
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Currencies listed on Quidax, serialized as their ticker symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Btc,
    Ltc,
    Dash,
    Tron,
    Qdx,
    Eth,
    Xrp,
    Bch,
    Sol,
    Floki,
    Wkd,
    Xtz,
    One,
    Ada,
    Babydoge,
    Fil,
    Axa,
    Xlm,
    Cake,
    Link,
    Dot,
    Shib,
    Aave,
    Usdc,
    Busd,
    Matic,
    Bnb,
    Doge,
    Usdt,
    Ngn,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Btc => "btc",
            Currency::Ltc => "ltc",
            Currency::Dash => "dash",
            Currency::Tron => "tron",
            Currency::Qdx => "qdx",
            Currency::Eth => "eth",
            Currency::Xrp => "xrp",
            Currency::Bch => "bch",
            Currency::Sol => "sol",
            Currency::Floki => "floki",
            Currency::Wkd => "wkd",
            Currency::Xtz => "xtz",
            Currency::One => "one",
            Currency::Ada => "ada",
            Currency::Babydoge => "babydoge",
            Currency::Fil => "fil",
            Currency::Axa => "axa",
            Currency::Xlm => "xlm",
            Currency::Cake => "cake",
            Currency::Link => "link",
            Currency::Dot => "dot",
            Currency::Shib => "shib",
            Currency::Aave => "aave",
            Currency::Usdc => "usdc",
            Currency::Busd => "busd",
            Currency::Matic => "matic",
            Currency::Bnb => "bnb",
            Currency::Doge => "doge",
            Currency::Usdt => "usdt",
            Currency::Ngn => "ngn",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blockchain networks a payment address can be created on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Btc,
    Ltc,
    Dash,
    Trc20,
    Bep20,
    Erc20,
    Ripple,
    Bhc,
    Cardano,
    Stellar,
    Doge,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Btc => "btc",
            Network::Ltc => "ltc",
            Network::Dash => "dash",
            Network::Trc20 => "trc20",
            Network::Bep20 => "bep20",
            Network::Erc20 => "erc20",
            Network::Ripple => "ripple",
            Network::Bhc => "bhc",
            Network::Cardano => "cardano",
            Network::Stellar => "stellar",
            Network::Doge => "doge",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Markets quoted on Quidax, serialized as concatenated tickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyPair {
    QdxUsdt,
    BtcUsdt,
    BtcNgn,
    EthNgn,
    QdxNgn,
    XrpNgn,
    DashNgn,
    LtcNgn,
    UsdtNgn,
    BtcGhs,
    UsdtGhs,
    TrxNgn,
    DogeUsdt,
    BnbUsdt,
    MaticUsdt,
    SafemoonUsdt,
    AaveUsdt,
    ShibUsdt,
    DotUsdt,
    LinkUsdt,
    CakeUsdt,
    XlmUsdt,
    XrpUsdt,
    LtcUsdt,
    EthUsdt,
    TrxUsdt,
    AxsUsdt,
    WsgUsdt,
    AfenUsdt,
    BlsUsdt,
    DashUsdt,
}

impl CurrencyPair {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyPair::QdxUsdt => "qdxusdt",
            CurrencyPair::BtcUsdt => "btcusdt",
            CurrencyPair::BtcNgn => "btcngn",
            CurrencyPair::EthNgn => "ethngn",
            CurrencyPair::QdxNgn => "qdxngn",
            CurrencyPair::XrpNgn => "xrpngn",
            CurrencyPair::DashNgn => "dashngn",
            CurrencyPair::LtcNgn => "ltcngn",
            CurrencyPair::UsdtNgn => "usdtngn",
            CurrencyPair::BtcGhs => "btcghs",
            CurrencyPair::UsdtGhs => "usdtghs",
            CurrencyPair::TrxNgn => "trxngn",
            CurrencyPair::DogeUsdt => "dogeusdt",
            CurrencyPair::BnbUsdt => "bnbusdt",
            CurrencyPair::MaticUsdt => "maticusdt",
            CurrencyPair::SafemoonUsdt => "safemoonusdt",
            CurrencyPair::AaveUsdt => "aaveusdt",
            CurrencyPair::ShibUsdt => "shibusdt",
            CurrencyPair::DotUsdt => "dotusdt",
            CurrencyPair::LinkUsdt => "linkusdt",
            CurrencyPair::CakeUsdt => "cakeusdt",
            CurrencyPair::XlmUsdt => "xlmusdt",
            CurrencyPair::XrpUsdt => "xrpusdt",
            CurrencyPair::LtcUsdt => "ltcusdt",
            CurrencyPair::EthUsdt => "ethusdt",
            CurrencyPair::TrxUsdt => "trxusdt",
            CurrencyPair::AxsUsdt => "axsusdt",
            CurrencyPair::WsgUsdt => "wsgusdt",
            CurrencyPair::AfenUsdt => "afenusdt",
            CurrencyPair::BlsUsdt => "blsusdt",
            CurrencyPair::DashUsdt => "dashusdt",
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle states of deposits and withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionState {
    Submitted,
    Processing,
    Done,
    Rejected,
    Submitting,
    Canceled,
    Failed,
    Accepted,
    Checked,
}

impl TransactionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionState::Submitted => "submitted",
            TransactionState::Processing => "processing",
            TransactionState::Done => "done",
            TransactionState::Rejected => "rejected",
            TransactionState::Submitting => "submitting",
            TransactionState::Canceled => "canceled",
            TransactionState::Failed => "failed",
            TransactionState::Accepted => "accepted",
            TransactionState::Checked => "checked",
        }
    }
}

impl fmt::Display for TransactionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle states of limit and instant orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Done,
    Wait,
    Cancel,
    Confirm,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderState::Done => "done",
            OrderState::Wait => "wait",
            OrderState::Cancel => "cancel",
            OrderState::Confirm => "confirm",
        }
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderSide::Buy => "buy",
            OrderSide::Sell => "sell",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdType {
    Limit,
    Market,
}

impl OrdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrdType::Limit => "limit",
            OrdType::Market => "market",
        }
    }
}

impl fmt::Display for OrdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of the book a quote is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Ask,
    Bid,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Ask => "ask",
            Kind::Bid => "bid",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// K-line resolutions in minutes, the only values the API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1")]
    M1,
    #[serde(rename = "5")]
    M5,
    #[serde(rename = "15")]
    M15,
    #[serde(rename = "30")]
    M30,
    #[serde(rename = "60")]
    H1,
    #[serde(rename = "120")]
    H2,
    #[serde(rename = "240")]
    H4,
    #[serde(rename = "360")]
    H6,
    #[serde(rename = "720")]
    H12,
    #[serde(rename = "1440")]
    D1,
    #[serde(rename = "4320")]
    D3,
    #[serde(rename = "10080")]
    W1,
}

impl Period {
    pub fn minutes(&self) -> u32 {
        match self {
            Period::M1 => 1,
            Period::M5 => 5,
            Period::M15 => 15,
            Period::M30 => 30,
            Period::H1 => 60,
            Period::H2 => 120,
            Period::H4 => 240,
            Period::H6 => 360,
            Period::H12 => 720,
            Period::D1 => 1440,
            Period::D3 => 4320,
            Period::W1 => 10080,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.minutes())
    }
}
