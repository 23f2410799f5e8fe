/*
[INPUT]:  Caller-supplied endpoint arguments
[OUTPUT]: Typed Rust request-body structs with serialization support
[POS]:    Data layer - POST/PUT bodies for write endpoints
[UPDATE]: When Quidax changes request parameters
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{Currency, CurrencyPair, OrdType, OrderSide};

/// Body for creating a sub-account tethered to the authenticated account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubAccount {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Body for updating a sub-account's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubAccountUpdate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body for registering a beneficiary wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBeneficiary {
    pub currency: Currency,
    /// Wallet address of the beneficiary.
    pub uid: String,
    /// Free-form label for the beneficiary.
    pub extra: String,
}

/// Body for editing an existing beneficiary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeneficiaryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

/// Body for placing an instant order at prevailing market price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInstantOrder {
    pub bid: Currency,
    pub ask: Currency,
    #[serde(rename = "type")]
    pub side: OrderSide,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
    /// Currency the volume is denominated in.
    pub unit: Currency,
}

/// Body for placing a limit or market order.
///
/// `price` is dropped from the wire body for market orders; use
/// [`NewOrder::limit`] and [`NewOrder::market`] to build consistent values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub market: CurrencyPair,
    pub side: OrderSide,
    pub ord_type: OrdType,
    #[serde(
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
}

impl NewOrder {
    pub fn limit(market: CurrencyPair, side: OrderSide, price: Decimal, volume: Decimal) -> Self {
        Self {
            market,
            side,
            ord_type: OrdType::Limit,
            price: Some(price),
            volume,
        }
    }

    pub fn market(market: CurrencyPair, side: OrderSide, volume: Decimal) -> Self {
        Self {
            market,
            side,
            ord_type: OrdType::Market,
            price: None,
            volume,
        }
    }
}

/// Body for initiating a withdrawal. `amount` goes over the wire as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWithdrawal {
    pub currency: Currency,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Sub-user id or external crypto address receiving the funds.
    pub fund_uid: String,
    pub transaction_note: String,
    pub narration: String,
    /// Destination tag, required by some chains.
    pub fund_uid2: String,
}
