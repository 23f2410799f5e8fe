/*
[INPUT]:  Currencies, market pairs, wallet addresses
[OUTPUT]: Top-level utility calls (address validation, quotes, fees)
[POS]:    HTTP layer - endpoints not tied to one resource
[UPDATE]: When Quidax adds top-level utility endpoints
*/

use rust_decimal::Decimal;

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::http::query::append_query_parameters;
use crate::types::{ApiResponse, Currency, CurrencyPair, Kind};

fn validate_address(currency: Currency, address: &str) -> ApiRequest {
    ApiRequest::get(format!("/{currency}/{address}/validate_address"))
}

fn quotes(market: CurrencyPair, unit: Currency, kind: Kind, volume: Decimal) -> ApiRequest {
    let mut path = "/quotes".to_string();
    append_query_parameters(
        &mut path,
        &[
            ("market", Some(market.to_string())),
            ("unit", Some(unit.to_string())),
            ("kind", Some(kind.to_string())),
            ("volume", Some(volume.to_string())),
        ],
    );
    ApiRequest::get(path)
}

fn withdrawal_fee(currency: Currency) -> ApiRequest {
    let mut path = "/fee".to_string();
    append_query_parameters(&mut path, &[("currency", Some(currency.to_string()))]);
    ApiRequest::get(path)
}

impl QuidaxClient {
    /// Validate a wallet address for a currency.
    ///
    /// GET /{currency}/{address}/validate_address
    pub async fn validate_address(&self, currency: Currency, address: &str) -> Result<ApiResponse> {
        self.execute(validate_address(currency, address)).await
    }

    /// Fetch the current price quote for buying or selling a volume.
    ///
    /// GET /quotes?market=&unit=&kind=&volume=
    pub async fn quotes(
        &self,
        market: CurrencyPair,
        unit: Currency,
        kind: Kind,
        volume: Decimal,
    ) -> Result<ApiResponse> {
        self.execute(quotes(market, unit, kind, volume)).await
    }

    /// Fetch the withdrawal fee for a currency.
    ///
    /// GET /fee?currency=
    pub async fn withdrawal_fee(&self, currency: Currency) -> Result<ApiResponse> {
        self.execute(withdrawal_fee(currency)).await
    }
}

impl BlockingQuidaxClient {
    /// Validate a wallet address for a currency.
    pub fn validate_address(&self, currency: Currency, address: &str) -> Result<ApiResponse> {
        self.execute(validate_address(currency, address))
    }

    /// Fetch the current price quote for buying or selling a volume.
    pub fn quotes(
        &self,
        market: CurrencyPair,
        unit: Currency,
        kind: Kind,
        volume: Decimal,
    ) -> Result<ApiResponse> {
        self.execute(quotes(market, unit, kind, volume))
    }

    /// Fetch the withdrawal fee for a currency.
    pub fn withdrawal_fee(&self, currency: Currency) -> Result<ApiResponse> {
        self.execute(withdrawal_fee(currency))
    }
}
