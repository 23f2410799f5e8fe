/*
[INPUT]:  User and currency identifiers, optional network selection
[OUTPUT]: Wallet and payment-address calls
[POS]:    HTTP layer - /users/{user_id}/wallets endpoints
[UPDATE]: When Quidax adds wallet networks or address operations
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::http::query::append_query_parameters;
use crate::types::{ApiResponse, Currency, Network};

fn wallets(user_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/wallets"))
}

fn wallet(user_id: &str, currency: Currency) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/wallets/{currency}"))
}

fn payment_address(user_id: &str, currency: Currency) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/wallets/{currency}/address"))
}

fn payment_addresses(user_id: &str, currency: Currency) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/wallets/{currency}/addresses"))
}

fn payment_address_by_id(user_id: &str, currency: Currency, address_id: &str) -> ApiRequest {
    ApiRequest::get(format!(
        "/users/{user_id}/wallets/{currency}/addresses/{address_id}"
    ))
}

fn create_payment_address(user_id: &str, currency: Currency, network: Option<Network>) -> ApiRequest {
    let mut path = format!("/users/{user_id}/wallets/{currency}/addresses");
    append_query_parameters(&mut path, &[("network", network.map(|n| n.to_string()))]);
    ApiRequest::post(path)
}

impl QuidaxClient {
    /// List all wallets of a user. Pass `"me"` for the main account.
    ///
    /// GET /users/{user_id}/wallets
    pub async fn wallets(&self, user_id: &str) -> Result<ApiResponse> {
        self.execute(wallets(user_id)).await
    }

    /// Fetch one wallet.
    ///
    /// GET /users/{user_id}/wallets/{currency}
    pub async fn wallet(&self, user_id: &str, currency: Currency) -> Result<ApiResponse> {
        self.execute(wallet(user_id, currency)).await
    }

    /// Fetch the default payment address of a wallet.
    ///
    /// GET /users/{user_id}/wallets/{currency}/address
    pub async fn payment_address(&self, user_id: &str, currency: Currency) -> Result<ApiResponse> {
        self.execute(payment_address(user_id, currency)).await
    }

    /// List all payment addresses of a wallet.
    ///
    /// GET /users/{user_id}/wallets/{currency}/addresses
    pub async fn payment_addresses(
        &self,
        user_id: &str,
        currency: Currency,
    ) -> Result<ApiResponse> {
        self.execute(payment_addresses(user_id, currency)).await
    }

    /// Fetch one payment address by id.
    ///
    /// GET /users/{user_id}/wallets/{currency}/addresses/{address_id}
    pub async fn payment_address_by_id(
        &self,
        user_id: &str,
        currency: Currency,
        address_id: &str,
    ) -> Result<ApiResponse> {
        self.execute(payment_address_by_id(user_id, currency, address_id))
            .await
    }

    /// Create a payment address, optionally on a specific network.
    ///
    /// POST /users/{user_id}/wallets/{currency}/addresses[?network=]
    pub async fn create_payment_address(
        &self,
        user_id: &str,
        currency: Currency,
        network: Option<Network>,
    ) -> Result<ApiResponse> {
        self.execute(create_payment_address(user_id, currency, network))
            .await
    }
}

impl BlockingQuidaxClient {
    /// List all wallets of a user. Pass `"me"` for the main account.
    pub fn wallets(&self, user_id: &str) -> Result<ApiResponse> {
        self.execute(wallets(user_id))
    }

    /// Fetch one wallet.
    pub fn wallet(&self, user_id: &str, currency: Currency) -> Result<ApiResponse> {
        self.execute(wallet(user_id, currency))
    }

    /// Fetch the default payment address of a wallet.
    pub fn payment_address(&self, user_id: &str, currency: Currency) -> Result<ApiResponse> {
        self.execute(payment_address(user_id, currency))
    }

    /// List all payment addresses of a wallet.
    pub fn payment_addresses(&self, user_id: &str, currency: Currency) -> Result<ApiResponse> {
        self.execute(payment_addresses(user_id, currency))
    }

    /// Fetch one payment address by id.
    pub fn payment_address_by_id(
        &self,
        user_id: &str,
        currency: Currency,
        address_id: &str,
    ) -> Result<ApiResponse> {
        self.execute(payment_address_by_id(user_id, currency, address_id))
    }

    /// Create a payment address, optionally on a specific network.
    pub fn create_payment_address(
        &self,
        user_id: &str,
        currency: Currency,
        network: Option<Network>,
    ) -> Result<ApiResponse> {
        self.execute(create_payment_address(user_id, currency, network))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[test]
    fn wallet_paths_interpolate_currency() {
        assert_eq!(wallets("me").path, "/users/me/wallets");
        assert_eq!(wallet("me", Currency::Btc).path, "/users/me/wallets/btc");
        assert_eq!(
            payment_address("me", Currency::Eth).path,
            "/users/me/wallets/eth/address"
        );
        assert_eq!(
            payment_address_by_id("abc", Currency::Usdt, "addr1").path,
            "/users/abc/wallets/usdt/addresses/addr1"
        );
    }

    #[test]
    fn create_address_appends_network_only_when_given() {
        let bare = create_payment_address("me", Currency::Usdt, None);
        assert_eq!(bare.method, Method::POST);
        assert_eq!(bare.path, "/users/me/wallets/usdt/addresses");

        let on_tron = create_payment_address("me", Currency::Usdt, Some(Network::Trc20));
        assert_eq!(on_tron.path, "/users/me/wallets/usdt/addresses?network=trc20");
    }
}
