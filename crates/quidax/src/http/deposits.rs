/*
[INPUT]:  User identifiers and deposit filters
[OUTPUT]: Deposit history calls
[POS]:    HTTP layer - deposit endpoints
[UPDATE]: When Quidax changes deposit endpoints
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::http::query::append_query_parameters;
use crate::types::{ApiResponse, Currency, TransactionState};

fn deposits_all() -> ApiRequest {
    ApiRequest::get("/users/deposits/all")
}

fn user_deposits(user_id: &str, currency: Currency, state: TransactionState) -> ApiRequest {
    let mut path = format!("/users/{user_id}/deposits");
    append_query_parameters(
        &mut path,
        &[
            ("currency", Some(currency.to_string())),
            ("state", Some(state.to_string())),
        ],
    );
    ApiRequest::get(path)
}

fn deposit(user_id: &str, deposit_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/deposits/{deposit_id}"))
}

impl QuidaxClient {
    /// List deposits across the main account and all sub-accounts.
    ///
    /// GET /users/deposits/all
    pub async fn deposits_all(&self) -> Result<ApiResponse> {
        self.execute(deposits_all()).await
    }

    /// List a user's deposits filtered by currency and state.
    ///
    /// GET /users/{user_id}/deposits
    pub async fn user_deposits(
        &self,
        user_id: &str,
        currency: Currency,
        state: TransactionState,
    ) -> Result<ApiResponse> {
        self.execute(user_deposits(user_id, currency, state)).await
    }

    /// Fetch one deposit.
    ///
    /// GET /users/{user_id}/deposits/{deposit_id}
    pub async fn deposit(&self, user_id: &str, deposit_id: &str) -> Result<ApiResponse> {
        self.execute(deposit(user_id, deposit_id)).await
    }
}

impl BlockingQuidaxClient {
    /// List deposits across the main account and all sub-accounts.
    pub fn deposits_all(&self) -> Result<ApiResponse> {
        self.execute(deposits_all())
    }

    /// List a user's deposits filtered by currency and state.
    pub fn user_deposits(
        &self,
        user_id: &str,
        currency: Currency,
        state: TransactionState,
    ) -> Result<ApiResponse> {
        self.execute(user_deposits(user_id, currency, state))
    }

    /// Fetch one deposit.
    pub fn deposit(&self, user_id: &str, deposit_id: &str) -> Result<ApiResponse> {
        self.execute(deposit(user_id, deposit_id))
    }
}
