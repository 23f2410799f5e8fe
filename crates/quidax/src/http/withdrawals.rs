/*
[INPUT]:  Withdrawal bodies and history filters
[OUTPUT]: Withdrawal calls (list, fetch, create, cancel)
[POS]:    HTTP layer - /users/{user_id}/withdrawals endpoints
[UPDATE]: When Quidax changes the withdrawal flow
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::http::query::append_query_parameters;
use crate::types::{ApiResponse, Currency, NewWithdrawal, TransactionState};

fn withdrawals(user_id: &str, currency: Currency, state: TransactionState) -> ApiRequest {
    let mut path = format!("/users/{user_id}/withdrawals");
    append_query_parameters(
        &mut path,
        &[
            ("currency", Some(currency.to_string())),
            ("state", Some(state.to_string())),
        ],
    );
    ApiRequest::get(path)
}

fn withdrawal(user_id: &str, withdrawal_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/withdrawals/{withdrawal_id}"))
}

fn create_withdrawal(user_id: &str, body: &NewWithdrawal) -> Result<ApiRequest> {
    ApiRequest::post_json(format!("/users/{user_id}/withdrawals"), body)
}

// Cancellation is only exposed for the authenticated account.
fn cancel_withdrawal(withdrawal_id: &str) -> ApiRequest {
    ApiRequest::post(format!("/users/me/withdrawals/{withdrawal_id}/cancel"))
}

impl QuidaxClient {
    /// List a user's withdrawals filtered by currency and state.
    ///
    /// GET /users/{user_id}/withdrawals
    pub async fn withdrawals(
        &self,
        user_id: &str,
        currency: Currency,
        state: TransactionState,
    ) -> Result<ApiResponse> {
        self.execute(withdrawals(user_id, currency, state)).await
    }

    /// Fetch one withdrawal.
    ///
    /// GET /users/{user_id}/withdrawals/{withdrawal_id}
    pub async fn withdrawal(&self, user_id: &str, withdrawal_id: &str) -> Result<ApiResponse> {
        self.execute(withdrawal(user_id, withdrawal_id)).await
    }

    /// Initiate a withdrawal to an internal or external wallet.
    ///
    /// POST /users/{user_id}/withdrawals
    pub async fn create_withdrawal(
        &self,
        user_id: &str,
        body: &NewWithdrawal,
    ) -> Result<ApiResponse> {
        self.execute(create_withdrawal(user_id, body)?).await
    }

    /// Cancel an initiated withdrawal.
    ///
    /// POST /users/me/withdrawals/{withdrawal_id}/cancel
    pub async fn cancel_withdrawal(&self, withdrawal_id: &str) -> Result<ApiResponse> {
        self.execute(cancel_withdrawal(withdrawal_id)).await
    }
}

impl BlockingQuidaxClient {
    /// List a user's withdrawals filtered by currency and state.
    pub fn withdrawals(
        &self,
        user_id: &str,
        currency: Currency,
        state: TransactionState,
    ) -> Result<ApiResponse> {
        self.execute(withdrawals(user_id, currency, state))
    }

    /// Fetch one withdrawal.
    pub fn withdrawal(&self, user_id: &str, withdrawal_id: &str) -> Result<ApiResponse> {
        self.execute(withdrawal(user_id, withdrawal_id))
    }

    /// Initiate a withdrawal to an internal or external wallet.
    pub fn create_withdrawal(&self, user_id: &str, body: &NewWithdrawal) -> Result<ApiResponse> {
        self.execute(create_withdrawal(user_id, body)?)
    }

    /// Cancel an initiated withdrawal.
    pub fn cancel_withdrawal(&self, withdrawal_id: &str) -> Result<ApiResponse> {
        self.execute(cancel_withdrawal(withdrawal_id))
    }
}
