/*
[INPUT]:  Sub-account identifiers and profile bodies
[OUTPUT]: User management calls (main account and sub-accounts)
[POS]:    HTTP layer - /users endpoints
[UPDATE]: When Quidax changes sub-account management
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::types::{ApiResponse, NewSubAccount, SubAccountUpdate};

fn create_sub_account(body: &NewSubAccount) -> Result<ApiRequest> {
    ApiRequest::post_json("/users", body)
}

fn main_account() -> ApiRequest {
    ApiRequest::get("/users/me")
}

fn update_sub_account(user_id: &str, body: &SubAccountUpdate) -> Result<ApiRequest> {
    ApiRequest::put_json(format!("/users/{user_id}"), body)
}

fn sub_account(user_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}"))
}

fn sub_accounts() -> ApiRequest {
    ApiRequest::get("/users")
}

impl QuidaxClient {
    /// Create a sub-account tethered to the authenticated account.
    ///
    /// POST /users
    pub async fn create_sub_account(&self, body: &NewSubAccount) -> Result<ApiResponse> {
        self.execute(create_sub_account(body)?).await
    }

    /// Fetch the main authenticated account.
    ///
    /// GET /users/me
    pub async fn main_account(&self) -> Result<ApiResponse> {
        self.execute(main_account()).await
    }

    /// Update a sub-account's profile.
    ///
    /// PUT /users/{user_id}
    pub async fn update_sub_account(
        &self,
        user_id: &str,
        body: &SubAccountUpdate,
    ) -> Result<ApiResponse> {
        self.execute(update_sub_account(user_id, body)?).await
    }

    /// Fetch one sub-account.
    ///
    /// GET /users/{user_id}
    pub async fn sub_account(&self, user_id: &str) -> Result<ApiResponse> {
        self.execute(sub_account(user_id)).await
    }

    /// List all sub-accounts.
    ///
    /// GET /users
    pub async fn sub_accounts(&self) -> Result<ApiResponse> {
        self.execute(sub_accounts()).await
    }
}

impl BlockingQuidaxClient {
    /// Create a sub-account tethered to the authenticated account.
    pub fn create_sub_account(&self, body: &NewSubAccount) -> Result<ApiResponse> {
        self.execute(create_sub_account(body)?)
    }

    /// Fetch the main authenticated account.
    pub fn main_account(&self) -> Result<ApiResponse> {
        self.execute(main_account())
    }

    /// Update a sub-account's profile.
    pub fn update_sub_account(
        &self,
        user_id: &str,
        body: &SubAccountUpdate,
    ) -> Result<ApiResponse> {
        self.execute(update_sub_account(user_id, body)?)
    }

    /// Fetch one sub-account.
    pub fn sub_account(&self, user_id: &str) -> Result<ApiResponse> {
        self.execute(sub_account(user_id))
    }

    /// List all sub-accounts.
    pub fn sub_accounts(&self) -> Result<ApiResponse> {
        self.execute(sub_accounts())
    }
}
