/*
[INPUT]:  Beneficiary bodies and identifiers
[OUTPUT]: Beneficiary calls (list, create, fetch, update)
[POS]:    HTTP layer - /users/{user_id}/beneficiaries endpoints
[UPDATE]: When Quidax changes beneficiary management
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::http::query::append_query_parameters;
use crate::types::{ApiResponse, BeneficiaryUpdate, Currency, NewBeneficiary};

fn beneficiaries(user_id: &str, currency: Currency) -> ApiRequest {
    let mut path = format!("/users/{user_id}/beneficiaries");
    append_query_parameters(&mut path, &[("currency", Some(currency.to_string()))]);
    ApiRequest::get(path)
}

fn create_beneficiary(user_id: &str, body: &NewBeneficiary) -> Result<ApiRequest> {
    ApiRequest::post_json(format!("/users/{user_id}/beneficiaries"), body)
}

fn beneficiary(user_id: &str, id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/beneficiaries/{id}"))
}

fn update_beneficiary(user_id: &str, id: &str, body: &BeneficiaryUpdate) -> Result<ApiRequest> {
    ApiRequest::put_json(format!("/users/{user_id}/beneficiaries/{id}"), body)
}

impl QuidaxClient {
    /// List beneficiaries for a currency.
    ///
    /// GET /users/{user_id}/beneficiaries?currency=
    pub async fn beneficiaries(&self, user_id: &str, currency: Currency) -> Result<ApiResponse> {
        self.execute(beneficiaries(user_id, currency)).await
    }

    /// Register a beneficiary wallet.
    ///
    /// POST /users/{user_id}/beneficiaries
    pub async fn create_beneficiary(
        &self,
        user_id: &str,
        body: &NewBeneficiary,
    ) -> Result<ApiResponse> {
        self.execute(create_beneficiary(user_id, body)?).await
    }

    /// Fetch one beneficiary.
    ///
    /// GET /users/{user_id}/beneficiaries/{id}
    pub async fn beneficiary(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(beneficiary(user_id, id)).await
    }

    /// Edit a beneficiary.
    ///
    /// PUT /users/{user_id}/beneficiaries/{id}
    pub async fn update_beneficiary(
        &self,
        user_id: &str,
        id: &str,
        body: &BeneficiaryUpdate,
    ) -> Result<ApiResponse> {
        self.execute(update_beneficiary(user_id, id, body)?).await
    }
}

impl BlockingQuidaxClient {
    /// List beneficiaries for a currency.
    pub fn beneficiaries(&self, user_id: &str, currency: Currency) -> Result<ApiResponse> {
        self.execute(beneficiaries(user_id, currency))
    }

    /// Register a beneficiary wallet.
    pub fn create_beneficiary(&self, user_id: &str, body: &NewBeneficiary) -> Result<ApiResponse> {
        self.execute(create_beneficiary(user_id, body)?)
    }

    /// Fetch one beneficiary.
    pub fn beneficiary(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(beneficiary(user_id, id))
    }

    /// Edit a beneficiary.
    pub fn update_beneficiary(
        &self,
        user_id: &str,
        id: &str,
        body: &BeneficiaryUpdate,
    ) -> Result<ApiResponse> {
        self.execute(update_beneficiary(user_id, id, body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn list_filters_by_currency() {
        let request = beneficiaries("me", Currency::Sol);
        assert_eq!(request.path, "/users/me/beneficiaries?currency=sol");
    }

    #[test]
    fn update_issues_a_real_put() {
        let request = update_beneficiary(
            "me",
            "ben_1",
            &BeneficiaryUpdate {
                uid: None,
                extra: Some("cold storage".to_string()),
            },
        )
        .unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "/users/me/beneficiaries/ben_1");
        assert_eq!(request.body, Some(json!({"extra": "cold storage"})));
    }

    #[test]
    fn create_posts_currency_uid_and_extra() {
        let request = create_beneficiary(
            "me",
            &NewBeneficiary {
                currency: Currency::Xrp,
                uid: "rUocf1ix".to_string(),
                extra: "tag 1234".to_string(),
            },
        )
        .unwrap();
        assert_eq!(
            request.body,
            Some(json!({"currency": "xrp", "uid": "rUocf1ix", "extra": "tag 1234"}))
        );
    }
}
