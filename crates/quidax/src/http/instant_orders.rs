/*
[INPUT]:  Instant-order bodies and list filters
[OUTPUT]: Instant order calls (list, fetch, create, confirm, requote)
[POS]:    HTTP layer - /users/{user_id}/instant_orders endpoints
[UPDATE]: When Quidax changes the instant-order flow
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::http::query::append_query_parameters;
use crate::types::{ApiResponse, CurrencyPair, NewInstantOrder, OrderState, SortOrder};

fn instant_orders(
    user_id: &str,
    pair: Option<CurrencyPair>,
    state: Option<OrderState>,
    order_by: SortOrder,
) -> ApiRequest {
    let mut path = format!("/users/{user_id}/instant_orders");
    append_query_parameters(
        &mut path,
        &[
            ("market", pair.map(|p| p.to_string())),
            ("state", state.map(|s| s.to_string())),
            ("order_by", Some(order_by.to_string())),
        ],
    );
    ApiRequest::get(path)
}

fn instant_order(user_id: &str, id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/instant_orders/{id}"))
}

fn create_instant_order(user_id: &str, body: &NewInstantOrder) -> Result<ApiRequest> {
    ApiRequest::post_json(format!("/users/{user_id}/instant_orders"), body)
}

fn confirm_instant_order(user_id: &str, id: &str) -> ApiRequest {
    ApiRequest::post(format!("/users/{user_id}/instant_orders/{id}/confirm"))
}

fn requote_instant_order(user_id: &str, id: &str) -> ApiRequest {
    ApiRequest::post(format!("/users/{user_id}/instant_orders/{id}/requote"))
}

impl QuidaxClient {
    /// List instant orders, optionally filtered by market and state.
    ///
    /// GET /users/{user_id}/instant_orders
    pub async fn instant_orders(
        &self,
        user_id: &str,
        pair: Option<CurrencyPair>,
        state: Option<OrderState>,
        order_by: SortOrder,
    ) -> Result<ApiResponse> {
        self.execute(instant_orders(user_id, pair, state, order_by))
            .await
    }

    /// Fetch one instant order.
    ///
    /// GET /users/{user_id}/instant_orders/{id}
    pub async fn instant_order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(instant_order(user_id, id)).await
    }

    /// Place an instant order at prevailing market price.
    ///
    /// POST /users/{user_id}/instant_orders
    pub async fn create_instant_order(
        &self,
        user_id: &str,
        body: &NewInstantOrder,
    ) -> Result<ApiResponse> {
        self.execute(create_instant_order(user_id, body)?).await
    }

    /// Confirm a quoted instant order.
    ///
    /// POST /users/{user_id}/instant_orders/{id}/confirm
    pub async fn confirm_instant_order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(confirm_instant_order(user_id, id)).await
    }

    /// Request a fresh quote for an instant order.
    ///
    /// POST /users/{user_id}/instant_orders/{id}/requote
    pub async fn requote_instant_order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(requote_instant_order(user_id, id)).await
    }
}

impl BlockingQuidaxClient {
    /// List instant orders, optionally filtered by market and state.
    pub fn instant_orders(
        &self,
        user_id: &str,
        pair: Option<CurrencyPair>,
        state: Option<OrderState>,
        order_by: SortOrder,
    ) -> Result<ApiResponse> {
        self.execute(instant_orders(user_id, pair, state, order_by))
    }

    /// Fetch one instant order.
    pub fn instant_order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(instant_order(user_id, id))
    }

    /// Place an instant order at prevailing market price.
    pub fn create_instant_order(
        &self,
        user_id: &str,
        body: &NewInstantOrder,
    ) -> Result<ApiResponse> {
        self.execute(create_instant_order(user_id, body)?)
    }

    /// Confirm a quoted instant order.
    pub fn confirm_instant_order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(confirm_instant_order(user_id, id))
    }

    /// Request a fresh quote for an instant order.
    pub fn requote_instant_order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(requote_instant_order(user_id, id))
    }
}
