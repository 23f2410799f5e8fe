/*
[INPUT]:  Order bodies and list filters
[OUTPUT]: Limit/market order calls (create, list, fetch, cancel)
[POS]:    HTTP layer - /users/{user_id}/orders endpoints
[UPDATE]: When Quidax changes the order lifecycle
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::http::query::append_query_parameters;
use crate::types::{ApiResponse, CurrencyPair, NewOrder, OrdType, SortOrder, TransactionState};

fn create_order(user_id: &str, body: &NewOrder) -> Result<ApiRequest> {
    // Market orders never carry a price, whatever the caller built.
    let mut body = body.clone();
    if body.ord_type == OrdType::Market {
        body.price = None;
    }
    ApiRequest::post_json(format!("/users/{user_id}/orders"), &body)
}

fn orders(
    user_id: &str,
    pair: CurrencyPair,
    state: TransactionState,
    order_by: SortOrder,
) -> ApiRequest {
    let mut path = format!("/users/{user_id}/orders");
    append_query_parameters(
        &mut path,
        &[
            ("market", Some(pair.to_string())),
            ("state", Some(state.to_string())),
            ("order_by", Some(order_by.to_string())),
        ],
    );
    ApiRequest::get(path)
}

fn order(user_id: &str, id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/orders/{id}"))
}

fn cancel_order(user_id: &str, id: &str) -> ApiRequest {
    ApiRequest::post(format!("/users/{user_id}/orders/{id}/cancel"))
}

impl QuidaxClient {
    /// Place a limit or market order.
    ///
    /// POST /users/{user_id}/orders
    pub async fn create_order(&self, user_id: &str, body: &NewOrder) -> Result<ApiResponse> {
        self.execute(create_order(user_id, body)?).await
    }

    /// List orders filtered by market and state.
    ///
    /// GET /users/{user_id}/orders
    pub async fn orders(
        &self,
        user_id: &str,
        pair: CurrencyPair,
        state: TransactionState,
        order_by: SortOrder,
    ) -> Result<ApiResponse> {
        self.execute(orders(user_id, pair, state, order_by)).await
    }

    /// Fetch one order.
    ///
    /// GET /users/{user_id}/orders/{id}
    pub async fn order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(order(user_id, id)).await
    }

    /// Cancel an order.
    ///
    /// POST /users/{user_id}/orders/{id}/cancel
    pub async fn cancel_order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(cancel_order(user_id, id)).await
    }
}

impl BlockingQuidaxClient {
    /// Place a limit or market order.
    pub fn create_order(&self, user_id: &str, body: &NewOrder) -> Result<ApiResponse> {
        self.execute(create_order(user_id, body)?)
    }

    /// List orders filtered by market and state.
    pub fn orders(
        &self,
        user_id: &str,
        pair: CurrencyPair,
        state: TransactionState,
        order_by: SortOrder,
    ) -> Result<ApiResponse> {
        self.execute(orders(user_id, pair, state, order_by))
    }

    /// Fetch one order.
    pub fn order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(order(user_id, id))
    }

    /// Cancel an order.
    pub fn cancel_order(&self, user_id: &str, id: &str) -> Result<ApiResponse> {
        self.execute(cancel_order(user_id, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OrderSide;
    use reqwest::Method;
    use rust_decimal::Decimal;

    #[test]
    fn market_order_price_is_stripped_even_when_set() {
        let mut body = NewOrder::market(CurrencyPair::BtcNgn, OrderSide::Buy, Decimal::ONE);
        body.price = Some(Decimal::new(65_000, 0));
        let request = create_order("me", &body).unwrap();
        assert!(request.body.unwrap().get("price").is_none());
    }

    #[test]
    fn limit_order_price_survives() {
        let body = NewOrder::limit(
            CurrencyPair::BtcNgn,
            OrderSide::Sell,
            Decimal::new(65_000, 0),
            Decimal::ONE,
        );
        let request = create_order("me", &body).unwrap();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body.unwrap()["price"], "65000");
    }

    #[test]
    fn list_query_carries_all_three_filters() {
        let request = orders(
            "me",
            CurrencyPair::BtcNgn,
            TransactionState::Done,
            SortOrder::Desc,
        );
        assert_eq!(
            request.path,
            "/users/me/orders?market=btcngn&state=done&order_by=desc"
        );
    }

    #[test]
    fn cancel_posts_to_the_cancel_path() {
        let request = cancel_order("me", "ord_1");
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "/users/me/orders/ord_1/cancel");
        assert!(request.body.is_none());
    }
}
