/*
[INPUT]:  User and market identifiers
[OUTPUT]: Trade history calls
[POS]:    HTTP layer - /trades endpoints
[UPDATE]: When Quidax changes trade history endpoints
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::Result;
use crate::types::{ApiResponse, CurrencyPair};

fn trades(user_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/users/{user_id}/trades"))
}

fn market_trades(pair: CurrencyPair) -> ApiRequest {
    ApiRequest::get(format!("/trades/{pair}"))
}

impl QuidaxClient {
    /// List the trades of a user.
    ///
    /// GET /users/{user_id}/trades
    pub async fn trades(&self, user_id: &str) -> Result<ApiResponse> {
        self.execute(trades(user_id)).await
    }

    /// List recent trades of a market.
    ///
    /// GET /trades/{pair}
    pub async fn market_trades(&self, pair: CurrencyPair) -> Result<ApiResponse> {
        self.execute(market_trades(pair)).await
    }
}

impl BlockingQuidaxClient {
    /// List the trades of a user.
    pub fn trades(&self, user_id: &str) -> Result<ApiResponse> {
        self.execute(trades(user_id))
    }

    /// List recent trades of a market.
    pub fn market_trades(&self, pair: CurrencyPair) -> Result<ApiResponse> {
        self.execute(market_trades(pair))
    }
}
