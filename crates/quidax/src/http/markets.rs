/*
[INPUT]:  Market pair identifiers and bounded query parameters
[OUTPUT]: Public market data calls (tickers, k-lines, order book, depth)
[POS]:    HTTP layer - /markets endpoints
[UPDATE]: When Quidax changes market data endpoints or documented bounds
*/

use crate::http::blocking::BlockingQuidaxClient;
use crate::http::client::{ApiRequest, QuidaxClient};
use crate::http::error::{QuidaxError, Result};
use crate::http::query::append_query_parameters;
use crate::types::{ApiResponse, CurrencyPair, Period};

/// Documented cap on the number of k-line entries per request.
pub const MAX_KLINE_LIMIT: u32 = 10_000;

/// Documented cap on order-book entries per side.
pub const MAX_ORDER_BOOK_LIMIT: u32 = 200;

fn check_limit(name: &str, value: Option<u32>, max: u32) -> Result<()> {
    match value {
        Some(value) if value > max => Err(QuidaxError::InvalidParameter(format!(
            "`{name}` cannot be greater than {max}"
        ))),
        _ => Ok(()),
    }
}

fn markets() -> ApiRequest {
    ApiRequest::get("/markets")
}

fn tickers() -> ApiRequest {
    ApiRequest::get("/markets/tickers")
}

fn ticker(pair: CurrencyPair) -> ApiRequest {
    ApiRequest::get(format!("/markets/tickers/{pair}"))
}

fn k_line(
    pair: CurrencyPair,
    timestamp: Option<i64>,
    period: Option<Period>,
    limit: Option<u32>,
) -> Result<ApiRequest> {
    check_limit("limit", limit, MAX_KLINE_LIMIT)?;
    let mut path = format!("/markets/{pair}/k");
    append_query_parameters(
        &mut path,
        &[
            ("timestamp", timestamp.map(|t| t.to_string())),
            ("period", period.map(|p| p.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ],
    );
    Ok(ApiRequest::get(path))
}

fn k_line_with_pending_trades(
    pair: CurrencyPair,
    trade_id: &str,
    timestamp: Option<i64>,
    period: Option<Period>,
    limit: Option<u32>,
) -> Result<ApiRequest> {
    check_limit("limit", limit, MAX_KLINE_LIMIT)?;
    let mut path = format!("/markets/{pair}/k_with_pending_trades/{trade_id}");
    append_query_parameters(
        &mut path,
        &[
            ("timestamp", timestamp.map(|t| t.to_string())),
            ("period", period.map(|p| p.to_string())),
            ("limit", limit.map(|l| l.to_string())),
        ],
    );
    Ok(ApiRequest::get(path))
}

fn order_book(
    pair: CurrencyPair,
    ask_limit: Option<u32>,
    bids_limit: Option<u32>,
) -> Result<ApiRequest> {
    check_limit("ask_limit", ask_limit, MAX_ORDER_BOOK_LIMIT)?;
    check_limit("bids_limit", bids_limit, MAX_ORDER_BOOK_LIMIT)?;
    let mut path = format!("/markets/{pair}/order_book");
    append_query_parameters(
        &mut path,
        &[
            ("ask_limit", ask_limit.map(|l| l.to_string())),
            ("bids_limit", bids_limit.map(|l| l.to_string())),
        ],
    );
    Ok(ApiRequest::get(path))
}

fn depth(pair: CurrencyPair, limit: Option<u32>) -> ApiRequest {
    let mut path = format!("/markets/{pair}/depth");
    append_query_parameters(&mut path, &[("limit", limit.map(|l| l.to_string()))]);
    ApiRequest::get(path)
}

impl QuidaxClient {
    /// List all markets.
    ///
    /// GET /markets
    pub async fn markets(&self) -> Result<ApiResponse> {
        self.execute(markets()).await
    }

    /// Fetch tickers for all markets.
    ///
    /// GET /markets/tickers
    pub async fn tickers(&self) -> Result<ApiResponse> {
        self.execute(tickers()).await
    }

    /// Fetch the ticker of one market.
    ///
    /// GET /markets/tickers/{pair}
    pub async fn ticker(&self, pair: CurrencyPair) -> Result<ApiResponse> {
        self.execute(ticker(pair)).await
    }

    /// Fetch k-line data for a market. `limit` is capped at 10 000.
    ///
    /// GET /markets/{pair}/k
    pub async fn k_line(
        &self,
        pair: CurrencyPair,
        timestamp: Option<i64>,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<ApiResponse> {
        self.execute(k_line(pair, timestamp, period, limit)?).await
    }

    /// Fetch k-line data including trades not yet reflected in it.
    /// `limit` is capped at 10 000.
    ///
    /// GET /markets/{pair}/k_with_pending_trades/{trade_id}
    pub async fn k_line_with_pending_trades(
        &self,
        pair: CurrencyPair,
        trade_id: &str,
        timestamp: Option<i64>,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<ApiResponse> {
        self.execute(k_line_with_pending_trades(
            pair, trade_id, timestamp, period, limit,
        )?)
        .await
    }

    /// Fetch the order book. Each side's limit is capped at 200.
    ///
    /// GET /markets/{pair}/order_book
    pub async fn order_book(
        &self,
        pair: CurrencyPair,
        ask_limit: Option<u32>,
        bids_limit: Option<u32>,
    ) -> Result<ApiResponse> {
        self.execute(order_book(pair, ask_limit, bids_limit)?).await
    }

    /// Fetch depth data for a market.
    ///
    /// GET /markets/{pair}/depth
    pub async fn depth(&self, pair: CurrencyPair, limit: Option<u32>) -> Result<ApiResponse> {
        self.execute(depth(pair, limit)).await
    }
}

impl BlockingQuidaxClient {
    /// List all markets.
    pub fn markets(&self) -> Result<ApiResponse> {
        self.execute(markets())
    }

    /// Fetch tickers for all markets.
    pub fn tickers(&self) -> Result<ApiResponse> {
        self.execute(tickers())
    }

    /// Fetch the ticker of one market.
    pub fn ticker(&self, pair: CurrencyPair) -> Result<ApiResponse> {
        self.execute(ticker(pair))
    }

    /// Fetch k-line data for a market. `limit` is capped at 10 000.
    pub fn k_line(
        &self,
        pair: CurrencyPair,
        timestamp: Option<i64>,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<ApiResponse> {
        self.execute(k_line(pair, timestamp, period, limit)?)
    }

    /// Fetch k-line data including trades not yet reflected in it.
    /// `limit` is capped at 10 000.
    pub fn k_line_with_pending_trades(
        &self,
        pair: CurrencyPair,
        trade_id: &str,
        timestamp: Option<i64>,
        period: Option<Period>,
        limit: Option<u32>,
    ) -> Result<ApiResponse> {
        self.execute(k_line_with_pending_trades(
            pair, trade_id, timestamp, period, limit,
        )?)
    }

    /// Fetch the order book. Each side's limit is capped at 200.
    pub fn order_book(
        &self,
        pair: CurrencyPair,
        ask_limit: Option<u32>,
        bids_limit: Option<u32>,
    ) -> Result<ApiResponse> {
        self.execute(order_book(pair, ask_limit, bids_limit)?)
    }

    /// Fetch depth data for a market.
    pub fn depth(&self, pair: CurrencyPair, limit: Option<u32>) -> Result<ApiResponse> {
        self.execute(depth(pair, limit))
    }
}
