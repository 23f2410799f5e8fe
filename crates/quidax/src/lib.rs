/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Quidax SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

//! Rust SDK for the [Quidax](https://www.quidax.com) cryptocurrency exchange.
//!
//! Every documented REST endpoint maps to one method on [`QuidaxClient`]
//! (async) or [`BlockingQuidaxClient`] (sync). Each call is a single
//! request/response round trip returning the normalized [`ApiResponse`]
//! envelope; non-2xx responses are returned, not raised.
//!
//! ```no_run
//! use quidax::{Currency, QuidaxClient};
//!
//! # async fn run() -> quidax::Result<()> {
//! // Reads QUIDAX_SECRET_KEY when no key is passed.
//! let client = QuidaxClient::new(None)?;
//! let fee = client.withdrawal_fee(Currency::Btc).await?;
//! println!("{:?}", fee.data);
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod types;

pub use http::{
    BlockingQuidaxClient,
    ClientConfig,
    DEFAULT_BASE_URL,
    MAX_KLINE_LIMIT,
    MAX_ORDER_BOOK_LIMIT,
    QuidaxClient,
    QuidaxError,
    Result,
    SECRET_KEY_ENV,
};

pub use types::*;
