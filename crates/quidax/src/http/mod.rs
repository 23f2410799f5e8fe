/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses normalized into the envelope
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod blocking;
pub mod client;
pub mod error;
pub(crate) mod query;

mod beneficiaries;
mod deposits;
mod instant_orders;
mod markets;
mod misc;
mod orders;
mod trades;
mod users;
mod wallets;
mod withdrawals;

pub use blocking::BlockingQuidaxClient;
pub use client::{ClientConfig, DEFAULT_BASE_URL, QuidaxClient, SECRET_KEY_ENV};
pub use error::{QuidaxError, Result};
pub use markets::{MAX_KLINE_LIMIT, MAX_ORDER_BOOK_LIMIT};
