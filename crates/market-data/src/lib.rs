//! KRX Dashboard Market Data Crate
//!
//! Typed records and the HTTP fetch adapter for the dashboard backend.
//!
//! # Overview
//!
//! The backend exposes one GET route per market vertical:
//! - KRX trading info for indices, stocks, bonds, derivatives, ETF/ETN/ELW
//!   and general commodities (one full trading day per call)
//! - FSC quotation feeds (paginated by the server)
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Request value   | --> |    Endpoint      |  (path + query + output type)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    KrxClient     |  (reqwest, bounded timeout)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |    Fetched<T>    |  (data, or empty + failure)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Record`] - Flat, string-keyed row every table renders
//! - [`KrxClient`] - The HTTP adapter
//! - [`Endpoint`] - A backend route and its response type
//! - [`Fetched`] - Fail-safe fetch outcome
//! - [`FetchError`] / [`FailureKind`] - Failure taxonomy

pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod fetched;
pub mod models;

pub use client::KrxClient;
pub use config::ClientConfig;
pub use endpoints::{
    BondRequest, CommodityRequest, DerivativeRequest, Endpoint, IndexRequest, ProductRequest,
    QuotationRequest, StockRequest,
};
pub use errors::{FailureKind, FetchError};
pub use fetched::Fetched;
pub use models::{
    BasDate, BondMarket, CommodityMarket, DerivativeMarket, Envelope, FieldText, IndexMarket,
    NameFilter, ParseMarketError, ProductKind, QuotationFeed, QuotationItem, Record, StockMarket,
};
