//! Request descriptions, one per backend route.
//!
//! Each request value maps to exactly one GET. The [`Endpoint`] trait tells
//! the client where to send it and what to decode the body into.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::models::{
    BasDate, BondMarket, BondTradingInfo, CommodityMarket, CommodityTradingInfo,
    DerivativeMarket, DerivativeTradingInfo, Envelope, IndexMarket, IndexQuote, NameFilter,
    ProductKind, ProductTradingInfo, QuotationItem, StockMarket, StockTradingInfo,
    DEFAULT_NUM_OF_ROWS,
};

/// A backend route and its response type.
pub trait Endpoint {
    /// Decoded body. `Default` is the empty result handed out on failure.
    type Output: DeserializeOwned + Default;

    /// Path relative to the configured base URL, starting with `/`.
    fn path(&self) -> String;

    /// Query parameters, in the order they are sent.
    fn query(&self) -> Vec<(&'static str, String)>;
}

/// Index closes for one series (`/market-data`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRequest {
    pub market: IndexMarket,
    pub date: BasDate,
}

impl Endpoint for IndexRequest {
    type Output = Vec<IndexQuote>;

    fn path(&self) -> String {
        "/market-data".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date", self.date.to_param()),
            ("type", self.market.code().to_string()),
        ]
    }
}

/// Listed stocks for one board (`/stock-data`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StockRequest {
    pub market: StockMarket,
    pub date: BasDate,
}

impl Endpoint for StockRequest {
    type Output = Vec<StockTradingInfo>;

    fn path(&self) -> String {
        "/stock-data".to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("date", self.date.to_param()),
            ("type", self.market.code().to_string()),
        ]
    }
}

/// Bond trading info for one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BondRequest {
    pub market: BondMarket,
    pub date: BasDate,
}

impl Endpoint for BondRequest {
    type Output = Vec<BondTradingInfo>;

    fn path(&self) -> String {
        format!("/bond/trading-info/{}", self.market.code())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("basDd", self.date.to_param())]
    }
}

/// Futures / options trading info for one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivativeRequest {
    pub market: DerivativeMarket,
    pub date: BasDate,
}

impl Endpoint for DerivativeRequest {
    type Output = Vec<DerivativeTradingInfo>;

    fn path(&self) -> String {
        format!("/derivatives/trading-info/{}", self.market.code())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("basDd", self.date.to_param())]
    }
}

/// ETF / ETN / ELW trading info.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductRequest {
    pub kind: ProductKind,
    pub date: BasDate,
}

impl Endpoint for ProductRequest {
    type Output = Vec<ProductTradingInfo>;

    fn path(&self) -> String {
        format!("/{}/trading-info", self.kind.path_segment())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("basDd", self.date.to_param())]
    }
}

/// Gold / oil / emissions trading info.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommodityRequest {
    pub market: CommodityMarket,
    pub date: BasDate,
}

impl Endpoint for CommodityRequest {
    type Output = Vec<CommodityTradingInfo>;

    fn path(&self) -> String {
        format!("/commodities/trading-info/{}", self.market.code())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("basDd", self.date.to_param())]
    }
}

/// One page of an FSC quotation feed, selected by the item type `T`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuotationRequest<T> {
    pub date: BasDate,
    /// 1-based page number
    pub page_no: usize,
    pub num_of_rows: usize,
    pub filter: Option<NameFilter>,
    item: PhantomData<fn() -> T>,
}

impl<T: QuotationItem> QuotationRequest<T> {
    /// First page with the default page size and no name filter.
    pub fn new(date: BasDate) -> Self {
        Self {
            date,
            page_no: 1,
            num_of_rows: DEFAULT_NUM_OF_ROWS,
            filter: None,
            item: PhantomData,
        }
    }

    pub fn page(mut self, page_no: usize, num_of_rows: usize) -> Self {
        self.page_no = page_no.max(1);
        self.num_of_rows = num_of_rows.max(1);
        self
    }

    pub fn filter(mut self, filter: Option<NameFilter>) -> Self {
        self.filter = filter;
        self
    }
}

impl<T: QuotationItem> Endpoint for QuotationRequest<T> {
    type Output = Envelope<T>;

    fn path(&self) -> String {
        format!("/stock-quotation/{}", T::FEED.code())
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("basDt", self.date.to_param()),
            ("pageNo", self.page_no.to_string()),
            ("numOfRows", self.num_of_rows.to_string()),
        ];
        if let Some(filter) = &self.filter {
            let (name, term) = filter.param();
            params.push((name, term.to_string()));
        }
        params
    }
}
