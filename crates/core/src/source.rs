//! Table sources: one per market vertical.
//!
//! A source turns a [`TableQuery`] into one backend request and hands the
//! result to the view as [`TableData`]. KRX trading-info sources fetch the
//! whole day and leave paging to the view; quotation sources fetch one
//! server-side page at a time.

use std::marker::PhantomData;

use async_trait::async_trait;
use krx_dashboard_market_data::endpoints::Endpoint;
use krx_dashboard_market_data::models::{
    BondTradingInfo, CommodityTradingInfo, DerivativeTradingInfo, IndexQuote, ProductTradingInfo,
    StockTradingInfo,
};
use krx_dashboard_market_data::{
    BasDate, BondMarket, BondRequest, CommodityMarket, CommodityRequest, DerivativeMarket,
    DerivativeRequest, Fetched, IndexMarket, IndexRequest, KrxClient, NameFilter, ProductKind,
    ProductRequest, QuotationItem, QuotationRequest, Record, StockMarket, StockRequest,
};
use log::debug;

use crate::columns::{
    bond_columns, commodity_columns, derivative_columns, product_columns, quotation_columns,
    ColumnSet, INDEX_COLUMNS, STOCK_COLUMNS,
};
use crate::pagination::PageOwnership;
use crate::view::TableData;

/// Everything a source needs to issue one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    pub date: BasDate,
    /// 1-based page; only server-owned sources send it
    pub page: usize,
    pub page_size: usize,
    pub search: Option<NameFilter>,
}

impl TableQuery {
    pub fn new(date: BasDate, page_size: usize) -> Self {
        Self {
            date,
            page: 1,
            page_size,
            search: None,
        }
    }
}

/// A market vertical the table engine can render.
#[async_trait]
pub trait TableSource: Send + Sync {
    type Row: Record + Send + Sync + 'static;

    fn ownership(&self) -> PageOwnership;

    fn columns(&self) -> ColumnSet;

    /// Human-readable name for logs and headings.
    fn label(&self) -> String;

    /// Fetches the rows for `query`. Never fails: a failed request comes
    /// back empty with the failure attached.
    async fn fetch(&self, query: &TableQuery) -> Fetched<TableData<Self::Row>>;
}

/// Keeps rows whose `name_key` matches `filter`.
pub fn filter_by_name<R: Record>(rows: Vec<R>, name_key: &str, filter: Option<&NameFilter>) -> Vec<R> {
    let Some(filter) = filter else {
        return rows;
    };
    rows.into_iter()
        .filter(|row| {
            let name = row.field(name_key).unwrap_or("").trim();
            match filter {
                NameFilter::Exact(term) => name == term,
                NameFilter::Partial(term) => name.contains(term.as_str()),
            }
        })
        .collect()
}

async fn fetch_day<E, R>(
    client: &KrxClient,
    request: E,
    name_key: &str,
    search: Option<&NameFilter>,
) -> Fetched<TableData<R>>
where
    E: Endpoint<Output = Vec<R>> + Send + Sync,
    R: Record + Send,
{
    let fetched = client.fetch(&request).await;
    debug!(
        "Fetched {} rows from {}",
        fetched.data.len(),
        client.url_for(&request)
    );
    fetched.map(|rows| TableData::from_rows(filter_by_name(rows, name_key, search)))
}

macro_rules! trading_source {
    (
        $(#[$meta:meta])*
        $name:ident {
            selector: $field:ident: $selector:ty,
            row: $row:ty,
            request: $request:ident { $req_field:ident },
            name_key: $name_key:literal,
            columns: |$this:ident| $columns:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            client: KrxClient,
            pub $field: $selector,
        }

        impl $name {
            pub fn new(client: KrxClient, $field: $selector) -> Self {
                Self { client, $field }
            }
        }

        #[async_trait]
        impl TableSource for $name {
            type Row = $row;

            fn ownership(&self) -> PageOwnership {
                PageOwnership::Client
            }

            fn columns(&self) -> ColumnSet {
                let $this = self;
                $columns
            }

            fn label(&self) -> String {
                self.$field.label().to_string()
            }

            async fn fetch(&self, query: &TableQuery) -> Fetched<TableData<Self::Row>> {
                let request = $request {
                    $req_field: self.$field,
                    date: query.date,
                };
                fetch_day(&self.client, request, $name_key, query.search.as_ref()).await
            }
        }
    };
}

trading_source! {
    /// Index closes for the KOSPI or KRX series.
    IndexSource {
        selector: market: IndexMarket,
        row: IndexQuote,
        request: IndexRequest { market },
        name_key: "idxNm",
        columns: |_this| INDEX_COLUMNS,
    }
}

trading_source! {
    /// Listed stocks for one board.
    StockSource {
        selector: market: StockMarket,
        row: StockTradingInfo,
        request: StockRequest { market },
        name_key: "isuNm",
        columns: |_this| STOCK_COLUMNS,
    }
}

trading_source! {
    /// Bond trading info for one segment.
    BondSource {
        selector: market: BondMarket,
        row: BondTradingInfo,
        request: BondRequest { market },
        name_key: "isuNm",
        columns: |this| bond_columns(this.market),
    }
}

trading_source! {
    /// Futures and options; options swap the spot price for implied volatility.
    DerivativeSource {
        selector: market: DerivativeMarket,
        row: DerivativeTradingInfo,
        request: DerivativeRequest { market },
        name_key: "isuNm",
        columns: |this| derivative_columns(this.market),
    }
}

trading_source! {
    /// ETF, ETN or ELW trading info.
    ProductSource {
        selector: kind: ProductKind,
        row: ProductTradingInfo,
        request: ProductRequest { kind },
        name_key: "isuNm",
        columns: |this| product_columns(this.kind),
    }
}

trading_source! {
    /// Gold, oil or emissions trading info.
    CommoditySource {
        selector: market: CommodityMarket,
        row: CommodityTradingInfo,
        request: CommodityRequest { market },
        name_key: "isuNm",
        columns: |this| commodity_columns(this.market),
    }
}

/// One FSC quotation feed, paginated by the backend.
#[derive(Debug)]
pub struct QuotationSource<T> {
    client: KrxClient,
    item: PhantomData<fn() -> T>,
}

impl<T: QuotationItem> QuotationSource<T> {
    pub fn new(client: KrxClient) -> Self {
        Self {
            client,
            item: PhantomData,
        }
    }
}

impl<T> Clone for QuotationSource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            item: PhantomData,
        }
    }
}

#[async_trait]
impl<T: QuotationItem + Sync> TableSource for QuotationSource<T> {
    type Row = T;

    fn ownership(&self) -> PageOwnership {
        PageOwnership::Server
    }

    fn columns(&self) -> ColumnSet {
        quotation_columns(T::FEED)
    }

    fn label(&self) -> String {
        T::FEED.label().to_string()
    }

    async fn fetch(&self, query: &TableQuery) -> Fetched<TableData<T>> {
        let request = QuotationRequest::<T>::new(query.date)
            .page(query.page, query.page_size)
            .filter(query.search.clone());
        let fetched = self.client.fetch(&request).await;
        debug!(
            "Fetched page {} ({} of {} rows) from {}",
            request.page_no,
            fetched.data.items.len(),
            fetched.data.total_count,
            self.client.url_for(&request)
        );
        fetched.map(TableData::from_envelope)
    }
}
