//! Table controller: a source, its view and the active filter.
//!
//! The controller is the only place that talks to both sides. It issues a
//! ticket, runs the source's fetch and applies the result, so every search,
//! market change and server-side page turn follows the same path.

use krx_dashboard_market_data::{BasDate, Fetched, NameFilter};
use log::info;

use crate::dates::{query_date_from_input, DateProvider};
use crate::errors::Result;
use crate::source::{TableQuery, TableSource};
use crate::view::{FetchTicket, PageChange, TableData, TableView, ViewStatus};

pub struct TableController<S: TableSource> {
    source: S,
    view: TableView<S::Row>,
    date: BasDate,
    search: Option<NameFilter>,
}

impl<S: TableSource> TableController<S> {
    pub fn new(source: S, date: BasDate) -> Self {
        let view = TableView::new(source.columns(), source.ownership());
        Self {
            source,
            view,
            date,
            search: None,
        }
    }

    pub fn view(&self) -> &TableView<S::Row> {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn date(&self) -> BasDate {
        self.date
    }

    pub fn search_filter(&self) -> Option<&NameFilter> {
        self.search.as_ref()
    }

    /// Runs a new search. Always starts again from page 1.
    pub async fn search(&mut self, date: BasDate, search: Option<NameFilter>) -> ViewStatus {
        self.date = date;
        self.search = search;
        self.load(1).await
    }

    /// Validates raw form input, then searches. Invalid input is rejected
    /// before any request is made and leaves the view untouched.
    pub async fn search_input<P: DateProvider + ?Sized + Sync>(
        &mut self,
        date_input: &str,
        term: &str,
        partial: bool,
        dates: &P,
    ) -> Result<ViewStatus> {
        let date = query_date_from_input(date_input, dates)?;
        Ok(self.search(date, NameFilter::new(term, partial)).await)
    }

    /// Swaps the source (a market tab change) and reloads from page 1 with
    /// the new source's columns. The sort carries over when the new columns
    /// still include it.
    pub async fn set_source(&mut self, source: S) -> ViewStatus {
        info!("Switching table to {}", source.label());
        self.view.reset_columns(source.columns());
        self.source = source;
        self.load(1).await
    }

    /// Header click.
    pub fn sort_by(&mut self, key: &str) -> bool {
        self.view.sort_by(key)
    }

    /// Page navigation; server-owned tables fetch the target page.
    pub async fn go_to_page(&mut self, page: usize) -> PageChange {
        let change = self.view.go_to_page(page);
        if let PageChange::Refetch(target) = change {
            self.load(target).await;
        }
        change
    }

    /// Re-runs the current query.
    pub async fn reload(&mut self) -> ViewStatus {
        let page = self.view.page();
        self.load(page).await
    }

    /// Issues a ticket and the query to run for `page` without fetching.
    ///
    /// With [`complete`](Self::complete) this lets a caller keep several
    /// requests in flight; only the last prepared one will be applied.
    pub fn prepare(&mut self, page: usize) -> (FetchTicket, TableQuery) {
        let ticket = self.view.begin_fetch(page);
        let query = TableQuery {
            date: self.date,
            page: ticket.page(),
            page_size: self.view.page_size(),
            search: self.search.clone(),
        };
        (ticket, query)
    }

    /// Applies a result obtained for a prepared ticket.
    pub fn complete(&mut self, ticket: FetchTicket, fetched: Fetched<TableData<S::Row>>) -> bool {
        self.view.apply(ticket, fetched)
    }

    async fn load(&mut self, page: usize) -> ViewStatus {
        let (ticket, query) = self.prepare(page);
        let fetched = self.source.fetch(&query).await;
        if let Some(kind) = fetched.failure_kind() {
            info!("{} fetch failed ({})", self.source.label(), kind);
        }
        self.complete(ticket, fetched);
        self.view.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{ColumnSet, BOND_COLUMNS, STOCK_PRICE_COLUMNS};
    use crate::dates::FixedDates;
    use crate::errors::InputError;
    use crate::pagination::PageOwnership;
    use crate::sort::{SortDirection, SortState};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use krx_dashboard_market_data::{FailureKind, FetchError, Record};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    type Row = BTreeMap<String, String>;

    fn row(name: &str, price: usize) -> Row {
        let mut row = BTreeMap::new();
        row.insert("isuNm".to_string(), name.to_string());
        row.insert("itmsNm".to_string(), name.to_string());
        row.insert("clsprc".to_string(), price.to_string());
        row
    }

    /// In-memory source recording every query it receives.
    struct MemorySource {
        rows: Vec<Row>,
        ownership: PageOwnership,
        fail: bool,
        calls: AtomicUsize,
        queries: Mutex<Vec<TableQuery>>,
    }

    impl MemorySource {
        fn client(rows: Vec<Row>) -> Self {
            Self {
                rows,
                ownership: PageOwnership::Client,
                fail: false,
                calls: AtomicUsize::new(0),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn server(rows: Vec<Row>) -> Self {
            Self {
                ownership: PageOwnership::Server,
                ..Self::client(rows)
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::client(Vec::new())
            }
        }

        fn last_query(&self) -> TableQuery {
            self.queries.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl TableSource for MemorySource {
        type Row = Row;

        fn ownership(&self) -> PageOwnership {
            self.ownership
        }

        fn columns(&self) -> ColumnSet {
            match self.ownership {
                PageOwnership::Client => BOND_COLUMNS,
                PageOwnership::Server => STOCK_PRICE_COLUMNS,
            }
        }

        fn label(&self) -> String {
            "memory".to_string()
        }

        async fn fetch(&self, query: &TableQuery) -> Fetched<TableData<Row>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.clone());
            if self.fail {
                return Fetched::failed(FetchError::Http {
                    status: 503,
                    url: "http://localhost:8080/api/bond/trading-info/TREASURY".to_string(),
                });
            }
            match self.ownership {
                PageOwnership::Client => Fetched::ok(TableData::from_rows(self.rows.clone())),
                PageOwnership::Server => {
                    let start = (query.page - 1) * query.page_size;
                    let rows = self
                        .rows
                        .iter()
                        .skip(start)
                        .take(query.page_size)
                        .cloned()
                        .collect();
                    Fetched::ok(TableData {
                        rows,
                        total_count: self.rows.len(),
                    })
                }
            }
        }
    }

    fn date(d: u32) -> BasDate {
        BasDate::from_ymd(2024, 12, d).unwrap()
    }

    fn rows(count: usize) -> Vec<Row> {
        (0..count).map(|i| row(&format!("종목{:03}", i), 1_000 + i)).collect()
    }

    #[tokio::test]
    async fn test_search_populates_view() {
        let mut controller = TableController::new(MemorySource::client(rows(23)), date(27));
        let status = controller.search(date(27), None).await;
        assert_eq!(status, ViewStatus::Populated);
        assert_eq!(controller.view().visible_rows().len(), 10);
        assert_eq!(controller.source().last_query().date, date(27));
    }

    #[tokio::test]
    async fn test_filter_change_resets_page() {
        let mut controller = TableController::new(MemorySource::client(rows(60)), date(27));
        controller.search(date(27), None).await;
        controller.go_to_page(5).await;
        assert_eq!(controller.view().page(), 5);

        controller.search(date(26), None).await;
        assert_eq!(controller.view().page(), 1);
        assert_eq!(controller.date(), date(26));
    }

    #[tokio::test]
    async fn test_client_paging_does_not_refetch() {
        let mut controller = TableController::new(MemorySource::client(rows(30)), date(27));
        controller.search(date(27), None).await;
        assert_eq!(controller.go_to_page(3).await, PageChange::Local(3));
        assert_eq!(controller.source().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_paging_refetches() {
        let mut controller = TableController::new(MemorySource::server(rows(47)), date(27));
        controller.search(date(27), NameFilter::new("종목", true)).await;
        assert_eq!(controller.view().window().total_pages, 4);

        assert_eq!(controller.go_to_page(4).await, PageChange::Refetch(4));
        assert_eq!(controller.view().page(), 4);
        assert_eq!(controller.view().visible_rows().len(), 2);

        let query = controller.source().last_query();
        assert_eq!(query.page, 4);
        assert_eq!(query.page_size, 15);
        assert_eq!(query.search, NameFilter::new("종목", true));
        assert_eq!(controller.source().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_renders_empty_state() {
        let mut controller = TableController::new(MemorySource::client(rows(12)), date(27));
        controller.search(date(27), None).await;
        assert_eq!(controller.view().visible_rows().len(), 10);

        controller.set_source(MemorySource::failing()).await;
        assert_eq!(
            controller.view().status(),
            ViewStatus::Failed(FailureKind::Http)
        );
        assert!(controller.view().visible_rows().is_empty());
        assert!(controller.view().rows().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_input_makes_no_request() {
        let mut controller = TableController::new(MemorySource::client(rows(3)), date(27));
        let dates = FixedDates(NaiveDate::from_ymd_opt(2024, 12, 28).unwrap());

        let error = controller
            .search_input("2024/12/27", "", false, &dates)
            .await
            .unwrap_err();
        assert!(matches!(error, InputError::InvalidDate { .. }));

        let error = controller
            .search_input("2025-01-02", "", false, &dates)
            .await
            .unwrap_err();
        assert!(matches!(error, InputError::FutureDate { .. }));

        assert_eq!(controller.source().calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.view().status(), ViewStatus::Idle);

        let status = controller
            .search_input("2024-12-27", "  ", false, &dates)
            .await
            .unwrap();
        assert_eq!(status, ViewStatus::Populated);
        assert_eq!(controller.search_filter(), None);
    }

    #[tokio::test]
    async fn test_out_of_order_results_keep_latest() {
        let mut controller = TableController::new(MemorySource::client(rows(3)), date(27));

        let (first, first_query) = controller.prepare(1);
        let (second, second_query) = controller.prepare(1);
        let source = controller.source();
        let (older, newer) = futures::join!(source.fetch(&first_query), source.fetch(&second_query));
        let older = older.map(|_| TableData::from_rows(rows(40)));
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);

        assert!(controller.complete(second, newer));
        assert!(!controller.complete(first, older));
        assert_eq!(controller.view().total_count(), 3);
    }

    #[tokio::test]
    async fn test_market_change_keeps_sort() {
        let mut controller = TableController::new(MemorySource::client(rows(5)), date(27));
        controller.search(date(27), None).await;
        controller.sort_by("clsprc");
        controller.sort_by("clsprc");
        controller.go_to_page(1).await;

        let status = controller.set_source(MemorySource::client(rows(3))).await;
        assert_eq!(status, ViewStatus::Populated);
        assert_eq!(
            controller.view().sort_state(),
            &SortState::new("clsprc", SortDirection::Descending)
        );
        let first = controller.view().visible_rows()[0];
        assert_eq!(first.field("isuNm"), Some("종목002"));
        assert_eq!(controller.view().page(), 1);
    }

    #[tokio::test]
    async fn test_reload_keeps_sort() {
        let mut controller = TableController::new(MemorySource::client(rows(5)), date(27));
        controller.search(date(27), None).await;
        controller.sort_by("clsprc");
        controller.sort_by("clsprc");
        controller.reload().await;

        let first = controller.view().visible_rows()[0];
        assert_eq!(first.field("isuNm"), Some("종목004"));
    }
}
