//! Table View State Machine.
//!
//! One generic view drives every table: it owns the last fetched rows, the
//! sort state and the current page, and derives what to render from them.
//! It never performs I/O. Callers ask it for a [`FetchTicket`] before
//! starting a request and hand the ticket back with the result; only the
//! most recently issued ticket is accepted, so a slow response can never
//! overwrite a newer one.
//!
//! ```text
//!   Idle --begin_fetch--> Loading --apply--> Populated | Empty | Failed
//!                            ^                        |
//!                            +------ begin_fetch -----+
//! ```

use krx_dashboard_market_data::{Envelope, FailureKind, Fetched, Record};
use log::debug;

use crate::columns::ColumnSet;
use crate::pagination::{clamp_page, page_indicators, paginate, PageIndicator, PageOwnership, PageWindow};
use crate::sort::{sort_indices, SortState};

/// Message shown when a fetch succeeded with zero rows.
pub const EMPTY_MESSAGE: &str = "조회된 데이터가 없습니다.";

/// Message shown when a fetch failed.
pub const FAILED_MESSAGE: &str = "데이터를 불러오지 못했습니다.";

/// Message shown while a fetch is in flight.
pub const LOADING_MESSAGE: &str = "데이터를 불러오는 중입니다...";

/// Rows handed to the view, with the total the pagination is computed over.
///
/// For client-owned tables `total_count` equals `rows.len()`; server-owned
/// feeds carry the backend's total across all pages.
#[derive(Clone, Debug, PartialEq)]
pub struct TableData<R> {
    pub rows: Vec<R>,
    pub total_count: usize,
}

impl<R> TableData<R> {
    pub fn from_rows(rows: Vec<R>) -> Self {
        let total_count = rows.len();
        Self { rows, total_count }
    }

    pub fn from_envelope(envelope: Envelope<R>) -> Self {
        Self {
            total_count: envelope.total_count.max(envelope.items.len()),
            rows: envelope.items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<R> Default for TableData<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            total_count: 0,
        }
    }
}

impl<R> From<Vec<R>> for TableData<R> {
    fn from(rows: Vec<R>) -> Self {
        Self::from_rows(rows)
    }
}

impl<R> From<Envelope<R>> for TableData<R> {
    fn from(envelope: Envelope<R>) -> Self {
        Self::from_envelope(envelope)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Populated,
    Empty,
    Failed(FailureKind),
}

/// Identifies one fetch. Only the latest issued ticket is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    page: usize,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Page the request was issued for.
    pub fn page(&self) -> usize {
        self.page
    }
}

/// What a page navigation requires from the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageChange {
    /// Already on that page
    None,
    /// Page switched locally, nothing to fetch
    Local(usize),
    /// The page has to be fetched from the backend
    Refetch(usize),
}

/// Presentation state of one table.
#[derive(Debug)]
pub struct TableView<R> {
    columns: ColumnSet,
    ownership: PageOwnership,
    page_size: usize,
    status: ViewStatus,
    rows: Vec<R>,
    order: Vec<usize>,
    total_count: usize,
    page: usize,
    sort: SortState,
    issued: u64,
}

impl<R: Record> TableView<R> {
    pub fn new(columns: ColumnSet, ownership: PageOwnership) -> Self {
        Self {
            page_size: columns.page_size.max(1),
            sort: columns.default_sort_state(),
            columns,
            ownership,
            status: ViewStatus::Idle,
            rows: Vec::new(),
            order: Vec::new(),
            total_count: 0,
            page: 1,
            issued: 0,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Switches to a new column set (market change). The active sort is
    /// kept when the new set has that column, otherwise the set's default
    /// sort applies. Held rows are dropped.
    pub fn reset_columns(&mut self, columns: ColumnSet) {
        self.page_size = columns.page_size.max(1);
        let keeps_sort = self
            .sort
            .key
            .as_deref()
            .is_some_and(|key| columns.contains(key));
        if !keeps_sort {
            self.sort = columns.default_sort_state();
        }
        self.columns = columns;
        self.clear_rows();
        self.page = 1;
        self.status = ViewStatus::Idle;
    }

    /// Enters `Loading` for a request of `page` and returns its ticket.
    ///
    /// Rows held from the previous result are blanked immediately.
    pub fn begin_fetch(&mut self, page: usize) -> FetchTicket {
        self.issued += 1;
        self.status = ViewStatus::Loading;
        self.clear_rows();
        let ticket = FetchTicket {
            seq: self.issued,
            page: page.max(1),
        };
        debug!("Fetch #{} issued for page {}", ticket.seq, ticket.page);
        ticket
    }

    /// Applies a fetch result. Returns `false` when the ticket is stale and
    /// the result was discarded.
    pub fn apply(&mut self, ticket: FetchTicket, fetched: Fetched<TableData<R>>) -> bool {
        if ticket.seq != self.issued {
            debug!(
                "Discarding stale fetch #{} (latest is #{})",
                ticket.seq, self.issued
            );
            return false;
        }

        if let Some(kind) = fetched.failure_kind() {
            self.clear_rows();
            self.page = 1;
            self.status = ViewStatus::Failed(kind);
            return true;
        }

        let data = fetched.data;
        self.total_count = match self.ownership {
            PageOwnership::Client => data.rows.len(),
            PageOwnership::Server => data.total_count.max(data.rows.len()),
        };
        self.rows = data.rows;
        self.page = match self.ownership {
            PageOwnership::Client => 1,
            PageOwnership::Server => clamp_page(ticket.page, self.window_for(1).total_pages),
        };
        // Server pages count as populated whenever the feed has matches,
        // even if the requested page itself came back empty.
        let has_rows = match self.ownership {
            PageOwnership::Client => !self.rows.is_empty(),
            PageOwnership::Server => self.total_count > 0,
        };
        self.status = if has_rows {
            ViewStatus::Populated
        } else {
            ViewStatus::Empty
        };
        self.resort();
        true
    }

    /// Header click on `key`. Returns `false` for unknown or unsortable
    /// columns.
    pub fn sort_by(&mut self, key: &str) -> bool {
        match self.columns.column(key) {
            Some(column) if column.sortable => {}
            _ => return false,
        }
        self.sort.toggle(key);
        self.resort();
        if self.ownership == PageOwnership::Client {
            self.page = 1;
        }
        true
    }

    /// Navigates to page `page`, clamped into range.
    pub fn go_to_page(&mut self, page: usize) -> PageChange {
        let target = clamp_page(page, self.window().total_pages);
        if target == self.page {
            return PageChange::None;
        }
        match self.ownership {
            PageOwnership::Client => {
                self.page = target;
                PageChange::Local(target)
            }
            PageOwnership::Server => PageChange::Refetch(target),
        }
    }

    pub fn next_page(&mut self) -> PageChange {
        self.go_to_page(self.page + 1)
    }

    pub fn previous_page(&mut self) -> PageChange {
        self.go_to_page(self.page.saturating_sub(1))
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    /// Rows to render on the current page, sorted.
    pub fn visible_rows(&self) -> Vec<&R> {
        if self.status != ViewStatus::Populated {
            return Vec::new();
        }
        let order: &[usize] = match self.ownership {
            PageOwnership::Client => self.window().slice(&self.order),
            PageOwnership::Server => &self.order,
        };
        order.iter().map(|&i| &self.rows[i]).collect()
    }

    /// 1-based rank of the first visible row.
    pub fn first_rank(&self) -> usize {
        self.window().start + 1
    }

    pub fn window(&self) -> PageWindow {
        self.window_for(self.page)
    }

    pub fn indicators(&self) -> Vec<PageIndicator> {
        let window = self.window();
        page_indicators(window.page, window.total_pages)
    }

    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn ownership(&self) -> PageOwnership {
        self.ownership
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// All held rows in backend order (the full day for client-owned
    /// tables, the current page for server-owned ones).
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Placeholder text for every state that renders no rows.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self.status {
            ViewStatus::Idle | ViewStatus::Populated => None,
            ViewStatus::Loading => Some(LOADING_MESSAGE),
            ViewStatus::Empty => Some(EMPTY_MESSAGE),
            ViewStatus::Failed(_) => Some(FAILED_MESSAGE),
        }
    }

    fn window_for(&self, page: usize) -> PageWindow {
        paginate(self.total_count, self.page_size, page)
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
        self.order.clear();
        self.total_count = 0;
    }

    fn resort(&mut self) {
        self.order = match self.sort.key.as_deref() {
            Some(key) => sort_indices(&self.rows, key, self.sort.direction),
            None => (0..self.rows.len()).collect(),
        };
    }
}
