//! KRX Dashboard Core - the generic table engine.
//!
//! One sortable, paginated table implementation serves every market
//! vertical. A vertical only contributes a [`TableSource`] (what to fetch)
//! and a [`ColumnSet`](columns::ColumnSet) (what to show).
//!
//! - [`numeric`] / [`format`] - Classifying and rendering display values
//! - [`sort`] / [`pagination`] - Pure sort and page math
//! - [`view`] - The Table View State Machine
//! - [`source`] / [`controller`] - Fetching rows into a view
//! - [`summary`] - Summary card aggregates
//! - [`dates`] / [`query_state`] - Query dates and shareable view state

pub mod columns;
pub mod controller;
pub mod dates;
pub mod errors;
pub mod format;
pub mod numeric;
pub mod pagination;
pub mod query_state;
pub mod source;
pub mod sort;
pub mod summary;
pub mod view;

pub use controller::TableController;
pub use errors::{InputError, Result};
pub use numeric::{coerce, Coerced};
pub use pagination::{page_indicators, paginate, PageIndicator, PageOwnership, PageWindow};
pub use sort::{sort_records, SortDirection, SortState};
pub use source::{TableQuery, TableSource};
pub use view::{FetchTicket, PageChange, TableData, TableView, ViewStatus};
