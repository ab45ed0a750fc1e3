//! Page windows and page-indicator strips.
//!
//! The same math serves both pagination owners: client-owned tables slice
//! their sorted rows with [`PageWindow`], server-owned feeds only use it to
//! clamp the requested page and to build the indicator strip.

use std::fmt;

/// Indicators shown on each side of the current page.
pub const INDICATOR_RADIUS: usize = 2;

/// Who slices the rows into pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageOwnership {
    /// Full result is held locally and sliced after sorting
    Client,
    /// Each page is fetched from the backend
    Server,
}

/// The slice of a result set shown on one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Index of the first row on the page
    pub start: usize,
    /// One past the last row on the page
    pub end: usize,
    /// Number of pages, never below one
    pub total_pages: usize,
    /// The clamped, 1-based current page
    pub page: usize,
}

impl PageWindow {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Rows of `rows` that fall inside this window, clamped to its length.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let end = self.end.min(rows.len());
        let start = self.start.min(end);
        &rows[start..end]
    }
}

/// Number of pages for `total_count` rows, at least one.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    total_count.div_ceil(size).max(1)
}

/// Clamps `page` into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Computes the window for `current_page`, clamping it into range.
///
/// A zero page size is treated as one and an empty result set still has a
/// single (empty) page.
///
/// # Examples
///
/// ```
/// use krx_dashboard_core::pagination::paginate;
///
/// let window = paginate(95, 10, 15);
/// assert_eq!(window.page, 10);
/// assert_eq!((window.start, window.end), (90, 95));
/// ```
pub fn paginate(total_count: usize, page_size: usize, current_page: usize) -> PageWindow {
    let size = page_size.max(1);
    let total_pages = total_pages(total_count, size);
    let page = clamp_page(current_page, total_pages);
    let start = ((page - 1) * size).min(total_count);
    let end = (start + size).min(total_count);

    PageWindow {
        start,
        end,
        total_pages,
        page,
    }
}

/// One entry of the page strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageIndicator {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageIndicator::Page(n) => write!(f, "{}", n),
            PageIndicator::Ellipsis => f.write_str("…"),
        }
    }
}

/// Builds the page strip: the first and last page, every page within
/// [`INDICATOR_RADIUS`] of `current`, and one ellipsis per gap.
pub fn page_indicators(current: usize, total_pages: usize) -> Vec<PageIndicator> {
    let total = total_pages.max(1);
    let current = clamp_page(current, total);
    let low = current.saturating_sub(INDICATOR_RADIUS).max(1);
    let high = (current + INDICATOR_RADIUS).min(total);

    let mut pages = Vec::with_capacity(high - low + 3);
    pages.push(1);
    pages.extend((low..=high).filter(|p| *p != 1 && *p != total));
    if total != 1 {
        pages.push(total);
    }

    let mut indicators = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<usize> = None;
    for page in pages {
        if let Some(prev) = previous {
            if page > prev + 1 {
                indicators.push(PageIndicator::Ellipsis);
            }
        }
        indicators.push(PageIndicator::Page(page));
        previous = Some(page);
    }
    indicators
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageIndicator::{Ellipsis, Page};

    #[test]
    fn test_first_page() {
        let window = paginate(95, 10, 1);
        assert_eq!(
            window,
            PageWindow {
                start: 0,
                end: 10,
                total_pages: 10,
                page: 1
            }
        );
        assert!(!window.has_previous());
        assert!(window.has_next());
    }

    #[test]
    fn test_page_past_end_is_clamped() {
        let window = paginate(95, 10, 15);
        assert_eq!(window.page, 10);
        assert_eq!(window.start, 90);
        assert_eq!(window.end, 95);
        assert!(!window.has_next());
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let window = paginate(0, 10, 1);
        assert_eq!(window.total_pages, 1);
        assert_eq!((window.start, window.end), (0, 0));
        assert!(window.is_empty());
        assert!(!window.has_previous());
        assert!(!window.has_next());
    }

    #[test]
    fn test_page_zero_and_zero_size() {
        assert_eq!(paginate(30, 10, 0).page, 1);
        let window = paginate(3, 0, 2);
        assert_eq!(window.total_pages, 3);
        assert_eq!((window.start, window.end), (1, 2));
    }

    #[test]
    fn test_slice_clamps_to_rows() {
        let rows: Vec<u32> = (0..25).collect();
        let window = paginate(25, 10, 3);
        assert_eq!(window.slice(&rows), &[20, 21, 22, 23, 24]);

        // server-owned windows describe rows that are not held locally
        let window = paginate(100, 10, 5);
        assert!(window.slice(&rows).is_empty());
    }

    #[test]
    fn test_indicators_middle() {
        assert_eq!(
            page_indicators(7, 20),
            vec![
                Page(1),
                Ellipsis,
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_indicators_near_edges() {
        assert_eq!(
            page_indicators(1, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
        assert_eq!(
            page_indicators(4, 10),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
        assert_eq!(
            page_indicators(10, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_indicators_small_totals() {
        assert_eq!(page_indicators(1, 1), vec![Page(1)]);
        assert_eq!(page_indicators(1, 0), vec![Page(1)]);
        assert_eq!(page_indicators(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_indicator_display() {
        assert_eq!(Page(12).to_string(), "12");
        assert_eq!(Ellipsis.to_string(), "…");
    }
}
