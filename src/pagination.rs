//! This modules defines the common functionality for paging data.

use crate::config::DEFAULT_PAGE_SIZE;

/// A window into an ordered list of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// The maximum number of rows to return.
    pub limit: u64,
    /// The number of rows to skip before the first returned row.
    pub offset: u64,
}

impl Pagination {
    /// Create a window of at most `limit` rows starting after `offset` rows.
    pub fn new(limit: u64, offset: u64) -> Self {
        Self { limit, offset }
    }

    /// Create the window for the 1-based `page` when showing `page_size` rows per page.
    ///
    /// Page zero is treated as the first page.
    pub fn from_page(page: u64, page_size: u64) -> Self {
        let offset = page.saturating_sub(1).saturating_mul(page_size);

        Self {
            limit: page_size,
            offset,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;
    use crate::config::DEFAULT_PAGE_SIZE;

    #[test]
    fn default_starts_at_the_first_row() {
        assert_eq!(Pagination::default(), Pagination::new(DEFAULT_PAGE_SIZE, 0));
    }

    #[test]
    fn first_page_has_no_offset() {
        assert_eq!(Pagination::from_page(1, 20), Pagination::new(20, 0));
    }

    #[test]
    fn later_pages_skip_earlier_pages() {
        assert_eq!(Pagination::from_page(3, 20), Pagination::new(20, 40));
    }

    #[test]
    fn page_zero_is_the_first_page() {
        assert_eq!(Pagination::from_page(0, 20), Pagination::new(20, 0));
    }
}
