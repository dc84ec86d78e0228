//! Paginated cursor over the rows of a filtered table.

use crate::models::Trip;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// One page of rows. `start` is the offset of `rows[0]` in the table.
#[derive(Debug, PartialEq)]
pub struct Page<'a> {
    pub start: usize,
    pub rows: &'a [Trip],
    pub at_end: bool,
}

/// Cursor starting at offset 0 and moving forward one page per request.
/// Once the last page has been handed out the browser is exhausted and any
/// further request is a no-op returning `None`.
#[derive(Debug)]
pub struct RowBrowser<'a> {
    trips: &'a [Trip],
    page_size: usize,
    offset: usize,
    exhausted: bool,
}

impl<'a> RowBrowser<'a> {
    pub fn new(trips: &'a [Trip], page_size: usize) -> Self {
        Self {
            trips,
            page_size: page_size.max(1),
            offset: 0,
            exhausted: false,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Rows `[offset, offset + page_size)`, fewer on the last page.
    pub fn next_page(&mut self) -> Option<Page<'a>> {
        if self.exhausted {
            return None;
        }

        let start = self.offset.min(self.trips.len());
        let end = (self.offset + self.page_size).min(self.trips.len());
        let at_end = self.offset + self.page_size >= self.trips.len();

        self.offset += self.page_size;
        self.exhausted = at_end;

        Some(Page {
            start,
            rows: &self.trips[start..end],
            at_end,
        })
    }
}
