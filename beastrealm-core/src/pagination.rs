//! Client-side paging for battle reports and other long round lists.

/// One-based page cursor over a list whose length may change between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: usize,
    current: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Paginator {
    /// A `per_page` of zero is treated as one.
    #[must_use]
    pub const fn new(per_page: usize) -> Self {
        Self {
            per_page: if per_page == 0 { 1 } else { per_page },
            current: 1,
        }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Never less than one, even for an empty list.
    #[must_use]
    pub const fn total_pages(&self, len: usize) -> usize {
        let pages = len.div_ceil(self.per_page);
        if pages == 0 { 1 } else { pages }
    }

    #[must_use]
    pub fn page_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current - 1).saturating_mul(self.per_page);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current > 1
    }

    #[must_use]
    pub const fn has_next(&self, len: usize) -> bool {
        self.current < self.total_pages(len)
    }

    pub const fn prev(&mut self) {
        if self.has_prev() {
            self.current -= 1;
        }
    }

    pub const fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.current += 1;
        }
    }

    /// Jump to `page`; out-of-range requests are ignored.
    pub const fn go_to(&mut self, page: usize, len: usize) -> bool {
        if page >= 1 && page <= self.total_pages(len) {
            self.current = page;
            true
        } else {
            false
        }
    }

    pub const fn reset(&mut self) {
        self.current = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::Paginator;

    #[test]
    fn empty_list_has_one_page() {
        let pager = Paginator::default();
        assert_eq!(pager.total_pages(0), 1);
        assert!(pager.page_items::<u8>(&[]).is_empty());
        assert!(!pager.has_prev());
        assert!(!pager.has_next(0));
    }

    #[test]
    fn walks_pages_and_clamps() {
        let rounds: Vec<u32> = (1..=23).collect();
        let mut pager = Paginator::new(10);
        assert_eq!(pager.total_pages(rounds.len()), 3);
        assert_eq!(pager.page_items(&rounds), &rounds[0..10]);

        pager.next(rounds.len());
        pager.next(rounds.len());
        assert_eq!(pager.current(), 3);
        assert_eq!(pager.page_items(&rounds), &[21, 22, 23]);
        pager.next(rounds.len());
        assert_eq!(pager.current(), 3);

        pager.prev();
        assert_eq!(pager.current(), 2);
        pager.reset();
        pager.prev();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut pager = Paginator::new(5);
        assert!(!pager.go_to(0, 12));
        assert!(!pager.go_to(4, 12));
        assert!(pager.go_to(3, 12));
        assert_eq!(pager.current(), 3);
    }

    #[test]
    fn shrinking_list_leaves_stale_page_empty() {
        let mut pager = Paginator::new(2);
        assert!(pager.go_to(3, 6));
        assert!(pager.page_items(&[1, 2]).is_empty());
        assert!(!pager.has_next(2));
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let pager = Paginator::new(0);
        assert_eq!(pager.per_page(), 1);
        assert_eq!(pager.total_pages(3), 3);
    }
}
