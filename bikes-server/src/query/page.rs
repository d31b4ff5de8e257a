//! Pagination over a filtered, sorted result set.

use serde::Serialize;

/// Upper bound on the page size a caller can request.
pub const MAX_PAGE_SIZE: usize = 100;

/// One page of a query result. A view, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    /// Map the items, keeping the page bookkeeping.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            total_items: self.total_items,
            total_pages: self.total_pages,
            page: self.page,
            page_size: self.page_size,
            has_next: self.has_next,
            has_previous: self.has_previous,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// Slice one page out of `items`.
///
/// `page` and `page_size` are clamped to at least 1 (`page_size` also to
/// [`MAX_PAGE_SIZE`]); `total_pages` is at least 1 even for an empty
/// set; a `page` past the end is clamped down to the last page rather
/// than returning an empty slice.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Paginated<T> {
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let items: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

    Paginated {
        total_items,
        total_pages,
        page,
        page_size,
        has_next: page < total_pages,
        has_previous: page > 1,
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_middle_page() {
        let result = paginate((1..=10).collect(), 2, 3);
        assert_eq!(result.total_items, 10);
        assert_eq!(result.total_pages, 4);
        assert_eq!(result.items, vec![4, 5, 6]);
        assert!(result.has_next);
        assert!(result.has_previous);
    }

    #[test]
    fn empty_set_is_one_empty_page() {
        let result = paginate(Vec::<i32>::new(), 1, 10);
        assert_eq!(result.total_items, 0);
        assert_eq!(result.total_pages, 1);
        assert_eq!(result.page, 1);
        assert!(result.items.is_empty());
        assert!(!result.has_next);
        assert!(!result.has_previous);
    }

    #[test]
    fn page_past_the_end_returns_last_page() {
        let result = paginate((1..=10).collect(), 99, 3);
        assert_eq!(result.page, 4);
        assert_eq!(result.items, vec![10]);
        assert!(!result.has_next);
        assert!(result.has_previous);
    }

    #[test]
    fn page_and_size_clamp_to_one() {
        let result = paginate((1..=5).collect(), 0, 0);
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, 1);
        assert_eq!(result.items, vec![1]);
    }

    #[test]
    fn page_size_is_capped() {
        let result = paginate((1..=5).collect(), 1, 10_000);
        assert_eq!(result.page_size, MAX_PAGE_SIZE);
        assert_eq!(result.items.len(), 5);
    }

    #[test]
    fn map_keeps_bookkeeping() {
        let result = paginate((1..=10).collect(), 2, 3).map(|n| n * 10);
        assert_eq!(result.total_items, 10);
        assert_eq!(result.page, 2);
        assert_eq!(result.items, vec![40, 50, 60]);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(paginate(vec![1], 1, 10)).unwrap();
        assert_eq!(json["totalItems"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["hasPrevious"], false);
    }
}
