//! Paginator - fixed-size page slicing
//!
//! Pages are 1-based. Out-of-range requests clamp to an empty page
//! rather than erroring; a page that stopped existing after a filter
//! change is the caller's problem to reset (see `FeedState`).

/// Default cards per page in the feed
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Slice one page out of an ordered collection.
///
/// Returns the elements at `[(page-1)*size, page*size)`, clamped to
/// bounds. `page` 0 is treated as page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `count` items (0 for an empty set)
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_partition_the_input() {
        let items: Vec<u32> = (0..10).collect();
        let pages = total_pages(items.len(), 8);
        assert_eq!(pages, 2);

        let mut concat = Vec::new();
        for p in 1..=pages {
            concat.extend_from_slice(paginate(&items, p, 8));
        }
        assert_eq!(concat, items);
    }

    #[test]
    fn test_second_page_of_ten_items() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(paginate(&items, 2, 8), &[8, 9]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        assert!(paginate(&items, 3, 8).is_empty());
        assert!(paginate(&items, 100, 8).is_empty());
    }

    #[test]
    fn test_page_zero_is_page_one() {
        let items: Vec<u32> = (0..3).collect();
        assert_eq!(paginate(&items, 0, 8), &[0, 1, 2]);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, 1, 8).is_empty());
        assert_eq!(total_pages(0, 8), 0);
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(total_pages(16, 8), 2);
        assert_eq!(total_pages(17, 8), 3);
        assert_eq!(total_pages(1, 8), 1);
    }

    #[test]
    fn test_zero_page_size() {
        let items: Vec<u32> = (0..3).collect();
        assert!(paginate(&items, 1, 0).is_empty());
        assert_eq!(total_pages(3, 0), 0);
    }
}
