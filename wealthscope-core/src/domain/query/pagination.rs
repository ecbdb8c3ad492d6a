// wealthscope-core/src/domain/query/pagination.rs

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 50;

/// One page of a larger, already filtered and sorted sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_records: usize,
}

impl<T> Page<T> {
    /// 1-based index of the first item shown, 0 when the page is empty.
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last item shown.
    pub fn last_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_index() + self.items.len() - 1
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Offset slicing. Page 0 is treated as page 1; pages past the end are empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let current_page = page.max(1);
    let start = (current_page - 1).saturating_mul(page_size);
    let slice = if start >= items.len() {
        &[][..]
    } else {
        let end = (start + page_size).min(items.len());
        &items[start..end]
    };

    Page {
        items: slice.to_vec(),
        current_page,
        page_size,
        total_pages: total_pages(items.len(), page_size),
        total_records: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_reconstruct_input_exactly_once() {
        let items: Vec<u32> = (0..123).collect();
        let pages = total_pages(items.len(), DEFAULT_PAGE_SIZE);
        assert_eq!(pages, 3);

        let rebuilt: Vec<u32> = (1..=pages)
            .flat_map(|p| paginate(&items, p, DEFAULT_PAGE_SIZE).items)
            .collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<u32> = (0..123).collect();
        let page = paginate(&items, 3, 50);
        assert_eq!(page.items.len(), 23);
        assert_eq!(page.first_index(), 101);
        assert_eq!(page.last_index(), 123);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let items: Vec<u32> = (0..10).collect();
        let page = paginate(&items, 5, 50);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.first_index(), 0);
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = vec![];
        let page = paginate(&items, 1, 50);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_records, 0);
        assert!(!page.has_next());
    }

    #[test]
    fn test_page_zero_is_first_page() {
        let items: Vec<u32> = (0..5).collect();
        assert_eq!(paginate(&items, 0, 2).items, vec![0, 1]);
    }
}
