//! Pager
//!
//! Fixed-size page slicing over the derived picto sequence, plus the
//! five-wide page number window shown in the pagination bar.

/// Rows per table page.
pub const PAGE_SIZE: usize = 20;

/// How many numbered page buttons to show at most.
pub const PAGE_WINDOW: usize = 5;

/// The slice for a 1-based `page`. Out-of-range pages yield an empty slice.
pub fn page_items<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = (start + page_size).min(rows.len());
    rows.get(start..end).unwrap_or(&[])
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Up to [`PAGE_WINDOW`] page numbers to display, centered on `current`
/// where possible and clamped to `1..=total` at the edges.
pub fn page_window(current: usize, total: usize) -> Vec<usize> {
    if total <= PAGE_WINDOW {
        (1..=total).collect()
    } else if current <= 3 {
        (1..=PAGE_WINDOW).collect()
    } else if current + 2 >= total {
        (total - PAGE_WINDOW + 1..=total).collect()
    } else {
        (current - 2..=current + 2).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_slicing_counts() {
        let rows: Vec<u32> = (0..45).collect();
        assert_eq!(total_pages(rows.len(), PAGE_SIZE), 3);
        assert_eq!(page_items(&rows, 1, PAGE_SIZE).len(), 20);
        assert_eq!(page_items(&rows, 2, PAGE_SIZE).len(), 20);
        assert_eq!(page_items(&rows, 3, PAGE_SIZE).len(), 5);
        assert_eq!(page_items(&rows, 2, PAGE_SIZE)[0], 20);
    }

    #[test]
    fn test_evenly_divisible_last_page_is_full() {
        let rows: Vec<u32> = (0..40).collect();
        assert_eq!(total_pages(rows.len(), PAGE_SIZE), 2);
        assert_eq!(page_items(&rows, 2, PAGE_SIZE).len(), 20);
    }

    #[test]
    fn test_empty_sequence_has_zero_pages() {
        let rows: Vec<u32> = Vec::new();
        assert_eq!(total_pages(rows.len(), PAGE_SIZE), 0);
        assert!(page_items(&rows, 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let rows: Vec<u32> = (0..10).collect();
        assert!(page_items(&rows, 2, PAGE_SIZE).is_empty());
        assert!(page_items(&rows, 99, PAGE_SIZE).is_empty());
        // Page 0 is treated as page 1.
        assert_eq!(page_items(&rows, 0, PAGE_SIZE).len(), 10);
    }

    #[test]
    fn test_single_short_page() {
        // 10 matches on one page: totalPages = 1, all rows on page 1.
        let rows: Vec<u32> = (0..10).collect();
        assert_eq!(total_pages(rows.len(), PAGE_SIZE), 1);
        assert_eq!(page_items(&rows, 1, PAGE_SIZE).len(), 10);
    }

    #[test]
    fn test_window_when_few_pages() {
        assert_eq!(page_window(1, 0), Vec::<usize>::new());
        assert_eq!(page_window(1, 1), vec![1]);
        assert_eq!(page_window(2, 3), vec![1, 2, 3]);
        assert_eq!(page_window(5, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(page_window(1, 9), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 9), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(page_window(7, 9), vec![5, 6, 7, 8, 9]);
        assert_eq!(page_window(9, 9), vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_window_centered_in_the_middle() {
        assert_eq!(page_window(5, 9), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(4, 10), vec![2, 3, 4, 5, 6]);
    }
}
