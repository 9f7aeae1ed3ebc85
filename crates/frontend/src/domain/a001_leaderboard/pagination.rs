//! Pagination over the locally held leaderboard.
//!
//! Everything here is a pure function of `(raw entries, division, page, page size)`;
//! nothing is cached, ranks are recomputed on every call.
//!
//! Ordering contract: the leaderboard order delivered by the server is
//! authoritative. Filtering keeps it stable and nothing here sorts entries,
//! ties included.

use contracts::domain::a001_leaderboard::aggregate::RankedEntry;

use super::view_state::DivisionFilter;

/// Entry as displayed: `rank` is the 1-based position in the filtered ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry<T = RankedEntry> {
    pub entry: T,
    pub rank: usize,
}

pub fn derive_filtered<'a>(raw: &'a [RankedEntry], division: &DivisionFilter) -> Vec<&'a RankedEntry> {
    raw.iter().filter(|e| division.matches(&e.division)).collect()
}

/// Slice of page `page` (1-based). Out-of-range pages give an empty slice.
/// Also used for challenge solves, which are paged the same way.
pub fn derive_page<T: Clone>(ordered: &[&T], page: usize, page_size: usize) -> Vec<RenderedEntry<T>> {
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    ordered
        .iter()
        .skip(start)
        .take(page_size)
        .enumerate()
        .map(|(i, entry)| RenderedEntry {
            entry: (*entry).clone(),
            rank: start + i + 1,
        })
        .collect()
}

pub fn total_items(ordered: &[&RankedEntry]) -> usize {
    ordered.len()
}

/// Pagination controls are shown only when a single page cannot hold everything.
pub fn needs_pagination(total: usize, page_size: usize) -> bool {
    total > page_size
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Page that keeps the previously top entry first after a page-size change.
pub fn page_for_new_size(old_page: usize, old_size: usize, new_size: usize) -> usize {
    if new_size == 0 {
        return old_page.max(1);
    }
    old_page.max(1).saturating_sub(1).saturating_mul(old_size) / new_size + 1
}

/// Target of "previous": the page before `page`, or the last page when `page` is past the end.
pub fn previous_page(page: usize, total_pages: usize) -> Option<usize> {
    if page <= 1 || total_pages == 0 {
        return None;
    }
    Some((page - 1).min(total_pages))
}

/// Target of "next", `None` on the last page and beyond.
pub fn next_page(page: usize, total_pages: usize) -> Option<usize> {
    (page < total_pages).then_some(page.max(1) + 1)
}

/// Range of page numbers to show as buttons, centred on `page` where possible.
pub fn visible_page_window(page: usize, total_pages: usize, visible: usize) -> std::ops::RangeInclusive<usize> {
    if total_pages == 0 || visible == 0 {
        return 1..=0;
    }
    let page = page.clamp(1, total_pages);
    let visible = visible.min(total_pages);
    let half = visible / 2;
    let first = page.saturating_sub(half).max(1).min(total_pages - visible + 1);
    first..=first + visible - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<RankedEntry> {
        (0..n)
            .map(|i| RankedEntry {
                id: format!("team-{i}"),
                name: format!("Team {i}"),
                score: (10_000 - i) as i64,
                division: if i % 3 == 0 { "open".to_string() } else { "student".to_string() },
            })
            .collect()
    }

    #[test]
    fn test_previous_from_past_the_end_lands_on_last_page() {
        assert_eq!(previous_page(40, 5), Some(5));
        assert_eq!(previous_page(6, 5), Some(5));
        assert_eq!(previous_page(3, 5), Some(2));
        assert_eq!(previous_page(1, 5), None);
        assert_eq!(previous_page(4, 0), None);

        assert_eq!(next_page(4, 5), Some(5));
        assert_eq!(next_page(5, 5), None);
        assert_eq!(next_page(40, 5), None);
    }

    #[test]
    fn test_rank_continuity_on_last_page() {
        let raw = entries(120);
        let ordered = derive_filtered(&raw, &DivisionFilter::All);
        let page = derive_page(&ordered, 3, 50);

        assert_eq!(page.len(), 20);
        assert_eq!(page.first().map(|e| e.rank), Some(101));
        assert_eq!(page.last().map(|e| e.rank), Some(120));
        assert_eq!(page[0].entry.id, "team-100");
    }

    #[test]
    fn test_pagination_is_total() {
        for len in [0usize, 1, 24, 25, 26, 99, 120] {
            let raw = entries(len);
            let ordered = derive_filtered(&raw, &DivisionFilter::All);
            for page_size in [1usize, 25, 50, 100] {
                for page in 1..=8 {
                    let expected = page_size.min(len.saturating_sub((page - 1) * page_size));
                    let rendered = derive_page(&ordered, page, page_size);
                    assert_eq!(rendered.len(), expected, "len={len} size={page_size} page={page}");
                }
            }
        }
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let raw = entries(10);
        let ordered = derive_filtered(&raw, &DivisionFilter::All);
        assert!(derive_page(&ordered, usize::MAX, 100).is_empty());
    }

    #[test]
    fn test_filter_keeps_server_order_and_reranks() {
        let mut raw = entries(9);
        // равные очки: порядок сервера сохраняется
        raw[3].score = raw[0].score;
        let ordered = derive_filtered(&raw, &DivisionFilter::Division("open".to_string()));
        let ids: Vec<&str> = ordered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["team-0", "team-3", "team-6"]);

        let page = derive_page(&ordered, 1, 2);
        assert_eq!(page.iter().map(|e| e.rank).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(total_items(&ordered), 3);
        assert!(needs_pagination(total_items(&ordered), 2));
        assert!(!needs_pagination(total_items(&ordered), 3));
    }

    #[test]
    fn test_page_size_change_preserves_top_entry() {
        let raw = entries(337);
        let ordered = derive_filtered(&raw, &DivisionFilter::All);
        let sizes = [25usize, 50, 100];
        for &old_size in &sizes {
            for &new_size in &sizes {
                for old_page in 1..=20 {
                    let old_top = (old_page - 1) * old_size;
                    if old_top >= ordered.len() {
                        continue;
                    }
                    let new_page = page_for_new_size(old_page, old_size, new_size);
                    let new_top = (new_page - 1) * new_size;
                    let new_slice = &ordered[new_top..(new_top + new_size).min(ordered.len())];
                    assert!(
                        new_slice.iter().any(|e| e.id == ordered[old_top].id),
                        "entry {old_top} lost: page {old_page}x{old_size} -> {new_page}x{new_size}"
                    );
                    if new_size <= old_size && old_size % new_size == 0 {
                        assert_eq!(new_top, old_top);
                    }
                }
            }
        }
    }

    #[test]
    fn test_page_for_new_size_cases() {
        assert_eq!(page_for_new_size(3, 25, 50), 2);
        assert_eq!(page_for_new_size(2, 100, 25), 5);
        assert_eq!(page_for_new_size(1, 100, 25), 1);
        assert_eq!(page_for_new_size(4, 50, 0), 4);
    }

    #[test]
    fn test_visible_page_window() {
        assert_eq!(visible_page_window(1, 3, 9), 1..=3);
        assert_eq!(visible_page_window(1, 20, 9), 1..=9);
        assert_eq!(visible_page_window(10, 20, 9), 6..=14);
        assert_eq!(visible_page_window(20, 20, 9), 12..=20);
        assert_eq!(visible_page_window(50, 20, 9), 12..=20);
        assert!(visible_page_window(1, 0, 9).is_empty());
        assert_eq!(total_pages(120, 50), 3);
        assert_eq!(total_pages(0, 50), 0);
    }
}
