use crate::document::collation::collate;
use crate::document::DocumentEntry;

use super::SortOption;

/// Case-insensitive substring match against the display name.
/// An empty query matches everything.
pub fn matches_query(entry: &DocumentEntry, query: &str) -> bool {
    query.is_empty()
        || entry
            .display_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
}

/// Derives the displayed list from the raw listing.
///
/// Filters by `query`, then sorts by `sort`. `sort_by` is stable, so entries
/// with equal keys keep their relative order from `raw`. Descending orders
/// flip the comparator rather than reversing the output for the same reason.
pub fn compute_displayed(
    raw: &[DocumentEntry],
    query: &str,
    sort: SortOption,
) -> Vec<DocumentEntry> {
    let mut filtered: Vec<DocumentEntry> = raw
        .iter()
        .filter(|entry| matches_query(entry, query))
        .cloned()
        .collect();

    match sort {
        SortOption::None => {}
        SortOption::NameAscending => {
            filtered.sort_by(|a, b| collate(a.display_name(), b.display_name()))
        }
        SortOption::NameDescending => {
            filtered.sort_by(|a, b| collate(b.display_name(), a.display_name()))
        }
        SortOption::DateNewest => filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOption::DateOldest => filtered.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::StorageKey;
    use chrono::{TimeZone, Utc};

    fn entry(key: &str, created_ms: i64) -> DocumentEntry {
        DocumentEntry::new(
            StorageKey::from(key),
            Utc.timestamp_millis_opt(created_ms).unwrap(),
        )
    }

    fn keys(entries: &[DocumentEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.storage_key.as_str()).collect()
    }

    #[test]
    fn query_matches_case_insensitive_substring() {
        let report = entry("1700000000000-Report.pdf", 1);
        assert!(matches_query(&report, "rep"));
        assert!(matches_query(&report, "PORT"));
        assert!(matches_query(&report, ""));
        assert!(!matches_query(&report, "invoice"));
    }

    #[test]
    fn query_does_not_match_timestamp_prefix() {
        let report = entry("1700000000000-Report.pdf", 1);
        assert!(!matches_query(&report, "1700"));
    }

    #[test]
    fn filter_keeps_raw_order_without_sort() {
        let raw = vec![
            entry("3-zeta.pdf", 3),
            entry("1-alpha.pdf", 1),
            entry("2-beta.txt", 2),
        ];
        let shown = compute_displayed(&raw, ".pdf", SortOption::None);
        assert_eq!(keys(&shown), vec!["3-zeta.pdf", "1-alpha.pdf"]);
    }

    #[test]
    fn displayed_entries_are_exactly_the_matching_ones() {
        let raw = vec![
            entry("1-Report.pdf", 1),
            entry("2-notes.txt", 2),
            entry("3-REPORT-final.docx", 3),
            entry("4-1700.pdf", 4),
        ];
        for query in ["", "rep", "REPORT", ".pdf", "17", "missing"] {
            let expected: Vec<&str> = raw
                .iter()
                .filter(|e| matches_query(e, query))
                .map(|e| e.storage_key.as_str())
                .collect();
            let shown = compute_displayed(&raw, query, SortOption::None);
            assert_eq!(keys(&shown), expected, "query {query:?}");
        }
    }

    #[test]
    fn date_newest_orders_descending() {
        let raw = vec![entry("t1", 100), entry("t2", 300), entry("t3", 200)];
        let shown = compute_displayed(&raw, "", SortOption::DateNewest);
        assert_eq!(keys(&shown), vec!["t2", "t3", "t1"]);
    }

    #[test]
    fn date_oldest_orders_ascending() {
        let raw = vec![entry("t1", 100), entry("t2", 300), entry("t3", 200)];
        let shown = compute_displayed(&raw, "", SortOption::DateOldest);
        assert_eq!(keys(&shown), vec!["t1", "t3", "t2"]);
    }

    #[test]
    fn name_sort_uses_display_name_not_key() {
        // Key order is the reverse of display-name order.
        let raw = vec![entry("1-zebra.pdf", 1), entry("2-apple.pdf", 2)];
        let shown = compute_displayed(&raw, "", SortOption::NameAscending);
        assert_eq!(keys(&shown), vec!["2-apple.pdf", "1-zebra.pdf"]);
    }

    #[test]
    fn name_ascending_is_stable_and_idempotent() {
        let raw = vec![
            entry("300-same.pdf", 3),
            entry("100-b.pdf", 1),
            entry("200-same.pdf", 2),
            entry("400-a.pdf", 4),
        ];
        let once = compute_displayed(&raw, "", SortOption::NameAscending);
        assert_eq!(
            keys(&once),
            vec!["400-a.pdf", "100-b.pdf", "300-same.pdf", "200-same.pdf"]
        );

        let twice = compute_displayed(&once, "", SortOption::NameAscending);
        assert_eq!(once, twice);
    }

    #[test]
    fn name_descending_keeps_ties_in_raw_order() {
        let raw = vec![
            entry("300-same.pdf", 3),
            entry("100-b.pdf", 1),
            entry("200-same.pdf", 2),
        ];
        let shown = compute_displayed(&raw, "", SortOption::NameDescending);
        assert_eq!(keys(&shown), vec!["300-same.pdf", "200-same.pdf", "100-b.pdf"]);
    }

    #[test]
    fn equal_dates_keep_raw_order() {
        let raw = vec![entry("b", 5), entry("a", 5), entry("c", 9)];
        let shown = compute_displayed(&raw, "", SortOption::DateNewest);
        assert_eq!(keys(&shown), vec!["c", "b", "a"]);
    }

    #[test]
    fn empty_listing_yields_empty_view() {
        assert!(compute_displayed(&[], "x", SortOption::NameAscending).is_empty());
    }
}
