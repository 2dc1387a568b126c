//! The tabular data pipeline behind the history and preview screens:
//! filter by search term, sort by the selected column, slice out one page.
//!
//! The chain is pure: given the same records and the same query it always
//! produces the same view, and it never mutates the fetched records. The
//! whole view is recomputed on every input change; at the row counts these
//! screens see there is nothing to be gained from incremental updates.

use crate::models::transaction::TransactionRecord;

/// Sortable columns of the transaction history table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    User,
    Kind,
    Amount,
    Status,
    Date,
}

impl SortField {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "user" => Some(SortField::User),
            "type" | "kind" => Some(SortField::Kind),
            "amount" => Some(SortField::Amount),
            "status" => Some(SortField::Status),
            "date" => Some(SortField::Date),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Everything the user controls about the table view.
///
/// `current_page` may temporarily point past the end after a filter change;
/// it is clamped against the filtered row count when the view is built.
#[derive(Debug, Clone)]
pub struct TableQuery {
    pub search_term: String,
    pub sort_field: Option<SortField>,
    pub sort_order: SortOrder,
    pub current_page: usize,
    pub rows_per_page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort_field: None,
            sort_order: SortOrder::Asc,
            current_page: 1,
            rows_per_page: 10,
        }
    }
}

impl TableQuery {
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Column-header click: a repeated click on the active column flips the
    /// direction, a click on any other column selects it ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == Some(field) {
            self.sort_order = match self.sort_order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
        } else {
            self.sort_field = Some(field);
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Changing the page size always jumps back to the first page.
    pub fn set_rows_per_page(&mut self, rows: usize) {
        if rows > 0 {
            self.rows_per_page = rows;
            self.current_page = 1;
        }
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.current_page = (self.current_page + 1).min(total_pages.max(1));
    }

    pub fn last_page(&mut self, total_pages: usize) {
        self.current_page = total_pages.max(1);
    }

    pub fn jump_to(&mut self, page: usize, total_pages: usize) {
        self.current_page = clamp_page(page, total_pages);
    }
}

/// Pages needed for `count` rows. Zero rows means zero pages.
pub fn total_pages(count: usize, rows_per_page: usize) -> usize {
    (count + rows_per_page - 1) / rows_per_page
}

/// Clamp a requested page into `[1, total_pages]`; an empty collection pins
/// the cursor to page 1 (which then yields an empty slice, not an error).
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        1
    } else {
        requested.clamp(1, total_pages)
    }
}

/// Keep the records whose user name, type or status contains the search term
/// case-insensitively, or whose stringified amount contains it verbatim.
/// An empty term keeps everything.
pub fn filter<'a>(
    records: &'a [TransactionRecord],
    search_term: &str,
) -> Vec<&'a TransactionRecord> {
    if search_term.is_empty() {
        return records.iter().collect();
    }
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.user_name().to_lowercase().contains(&needle)
                || record.kind_raw().to_lowercase().contains(&needle)
                || record.status_raw().to_lowercase().contains(&needle)
                || record.amount_text().contains(search_term)
        })
        .collect()
}

/// Stable sort by the projected column value. No field selected means the
/// filter output order is kept as-is. Missing amounts compare as 0 and
/// missing dates as the epoch.
pub fn sort<'a>(
    mut rows: Vec<&'a TransactionRecord>,
    field: Option<SortField>,
    order: SortOrder,
) -> Vec<&'a TransactionRecord> {
    let Some(field) = field else {
        return rows;
    };
    rows.sort_by(|a, b| {
        let ordering = match field {
            SortField::User => a.user_name().cmp(b.user_name()),
            SortField::Kind => a.kind_raw().cmp(b.kind_raw()),
            SortField::Amount => a.amount().total_cmp(&b.amount()),
            SortField::Status => a.status_raw().cmp(b.status_raw()),
            SortField::Date => a.created_at().cmp(&b.created_at()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    rows
}

/// One page window out of `items`, at most `rows_per_page` long. The page is
/// clamped, so an out-of-range request returns the last page rather than
/// panicking.
pub fn paginate<T>(items: &[T], current_page: usize, rows_per_page: usize) -> &[T] {
    let page = clamp_page(current_page, total_pages(items.len(), rows_per_page));
    let start = (page - 1) * rows_per_page;
    let end = (start + rows_per_page).min(items.len());
    &items[start..end]
}

/// Sum over the raw, unfiltered records. The header card shows this figure
/// regardless of the active search, sort or page.
pub fn total_amount(records: &[TransactionRecord]) -> f64 {
    records.iter().map(|record| record.amount()).sum()
}

/// The fully derived state one render of the table needs.
#[derive(Debug, Clone)]
pub struct TableView {
    pub rows: Vec<TransactionRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub start_index: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub total_amount: f64,
}

impl TableView {
    pub fn build(records: &[TransactionRecord], query: &TableQuery) -> Self {
        let filtered = sort(
            filter(records, &query.search_term),
            query.sort_field,
            query.sort_order,
        );
        let pages = total_pages(filtered.len(), query.rows_per_page);
        let page = clamp_page(query.current_page, pages);
        let rows: Vec<TransactionRecord> = paginate(&filtered, page, query.rows_per_page)
            .iter()
            .map(|record| (*record).clone())
            .collect();

        Self {
            rows,
            page,
            total_pages: pages,
            start_index: (page - 1) * query.rows_per_page,
            filtered_count: filtered.len(),
            total_count: records.len(),
            total_amount: total_amount(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        name: &str,
        kind: &str,
        amount: f64,
        status: &str,
        created_at: &str,
    ) -> TransactionRecord {
        TransactionRecord {
            id: Some(format!("{}-{}", name, amount)),
            user: Some(crate::models::transaction::RecordUser {
                id: Some("u1".to_string()),
                name: Some(name.to_string()),
            }),
            kind: Some(kind.to_string()),
            amount: Some(amount),
            from_wallet: Some("depositWallet".to_string()),
            to_wallet: Some("topupWallet".to_string()),
            status: Some(status.to_string()),
            created_at: Some(created_at.to_string()),
        }
    }

    fn sample() -> Vec<TransactionRecord> {
        vec![
            record("Alice", "topup", 100.0, "completed", "2024-01-01T00:00:00Z"),
            record("Bob", "withdrawal", 50.0, "pending", "2024-01-02T00:00:00Z"),
            record("Carol", "transfer", 75.5, "failed", "2024-01-03T00:00:00Z"),
            record("Dave", "topup", 100.0, "Pending", "2024-01-04T00:00:00Z"),
        ]
    }

    #[test]
    fn empty_term_keeps_everything() {
        let records = sample();
        assert_eq!(filter(&records, "").len(), records.len());
    }

    #[test]
    fn filter_is_idempotent() {
        let records = sample();
        let once: Vec<TransactionRecord> = filter(&records, "top")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter(&once, "top");
        assert_eq!(twice.len(), once.len());
        for (a, b) in twice.iter().zip(once.iter()) {
            assert_eq!(a.id(), b.id());
        }
    }

    #[test]
    fn status_search_is_case_insensitive() {
        let records = sample();
        let hits = filter(&records, "pending");
        assert_eq!(hits.len(), 2);
        assert!(hits
            .iter()
            .all(|r| r.status_raw().to_lowercase().contains("pending")));
    }

    #[test]
    fn amount_search_matches_stringified_value() {
        let records = sample();
        let hits = filter(&records, "75.5");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].user_name(), "Carol");
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let records = sample();
        let sorted = sort(
            records.iter().collect(),
            Some(SortField::Amount),
            SortOrder::Asc,
        );
        // Alice and Dave both carry 100.0 and must keep their input order.
        let names: Vec<&str> = sorted.iter().map(|r| r.user_name()).collect();
        assert_eq!(names, vec!["Bob", "Carol", "Alice", "Dave"]);
    }

    #[test]
    fn no_sort_field_keeps_filter_order() {
        let records = sample();
        let rows = sort(records.iter().collect(), None, SortOrder::Desc);
        let names: Vec<&str> = rows.iter().map(|r| r.user_name()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol", "Dave"]);
    }

    #[test]
    fn double_toggle_reverses_strict_groups_and_restores_ties() {
        let records = sample();
        let mut query = TableQuery::default();
        query.toggle_sort(SortField::Amount);
        let asc: Vec<String> = sort(records.iter().collect(), query.sort_field, query.sort_order)
            .iter()
            .map(|r| r.id().to_string())
            .collect();

        query.toggle_sort(SortField::Amount);
        assert_eq!(query.sort_order, SortOrder::Desc);
        let desc: Vec<String> = sort(records.iter().collect(), query.sort_field, query.sort_order)
            .iter()
            .map(|r| r.id().to_string())
            .collect();

        // Equal-amount group (Alice, Dave) keeps its relative order in both
        // directions; the strictly ordered amounts reverse.
        assert_eq!(asc, vec!["Bob-50", "Carol-75.5", "Alice-100", "Dave-100"]);
        assert_eq!(desc, vec!["Alice-100", "Dave-100", "Carol-75.5", "Bob-50"]);
    }

    #[test]
    fn missing_values_sort_with_defaults() {
        let mut records = sample();
        records.push(TransactionRecord::default());
        let by_amount = sort(
            records.iter().collect(),
            Some(SortField::Amount),
            SortOrder::Asc,
        );
        assert_eq!(by_amount[0].amount(), 0.0);

        let by_date = sort(
            records.iter().collect(),
            Some(SortField::Date),
            SortOrder::Asc,
        );
        assert_eq!(by_date[0].created_at().timestamp(), 0);
    }

    #[test]
    fn twenty_three_rows_make_three_pages_and_clamp() {
        let records: Vec<TransactionRecord> = (0..23)
            .map(|i| record("User", "topup", i as f64, "completed", "2024-01-01T00:00:00Z"))
            .collect();
        let mut query = TableQuery::default();
        assert_eq!(total_pages(records.len(), query.rows_per_page), 3);

        query.jump_to(5, 3);
        assert_eq!(query.current_page, 3);

        let view = TableView::build(&records, &query);
        assert_eq!(view.page, 3);
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.start_index, 20);
    }

    #[test]
    fn page_slice_never_exceeds_rows_per_page() {
        let records = sample();
        let filtered = filter(&records, "");
        assert_eq!(paginate(&filtered, 1, 3).len(), 3);
        assert_eq!(paginate(&filtered, 2, 3).len(), 1);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn empty_collection_yields_empty_page_without_error() {
        let records: Vec<TransactionRecord> = Vec::new();
        let mut query = TableQuery::default();
        query.next_page(0);
        query.last_page(0);
        assert_eq!(query.current_page, 1);

        let view = TableView::build(&records, &query);
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn changing_rows_per_page_resets_to_first_page() {
        let mut query = TableQuery {
            current_page: 3,
            ..TableQuery::default()
        };
        query.set_rows_per_page(25);
        assert_eq!(query.current_page, 1);
        assert_eq!(query.rows_per_page, 25);

        // A zero page size is ignored rather than dividing by zero later.
        query.set_rows_per_page(0);
        assert_eq!(query.rows_per_page, 25);
    }

    #[test]
    fn navigation_is_clamped() {
        let mut query = TableQuery::default();
        query.prev_page();
        assert_eq!(query.current_page, 1);
        query.next_page(3);
        query.next_page(3);
        query.next_page(3);
        query.next_page(3);
        assert_eq!(query.current_page, 3);
        query.first_page();
        assert_eq!(query.current_page, 1);
    }

    #[test]
    fn total_amount_ignores_search_sort_and_page() {
        let records = sample();
        let expected = 100.0 + 50.0 + 75.5 + 100.0;

        let mut query = TableQuery::default();
        assert_eq!(TableView::build(&records, &query).total_amount, expected);

        query.set_search("pending");
        query.toggle_sort(SortField::Amount);
        query.jump_to(2, 1);
        let view = TableView::build(&records, &query);
        assert_eq!(view.total_amount, expected);
        assert_eq!(view.filtered_count, 2);
    }

    #[test]
    fn filter_does_not_mutate_records() {
        let records = sample();
        let before: Vec<String> = records.iter().map(|r| r.id().to_string()).collect();
        let _ = filter(&records, "pending");
        let _ = sort(
            filter(&records, ""),
            Some(SortField::User),
            SortOrder::Desc,
        );
        let after: Vec<String> = records.iter().map(|r| r.id().to_string()).collect();
        assert_eq!(before, after);
    }
}
