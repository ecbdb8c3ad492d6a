// wealthscope-core/src/application/table.rs

use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::query::{DEFAULT_PAGE_SIZE, FilterCriteria, Page, SortConfig, paginate};
use crate::domain::record::{BillionaireRecord, RecordField};

/// State behind the records table: active filters, sort order and page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    criteria: FilterCriteria,
    sort: SortConfig,
    page: usize,
    page_size: usize,
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort: SortConfig::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replaces the filters and goes back to page 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> Result<(), DomainError> {
        criteria.validate()?;
        debug!(active = criteria.active_count(), "Filters changed");
        self.criteria = criteria;
        self.page = 1;
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.page = 1;
    }

    /// Same field flips the direction, another field starts ascending.
    pub fn toggle_sort(&mut self, field: RecordField) {
        self.sort = self.sort.toggle(field);
    }

    pub fn set_sort(&mut self, sort: SortConfig) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Filtered then sorted, before pagination.
    pub fn filtered<'a>(&self, records: &'a [BillionaireRecord]) -> Vec<&'a BillionaireRecord> {
        let mut rows = self.criteria.apply(records);
        self.sort.sort(&mut rows);
        rows
    }

    /// The current page of the filtered, sorted records.
    pub fn view<'a>(&self, records: &'a [BillionaireRecord]) -> Page<&'a BillionaireRecord> {
        paginate(&self.filtered(records), self.page, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::SortDirection;
    use crate::domain::record::RecordFields;

    fn records(n: u32) -> Vec<BillionaireRecord> {
        (1..=n)
            .map(|i| {
                BillionaireRecord::new(
                    RecordFields {
                        rank: i,
                        name: format!("Person {i}"),
                        net_worth: format!("${}.0 B", 200 - i),
                        age: 30 + i % 40,
                        country: if i % 2 == 0 { "India" } else { "Japan" }.into(),
                        source: "Steel".into(),
                        ..Default::default()
                    },
                    vec![],
                )
            })
            .collect()
    }

    #[test]
    fn test_default_view_is_first_page_by_rank() {
        let data = records(120);
        let page = TableView::default().view(&data);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items[0].rank(), 1);
    }

    #[test]
    fn test_changing_criteria_resets_page() -> anyhow::Result<()> {
        let data = records(120);
        let mut table = TableView::default();
        table.set_page(3);
        assert_eq!(table.view(&data).items.len(), 20);

        table.set_criteria(FilterCriteria {
            countries: vec!["India".into()],
            ..Default::default()
        })?;
        assert_eq!(table.page(), 1);
        let page = table.view(&data);
        assert_eq!(page.total_records, 60);
        assert!(page.items.iter().all(|r| r.country() == "India"));
        Ok(())
    }

    #[test]
    fn test_inverted_range_is_rejected_and_state_kept() {
        let mut table = TableView::default();
        table.set_page(2);
        let result = table.set_criteria(FilterCriteria {
            age_range: Some((60, 20)),
            ..Default::default()
        });
        assert!(result.is_err());
        assert_eq!(table.page(), 2);
        assert!(table.criteria().is_empty());
    }

    #[test]
    fn test_toggle_sort() {
        let data = records(10);
        let mut table = TableView::default();

        table.toggle_sort(RecordField::Rank);
        assert_eq!(table.sort().direction, SortDirection::Desc);
        assert_eq!(table.view(&data).items[0].rank(), 10);

        table.toggle_sort(RecordField::NetWorth);
        assert_eq!(table.sort(), SortConfig::new(RecordField::NetWorth, SortDirection::Asc));
        // Lowest net worth is the highest rank here
        assert_eq!(table.view(&data).items[0].rank(), 10);
    }

    #[test]
    fn test_pages_cover_filtered_set_once() {
        let data = records(123);
        let mut table = TableView::new(20);
        let total = table.view(&data).total_pages;

        let mut seen = Vec::new();
        for page in 1..=total {
            table.set_page(page);
            seen.extend(table.view(&data).items.iter().map(|r| r.rank()));
        }
        let expected: Vec<u32> = table.filtered(&data).iter().map(|r| r.rank()).collect();
        assert_eq!(seen, expected);
    }
}
