//! Fluent construction of search criteria

use super::super::error::Result;
use super::criteria::SearchCriteria;
use super::filters::{Filter, FilterGroup};
use super::orderby::SortOrder;

#[derive(Debug, Clone, Default)]
pub struct SearchCriteriaBuilder {
    criteria: SearchCriteria,
}

impl SearchCriteriaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group of OR-combined filters; groups combine with AND.
    pub fn filter_group(mut self, group: impl Into<FilterGroup>) -> Self {
        self.criteria.filter_groups.push(group.into());
        self
    }

    /// Add a single-filter group.
    pub fn filter(self, filter: Filter) -> Self {
        self.filter_group(filter)
    }

    pub fn sort(mut self, sort_order: SortOrder) -> Self {
        self.criteria.sort_order = Some(sort_order);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.criteria.page = page;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.criteria.page_size = page_size;
        self
    }

    /// Validate and return the criteria; malformed input fails here, before
    /// any network call.
    pub fn build(self) -> Result<SearchCriteria> {
        self.criteria.validate()?;
        Ok(self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::Error;

    #[test]
    fn test_fluent_building() {
        let criteria = SearchCriteriaBuilder::new()
            .filter_group(vec![Filter::eq("is_active", 1)])
            .filter(Filter::eq("store_id", 0))
            .sort(SortOrder::asc("identifier"))
            .page(2)
            .page_size(10)
            .build()
            .unwrap();

        assert_eq!(criteria.filter_groups.len(), 2);
        assert_eq!(criteria.page, 2);
        assert_eq!(criteria.page_size, 10);
        assert!(criteria.sort_order.is_some());
    }

    #[test]
    fn test_defaults() {
        let criteria = SearchCriteriaBuilder::new().build().unwrap();
        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.page_size, 100);
        assert!(criteria.filter_groups.is_empty());
    }

    #[test]
    fn test_build_rejects_incomplete_sort() {
        let result = SearchCriteriaBuilder::new()
            .sort(SortOrder::new("created_at", ""))
            .build();
        assert!(matches!(result.unwrap_err(), Error::InvalidArgument(_)));
    }

    #[test]
    fn test_build_rejects_zero_page() {
        let result = SearchCriteriaBuilder::new().page(0).build();
        assert!(result.is_err());
    }
}
