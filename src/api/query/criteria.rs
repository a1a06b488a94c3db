//! Search criteria and the platform's indexed query-string grammar
//!
//! The grammar indexes filter groups and filters numerically:
//! `searchCriteria[filterGroups][g][filters][i][field]=...` and so on.
//! Rendering is a pure function of the criteria, so the same input always
//! produces the same string.

use super::super::error::{Error, Result};
use super::builder::SearchCriteriaBuilder;
use super::filters::FilterGroup;
use super::orderby::SortOrder;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub filter_groups: Vec<FilterGroup>,
    pub sort_order: Option<SortOrder>,
    /// 1-based page number.
    pub page: u32,
    pub page_size: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            filter_groups: Vec::new(),
            sort_order: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> SearchCriteriaBuilder {
        SearchCriteriaBuilder::new()
    }

    /// Validate and render the canonical query string.
    ///
    /// Emission order is fixed: filter groups in insertion order, then the
    /// sort order, then pagination. Values are percent-encoded.
    pub fn to_query_string(&self) -> Result<String> {
        self.validate()?;

        let mut parts = Vec::new();

        for (g, group) in self.filter_groups.iter().enumerate() {
            for (i, filter) in group.filters().iter().enumerate() {
                let prefix = format!("searchCriteria[filterGroups][{g}][filters][{i}]");
                parts.push(format!(
                    "{prefix}[field]={}",
                    urlencoding::encode(&filter.field)
                ));
                parts.push(format!(
                    "{prefix}[value]={}",
                    urlencoding::encode(&filter.value.to_query_value())
                ));
                parts.push(format!(
                    "{prefix}[condition_type]={}",
                    urlencoding::encode(filter.condition.as_str())
                ));
            }
        }

        if let Some(sort) = &self.sort_order {
            parts.push(format!(
                "searchCriteria[sortOrders][0][field]={}",
                urlencoding::encode(&sort.field)
            ));
            parts.push(format!(
                "searchCriteria[sortOrders][0][direction]={}",
                urlencoding::encode(&sort.direction)
            ));
        }

        parts.push(format!("searchCriteria[currentPage]={}", self.page));
        parts.push(format!("searchCriteria[pageSize]={}", self.page_size));

        Ok(parts.join("&"))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.page < 1 {
            return Err(Error::InvalidArgument("page numbering starts at 1".into()));
        }
        if self.page_size == 0 {
            return Err(Error::InvalidArgument(
                "page size must be greater than zero".into(),
            ));
        }
        if let Some(sort) = &self.sort_order {
            sort.validate()?;
        }
        Ok(())
    }
}
