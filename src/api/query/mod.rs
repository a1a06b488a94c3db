//! Structured search queries
//!
//! Builds the platform's `searchCriteria` query-string grammar from typed
//! filter groups, an optional sort order, and pagination.

pub mod builder;
pub mod criteria;
pub mod filters;
pub mod orderby;

pub use builder::SearchCriteriaBuilder;
pub use criteria::SearchCriteria;
pub use filters::{ConditionType, Filter, FilterGroup, FilterValue};
pub use orderby::SortOrder;
