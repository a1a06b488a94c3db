//! Sort order for search queries

use super::super::error::{Error, Result};

/// Field and direction for the platform's `sortOrders` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: String,
}

impl SortOrder {
    pub fn new(field: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: direction.into(),
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, "ASC")
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, "DESC")
    }

    /// The platform requires both components; an empty field or direction is
    /// rejected here, before any network call.
    pub fn validate(&self) -> Result<()> {
        if self.field.trim().is_empty() || self.direction.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "sort order requires both a field and a direction".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions() {
        assert_eq!(SortOrder::asc("created_at").direction, "ASC");
        assert_eq!(SortOrder::desc("created_at").direction, "DESC");
    }

    #[test]
    fn test_missing_component_is_invalid() {
        assert!(SortOrder::new("", "ASC").validate().is_err());
        assert!(SortOrder::new("created_at", "").validate().is_err());
        assert!(SortOrder::new("  ", "ASC").validate().is_err());
        assert!(SortOrder::new("created_at", "ASC").validate().is_ok());
    }
}
