//! Search filters
//!
//! Filters within a group combine with OR; groups combine with AND. That is
//! the only boolean algebra the platform's search grammar offers.

/// Comparison operator understood by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionType {
    Eq,
    Neq,
    Like,
    In,
    Nin,
    Gt,
    Gteq,
    Lt,
    Lteq,
    From,
    To,
    Finset,
    Null,
    NotNull,
    /// Any other condition type the platform accepts.
    Raw(String),
}

impl ConditionType {
    /// Wire name of the operator.
    pub fn as_str(&self) -> &str {
        match self {
            ConditionType::Eq => "eq",
            ConditionType::Neq => "neq",
            ConditionType::Like => "like",
            ConditionType::In => "in",
            ConditionType::Nin => "nin",
            ConditionType::Gt => "gt",
            ConditionType::Gteq => "gteq",
            ConditionType::Lt => "lt",
            ConditionType::Lteq => "lteq",
            ConditionType::From => "from",
            ConditionType::To => "to",
            ConditionType::Finset => "finset",
            ConditionType::Null => "null",
            ConditionType::NotNull => "notnull",
            ConditionType::Raw(s) => s,
        }
    }
}

/// Value side of a filter condition.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
}

impl FilterValue {
    /// Render the value as the platform expects it in a query string.
    pub fn to_query_value(&self) -> String {
        match self {
            FilterValue::String(s) => s.clone(),
            FilterValue::Integer(i) => i.to_string(),
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Boolean(b) => if *b { "1" } else { "0" }.to_string(),
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Integer(value as i64)
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Integer(value as i64)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

/// One (field, value, condition) triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: FilterValue,
    pub condition: ConditionType,
}

impl Filter {
    pub fn new(
        field: impl Into<String>,
        value: impl Into<FilterValue>,
        condition: ConditionType,
    ) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            condition,
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::Eq)
    }

    pub fn neq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::Neq)
    }

    pub fn like(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::Like)
    }

    pub fn is_in(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::In)
    }

    pub fn not_in(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::Nin)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::Gt)
    }

    pub fn gteq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::Gteq)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::Lt)
    }

    pub fn lteq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(field, value, ConditionType::Lteq)
    }
}

/// Ordered set of filters combined with OR.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterGroup {
    filters: Vec<Filter>,
}

impl FilterGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl From<Filter> for FilterGroup {
    fn from(filter: Filter) -> Self {
        Self {
            filters: vec![filter],
        }
    }
}

impl From<Vec<Filter>> for FilterGroup {
    fn from(filters: Vec<Filter>) -> Self {
        Self { filters }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_wire_names() {
        assert_eq!(ConditionType::Eq.as_str(), "eq");
        assert_eq!(ConditionType::Gteq.as_str(), "gteq");
        assert_eq!(ConditionType::NotNull.as_str(), "notnull");
        assert_eq!(ConditionType::Raw("moreq".into()).as_str(), "moreq");
    }

    #[test]
    fn test_filter_constructors() {
        let filter = Filter::eq("type_id", "simple");
        assert_eq!(filter.field, "type_id");
        assert_eq!(filter.value, FilterValue::String("simple".into()));
        assert_eq!(filter.condition, ConditionType::Eq);

        let filter = Filter::gt("visibility", 1);
        assert_eq!(filter.value, FilterValue::Integer(1));
        assert_eq!(filter.condition, ConditionType::Gt);
    }

    #[test]
    fn test_value_rendering() {
        assert_eq!(FilterValue::from("simple").to_query_value(), "simple");
        assert_eq!(FilterValue::from(42).to_query_value(), "42");
        assert_eq!(FilterValue::from(true).to_query_value(), "1");
        assert_eq!(FilterValue::from(false).to_query_value(), "0");
    }

    #[test]
    fn test_group_building() {
        let group = FilterGroup::new()
            .with(Filter::eq("status", 1))
            .with(Filter::eq("status", 2));
        assert_eq!(group.filters().len(), 2);

        let from_vec: FilterGroup = vec![Filter::eq("sku", "a")].into();
        assert_eq!(from_vec.filters().len(), 1);
    }
}
