//! List query parameters.
//!
//! Every list operation accepts the same four independent parameters:
//! a page size, an offset, a filter expression and an order expression.
//! The filter and order expressions use the API's query language and are
//! passed through verbatim.
//!
//! # Example
//!
//! ```rust
//! use tactill::rest::{query_filter, ListParams, QueryOperator};
//!
//! let params = ListParams::new()
//!     .limit(20)
//!     .skip(40)
//!     .filter(query_filter("name", &["Coca", "Fanta"], QueryOperator::In))
//!     .order("name=ASC&created_at=DESC");
//!
//! assert_eq!(params.get_limit(), 20);
//! assert_eq!(params.get_filter(), Some("name[in]=Coca&name[in]=Fanta"));
//! ```

use std::fmt;

use crate::config::TactillId;

/// Default page size of list operations.
pub const DEFAULT_LIMIT: u32 = 100;

/// Parameters accepted by every list operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    limit: u32,
    skip: u32,
    filter: Option<String>,
    order: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: 0,
            filter: None,
            order: None,
        }
    }
}

impl ListParams {
    /// Creates parameters with the default page size and no offset,
    /// filter or order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the offset into the result set.
    #[must_use]
    pub const fn skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the filter expression, e.g. `name=Coca`.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the order expression, e.g. `name=ASC&rate=DESC`.
    #[must_use]
    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Returns the page size.
    #[must_use]
    pub const fn get_limit(&self) -> u32 {
        self.limit
    }

    /// Returns the offset.
    #[must_use]
    pub const fn get_skip(&self) -> u32 {
        self.skip
    }

    /// Returns the filter expression, if set.
    #[must_use]
    pub fn get_filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Returns the order expression, if set.
    #[must_use]
    pub fn get_order(&self) -> Option<&str> {
        self.order.as_deref()
    }

    /// Builds the query string pairs for a list call.
    ///
    /// The scope pair always comes first, followed by `limit`. `skip` is
    /// only present when non-zero; `filter` and `order` only when set and
    /// not empty.
    #[must_use]
    pub fn to_query(&self, scope_key: &str, scope_id: &TactillId) -> Vec<(String, String)> {
        let mut query = vec![
            (scope_key.to_string(), scope_id.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];

        if self.skip != 0 {
            query.push(("skip".to_string(), self.skip.to_string()));
        }
        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            query.push(("filter".to_string(), filter.to_string()));
        }
        if let Some(order) = self.order.as_deref().filter(|o| !o.is_empty()) {
            query.push(("order".to_string(), order.to_string()));
        }

        query
    }
}

/// Set operator used when a filter matches several values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryOperator {
    /// The field equals one of the values.
    In,
    /// The field equals none of the values.
    Nin,
}

impl fmt::Display for QueryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Nin => write!(f, "nin"),
        }
    }
}

/// Builds a filter expression matching `field` against `values`.
///
/// A single value yields `field=value`. Several values yield one
/// `field[op]=value` term per value, joined with `&`.
///
/// ```rust
/// use tactill::rest::{query_filter, QueryOperator};
///
/// assert_eq!(query_filter("name", &["Coca"], QueryOperator::In), "name=Coca");
/// assert_eq!(
///     query_filter("rate", &["5.5", "20"], QueryOperator::Nin),
///     "rate[nin]=5.5&rate[nin]=20"
/// );
/// ```
#[must_use]
pub fn query_filter<S: AsRef<str>>(field: &str, values: &[S], operator: QueryOperator) -> String {
    let marker = if values.len() == 1 {
        String::new()
    } else {
        format!("[{operator}]")
    };

    values
        .iter()
        .map(|value| format!("{field}{marker}={}", value.as_ref()))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> TactillId {
        TactillId::new("5d70d4e5be8f9f001195ccc1").unwrap()
    }

    fn keys(query: &[(String, String)]) -> Vec<&str> {
        query.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_default_query_has_scope_and_limit_only() {
        let query = ListParams::new().to_query("node_id", &scope());

        assert_eq!(
            query,
            vec![
                ("node_id".to_string(), "5d70d4e5be8f9f001195ccc1".to_string()),
                ("limit".to_string(), "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_skip_is_omitted() {
        let query = ListParams::new().skip(0).limit(5).to_query("shop_id", &scope());
        assert_eq!(keys(&query), vec!["shop_id", "limit"]);
    }

    #[test]
    fn test_all_parameters_in_order() {
        let query = ListParams::new()
            .limit(10)
            .skip(3)
            .filter("name=Coca")
            .order("name=ASC")
            .to_query("company_id", &scope());

        assert_eq!(
            keys(&query),
            vec!["company_id", "limit", "skip", "filter", "order"]
        );
        assert_eq!(query[2].1, "3");
        assert_eq!(query[3].1, "name=Coca");
        assert_eq!(query[4].1, "name=ASC");
    }

    #[test]
    fn test_empty_filter_and_order_are_omitted() {
        let query = ListParams::new()
            .filter("")
            .order("")
            .to_query("node_id", &scope());
        assert_eq!(keys(&query), vec!["node_id", "limit"]);
    }

    #[test]
    fn test_query_filter_single_value() {
        assert_eq!(
            query_filter("category_id", &["5d70d4e5be8f9f001195ccc1"], QueryOperator::In),
            "category_id=5d70d4e5be8f9f001195ccc1"
        );
    }

    #[test]
    fn test_query_filter_multiple_values() {
        let values = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(
            query_filter("name", &values, QueryOperator::In),
            "name[in]=a&name[in]=b&name[in]=c"
        );
        assert_eq!(
            query_filter("name", &values, QueryOperator::Nin),
            "name[nin]=a&name[nin]=b&name[nin]=c"
        );
    }

    #[test]
    fn test_query_filter_no_values_is_empty() {
        let values: [&str; 0] = [];
        assert_eq!(query_filter("name", &values, QueryOperator::In), "");
    }
}
