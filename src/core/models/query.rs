//! Task and project queries

/// Paging and filtering options mapped to the API's OData parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// `$top`: maximum number of records
    pub top: Option<u32>,
    /// `$skip`: number of records to skip
    pub skip: Option<u32>,
    /// `$filter`: OData filter expression
    pub filter: Option<String>,
    /// `$select`: comma-separated field list
    pub select: Option<String>,
    /// `$orderby`: sort expression
    pub orderby: Option<String>,
}

impl TaskQuery {
    /// Query returning at most `top` records
    #[must_use]
    pub fn top(top: u32) -> Self {
        Self {
            top: Some(top),
            ..Self::default()
        }
    }

    /// Query with a filter expression
    #[must_use]
    pub fn filtered(filter: impl Into<String>) -> Self {
        Self {
            filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Render as `(name, value)` query parameters, skipping unset options
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(top) = self.top {
            params.push(("$top", top.to_string()));
        }
        if let Some(skip) = self.skip {
            params.push(("$skip", skip.to_string()));
        }
        if let Some(filter) = &self.filter {
            params.push(("$filter", filter.clone()));
        }
        if let Some(select) = &self.select {
            params.push(("$select", select.clone()));
        }
        if let Some(orderby) = &self.orderby {
            params.push(("$orderby", orderby.clone()));
        }
        params
    }
}
