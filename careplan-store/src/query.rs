//! Resource paths in the store's REST filter syntax.

/// Sort instruction for a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub field: String,
    pub descending: bool,
}

/// A resource name plus equality filters, column selection, ordering and limit.
///
/// Rendered as `resource?field=eq.value&select=...&order=field.desc&limit=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    resource: String,
    filters: Vec<(String, String)>,
    select: Option<String>,
    order: Option<Order>,
    limit: Option<usize>,
}

impl ResourceQuery {
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            filters: Vec::new(),
            select: None,
            order: None,
            limit: None,
        }
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((field.into(), value.to_string()));
        self
    }

    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = Some(columns.into());
        self
    }

    pub fn order_asc(mut self, field: impl Into<String>) -> Self {
        self.order = Some(Order {
            field: field.into(),
            descending: false,
        });
        self
    }

    pub fn order_desc(mut self, field: impl Into<String>) -> Self {
        self.order = Some(Order {
            field: field.into(),
            descending: true,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn ordering(&self) -> Option<&Order> {
        self.order.as_ref()
    }

    pub fn max_rows(&self) -> Option<usize> {
        self.limit
    }

    /// Path relative to the REST root, e.g. `rc_care_plans?id=eq.42`.
    pub fn to_path(&self) -> String {
        let mut params: Vec<String> = self
            .filters
            .iter()
            .map(|(field, value)| format!("{field}=eq.{}", urlencoding::encode(value)))
            .collect();

        if let Some(select) = &self.select {
            params.push(format!("select={select}"));
        }
        if let Some(order) = &self.order {
            if order.descending {
                params.push(format!("order={}.desc", order.field));
            } else {
                params.push(format!("order={}", order.field));
            }
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }

        if params.is_empty() {
            self.resource.clone()
        } else {
            format!("{}?{}", self.resource, params.join("&"))
        }
    }
}
