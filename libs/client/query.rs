use reqwest::header::CONTENT_RANGE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Client;
use crate::error::{ClientError, ClientResult};
use crate::filter::{Filter, Order};

/// The accumulated shape of one query, independent of any transport.
#[derive(Debug, Default, Clone)]
pub(crate) struct QuerySpec {
    pub(crate) select: Option<String>,
    pub(crate) filters: Vec<Filter>,
    pub(crate) order: Option<(String, Order)>,
    pub(crate) limit: Option<u64>,
}

impl QuerySpec {
    /// Render the full query string for a read.
    pub(crate) fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![(
            "select".to_string(),
            self.select.clone().unwrap_or_else(|| "*".to_string()),
        )];
        pairs.extend(self.filter_pairs());

        if let Some((column, order)) = &self.order {
            pairs.push(("order".to_string(), format!("{column}.{}", order.as_str())));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }

    /// Render only the row predicates, as used by writes.
    pub(crate) fn filter_pairs(&self) -> Vec<(String, String)> {
        self.filters.iter().map(Filter::to_query_pair).collect()
    }
}

/// Builder for one request against a named collection.
pub struct QueryBuilder<'a> {
    client: &'a Client,
    table: String,
    spec: QuerySpec,
}

impl<'a> QueryBuilder<'a> {
    pub(crate) fn new(client: &'a Client, table: String) -> Self {
        QueryBuilder {
            client,
            table,
            spec: QuerySpec::default(),
        }
    }

    /// Restrict the returned columns (defaults to `*`).
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.spec.select = Some(columns.into());
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec
            .filters
            .push(Filter::Eq(column.into(), value.into()));
        self
    }

    /// Case-insensitive substring match on a text column.
    pub fn ilike(mut self, column: impl Into<String>, needle: impl Into<String>) -> Self {
        self.spec
            .filters
            .push(Filter::IlikeContains(column.into(), needle.into()));
        self
    }

    pub fn is_null(mut self, column: impl Into<String>) -> Self {
        self.spec.filters.push(Filter::IsNull(column.into()));
        self
    }

    pub fn not_null(mut self, column: impl Into<String>) -> Self {
        self.spec.filters.push(Filter::NotNull(column.into()));
        self
    }

    pub fn in_list<I, V>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.spec.filters.push(Filter::In(column.into(), values));
        self
    }

    pub fn order(mut self, column: impl Into<String>, order: Order) -> Self {
        self.spec.order = Some((column.into(), order));
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.spec.limit = Some(limit);
        self
    }

    /// Fetch all matching rows, decoded into `T`.
    pub async fn fetch<T: DeserializeOwned>(self) -> ClientResult<Vec<T>> {
        tracing::debug!(table = %self.table, "fetching rows");

        let response = self
            .client
            .http()
            .get(self.client.rest_endpoint(&self.table))
            .query(&self.spec.query_pairs())
            .send()
            .await?;
        let response = Client::check(response).await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Fetch matching rows as raw JSON objects, for schema probing.
    pub async fn fetch_json(self) -> ClientResult<Vec<serde_json::Value>> {
        self.fetch().await
    }

    /// Count matching rows without transferring them.
    pub async fn count(self) -> ClientResult<u64> {
        tracing::debug!(table = %self.table, "counting rows");

        let response = self
            .client
            .http()
            .head(self.client.rest_endpoint(&self.table))
            .query(&self.spec.query_pairs())
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = Client::check(response).await?;

        let header = response
            .headers()
            .get(CONTENT_RANGE)
            .ok_or(ClientError::BadCountHeader)?;
        let value = header.to_str().map_err(|_| ClientError::BadCountHeader)?;
        parse_content_range(value).ok_or(ClientError::BadCountHeader)
    }

    /// Patch the given fields on every matching row. At least one
    /// filter is required; a blanket update is always a bug here.
    pub async fn update(self, patch: &impl Serialize) -> ClientResult<()> {
        if self.spec.filters.is_empty() {
            return Err(ClientError::UnfilteredUpdate);
        }

        tracing::debug!(table = %self.table, "updating rows");

        let response = self
            .client
            .http()
            .patch(self.client.rest_endpoint(&self.table))
            .query(&self.spec.filter_pairs())
            .header("Prefer", "return=minimal")
            .json(patch)
            .send()
            .await?;
        Client::check(response).await?;

        Ok(())
    }
}

/// The total row count sits after the `/` of a `Content-Range` value,
/// e.g. `0-9/42` or `*/573`.
fn parse_content_range(value: &str) -> Option<u64> {
    let (_, total) = value.rsplit_once('/')?;
    total.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> QuerySpec {
        QuerySpec::default()
    }

    #[test]
    fn defaults_to_select_star() {
        assert_eq!(
            spec().query_pairs(),
            vec![("select".to_string(), "*".to_string())]
        );
    }

    #[test]
    fn renders_filters_order_and_limit() {
        let mut spec = spec();
        spec.select = Some("id,subject".to_string());
        spec.filters.push(Filter::IsNull("assignee".to_string()));
        spec.filters.push(Filter::In(
            "status".to_string(),
            vec!["waiting".to_string(), "completed".to_string()],
        ));
        spec.order = Some(("id".to_string(), Order::Desc));
        spec.limit = Some(20);

        assert_eq!(
            spec.query_pairs(),
            vec![
                ("select".to_string(), "id,subject".to_string()),
                ("assignee".to_string(), "is.null".to_string()),
                (
                    "status".to_string(),
                    "in.(\"waiting\",\"completed\")".to_string()
                ),
                ("order".to_string(), "id.desc".to_string()),
                ("limit".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn write_pairs_exclude_select_order_and_limit() {
        let mut spec = spec();
        spec.filters
            .push(Filter::Eq("id".to_string(), "7".to_string()));
        spec.order = Some(("id".to_string(), Order::Asc));
        spec.limit = Some(1);

        assert_eq!(
            spec.filter_pairs(),
            vec![("id".to_string(), "eq.7".to_string())]
        );
    }

    #[test]
    fn parses_content_range_totals() {
        assert_eq!(parse_content_range("0-9/42"), Some(42));
        assert_eq!(parse_content_range("*/573"), Some(573));
        assert_eq!(parse_content_range("0-9/*"), None);
        assert_eq!(parse_content_range("garbage"), None);
    }
}
