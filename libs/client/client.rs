use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::error::{ClientError, ClientResult};
use crate::query::QueryBuilder;
use crate::storage::StorageApi;

/// Handle to the hosted data and storage service. One handle is opened
/// per process, bound to a single endpoint and credential; every data
/// operation is a request/response call through it.
pub struct Client {
    http: reqwest::Client,
    base: String,
}

impl Client {
    pub fn new(url: &str, key: &str) -> ClientResult<Client> {
        reqwest::Url::parse(url).map_err(|_| ClientError::InvalidUrl(url.to_string()))?;

        let api_key =
            HeaderValue::from_str(key).map_err(|_| ClientError::InvalidCredential)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|_| ClientError::InvalidCredential)?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Client {
            http,
            base: url.trim_end_matches('/').to_string(),
        })
    }

    /// Start a query against a named collection.
    pub fn from(&self, table: impl Into<String>) -> QueryBuilder<'_> {
        QueryBuilder::new(self, table.into())
    }

    /// Access the object-storage bucket API.
    pub fn storage(&self) -> StorageApi<'_> {
        StorageApi::new(self)
    }

    pub(crate) fn rest_endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base, table)
    }

    pub(crate) fn storage_endpoint(&self, path: &str) -> String {
        format!("{}/storage/v1/{}", self.base, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Surface non-2xx responses as an error carrying the response body.
    pub(crate) async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_url() {
        let result = Client::new("not a url", "key");
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn trims_trailing_slash_from_base() {
        let client = Client::new("https://example.supabase.co/", "key").unwrap();
        assert_eq!(
            client.rest_endpoint("tpo"),
            "https://example.supabase.co/rest/v1/tpo"
        );
        assert_eq!(
            client.storage_endpoint("bucket"),
            "https://example.supabase.co/storage/v1/bucket"
        );
    }
}
