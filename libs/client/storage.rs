use serde_derive::Serialize;

use crate::client::Client;
use crate::error::ClientResult;
use crate::model::Bucket;

/// Creation request for an object-storage bucket. Field names follow
/// the storage API's wire format.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBucket {
    pub id: String,
    pub name: String,
    pub public: bool,
    pub allowed_mime_types: Vec<String>,
    pub file_size_limit: u64,
}

/// Administrative API over object-storage buckets.
pub struct StorageApi<'a> {
    client: &'a Client,
}

impl<'a> StorageApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        StorageApi { client }
    }

    pub async fn list_buckets(&self) -> ClientResult<Vec<Bucket>> {
        tracing::debug!("listing storage buckets");

        let response = self
            .client
            .http()
            .get(self.client.storage_endpoint("bucket"))
            .send()
            .await?;
        let response = Client::check(response).await?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| crate::ClientError::Decode(e.to_string()))
    }

    pub async fn create_bucket(&self, bucket: &NewBucket) -> ClientResult<()> {
        tracing::debug!(bucket = %bucket.name, "creating storage bucket");

        let response = self
            .client
            .http()
            .post(self.client.storage_endpoint("bucket"))
            .json(bucket)
            .send()
            .await?;
        Client::check(response).await?;

        Ok(())
    }
}
