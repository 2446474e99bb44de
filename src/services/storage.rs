use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::Utc;

/// An object held by the remote container, as seen by a listing.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
}

/// Blob container operations this service needs: write one object, list them
/// all. The remote store owns the objects; we keep no local index.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, key: &str, data: Bytes, content_type: &str) -> Result<()>;

    /// Enumerates every object in the container, in the store's native order.
    async fn list_objects(&self) -> Result<Vec<StoredObject>>;
}

/// Builds the storage key for an upload: millisecond timestamp prefix keeps
/// keys unique per clock tick. Two uploads of the same filename in the same
/// millisecond overwrite each other.
pub fn object_key(filename: &str) -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), filename)
}

pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    /// Path-style base for public URLs: `<endpoint>/<bucket>`.
    public_base: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: String, endpoint_url: &str) -> Self {
        let public_base = format!("{}/{}", endpoint_url.trim_end_matches('/'), bucket);
        Self {
            client,
            bucket,
            public_base,
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base, key)
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, data: Bytes, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await?;
        Ok(())
    }

    async fn list_objects(&self) -> Result<Vec<StoredObject>> {
        let mut objects = Vec::new();
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .into_paginator()
            .send();

        while let Some(page) = pages.next().await {
            let page = page?;
            for obj in page.contents() {
                if let Some(key) = obj.key() {
                    objects.push(StoredObject {
                        url: self.public_url(key),
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(objects)
    }
}
