use crate::config::AppConfig;
use crate::services::storage::S3ObjectStore;
use aws_sdk_s3::config::Region;
use std::sync::Arc;
use tracing::info;

pub async fn setup_storage(config: &AppConfig) -> Arc<S3ObjectStore> {
    info!(
        "☁️  Blob storage: {} (Bucket: {})",
        config.endpoint_url, config.bucket
    );

    let aws_config = aws_config::from_env()
        .endpoint_url(&config.endpoint_url)
        .region(Region::new("us-east-1"))
        .credentials_provider(aws_sdk_s3::config::Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None,
            None,
            "static",
        ))
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
        .force_path_style(true)
        .build();

    let s3_client = aws_sdk_s3::Client::from_conf(s3_config);
    Arc::new(S3ObjectStore::new(
        s3_client,
        config.bucket.clone(),
        &config.endpoint_url,
    ))
}
