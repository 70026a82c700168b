use aws_sdk_s3::Client;

/// Build an S3 client from an already-loaded SDK config (the desktop shell
/// resolves region and credentials before handing it over).
pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Client {
    Client::new(config)
}

/// Build an S3 client from the default credential chain and environment
/// region. Used by tooling that runs outside the configured app.
pub async fn build_client() -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;
    Client::new(&config)
}
