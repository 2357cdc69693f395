//! S3 object-storage transport for `s3://bucket/prefix/` repositories.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_config::imds::region::ImdsRegionProvider;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use futures_util::StreamExt;
use tokio::sync::OnceCell;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::constants::DEFAULT_S3_REGION;
use super::error::FetchError;
use super::{BodyStream, FetchedArtifact, Transport, TransportSettings};
use crate::coordinate::Credentials;

/// Bucket and key addressed by an `s3://` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Location {
    pub bucket: String,
    pub key: String,
}

impl S3Location {
    /// Splits `s3://bucket/key...` into bucket (URL host) and key (URL path
    /// without its leading `/`, percent-decoded).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidLocation`] when the URL does not parse,
    /// is not `s3://`, or lacks a bucket or key.
    pub fn parse(url: &str) -> Result<Self, FetchError> {
        let parsed =
            Url::parse(url).map_err(|e| FetchError::invalid_location(url, e.to_string()))?;
        if parsed.scheme() != "s3" {
            return Err(FetchError::invalid_location(
                url,
                format!("scheme '{}' is not s3", parsed.scheme()),
            ));
        }

        let bucket = parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| FetchError::invalid_location(url, "missing bucket"))?
            .to_string();

        let raw_key = parsed.path().strip_prefix('/').unwrap_or(parsed.path());
        let key = urlencoding::decode(raw_key)
            .map_err(|e| FetchError::invalid_location(url, e.to_string()))?
            .into_owned();
        if key.is_empty() {
            return Err(FetchError::invalid_location(url, "missing object key"));
        }

        Ok(Self { bucket, key })
    }
}

/// Fetches artifacts with one `GetObject` call each.
///
/// The region and SDK client are resolved on first use and shared by every
/// later fetch in the batch.
#[derive(Debug)]
pub struct S3Transport {
    region_override: Option<String>,
    endpoint: Option<String>,
    client: OnceCell<Client>,
}

impl S3Transport {
    #[must_use]
    pub fn new(settings: &TransportSettings) -> Self {
        Self {
            region_override: settings.s3_region.clone(),
            endpoint: settings.s3_endpoint.clone(),
            client: OnceCell::new(),
        }
    }

    /// Uses an already configured SDK client; no region lookup happens.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self {
            region_override: None,
            endpoint: None,
            client: OnceCell::from(client),
        }
    }

    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                let region = resolve_region(self.region_override.as_deref()).await;
                let shared = aws_config::defaults(BehaviorVersion::latest())
                    .region(region)
                    .load()
                    .await;
                Client::from_conf(s3_config(&shared, self.endpoint.as_deref()).build())
            })
            .await
    }
}

/// S3 client configuration derived from the shared SDK config.
fn s3_config(shared: &SdkConfig, endpoint: Option<&str>) -> aws_sdk_s3::config::Builder {
    let builder = aws_sdk_s3::config::Builder::from(shared);
    match endpoint {
        Some(endpoint) => {
            debug!(endpoint, "using custom S3 endpoint");
            builder.endpoint_url(endpoint).force_path_style(true)
        }
        None => builder,
    }
}

/// Picks the operating region: explicit override, then instance metadata,
/// then [`DEFAULT_S3_REGION`].
async fn resolve_region(region_override: Option<&str>) -> Region {
    if let Some(region) = region_override {
        debug!(region, "using configured S3 region");
        return Region::new(region.to_string());
    }
    let discovered = ImdsRegionProvider::builder().build().region().await;
    region_or_default(discovered)
}

/// Metadata lookup failures only ever lead to the default region.
fn region_or_default(discovered: Option<Region>) -> Region {
    match discovered {
        Some(region) => {
            info!(region = %region, "resolved S3 region from instance metadata");
            region
        }
        None => {
            warn!(
                region = DEFAULT_S3_REGION,
                "instance metadata region unavailable; falling back to default S3 region"
            );
            Region::new(DEFAULT_S3_REGION)
        }
    }
}

fn into_body_stream(body: ByteStream) -> BodyStream {
    futures_util::stream::unfold(body, |mut body| async move {
        body.next()
            .await
            .map(|chunk| (chunk.map_err(std::io::Error::other), body))
    })
    .boxed()
}

#[async_trait]
impl Transport for S3Transport {
    fn name(&self) -> &'static str {
        "s3"
    }

    #[instrument(skip(self, credentials), fields(url = %url))]
    async fn fetch(
        &self,
        url: &str,
        credentials: Option<&Credentials>,
    ) -> Result<FetchedArtifact, FetchError> {
        if credentials.is_some() {
            debug!("repository credentials are not used by the S3 transport");
        }
        let location = S3Location::parse(url)?;
        debug!(bucket = %location.bucket, key = %location.key, "fetching object");

        let output = self
            .client()
            .await
            .get_object()
            .bucket(&location.bucket)
            .key(&location.key)
            .send()
            .await
            .map_err(|e| FetchError::object_store(url, DisplayErrorContext(&e).to_string()))?;

        let content_length = output
            .content_length()
            .and_then(|len| u64::try_from(len).ok());
        Ok(FetchedArtifact::new(
            into_body_stream(output.body),
            content_length,
        ))
    }
}
