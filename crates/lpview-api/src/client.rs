//! HTTP client for the SpaceX v4 API

use std::time::Duration;

use lpview_core::prelude::*;
use lpview_core::{Launch, LaunchId, Launchpad};
use reqwest::Client;
use url::Url;

use crate::endpoint::Endpoint;
use crate::wire::{parse_launch, parse_launchpads};

/// Public SpaceX API root
pub const DEFAULT_BASE_URL: &str = "https://api.spacexdata.com";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Read access to launchpads and launches
///
/// Implemented by [`SpacexClient`] and by the in-memory fake used in tests.
#[trait_variant::make(LaunchApi: Send)]
pub trait LocalLaunchApi {
    /// Fetch every launchpad, in API order
    async fn launchpads(&self) -> Result<Vec<Launchpad>>;

    /// Fetch a single launch by identifier
    async fn launch(&self, id: &LaunchId) -> Result<Launch>;
}

/// Construction options for [`SpacexClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: Url,
    pub timeout: Duration,
}

impl ClientOptions {
    /// Parse `base_url` and pair it with `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::config_invalid(format!("invalid base URL {base_url:?}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::config_invalid(format!(
                "base URL must be http or https, got {:?}",
                base_url.scheme()
            )));
        }
        Ok(Self { base_url, timeout })
    }
}

/// reqwest-backed [`LaunchApi`] implementation
#[derive(Debug, Clone)]
pub struct SpacexClient {
    base_url: Url,
    client: Client,
}

impl SpacexClient {
    pub fn new(options: ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("lpview/", env!("CARGO_PKG_VERSION")))
            .timeout(options.timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: options.base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET an endpoint and return the body of a 2xx response
    async fn get_text(&self, endpoint: &Endpoint) -> Result<String> {
        let url = endpoint.url(&self.base_url)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| network_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(Error::network(format!("{endpoint} returned HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| network_error(endpoint, e))?;
        trace!("GET {} -> {} bytes", url, body.len());
        Ok(body)
    }
}

fn network_error(endpoint: &Endpoint, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::network(format!("{endpoint} timed out"))
    } else if err.is_connect() {
        Error::network(format!("could not connect for {endpoint}: {err}"))
    } else {
        Error::network(format!("{endpoint}: {err}"))
    }
}

impl LaunchApi for SpacexClient {
    async fn launchpads(&self) -> Result<Vec<Launchpad>> {
        let body = self.get_text(&Endpoint::Launchpads).await?;
        let pads = parse_launchpads(&body)?;
        info!("Fetched {} launchpads", pads.len());
        Ok(pads)
    }

    async fn launch(&self, id: &LaunchId) -> Result<Launch> {
        let body = self.get_text(&Endpoint::Launch(id.clone())).await?;
        let launch = parse_launch(&body, id)?;
        info!("Fetched launch {} ({})", launch.id, launch.name);
        Ok(launch)
    }
}
