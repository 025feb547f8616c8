//! Wire format for the v4 launchpad and launch payloads
//!
//! The API's JSON is untrusted. Every field is deserialized as optional and
//! then validated into a domain record; anything missing or out of shape
//! becomes [`Error::MalformedResponse`] instead of a panic further up.

use lpview_core::prelude::*;
use lpview_core::{CoreRecord, Launch, LaunchId, Launchpad};
use serde::Deserialize;

use crate::endpoint::Endpoint;

/// Launchpad record as sent by the API (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchpadDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub launches: Option<Vec<String>>,
}

/// Launch record as sent by the API (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub date_utc: Option<String>,
    #[serde(default)]
    pub cores: Option<Vec<CoreDto>>,
}

/// Core record as sent by the API
#[derive(Debug, Clone, Deserialize)]
pub struct CoreDto {
    #[serde(default)]
    pub reused: Option<bool>,
}

fn required<T>(value: Option<T>, field: &str, endpoint: &Endpoint) -> Result<T> {
    value.ok_or_else(|| Error::malformed(endpoint.to_string(), format!("missing field `{field}`")))
}

impl LaunchpadDto {
    /// Validate into a [`Launchpad`], reporting the record index on failure
    pub fn validate(self, index: usize, endpoint: &Endpoint) -> Result<Launchpad> {
        let context = |e: Error| match e {
            Error::MalformedResponse { endpoint, message } => Error::MalformedResponse {
                endpoint,
                message: format!("launchpad #{index}: {message}"),
            },
            other => other,
        };

        let id = required(self.id, "id", endpoint).map_err(context)?;
        let name = required(self.name, "name", endpoint).map_err(context)?;
        let status = required(self.status, "status", endpoint).map_err(context)?;
        let raw_launches = required(self.launches, "launches", endpoint).map_err(context)?;

        let mut launches = Vec::with_capacity(raw_launches.len());
        for raw in raw_launches {
            match LaunchId::parse(&raw) {
                Some(launch_id) => launches.push(launch_id),
                None => {
                    return Err(context(Error::malformed(
                        endpoint.to_string(),
                        "blank launch identifier in `launches`",
                    )))
                }
            }
        }

        Ok(Launchpad {
            id,
            name,
            details: self.details,
            status,
            launches,
        })
    }
}

impl LaunchDto {
    /// Validate into a [`Launch`]
    ///
    /// `requested` is the identifier the request was made for; it is used
    /// when the payload omits its own `id`.
    pub fn validate(self, requested: &LaunchId, endpoint: &Endpoint) -> Result<Launch> {
        let name = required(self.name, "name", endpoint)?;
        let date_utc = required(self.date_utc, "date_utc", endpoint)?;
        let cores = required(self.cores, "cores", endpoint)?;

        if cores.is_empty() {
            return Err(Error::malformed(
                endpoint.to_string(),
                "launch has no core records",
            ));
        }

        let id = self
            .id
            .as_deref()
            .and_then(LaunchId::parse)
            .unwrap_or_else(|| requested.clone());

        Ok(Launch {
            id,
            name,
            details: self.details,
            date_utc,
            cores: cores
                .into_iter()
                .map(|core| CoreRecord {
                    reused: core.reused,
                })
                .collect(),
        })
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str, endpoint: &Endpoint) -> Result<T> {
    serde_json::from_str(body).map_err(|e| Error::malformed(endpoint.to_string(), e.to_string()))
}

/// Parse and validate the body of `GET /v4/launchpads`
///
/// Response order is preserved.
pub fn parse_launchpads(body: &str) -> Result<Vec<Launchpad>> {
    let endpoint = Endpoint::Launchpads;
    let dtos: Vec<LaunchpadDto> = decode(body, &endpoint)?;
    dtos.into_iter()
        .enumerate()
        .map(|(index, dto)| dto.validate(index, &endpoint))
        .collect()
}

/// Parse and validate the body of `GET /v4/launches/{id}`
pub fn parse_launch(body: &str, requested: &LaunchId) -> Result<Launch> {
    let endpoint = Endpoint::Launch(requested.clone());
    let dto: LaunchDto = decode(body, &endpoint)?;
    dto.validate(requested, &endpoint)
}
