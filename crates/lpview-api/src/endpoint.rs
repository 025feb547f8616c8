//! Endpoint shapes served by the SpaceX v4 API

use std::fmt;

use lpview_core::prelude::*;
use lpview_core::LaunchId;
use url::Url;

/// One of the two fixed endpoints the viewer reads from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /v4/launchpads`
    Launchpads,
    /// `GET /v4/launches/{id}`
    Launch(LaunchId),
}

impl Endpoint {
    /// Path segments below the API base, unencoded
    fn segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Launchpads => vec!["v4", "launchpads"],
            Endpoint::Launch(id) => vec!["v4", "launches", id.as_str()],
        }
    }

    /// Path relative to the API base, without a leading slash
    pub fn path(&self) -> String {
        self.segments().join("/")
    }

    /// Resolve this endpoint against `base`
    ///
    /// `base` may carry a path prefix (e.g. a proxy mount point); it is kept
    /// whether or not it ends with a slash. Each segment is percent-encoded
    /// on its own, so a launch id can never add path, query or fragment parts.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::config_invalid(format!("cannot build URL for {self}: {base} has no path"))
            })?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}
