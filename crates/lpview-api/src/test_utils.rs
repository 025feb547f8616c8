//! Test utilities for API consumers
//!
//! Provides record builders and an in-memory [`FakeLaunchApi`] that counts
//! calls, so higher layers can be tested without a network.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lpview_core::prelude::*;
use lpview_core::{CoreRecord, Launch, LaunchId, Launchpad};

use crate::client::LaunchApi;

/// Creates a launchpad with the given name and launch identifiers.
///
/// The id is derived from the name so tests stay readable.
pub fn test_launchpad(name: &str, launches: &[&str]) -> Launchpad {
    Launchpad {
        id: format!("pad-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        details: Some(format!("{name} details")),
        status: "active".to_string(),
        launches: launches
            .iter()
            .filter_map(|raw| LaunchId::parse(raw))
            .collect(),
    }
}

/// Creates a launch with one core per entry in `reused`.
pub fn test_launch(id: &str, name: &str, reused: &[Option<bool>]) -> Launch {
    Launch {
        id: LaunchId::parse(id).unwrap_or_else(|| LaunchId::parse("unknown").unwrap()),
        name: name.to_string(),
        details: None,
        date_utc: "2020-05-30T19:25:00.000Z".to_string(),
        cores: reused.iter().map(|&reused| CoreRecord { reused }).collect(),
    }
}

/// In-memory [`LaunchApi`] with scripted responses
#[derive(Clone, Default)]
pub struct FakeLaunchApi {
    inner: Arc<FakeInner>,
}

#[derive(Default)]
struct FakeInner {
    launchpads: Mutex<Option<Result<Vec<Launchpad>>>>,
    launches: Mutex<HashMap<LaunchId, Result<Launch>>>,
    delay: Mutex<Option<Duration>>,
    launchpad_calls: AtomicUsize,
    launch_calls: AtomicUsize,
}

impl FakeLaunchApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `pads` from `launchpads()`
    pub fn with_launchpads(self, pads: Vec<Launchpad>) -> Self {
        *self.inner.launchpads.lock().unwrap() = Some(Ok(pads));
        self
    }

    /// Fail `launchpads()` with `err`
    pub fn with_launchpads_error(self, err: Error) -> Self {
        *self.inner.launchpads.lock().unwrap() = Some(Err(err));
        self
    }

    /// Serve `launch` for its own id
    pub fn with_launch(self, launch: Launch) -> Self {
        self.inner
            .launches
            .lock()
            .unwrap()
            .insert(launch.id.clone(), Ok(launch));
        self
    }

    /// Fail `launch(id)` with `err`
    pub fn with_launch_error(self, id: &str, err: Error) -> Self {
        if let Some(id) = LaunchId::parse(id) {
            self.inner.launches.lock().unwrap().insert(id, Err(err));
        }
        self
    }

    /// Delay every response, to exercise cancellation
    pub fn with_delay(self, delay: Duration) -> Self {
        *self.inner.delay.lock().unwrap() = Some(delay);
        self
    }

    pub fn launchpad_calls(&self) -> usize {
        self.inner.launchpad_calls.load(Ordering::SeqCst)
    }

    pub fn launch_calls(&self) -> usize {
        self.inner.launch_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        let delay = *self.inner.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl LaunchApi for FakeLaunchApi {
    async fn launchpads(&self) -> Result<Vec<Launchpad>> {
        self.inner.launchpad_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.inner
            .launchpads
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(Error::network("no launchpads scripted")))
    }

    async fn launch(&self, id: &LaunchId) -> Result<Launch> {
        self.inner.launch_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        self.inner
            .launches
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_else(|| Err(Error::network(format!("/v4/launches/{id} returned HTTP 404 Not Found"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launchpad_builder() {
        let pad = test_launchpad("KSC LC 39A", &["a", "b"]);
        assert_eq!(pad.id, "pad-ksc-lc-39a");
        assert_eq!(pad.launches.len(), 2);
    }

    #[tokio::test]
    async fn test_fake_serves_scripted_data_and_counts_calls() {
        let api = FakeLaunchApi::new()
            .with_launchpads(vec![test_launchpad("Pad", &["x"])])
            .with_launch(test_launch("x", "Launch X", &[Some(true)]));

        assert_eq!(api.launchpads().await.unwrap().len(), 1);
        let launch = api.launch(&LaunchId::parse("x").unwrap()).await.unwrap();
        assert_eq!(launch.name, "Launch X");
        assert_eq!(api.launchpad_calls(), 1);
        assert_eq!(api.launch_calls(), 1);
    }

    #[tokio::test]
    async fn test_fake_unknown_launch_is_network_error() {
        let api = FakeLaunchApi::new();
        let err = api.launch(&LaunchId::parse("nope").unwrap()).await.unwrap_err();
        assert!(matches!(err, Error::Network { .. }));
    }
}
