//! Per-screen fetch state

use lpview_core::Error;

/// Identifies one fetch issued by one screen instance.
///
/// A result is applied only if its token still matches the screen's current
/// token; anything else belongs to a screen that was unmounted or re-fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchToken(pub u64);

impl std::fmt::Display for FetchToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outcome of a screen's fetch
#[derive(Debug, Clone)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    Failed(Error),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Short label for status lines and headless output
    pub fn label(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

impl<T> From<lpview_core::Result<T>> for LoadState<T> {
    fn from(result: lpview_core::Result<T>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loading() {
        let state: LoadState<u32> = LoadState::default();
        assert!(state.is_loading());
        assert!(state.data().is_none());
        assert_eq!(state.label(), "loading");
    }

    #[test]
    fn test_from_result() {
        let ok: LoadState<u32> = Ok(7).into();
        assert_eq!(ok.data(), Some(&7));

        let failed: LoadState<u32> = Err(Error::network("down")).into();
        assert!(failed.is_failed());
        assert!(failed.error().unwrap().to_string().contains("down"));
    }
}
