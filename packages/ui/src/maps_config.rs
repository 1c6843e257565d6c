//! Google Maps configuration fetcher.
//!
//! One call per mount, no retry: loading starts true and settles false
//! exactly once. A reachable backend without a configured key is reported as
//! a distinct "not found" condition, not as a transport failure.

use api::MapsConfig;
use dioxus::prelude::*;

use crate::backend::{Backend, ServerBackend};
use crate::error::FetchError;

/// State exposed by [`use_maps_config`].
#[derive(Clone, Debug, PartialEq)]
pub struct MapsKeyState {
    /// The maps API key; empty until a successful fetch.
    pub api_key: String,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for MapsKeyState {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            loading: true,
            error: None,
        }
    }
}

impl MapsKeyState {
    /// Apply the single settled fetch of this mount.
    pub fn settle(&mut self, result: Result<MapsConfig, FetchError>) {
        self.loading = false;
        match result {
            Ok(config) => match config.api_key {
                Some(key) if !key.is_empty() => {
                    self.api_key = key;
                }
                _ => {
                    self.error =
                        Some(FetchError::MissingData("chave do Google Maps").to_string());
                }
            },
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Fetch the maps API key once on mount.
pub fn use_maps_config() -> Signal<MapsKeyState> {
    let mut state = use_signal(MapsKeyState::default);

    let _ = use_resource(move || async move {
        let result = ServerBackend.maps_config().await;
        if let Err(ref e) = result {
            tracing::error!("maps config fetch failed: {e}");
        }
        state.write().settle(result);
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    #[test]
    fn transport_failure_leaves_key_empty() {
        let mut state = MapsKeyState::default();
        assert!(state.loading);

        state.settle(Err(FetchError::Transport("timeout".into())));
        assert!(!state.loading);
        assert_eq!(state.api_key, "");
        assert!(state.error.as_deref().unwrap().contains("servidor"));
    }

    #[test]
    fn missing_key_is_distinct_from_transport_failure() {
        let mut state = MapsKeyState::default();
        state.settle(Ok(MapsConfig { api_key: None }));

        assert!(!state.loading);
        assert_eq!(state.api_key, "");
        assert!(state.error.as_deref().unwrap().contains("Não encontrado"));
    }

    #[tokio::test]
    async fn test_key_exposed_on_success() {
        let backend = MemoryBackend {
            groups: Vec::new(),
            api_key: Some("AIza-fixture".into()),
        };

        let mut state = MapsKeyState::default();
        state.settle(backend.maps_config().await);

        assert!(!state.loading);
        assert_eq!(state.api_key, "AIza-fixture");
        assert!(state.error.is_none());
    }
}
