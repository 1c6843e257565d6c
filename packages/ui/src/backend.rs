//! Backend client used by the data-fetching hooks.
//!
//! The hooks never talk to the network directly; they go through the
//! [`Backend`] trait so the same fetch logic works against the live server
//! functions ([`ServerBackend`]) or an in-memory fixture ([`MemoryBackend`]).

use api::{CellGroupInfo, MapsConfig};

use crate::error::FetchError;

/// Async interface to the remote backend.
pub trait Backend {
    /// All active cell groups, ordered by name ascending.
    fn list_cell_groups(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<CellGroupInfo>, FetchError>>;

    /// The maps configuration for this deployment.
    fn maps_config(
        &self,
    ) -> impl std::future::Future<Output = Result<MapsConfig, FetchError>>;
}

/// Backend that forwards to the `api` server functions over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerBackend;

impl Backend for ServerBackend {
    async fn list_cell_groups(&self) -> Result<Vec<CellGroupInfo>, FetchError> {
        api::list_cell_groups()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }

    async fn maps_config(&self) -> Result<MapsConfig, FetchError> {
        api::maps_config()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}

/// In-memory Backend for testing.
///
/// Applies the same contract the server does: inactive rows are dropped and
/// the result is ordered by name.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    pub groups: Vec<CellGroupInfo>,
    pub api_key: Option<String>,
}

impl Backend for MemoryBackend {
    async fn list_cell_groups(&self) -> Result<Vec<CellGroupInfo>, FetchError> {
        let mut groups: Vec<CellGroupInfo> = self
            .groups
            .iter()
            .filter(|g| g.active)
            .cloned()
            .collect();
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(groups)
    }

    async fn maps_config(&self) -> Result<MapsConfig, FetchError> {
        Ok(MapsConfig {
            api_key: self.api_key.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, active: bool) -> CellGroupInfo {
        CellGroupInfo {
            id: format!("id-{name}"),
            name: name.to_string(),
            leader: "Líder".into(),
            address: "Rua".into(),
            neighborhood: "Bairro".into(),
            weekday: "Quinta-feira".into(),
            meeting_time: "20h".into(),
            phone: None,
            description: None,
            latitude: None,
            longitude: None,
            member_count: 5,
            max_members: 12,
            active,
        }
    }

    #[tokio::test]
    async fn test_only_active_groups_are_listed() {
        let backend = MemoryBackend {
            groups: vec![group("Betel", true), group("Cafarnaum", false), group("Arca", true)],
            api_key: None,
        };

        let listed = backend.list_cell_groups().await.unwrap();
        assert!(listed.iter().all(|g| g.active));
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn test_groups_are_ordered_by_name() {
        let backend = MemoryBackend {
            groups: vec![group("Sião", true), group("Arca", true), group("Betel", true)],
            api_key: None,
        };

        let listed = backend.list_cell_groups().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Arca", "Betel", "Sião"]);
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }
}
