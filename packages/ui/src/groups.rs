//! Cell group directory fetcher.
//!
//! State lives in [`GroupsState`], a plain reducer driven by the
//! [`use_cell_groups`] hook. Every fetch gets a sequence number from
//! [`GroupsState::begin`]; a response is applied only when its sequence is
//! still the latest issued, so overlapping `refetch` calls cannot overwrite a
//! newer snapshot with a slower, staler response.

use api::CellGroupInfo;
use dioxus::prelude::*;

use crate::backend::{Backend, ServerBackend};
use crate::error::FetchError;

/// Generic message shown in place of fetch failure details.
const LOAD_ERROR: &str = "Não foi possível carregar as células. Tente novamente.";

/// Client-side snapshot of the cell group directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupsState {
    pub groups: Vec<CellGroupInfo>,
    pub loading: bool,
    pub error: Option<String>,
    issued: u64,
}

impl GroupsState {
    /// Start a new fetch generation. Marks the state as loading and returns
    /// the sequence number the settling response must present.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.issued
    }

    /// Apply a settled fetch.
    ///
    /// Returns `false` without touching anything when `seq` belongs to a
    /// superseded generation. For the current generation, loading is cleared
    /// on both paths; a failure keeps the previous snapshot and only sets the
    /// error message.
    pub fn settle(&mut self, seq: u64, result: Result<Vec<CellGroupInfo>, FetchError>) -> bool {
        if seq != self.issued {
            return false;
        }
        self.loading = false;
        match result {
            Ok(groups) => {
                self.groups = groups;
                self.error = None;
            }
            Err(_) => {
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        true
    }
}

/// Handle returned by [`use_cell_groups`].
#[derive(Clone, Copy)]
pub struct UseCellGroups {
    state: Signal<GroupsState>,
}

impl UseCellGroups {
    /// Current snapshot. Reading subscribes the caller to updates.
    pub fn state(&self) -> GroupsState {
        (self.state)()
    }

    /// Issue a new fetch. Safe to call while a previous one is in flight;
    /// only the newest response will be applied.
    pub fn refetch(&mut self) {
        let mut state = self.state;
        spawn(async move {
            fetch_into(&mut state).await;
        });
    }
}

async fn fetch_into(state: &mut Signal<GroupsState>) {
    let seq = state.write().begin();
    let result = ServerBackend.list_cell_groups().await;
    if let Err(ref e) = result {
        tracing::error!("cell group fetch failed: {e}");
    }
    state.write().settle(seq, result);
}

/// Fetch the cell group directory on mount and expose `refetch`.
pub fn use_cell_groups() -> UseCellGroups {
    let mut state = use_signal(GroupsState::default);

    let _ = use_resource(move || async move {
        fetch_into(&mut state).await;
    });

    UseCellGroups { state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn group(name: &str) -> CellGroupInfo {
        CellGroupInfo {
            id: format!("id-{name}"),
            name: name.to_string(),
            leader: "Líder".into(),
            address: "Rua".into(),
            neighborhood: "Bairro".into(),
            weekday: "Terça-feira".into(),
            meeting_time: "19h30".into(),
            phone: None,
            description: None,
            latitude: None,
            longitude: None,
            member_count: 5,
            max_members: 12,
            active: true,
        }
    }

    #[test]
    fn success_replaces_snapshot_and_clears_loading() {
        let mut state = GroupsState::default();
        let seq = state.begin();
        assert!(state.loading);

        assert!(state.settle(seq, Ok(vec![group("Arca")])));
        assert!(!state.loading);
        assert_eq!(state.groups.len(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_keeps_previous_snapshot() {
        let mut state = GroupsState::default();
        let seq = state.begin();
        state.settle(seq, Ok(vec![group("Arca"), group("Betel")]));

        let seq = state.begin();
        assert!(state.settle(
            seq,
            Err(FetchError::Transport("connection refused".into()))
        ));
        assert!(!state.loading);
        assert_eq!(state.groups.len(), 2, "stale snapshot must survive a failed refetch");
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = GroupsState::default();
        let first = state.begin();
        let second = state.begin();

        // The older request settles while a newer one is still in flight:
        // nothing is applied and loading stays on for the newer request.
        assert!(!state.settle(first, Ok(vec![group("Velha")])));
        assert!(state.loading);
        assert!(state.groups.is_empty());

        assert!(state.settle(second, Ok(vec![group("Nova")])));
        assert!(!state.loading);
        assert_eq!(state.groups[0].name, "Nova");

        // A duplicate or late settle after the winner changes nothing.
        assert!(!state.settle(first, Err(FetchError::Transport("late".into()))));
        assert!(!state.loading);
        assert_eq!(state.groups[0].name, "Nova");
    }

    #[tokio::test]
    async fn test_fetched_groups_satisfy_directory_contract() {
        let backend = MemoryBackend {
            groups: vec![group("Sião"), group("Arca")],
            api_key: None,
        };

        let mut state = GroupsState::default();
        let seq = state.begin();
        let result = backend.list_cell_groups().await;
        assert!(state.settle(seq, result));

        assert!(!state.loading);
        assert!(state.groups.iter().all(|g| g.active));
        assert!(state
            .groups
            .windows(2)
            .all(|w| w[0].name <= w[1].name));
    }
}
