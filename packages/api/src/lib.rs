//! # API crate — shared fullstack server functions for the Kerigma platform
//!
//! This crate defines every Dioxus server function that the web and mobile
//! frontends call, along with the supporting modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`db`] | `server` | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | [`models`] | — | Database models (`CellGroup`) and their client-safe projections (`CellGroupInfo`) |
//! | [`settings`] | `server` | Layered configuration: defaults, `config.toml`, environment |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, annotated
//! with `#[get(...)]` and compiled twice: once with full server logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that simply
//! forwards the call over HTTP.
//!
//! - **Cell groups**: `list_cell_groups` — the active-only, name-ordered
//!   directory listing shown on the Células and Mapa pages.
//! - **Maps configuration**: `maps_config` — hands the Google Maps API key to
//!   the client for the session; the key is never persisted client-side.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

pub mod db;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;

pub use models::CellGroupInfo;

/// Maps configuration handed to the client on request.
///
/// `api_key` is `None` when the deployment has no key configured; the client
/// treats that as a distinct "not found" condition rather than a transport
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapsConfig {
    pub api_key: Option<String>,
}

/// List all active cell groups, ordered by name.
///
/// Inactive rows never leave the server; the ordering is the collation the
/// UI relies on, so it is applied here and not client-side.
#[cfg(feature = "server")]
#[get("/api/cell-groups")]
pub async fn list_cell_groups() -> Result<Vec<CellGroupInfo>, ServerFnError> {
    use crate::db::get_pool;
    use crate::models::CellGroup;

    let pool = get_pool()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let groups: Vec<CellGroup> =
        sqlx::query_as("SELECT * FROM cell_groups WHERE active = TRUE ORDER BY name ASC")
            .fetch_all(pool)
            .await
            .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(groups.iter().map(|g| g.to_info()).collect())
}

#[cfg(not(feature = "server"))]
#[get("/api/cell-groups")]
pub async fn list_cell_groups() -> Result<Vec<CellGroupInfo>, ServerFnError> {
    Ok(Vec::new())
}

/// Get the Google Maps configuration for the map view.
#[cfg(feature = "server")]
#[get("/api/config/google-maps")]
pub async fn maps_config() -> Result<MapsConfig, ServerFnError> {
    use crate::settings::Settings;

    let settings = Settings::new().map_err(|e| ServerFnError::new(e.to_string()))?;

    let api_key = match settings.maps.apikey.trim() {
        "" => None,
        key => Some(key.to_string()),
    };

    Ok(MapsConfig { api_key })
}

#[cfg(not(feature = "server"))]
#[get("/api/config/google-maps")]
pub async fn maps_config() -> Result<MapsConfig, ServerFnError> {
    Ok(MapsConfig { api_key: None })
}
