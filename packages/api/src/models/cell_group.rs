//! # Cell group model
//!
//! Defines the two representations of a Kerigma cell group:
//!
//! ## [`CellGroup`] (server only)
//!
//! The complete database row from the `cell_groups` table. It derives
//! [`sqlx::FromRow`] so it can be loaded directly from queries and contains
//! every column:
//!
//! - `id` — primary key (`UUID v4`).
//! - `name`, `leader` — display fields maintained by the church staff.
//! - `address`, `neighborhood` — street address and neighborhood.
//! - `weekday`, `meeting_time` — meeting schedule as display strings
//!   (e.g. `"Quarta-feira"`, `"19h30"`). The backend owns this vocabulary;
//!   clients never parse it.
//! - `phone`, `description` — optional contact and blurb.
//! - `latitude` / `longitude` — optional geocoordinates for the map view.
//! - `member_count` / `max_members` — current and maximum size.
//! - `active` — soft-delete flag; inactive rows are never sent to clients.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! The [`CellGroup::to_info`] method projects this into a [`CellGroupInfo`].
//!
//! ## [`CellGroupInfo`]
//!
//! A client-safe subset that is `Serialize + Deserialize + PartialEq` and can
//! cross the server/client boundary via Dioxus server functions. It converts
//! the `Uuid` to a `String` so it works in WASM and drops the audit columns.

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full cell group record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct CellGroup {
    pub id: Uuid,
    pub name: String,
    pub leader: String,
    pub address: String,
    pub neighborhood: String,
    pub weekday: String,
    pub meeting_time: String,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub member_count: i32,
    pub max_members: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl CellGroup {
    /// Convert to CellGroupInfo for client consumption.
    pub fn to_info(&self) -> CellGroupInfo {
        CellGroupInfo {
            id: self.id.to_string(),
            name: self.name.clone(),
            leader: self.leader.clone(),
            address: self.address.clone(),
            neighborhood: self.neighborhood.clone(),
            weekday: self.weekday.clone(),
            meeting_time: self.meeting_time.clone(),
            phone: self.phone.clone(),
            description: self.description.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            member_count: self.member_count,
            max_members: self.max_members,
            active: self.active,
        }
    }
}

/// Cell group information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CellGroupInfo {
    pub id: String,
    pub name: String,
    pub leader: String,
    pub address: String,
    pub neighborhood: String,
    pub weekday: String,
    pub meeting_time: String,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub member_count: i32,
    pub max_members: i32,
    pub active: bool,
}

impl CellGroupInfo {
    /// Display string for the meeting schedule, e.g. "Quarta-feira · 19h30".
    pub fn schedule(&self) -> String {
        format!("{} · {}", self.weekday, self.meeting_time)
    }

    /// Whether the group has reached its member limit.
    pub fn is_full(&self) -> bool {
        self.member_count >= self.max_members
    }

    /// Geocoordinates, present only when both components are set.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CellGroupInfo {
        CellGroupInfo {
            id: "3f0f0a3e-0000-0000-0000-000000000001".into(),
            name: "Célula Vida Nova".into(),
            leader: "Ana Souza".into(),
            address: "Rua das Acácias, 120".into(),
            neighborhood: "Cohama".into(),
            weekday: "Quarta-feira".into(),
            meeting_time: "19h30".into(),
            phone: Some("98988001122".into()),
            description: None,
            latitude: Some(-2.499),
            longitude: Some(-44.249),
            member_count: 9,
            max_members: 12,
            active: true,
        }
    }

    #[test]
    fn schedule_joins_weekday_and_time() {
        assert_eq!(sample().schedule(), "Quarta-feira · 19h30");
    }

    #[test]
    fn is_full_at_capacity() {
        let mut group = sample();
        assert!(!group.is_full());
        group.member_count = group.max_members;
        assert!(group.is_full());
    }

    #[test]
    fn coordinates_require_both_components() {
        let mut group = sample();
        assert_eq!(group.coordinates(), Some((-2.499, -44.249)));
        group.longitude = None;
        assert_eq!(group.coordinates(), None);
    }
}
