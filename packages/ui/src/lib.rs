//! This crate contains all shared UI for the workspace: the layout shell,
//! the data-fetching hooks over the backend, platform detection, and the
//! WhatsApp contact deep-link.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::FaWhatsapp;
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod error;
pub use error::FetchError;

mod backend;
pub use backend::{Backend, MemoryBackend, ServerBackend};

mod groups;
pub use groups::{use_cell_groups, GroupsState, UseCellGroups};

mod maps_config;
pub use maps_config::{use_maps_config, MapsKeyState};

mod platform;
pub use platform::{
    is_mobile, ua_is_mobile, use_platform, Platform, PlatformInfo, MOBILE_VIEWPORT_MAX,
};

pub mod whatsapp;

mod navbar;
pub use navbar::Navbar;

mod sidebar;
pub use sidebar::{AppSidebar, NavTarget};

pub mod views;
