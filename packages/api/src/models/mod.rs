//! Data models for the application.

mod cell_group;

#[cfg(feature = "server")]
pub use cell_group::CellGroup;
pub use cell_group::CellGroupInfo;
