mod shell;
pub use shell::AppShell;

mod home;
pub use home::Home;

mod groups;
pub use groups::CellGroups;

mod map;
pub use map::GroupMap;

mod contact;
pub use contact::Contact;
