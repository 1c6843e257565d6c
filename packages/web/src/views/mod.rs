mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod groups;
pub use groups::Groups;

mod map;
pub use map::Map;

mod contact;
pub use contact::Contact;

use ui::NavTarget;

use crate::Route;

pub(crate) fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Home => Route::Home {},
        NavTarget::Groups => Route::Groups {},
        NavTarget::Map => Route::Map {},
        NavTarget::Contact => Route::Contact {},
    }
}
