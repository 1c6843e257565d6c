use dioxus::prelude::*;
use ui::NavTarget;

use super::route_for;
use crate::Route;

#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    let active = match route {
        Route::Home {} => NavTarget::Home,
        Route::Groups {} => NavTarget::Groups,
        Route::Map {} => NavTarget::Map,
        Route::Contact {} => NavTarget::Contact,
    };

    rsx! {
        ui::views::AppShell {
            active,
            on_navigate: move |target| { nav.push(route_for(target)); },
            Outlet::<Route> {}
        }
    }
}
