use dioxus::prelude::*;

use crate::icons::{FaHouse, FaMapLocationDot, FaPeopleGroup, FaWhatsapp};
use crate::Icon;

/// Navigation destinations offered by the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Groups,
    Map,
    Contact,
}

#[component]
pub fn AppSidebar(active: NavTarget, on_navigate: EventHandler<NavTarget>) -> Element {
    let item_class = move |target: NavTarget| {
        if target == active {
            "sidebar-item active"
        } else {
            "sidebar-item"
        }
    };

    rsx! {
        nav {
            class: "sidebar",
            button {
                class: item_class(NavTarget::Home),
                onclick: move |_| on_navigate.call(NavTarget::Home),
                Icon { icon: FaHouse, width: 16, height: 16 }
                span { "Início" }
            }
            button {
                class: item_class(NavTarget::Groups),
                onclick: move |_| on_navigate.call(NavTarget::Groups),
                Icon { icon: FaPeopleGroup, width: 16, height: 16 }
                span { "Células" }
            }
            button {
                class: item_class(NavTarget::Map),
                onclick: move |_| on_navigate.call(NavTarget::Map),
                Icon { icon: FaMapLocationDot, width: 16, height: 16 }
                span { "Mapa" }
            }
            button {
                class: item_class(NavTarget::Contact),
                onclick: move |_| on_navigate.call(NavTarget::Contact),
                Icon { icon: FaWhatsapp, width: 16, height: 16 }
                span { "Contato" }
            }
        }
    }
}
