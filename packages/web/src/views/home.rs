use dioxus::prelude::*;

use super::route_for;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::Home {
            on_navigate: move |target| { nav.push(route_for(target)); },
        }
    }
}
