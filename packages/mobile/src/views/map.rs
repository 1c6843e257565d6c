use dioxus::prelude::*;

#[component]
pub fn Map() -> Element {
    rsx! {
        ui::views::GroupMap {}
    }
}
