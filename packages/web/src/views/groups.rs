use dioxus::prelude::*;

#[component]
pub fn Groups() -> Element {
    rsx! {
        ui::views::CellGroups {}
    }
}
