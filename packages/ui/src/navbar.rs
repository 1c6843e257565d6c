use dioxus::prelude::*;

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

/// Top header bar: brand on the left, optional actions as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        header {
            class: "navbar",
            span { class: "navbar-brand", "CBN Kerigma" }
            {children}
        }
    }
}
