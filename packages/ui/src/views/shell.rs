use dioxus::prelude::*;

use crate::{AppSidebar, Navbar, NavTarget};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

/// Application shell: header, navigation sidebar, scrollable main region.
///
/// Purely structural. Platform packages provide the navigation callback and
/// the router outlet as children; the shell carries no state and no data.
#[component]
pub fn AppShell(
    /// Currently active navigation destination, for sidebar highlighting.
    active: NavTarget,
    /// Called when the user picks a sidebar destination.
    on_navigate: EventHandler<NavTarget>,
    /// The routed page content.
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SHELL_CSS }
        div {
            class: "app-shell",
            Navbar {}
            div {
                class: "app-body",
                AppSidebar { active, on_navigate }
                main {
                    class: "app-content",
                    {children}
                }
            }
        }
    }
}
