use dioxus::prelude::*;

use crate::{whatsapp, NavTarget};

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

#[component]
pub fn Home(on_navigate: EventHandler<NavTarget>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        div {
            id: "hero",
            h1 { "Bem-vindo à CBN Kerigma" }
            p {
                class: "hero-subtitle",
                "Uma igreja em células. Encontre um grupo perto de você e faça parte."
            }
            div {
                id: "links",
                button {
                    class: "hero-cta",
                    onclick: move |_| on_navigate.call(NavTarget::Groups),
                    "Encontrar uma célula"
                }
                button {
                    class: "hero-cta hero-cta--secondary",
                    onclick: move |_| whatsapp::open_contact_chat(),
                    "Falar conosco"
                }
            }
        }
    }
}
