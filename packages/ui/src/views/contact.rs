use dioxus::prelude::*;

use crate::icons::FaWhatsapp;
use crate::{use_platform, whatsapp, Icon};

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

#[component]
pub fn Contact() -> Element {
    let platform = use_platform();

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }

        section {
            class: "contact",
            h1 { "Fale conosco" }
            p {
                class: "contact-text",
                "Quer participar de uma célula ou saber mais sobre a CBN Kerigma? "
                "Chame a gente no WhatsApp."
            }
            button {
                class: "contact-whatsapp",
                onclick: move |_| whatsapp::open_contact_chat(),
                Icon { icon: FaWhatsapp, width: 18, height: 18 }
                span { "Conversar no WhatsApp" }
            }
            if platform().native_app {
                p { class: "contact-hint", "O chat abre direto no aplicativo do WhatsApp." }
            }
        }
    }
}
