use api::CellGroupInfo;
use dioxus::prelude::*;

use crate::{use_cell_groups, use_platform};

const GROUPS_CSS: Asset = asset!("/assets/styling/groups.css");

/// Cell group directory listing.
#[component]
pub fn CellGroups() -> Element {
    let mut groups = use_cell_groups();
    let platform = use_platform();
    let state = groups.state();

    let section_class = if platform().is_mobile {
        "groups groups--compact"
    } else {
        "groups"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: GROUPS_CSS }

        section {
            class: section_class,
            header {
                class: "groups-header",
                h1 { "Células" }
                button {
                    class: "groups-refresh",
                    disabled: state.loading,
                    onclick: move |_| groups.refetch(),
                    if state.loading { "Atualizando..." } else { "Atualizar" }
                }
            }

            if let Some(ref error) = state.error {
                div { class: "groups-error", "{error}" }
            }

            if state.loading && state.groups.is_empty() {
                p { class: "groups-empty", "Carregando células..." }
            } else if state.groups.is_empty() && state.error.is_none() {
                p { class: "groups-empty", "Nenhuma célula disponível no momento." }
            }

            div {
                class: "groups-list",
                for group in state.groups.iter() {
                    GroupCard { key: "{group.id}", group: group.clone() }
                }
            }
        }
    }
}

#[component]
fn GroupCard(group: CellGroupInfo) -> Element {
    rsx! {
        article {
            class: "group-card",
            div {
                class: "group-card-head",
                h2 { "{group.name}" }
                if group.is_full() {
                    span { class: "group-badge group-badge--full", "Lotada" }
                } else {
                    span { class: "group-badge", "{group.member_count}/{group.max_members} membros" }
                }
            }
            p { class: "group-leader", "Líder: {group.leader}" }
            p { class: "group-address", "{group.address}, {group.neighborhood}" }
            p { class: "group-schedule", "{group.schedule()}" }
            if let Some(ref description) = group.description {
                p { class: "group-description", "{description}" }
            }
            if let Some(ref phone) = group.phone {
                p { class: "group-phone", "Contato: {phone}" }
            }
        }
    }
}
