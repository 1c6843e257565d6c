use api::CellGroupInfo;
use dioxus::prelude::*;

use crate::{use_cell_groups, use_maps_config, use_platform};

const MAP_CSS: Asset = asset!("/assets/styling/map.css");

fn embed_url(key: &str, lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps/embed/v1/view?key={key}&center={lat},{lng}&zoom=15")
}

/// Map of cell groups with registered coordinates.
#[component]
pub fn GroupMap() -> Element {
    let maps = use_maps_config();
    let groups = use_cell_groups();
    let platform = use_platform();
    let mut selected = use_signal(|| Option::<String>::None);

    let key_state = maps();
    let state = groups.state();

    let located: Vec<CellGroupInfo> = state
        .groups
        .iter()
        .filter(|g| g.coordinates().is_some())
        .cloned()
        .collect();
    let current = selected()
        .and_then(|id| located.iter().find(|g| g.id == id).cloned())
        .or_else(|| located.first().cloned());

    let frame_class = if platform().is_mobile {
        "map-frame map-frame--compact"
    } else {
        "map-frame"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAP_CSS }

        section {
            class: "map-view",
            h1 { "Mapa das células" }

            if key_state.loading || state.loading {
                p { class: "map-status", "Carregando mapa..." }
            } else if let Some(ref error) = key_state.error {
                div { class: "map-error", "{error}" }
            } else if let Some(group) = current {
                div {
                    class: "map-picker",
                    for g in located.iter() {
                        button {
                            key: "{g.id}",
                            class: if g.id == group.id { "map-pick active" } else { "map-pick" },
                            onclick: {
                                let id = g.id.clone();
                                move |_| selected.set(Some(id.clone()))
                            },
                            "{g.name}"
                        }
                    }
                }
                if let Some((lat, lng)) = group.coordinates() {
                    iframe {
                        class: frame_class,
                        src: embed_url(&key_state.api_key, lat, lng),
                        title: "Mapa da célula {group.name}",
                        "loading": "lazy",
                        referrerpolicy: "no-referrer-when-downgrade",
                    }
                }
                p { class: "map-caption", "{group.name} · {group.address}, {group.neighborhood}" }
            } else {
                p { class: "map-status", "Nenhuma célula com localização cadastrada." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_places_key_and_center() {
        let url = embed_url("k123", -2.53, -44.3);
        assert_eq!(
            url,
            "https://www.google.com/maps/embed/v1/view?key=k123&center=-2.53,-44.3&zoom=15"
        );
    }
}
