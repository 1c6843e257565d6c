//! WhatsApp contact deep-link.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Church contact number in international format (country + area + number).
pub const CONTACT_PHONE: &str = "5598988734670";

/// First message pre-filled in the contact chat.
pub const CONTACT_MESSAGE: &str =
    "Olá! Gostaria de mais informações sobre as células da CBN Kerigma.";

/// Characters kept verbatim by JavaScript's `encodeURIComponent`; everything
/// else gets percent-encoded so links decode the same way on both sides.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build a `wa.me` deep-link opening a chat with `phone`, pre-filled with `text`.
pub fn wa_link(phone: &str, text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        phone,
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

/// Open the fixed church contact chat in a new browsing context.
pub fn open_contact_chat() {
    open_external(&wa_link(CONTACT_PHONE, CONTACT_MESSAGE));
}

/// Open a URL outside the app: a new tab on web, the system handler on native.
pub fn open_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                web_sys::console::warn_1(&format!("failed to open {url}: {e:?}").into());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = open::that(url) {
            tracing::error!("Failed to open browser: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn contact_link_matches_expected_uri() {
        let link = wa_link(CONTACT_PHONE, CONTACT_MESSAGE);
        assert_eq!(
            link,
            "https://wa.me/5598988734670?text=Ol%C3%A1!%20Gostaria%20de%20mais%20informa%C3%A7%C3%B5es%20sobre%20as%20c%C3%A9lulas%20da%20CBN%20Kerigma."
        );
    }

    #[test]
    fn link_text_round_trips() {
        let link = wa_link(CONTACT_PHONE, CONTACT_MESSAGE);
        let (_, encoded) = link.split_once("text=").unwrap();
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        assert_eq!(decoded, CONTACT_MESSAGE);
    }

    #[test]
    fn spaces_encode_like_encode_uri_component() {
        assert_eq!(
            wa_link("5500000000000", "a b!c"),
            "https://wa.me/5500000000000?text=a%20b!c"
        );
    }
}
