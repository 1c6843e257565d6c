//! Runtime platform detection.
//!
//! Two independent questions are answered here:
//!
//! - **Where are we running?** The wrapping native shell (when present)
//!   injects a `window.KerigmaShell` global with `isNative` and `platform`;
//!   native builds answer from the target OS. No shell means plain web.
//! - **Is this a mobile-sized device?** The user agent is matched against a
//!   fixed signature list, OR the viewport is at most
//!   [`MOBILE_VIEWPORT_MAX`] logical pixels. Both checks rerun on every
//!   resize event; nothing is cached.

use dioxus::prelude::*;

/// Viewport width (logical px) at or below which a device counts as mobile.
pub const MOBILE_VIEWPORT_MAX: f64 = 768.0;

/// User-agent fragments that identify mobile devices.
const MOBILE_UA_SIGNATURES: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// Platform reported by the hosting shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    #[default]
    Web,
    Ios,
    Android,
}

impl Platform {
    /// Classify from the shell bridge answers. No shell, or a tag we do not
    /// recognize, degrades to [`Platform::Web`].
    pub fn from_shell(native: bool, tag: &str) -> Self {
        if !native {
            return Platform::Web;
        }
        match tag {
            "ios" => Platform::Ios,
            "android" => Platform::Android,
            _ => Platform::Web,
        }
    }
}

/// Whether the user agent carries a known mobile signature.
pub fn ua_is_mobile(user_agent: &str) -> bool {
    MOBILE_UA_SIGNATURES
        .iter()
        .any(|sig| user_agent.contains(sig))
}

/// Mobile classification from viewport width and user agent.
pub fn is_mobile(width: f64, user_agent: &str) -> bool {
    ua_is_mobile(user_agent) || width <= MOBILE_VIEWPORT_MAX
}

/// Derived platform classification. Never persisted; recomputed on resize.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlatformInfo {
    pub platform: Platform,
    pub native_app: bool,
    pub is_mobile: bool,
}

impl PlatformInfo {
    pub fn is_web(&self) -> bool {
        self.platform == Platform::Web
    }

    pub fn is_ios(&self) -> bool {
        self.platform == Platform::Ios
    }

    pub fn is_android(&self) -> bool {
        self.platform == Platform::Android
    }

    /// Inspect the current environment.
    pub fn detect() -> Self {
        let (native, tag) = detect_shell();
        let (width, user_agent) = environment();
        PlatformInfo {
            platform: Platform::from_shell(native, &tag),
            native_app: native,
            is_mobile: is_mobile(width, &user_agent),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn detect_shell() -> (bool, String) {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return (false, String::new());
    };
    let global: JsValue = window.into();
    let bridge = match js_sys::Reflect::get(&global, &JsValue::from_str("KerigmaShell")) {
        Ok(b) if !b.is_undefined() && !b.is_null() => b,
        _ => return (false, String::new()),
    };

    let native = js_sys::Reflect::get(&bridge, &JsValue::from_str("isNative"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let tag = js_sys::Reflect::get(&bridge, &JsValue::from_str("platform"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    (native, tag)
}

#[cfg(not(target_arch = "wasm32"))]
fn detect_shell() -> (bool, String) {
    #[cfg(target_os = "android")]
    return (true, "android".to_string());
    #[cfg(target_os = "ios")]
    return (true, "ios".to_string());
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    (false, String::new())
}

#[cfg(target_arch = "wasm32")]
fn environment() -> (f64, String) {
    let Some(window) = web_sys::window() else {
        return (MOBILE_VIEWPORT_MAX + 1.0, String::new());
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    (width, user_agent)
}

#[cfg(not(target_arch = "wasm32"))]
fn environment() -> (f64, String) {
    // Native mobile builds always render full-window on a handset.
    #[cfg(any(target_os = "android", target_os = "ios"))]
    return (0.0, String::new());
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    (MOBILE_VIEWPORT_MAX + 1.0, String::new())
}

/// Platform classification, recomputed on every viewport resize.
///
/// On web this registers a window `resize` listener when the component
/// mounts; `use_drop` removes it on unmount, exactly once per registration.
pub fn use_platform() -> Signal<PlatformInfo> {
    let info = use_signal(PlatformInfo::detect);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let mut info = info;
        let listener: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        use_effect({
            let listener = listener.clone();
            move || {
                if listener.borrow().is_some() {
                    return;
                }
                let closure = Closure::<dyn FnMut()>::new(move || {
                    info.set(PlatformInfo::detect());
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                *listener.borrow_mut() = Some(closure);
            }
        });

        use_drop({
            let listener = listener.clone();
            move || {
                if let (Some(window), Some(closure)) =
                    (web_sys::window(), listener.borrow_mut().take())
                {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
    const IPHONE_UA: &str =
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";

    #[test]
    fn wide_viewport_with_desktop_agent_is_not_mobile() {
        assert!(!is_mobile(769.0, DESKTOP_UA));
    }

    #[test]
    fn narrow_viewport_is_mobile_regardless_of_agent() {
        assert!(is_mobile(500.0, DESKTOP_UA));
        assert!(is_mobile(500.0, ""));
    }

    #[test]
    fn mobile_agent_is_mobile_at_any_width() {
        assert!(ua_is_mobile(IPHONE_UA));
        assert!(is_mobile(1200.0, IPHONE_UA));
    }

    #[test]
    fn shell_answers_map_to_platforms() {
        assert_eq!(Platform::from_shell(true, "ios"), Platform::Ios);
        assert_eq!(Platform::from_shell(true, "android"), Platform::Android);
        assert_eq!(Platform::from_shell(false, "android"), Platform::Web);
        assert_eq!(Platform::from_shell(false, ""), Platform::Web);
        assert_eq!(Platform::from_shell(true, "tvos"), Platform::Web);
    }

    #[test]
    fn exactly_one_platform_flag_is_set() {
        for (native, tag) in [(true, "ios"), (true, "android"), (false, ""), (true, "other")] {
            let info = PlatformInfo {
                platform: Platform::from_shell(native, tag),
                native_app: native,
                is_mobile: false,
            };
            let flags = [info.is_web(), info.is_ios(), info.is_android()];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        }
    }
}
