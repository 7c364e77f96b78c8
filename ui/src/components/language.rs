use dioxus::prelude::*;

use crate::i18n;

/// Subscribes the calling component to the platform's language signal and
/// returns the active tag. Components rendering `t!` strings call this so a
/// locale switch re-renders them in place; nothing is remounted.
pub fn use_language() -> String {
    match try_use_context::<Signal<String>>() {
        Some(code) => code(),
        None => i18n::current_language(),
    }
}
