//! Dashboard localization.
//!
//! Messages live in `i18n/<locale>/vaxatlas-ui.ftl` (en-US is the fallback)
//! and are compiled into the binary. `t!` is checked against the fallback at
//! build time, so a missing key is a compile error rather than a blank label.

use std::sync::Once;

use i18n_embed::{fluent::FluentLanguageLoader, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Localized string from the shared loader: `t!("map-title")`,
/// `t!("focus-title", name = state)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Must match `domain` in `i18n.toml` and the `.ftl` file stem.
const DOMAIN: &str = "vaxatlas-ui";
pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error(transparent)]
    Select(#[from] i18n_embed::I18nEmbedError),
}

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .unwrap_or_else(|_| LanguageIdentifier::default());
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages. Idempotent.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization loaded"),
            Err(err) => tracing::warn!(%err, "language selection failed; using fallback"),
        }
    });
}

/// Switch the active language. Tags with no bundle fall back to en-US.
pub fn set_language(tag: &str) -> Result<(), LocaleError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LocaleError::InvalidTag(tag.to_string()))?;
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    tracing::info!(language = %current_language(), "language switched");
    Ok(())
}

pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Locale directories bundled into the binary, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs: Vec<String> = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundles_ship_three_locales() {
        assert_eq!(available_languages(), vec!["en-US", "es-ES", "fr-FR"]);
    }

    #[test]
    fn fallback_bundle_resolves_dashboard_keys() {
        let loader = FluentLanguageLoader::new(DOMAIN, FALLBACK_LANGUAGE.parse().unwrap());
        loader.load_fallback_language(&Localizations).unwrap();
        assert_eq!(fl!(loader, "nav-dashboard"), "Dashboard");
        assert_eq!(fl!(loader, "map-retry"), "Retry");
    }

    #[test]
    fn garbage_tag_is_rejected() {
        init();
        assert!(matches!(
            set_language("not a tag!"),
            Err(LocaleError::InvalidTag(_))
        ));
    }
}
