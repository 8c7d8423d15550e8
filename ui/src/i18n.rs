//! Localized strings for the navigation chrome: logo alt text, menu and
//! wallet buttons, page headings. Menu labels come from the menu
//! configuration and are not translated.
//!
//! Messages live in `i18n/<locale>/vaultbar-ui.ftl` and are embedded at
//! compile time; `en-US` is the reference set every other locale must cover.
//! The user's preferred locales are read once (OS list on native,
//! `navigator.languages` on wasm) by [`init`].
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::{Lazy, OnceCell};
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared [`LOADER`].
///
/// `t!("nav-open-menu")`, `t!("nav-connected-as", address = short)`
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the `.ftl` file name in every locale folder.
const DOMAIN: &str = "vaultbar-ui";
const FALLBACK_LOCALE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Locales;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("fallback locale tag is well formed");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static SELECTED: OnceCell<Vec<LanguageIdentifier>> = OnceCell::new();

/// Load the bundles matching the user's locales. Only the first call does
/// any work; every call returns the locales in effect, best match first.
pub fn init() -> &'static [LanguageIdentifier] {
    SELECTED.get_or_init(|| select(&requested_locales()))
}

fn select(requested: &[LanguageIdentifier]) -> Vec<LanguageIdentifier> {
    match i18n_embed::select(&*LOADER, &Locales, requested) {
        Ok(selected) if !selected.is_empty() => {
            tracing::debug!(?requested, ?selected, "locale selected");
            selected
        }
        Ok(_) => vec![LOADER.fallback_language().clone()],
        Err(err) => {
            tracing::warn!(%err, "locale selection failed, using {FALLBACK_LOCALE}");
            vec![LOADER.fallback_language().clone()]
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn requested_locales() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_locales() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
