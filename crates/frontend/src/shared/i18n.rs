//! UI language context
//!
//! The chosen locale is kept in local storage and mirrored to `<html lang>`.

use contracts::shared::i18n::{translate, Locale, MessageKey};
use leptos::prelude::*;

const STORAGE_KEY: &str = "delivro_locale";

fn load_locale_from_storage() -> Option<Locale> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Locale::from_code(&raw)
}

fn save_locale_to_storage(locale: Locale) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, locale.code());
}

fn apply_document_lang(locale: Locale) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", locale.code());
}

/// Current UI language
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub locale: RwSignal<Locale>,
}

impl I18nContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(locale),
        }
    }

    /// Reactive lookup: re-runs when the locale changes
    pub fn t(&self, key: MessageKey) -> &'static str {
        translate(self.locale.get(), key)
    }

    pub fn set_locale(&self, locale: Locale) {
        if self.locale.get_untracked() == locale {
            return;
        }
        log::debug!("switching locale to {}", locale);
        self.locale.set(locale);
        save_locale_to_storage(locale);
        apply_document_lang(locale);
    }
}

/// Provides the i18n context to children components
///
/// Starts from the stored locale, falling back to Czech.
#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let initial = load_locale_from_storage().unwrap_or_default();
    apply_document_lang(initial);
    provide_context(I18nContext::new(initial));

    children()
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}
