use crate::shared::i18n::use_i18n;
use contracts::shared::i18n::Locale;
use leptos::prelude::*;
use thaw::*;

/// EN / CS toggle; the active language is highlighted
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="language-switcher">
            {Locale::all()
                .into_iter()
                .map(|locale| {
                    let appearance = Signal::derive(move || {
                        if i18n.locale.get() == locale {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Subtle
                        }
                    });
                    view! {
                        <Button
                            appearance=appearance
                            size=ButtonSize::Small
                            on_click=move |_| i18n.set_locale(locale)
                        >
                            {locale.label()}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}
