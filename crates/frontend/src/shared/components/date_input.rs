use leptos::prelude::*;

/// Native date picker bound to a `yyyy-mm-dd` string
///
/// The browser renders the value in the user's locale; an empty string means
/// no date is selected.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<String>,
    /// Receives the new value in yyyy-mm-dd format, or "" when cleared
    on_change: impl Fn(String) + 'static,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| "date-input".to_string());

    view! {
        <input
            type="date"
            class=class
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
