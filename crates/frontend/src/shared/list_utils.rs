use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub const CURRENCY: &str = "Kč";

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Price with two decimals and the currency, e.g. "457.24 Kč"
pub fn format_price(price: f64) -> String {
    format!("{:.2} {}", price, CURRENCY)
}

/// Weight for preview tables; missing weights render as "-"
pub fn format_weight(weight: Option<f64>) -> String {
    match weight {
        Some(w) => format!("{}", w),
        None => "-".to_string(),
    }
}

/// The externally committed value to show, unless it is the one this input
/// committed itself (its own echo must not clobber newer keystrokes)
fn external_update(last_committed: &str, external: &str) -> Option<String> {
    (last_committed != external).then(|| external.to_string())
}

/// Text filter input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value once typing settles
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(into)] placeholder: Signal<&'static str>,
    /// Notified when the owner resets its filters; drops pending input
    #[prop(optional)]
    reset: Option<Trigger>,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);
    let last_committed = StoredValue::new(value.get_untracked());

    let commit = move |new_value: String| {
        last_committed.set_value(new_value.clone());
        on_change.run(new_value);
    };

    Effect::new(move |_| {
        let external = value.get();
        let Some(update) = last_committed.with_value(|c| external_update(c, &external)) else {
            return;
        };
        pending.set_value(None);
        last_committed.set_value(update.clone());
        set_input_value.set(update);
    });

    if let Some(reset) = reset {
        Effect::new(move |prev: Option<()>| {
            reset.track();
            if prev.is_none() {
                return;
            }
            pending.set_value(None);
            let current = value.get_untracked();
            last_committed.set_value(current.clone());
            set_input_value.set(current);
        });
    }

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping the previous timeout cancels it
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || commit(new_value));
        pending.set_value(Some(timeout));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        commit(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=move || placeholder.get()
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter>
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(457.24), "457.24 Kč");
        assert_eq!(format_price(0.0), "0.00 Kč");
        assert_eq!(format_price(1200.5), "1200.50 Kč");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(Some(1.5)), "1.5");
        assert_eq!(format_weight(Some(2.0)), "2");
        assert_eq!(format_weight(None), "-");
    }

    #[test]
    fn test_own_commit_is_not_echoed_back() {
        // a fetch re-publishes the filter this input committed
        assert_eq!(external_update("Ac", "Ac"), None);
        // reset or any other outside change wins
        assert_eq!(external_update("Ac", ""), Some(String::new()));
        assert_eq!(external_update("", "Acme"), Some("Acme".to_string()));
    }
}
