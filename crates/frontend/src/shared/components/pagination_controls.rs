use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::a001_shipment::PageInfo;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use thaw::*;

/// Previous/next footer for server-paginated lists
///
/// Pages are 1-based. Nothing is rendered while the list is empty.
#[component]
pub fn PaginationControls(
    #[prop(into)] page_info: Signal<PageInfo>,
    /// Both buttons are disabled while a request is in flight
    #[prop(into)]
    is_loading: Signal<bool>,
    /// Called with the requested 1-based page
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let i18n = use_i18n();

    move || {
        let info = page_info.get();
        if !info.is_visible() {
            return view! { <></> }.into_any();
        }

        let prev_disabled = Signal::derive(move || !page_info.get().can_go_prev() || is_loading.get());
        let next_disabled = Signal::derive(move || !page_info.get().can_go_next() || is_loading.get());

        view! {
            <div class="pagination-controls">
                <span class="pagination-info">
                    {format!(
                        "{} {} / {} · {} {} {}",
                        i18n.t(MessageKey::PageLabel),
                        info.page,
                        info.total_pages,
                        i18n.t(MessageKey::TotalLabel),
                        info.total,
                        i18n.t(MessageKey::ShipmentsLabel),
                    )}
                </span>
                <div class="pagination-buttons">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        disabled=prev_disabled
                        on_click=move |_| {
                            let info = page_info.get_untracked();
                            if info.can_go_prev() {
                                on_page_change.run(info.page - 1);
                            }
                        }
                    >
                        {icon("chevron-left")}
                        {i18n.t(MessageKey::PrevPage)}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        disabled=next_disabled
                        on_click=move |_| {
                            let info = page_info.get_untracked();
                            if info.can_go_next() {
                                on_page_change.run(info.page + 1);
                            }
                        }
                    >
                        {i18n.t(MessageKey::NextPage)}
                        {icon("chevron-right")}
                    </Button>
                </div>
            </div>
        }
        .into_any()
    }
}
