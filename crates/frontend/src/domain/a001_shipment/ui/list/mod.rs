mod state;

use crate::domain::a001_shipment::api::fetch_shipments;
use crate::domain::a001_shipment::ui::card::ShipmentCard;
use crate::domain::a001_shipment::ui::history_dialog::ShipmentHistoryDialog;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::language_switcher::LanguageSwitcher;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::usecases::u501_upload_invoices::view::UploadInvoicesDialog;
use contracts::domain::a001_shipment::{ShipmentListState, ShipmentSummary};
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use state::{create_state, parse_sort, sort_select_value};
use thaw::*;

#[component]
fn DashboardHeader(on_upload: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon("shipments")}
                <div>
                    <h1 class="page__title">{move || i18n.t(MessageKey::DashboardTitle)}</h1>
                    <p class="page__subtitle">{move || i18n.t(MessageKey::DashboardSubtitle)}</p>
                </div>
            </div>

            <div class="page__header-right">
                <LanguageSwitcher />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_upload.run(())
                >
                    {icon("upload")}
                    {move || format!(" {}", i18n.t(MessageKey::UploadInvoices))}
                </Button>
            </div>
        </div>
    }
}

#[component]
fn FiltersBar(state: RwSignal<ShipmentListState>, on_change: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let sort_value = sort_select_value(state);

    // select -> state.query.sort; state changes made elsewhere (reset) are synced back
    Effect::new(move |_| {
        let sort = parse_sort(&sort_value.get());
        if state.with_untracked(|s| s.query.sort == sort) {
            return;
        }
        state.update(|s| s.query.set_sort(sort));
        on_change.run(());
    });
    Effect::new(move |_| {
        let code = state.with(|s| s.query.sort.code());
        if sort_value.get_untracked() != code {
            sort_value.set(code.to_string());
        }
    });

    // only the committed filter, not every loading/response update of the state
    let company_filter = Memo::new(move |_| state.with(|s| s.query.company_filter.clone()));
    let filters_reset = Trigger::new();

    view! {
        <div class="filter-panel">
            <Flex gap=FlexGap::Medium align=FlexAlign::End justify=FlexJustify::SpaceBetween>
                <SearchInput
                    value=company_filter
                    reset=filters_reset
                    on_change=Callback::new(move |v: String| {
                        state.update(|s| s.query.set_company_filter(v));
                        on_change.run(());
                    })
                    placeholder=Signal::derive(move || i18n.t(MessageKey::FilterPlaceholder))
                />

                <Flex gap=FlexGap::Medium align=FlexAlign::End>
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>{move || i18n.t(MessageKey::DateLabel)}</Label>
                        <DateInput
                            value=Signal::derive(move || state.with(|s| s.query.date_input_value()))
                            on_change=move |v: String| {
                                state.update(|s| s.query.set_date_input(&v));
                                on_change.run(());
                            }
                        />
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>{move || i18n.t(MessageKey::SortLabel)}</Label>
                        <Select value=sort_value size=SelectSize::Small>
                            <option value="newest">{move || i18n.t(MessageKey::SortNewest)}</option>
                            <option value="oldest">{move || i18n.t(MessageKey::SortOldest)}</option>
                        </Select>
                    </Flex>

                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            state.update(|s| s.query.reset_filters());
                            filters_reset.notify();
                            on_change.run(());
                        }
                    >
                        {move || i18n.t(MessageKey::ResetFilters)}
                    </Button>
                </Flex>
            </Flex>
        </div>
    }
}

#[component]
pub fn ShipmentDashboard() -> impl IntoView {
    let i18n = use_i18n();
    let state = create_state();

    let upload_open = RwSignal::new(false);
    let history_open = RwSignal::new(false);
    let history_target = RwSignal::new(Option::<ShipmentSummary>::None);

    let load = move || {
        let Some((ticket, query)) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        log::debug!("loading shipments, request #{}", ticket.value());

        leptos::task::spawn_local(async move {
            let result = fetch_shipments(&query).await;
            state.update(|s| {
                let applied = match result {
                    Ok(resp) => s.apply_success(ticket, resp),
                    Err(e) => {
                        log::error!("failed to load shipments: {}", e);
                        s.apply_failure(ticket, e)
                    }
                };
                if !applied {
                    log::debug!("dropping stale response #{}", ticket.value());
                }
            });
        });
    };

    // Initial load (once)
    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load();
        }
    });

    let go_to_page = move |page: u32| {
        state.update(|s| s.query.go_to_page(page));
        load();
    };

    let show_history = move |summary: ShipmentSummary| {
        history_target.set(Some(summary));
        history_open.set(true);
    };

    let grid = move || {
        let (is_loading, error, items) =
            state.with(|s| (s.is_loading, s.error.clone(), s.items.clone()));

        if is_loading {
            return view! {
                <div class="shipments-grid__status">
                    <Spinner />
                    <span class="text-muted">{i18n.t(MessageKey::Loading)}</span>
                </div>
            }
            .into_any();
        }

        let error_box = error.map(|e| {
            view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{i18n.t(e.message_key())}</span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| load()
                    >
                        {icon("refresh")}
                        {i18n.t(MessageKey::Retry)}
                    </Button>
                </div>
            }
        });

        let cards = if items.is_empty() {
            view! {
                <div class="shipments-grid__empty">{i18n.t(MessageKey::NoShipments)}</div>
            }
            .into_any()
        } else {
            view! {
                <div class="shipments-grid">
                    {items
                        .into_iter()
                        .map(|shipment| {
                            view! {
                                <ShipmentCard
                                    shipment=shipment
                                    on_show_history=Callback::new(show_history)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        };

        view! {
            {error_box}
            {cards}
        }
        .into_any()
    };

    view! {
        <div class="page page--wide">
            <DashboardHeader on_upload=Callback::new(move |_| upload_open.set(true)) />

            <FiltersBar state=state on_change=Callback::new(move |_| load()) />

            <div class="page-content">{grid}</div>

            <PaginationControls
                page_info=Signal::derive(move || state.with(|s| s.page_info()))
                is_loading=Signal::derive(move || state.with(|s| s.is_loading))
                on_page_change=Callback::new(go_to_page)
            />

            <UploadInvoicesDialog
                open=upload_open
                on_uploaded=Callback::new(move |_| load())
            />

            <ShipmentHistoryDialog
                open=history_open
                shipment=Signal::derive(move || history_target.get())
            />
        </div>
    }
}
