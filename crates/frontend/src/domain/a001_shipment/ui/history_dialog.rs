use crate::domain::a001_shipment::api::fetch_shipment_history;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::use_i18n;
use crate::shared::list_utils::format_price;
use contracts::domain::a001_shipment::{InvoiceHistoryItem, RequestSequencer, ShipmentSummary};
use contracts::shared::error::FetchError;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use thaw::*;

/// Invoice history of one shipment, loaded every time the dialog opens
#[component]
pub fn ShipmentHistoryDialog(
    open: RwSignal<bool>,
    #[prop(into)] shipment: Signal<Option<ShipmentSummary>>,
) -> impl IntoView {
    let i18n = use_i18n();

    let (items, set_items) = signal(Vec::<InvoiceHistoryItem>::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error, set_error) = signal(Option::<FetchError>::None);
    let sequencer = StoredValue::new(RequestSequencer::default());

    let next_ticket = move || {
        let mut seq = sequencer.get_value();
        let ticket = seq.issue();
        sequencer.set_value(seq);
        ticket
    };

    Effect::new(move |_| {
        let is_open = open.get();
        let target = shipment.get();

        if !is_open {
            // closing drops the data and any response still in flight
            next_ticket();
            set_items.set(Vec::new());
            set_error.set(None);
            set_is_loading.set(false);
            return;
        }
        let Some(target) = target else { return };

        let ticket = next_ticket();
        set_is_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            let result = fetch_shipment_history(&target.id).await;
            if sequencer.try_with_value(|s| s.is_current(ticket)) != Some(true) {
                return;
            }
            match result {
                Ok(resp) => set_items.set(resp.history),
                Err(e) => {
                    log::error!("failed to load history of shipment {}: {}", target.id, e);
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    });

    let title = move || {
        let base = i18n.t(MessageKey::HistoryTitle);
        match shipment.get() {
            Some(s) => format!("{} – {} ({})", base, s.tracking_number, s.company_name),
            None => base.to_string(),
        }
    };

    let body = move || {
        if shipment.get().is_none() {
            return view! {
                <div class="text-muted">{i18n.t(MessageKey::HistoryNoShipment)}</div>
            }
            .into_any();
        }
        if is_loading.get() {
            return view! {
                <div class="history-dialog__loading">
                    <Spinner />
                    <span class="text-muted">{i18n.t(MessageKey::HistoryLoading)}</span>
                </div>
            }
            .into_any();
        }
        if error.with(|e| e.is_some()) {
            return view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{i18n.t(MessageKey::HistoryLoadError)}</span>
                </div>
            }
            .into_any();
        }

        let data = items.get();
        if data.is_empty() {
            return view! {
                <div class="text-muted">{i18n.t(MessageKey::HistoryEmpty)}</div>
            }
            .into_any();
        }

        view! {
            <div class="history-dialog__table">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>{i18n.t(MessageKey::HistoryColumnId)}</TableHeaderCell>
                            <TableHeaderCell>{i18n.t(MessageKey::HistoryColumnPrice)}</TableHeaderCell>
                            <TableHeaderCell>{i18n.t(MessageKey::HistoryColumnWeight)}</TableHeaderCell>
                            <TableHeaderCell>{i18n.t(MessageKey::HistoryColumnUploadedAt)}</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {data
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{item.id}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--right">
                                            <TableCellLayout>{format_price(item.price)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell class="table__cell--right">
                                            <TableCellLayout>{item.weight}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_datetime(&item.uploaded_at)}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()}
                    </TableBody>
                </Table>
            </div>
        }
        .into_any()
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>{body}</DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| open.set(false)
                        >
                            {move || i18n.t(MessageKey::Close)}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
