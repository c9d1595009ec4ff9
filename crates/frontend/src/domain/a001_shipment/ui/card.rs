use crate::shared::date_utils::{format_date, format_naive_date};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::format_price;
use contracts::domain::a001_shipment::{Shipment, ShipmentSummary};
use contracts::enums::ShipmentMode;
use contracts::shared::i18n::MessageKey;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ShipmentCard(
    shipment: Shipment,
    /// Opens the invoice history of this shipment
    on_show_history: Callback<ShipmentSummary>,
) -> impl IntoView {
    let i18n = use_i18n();

    let summary = ShipmentSummary::from(&shipment);
    let has_history = shipment.has_history();
    let price = format_price(shipment.latest_price());
    let date = shipment
        .created_date()
        .map(format_naive_date)
        .unwrap_or_else(|| format_date(&shipment.created_at));
    let mode = shipment.mode;
    let mode_class = match mode {
        ShipmentMode::Export => "shipment-card__mode shipment-card__mode--export",
        ShipmentMode::Import => "shipment-card__mode shipment-card__mode--import",
    };

    view! {
        <div class="shipment-card">
            <div class="shipment-card__provider">{shipment.provider}</div>

            <div class="shipment-card__body">
                <div>
                    <div class="shipment-card__label">"TRK#"</div>
                    <div class="shipment-card__tracking">{shipment.tracking_number}</div>
                    <div class="shipment-card__company" title=shipment.company.name.clone()>
                        {shipment.company.name.clone()}
                    </div>
                </div>

                <div>
                    <span class="shipment-card__price">{price}</span>
                    <div class="shipment-card__route">
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {shipment.origin_country}
                        </Badge>
                        <span class="shipment-card__arrow">"→"</span>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {shipment.destination_country}
                        </Badge>
                    </div>
                </div>
            </div>

            <div class="shipment-card__aside">
                <div class="shipment-card__date">{date}</div>
                <span class=mode_class>
                    {move || match mode {
                        ShipmentMode::Export => i18n.t(MessageKey::Export),
                        ShipmentMode::Import => i18n.t(MessageKey::Import),
                    }}
                </span>
                {has_history.then(move || {
                    view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| on_show_history.run(summary.clone())
                        >
                            {icon("history")}
                            {move || i18n.t(MessageKey::ShowHistory)}
                        </Button>
                    }
                })}
            </div>
        </div>
    }
}
