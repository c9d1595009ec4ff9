use crate::domain::a001_shipment::ui::list::ShipmentDashboard;
use crate::shared::config::AppConfig;
use crate::shared::i18n::I18nProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    log::info!("backend: {}", AppConfig::from_env().backend_url);

    view! {
        <I18nProvider>
            <ShipmentDashboard />
        </I18nProvider>
    }
}
