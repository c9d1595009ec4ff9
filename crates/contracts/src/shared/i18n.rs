//! Message tables for the two UI languages
//!
//! Every user-visible string goes through [`translate`], so the view layer only
//! ever deals with [`MessageKey`] values and the current [`Locale`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Cs,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cs => "cs",
        }
    }

    /// Label shown on the language switch
    pub fn label(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Cs => "CS",
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Cs]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "cs" => Some(Locale::Cs),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // dashboard
    DashboardTitle,
    DashboardSubtitle,
    FilterPlaceholder,
    NoShipments,
    Export,
    Import,
    Company,
    UploadInvoices,
    DateLabel,
    SortLabel,
    SortNewest,
    SortOldest,
    ResetFilters,
    Loading,
    LoadError,
    Retry,
    PrevPage,
    NextPage,
    PageLabel,
    TotalLabel,
    ShipmentsLabel,
    ShowHistory,

    // upload dialog
    UploadTitle,
    UploadHelperText,
    DropHereText,
    DropHereSubtextPrefix,
    DropHereSubtextClick,
    UploadedFilesLabel,
    RowsLabel,
    AddMore,
    RemoveFile,
    Cancel,
    Confirm,
    Uploading,
    Parsing,
    InvalidJson,
    NoFilesSelected,
    ErrorUpload,
    ColumnTracking,
    ColumnCarrier,
    ColumnRoute,
    ColumnPrice,
    ColumnWeight,

    // history dialog
    HistoryTitle,
    HistoryNoShipment,
    HistoryLoading,
    HistoryLoadError,
    HistoryEmpty,
    HistoryColumnId,
    HistoryColumnPrice,
    HistoryColumnWeight,
    HistoryColumnUploadedAt,
    Close,
}

/// Look up the message for `key` in `locale`
pub fn translate(locale: Locale, key: MessageKey) -> &'static str {
    match locale {
        Locale::En => english(key),
        Locale::Cs => czech(key),
    }
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        DashboardTitle => "Delivro – Shipments & Invoices",
        DashboardSubtitle => "All carrier shipments and invoices in one place.",
        FilterPlaceholder => "Filter by company…",
        NoShipments => {
            "No shipments match the selected filter. Try adjusting the filter or upload new invoices."
        }
        Export => "EXPORT",
        Import => "IMPORT",
        Company => "Company",
        UploadInvoices => "Upload Invoices",
        DateLabel => "Date",
        SortLabel => "Sort",
        SortNewest => "Newest first",
        SortOldest => "Oldest first",
        ResetFilters => "Reset",
        Loading => "Loading shipments…",
        LoadError => "Failed to load shipments.",
        Retry => "Retry",
        PrevPage => "Previous",
        NextPage => "Next",
        PageLabel => "Page",
        TotalLabel => "total",
        ShipmentsLabel => "shipments",
        ShowHistory => "Invoice history",

        UploadTitle => "Preview invoice data",
        UploadHelperText => "Upload a JSON file to see the invoice data before confirming.",
        DropHereText => "Upload a JSON file to see the invoice data before confirming.",
        DropHereSubtextPrefix => "Drag & drop or",
        DropHereSubtextClick => "click to select one or more .json files.",
        UploadedFilesLabel => "Uploaded files",
        RowsLabel => "records",
        AddMore => "Add more",
        RemoveFile => "Remove file",
        Cancel => "Cancel",
        Confirm => "Confirm",
        Uploading => "Uploading…",
        Parsing => "Reading and parsing JSON…",
        InvalidJson => "The file does not contain valid invoice JSON.",
        NoFilesSelected => "Add at least one JSON file before confirming.",
        ErrorUpload => "Something went wrong during upload.",
        ColumnTracking => "Tracking #",
        ColumnCarrier => "Provider",
        ColumnRoute => "Route",
        ColumnPrice => "Price",
        ColumnWeight => "Weight",

        HistoryTitle => "Invoice history",
        HistoryNoShipment => "No shipment selected.",
        HistoryLoading => "Loading invoice history…",
        HistoryLoadError => "Failed to load invoice history.",
        HistoryEmpty => "There is no invoice history for this shipment yet.",
        HistoryColumnId => "ID",
        HistoryColumnPrice => "Price",
        HistoryColumnWeight => "Weight",
        HistoryColumnUploadedAt => "Uploaded at",
        Close => "Close",
    }
}

fn czech(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        DashboardTitle => "Delivro – Zásilky a faktury",
        DashboardSubtitle => "Přehled všech zásilek a faktur od dopravců na jednom místě.",
        FilterPlaceholder => "Filtrovat podle firmy…",
        NoShipments => "Žádné zásilky neodpovídají filtru. Změň filtr nebo nahraj nové faktury.",
        Export => "EXPORT",
        Import => "IMPORT",
        Company => "Firma",
        UploadInvoices => "Nahrát faktury",
        DateLabel => "Datum",
        SortLabel => "Řazení",
        SortNewest => "Nejnovější první",
        SortOldest => "Nejstarší první",
        ResetFilters => "Reset",
        Loading => "Načítám zásilky…",
        LoadError => "Nepodařilo se načíst zásilky.",
        Retry => "Znovu",
        PrevPage => "Předchozí",
        NextPage => "Další",
        PageLabel => "Stránka",
        TotalLabel => "celkem",
        ShipmentsLabel => "zásilek",
        ShowHistory => "Historie faktur",

        UploadTitle => "Náhled fakturačních dat",
        UploadHelperText => "Nahraj JSON soubor a zobrazí se náhled dat před potvrzením.",
        DropHereText => "Nahraj JSON soubor nebo jej přetáhni do tohoto pole.",
        DropHereSubtextPrefix => "Přetáhni sem soubor nebo",
        DropHereSubtextClick => "kliknutím vyber jeden či více .json souborů.",
        UploadedFilesLabel => "Nahrané soubory",
        RowsLabel => "záznamů",
        AddMore => "Přidat další",
        RemoveFile => "Odebrat soubor",
        Cancel => "Zrušit",
        Confirm => "Potvrdit",
        Uploading => "Nahrávám…",
        Parsing => "Načítám a parsuji JSON…",
        InvalidJson => "Soubor neobsahuje validní JSON s fakturami.",
        NoFilesSelected => "Před potvrzením přidej alespoň jeden JSON soubor.",
        ErrorUpload => "Něco se pokazilo při nahrávání.",
        ColumnTracking => "Tracking #",
        ColumnCarrier => "Dopravce",
        ColumnRoute => "Trasa",
        ColumnPrice => "Cena",
        ColumnWeight => "Váha",

        HistoryTitle => "Historie faktur",
        HistoryNoShipment => "Není vybraná žádná zásilka.",
        HistoryLoading => "Načítám historii faktur…",
        HistoryLoadError => "Nepodařilo se načíst historii faktur.",
        HistoryEmpty => "Pro tuto zásilku zatím žádná historie faktur není.",
        HistoryColumnId => "ID",
        HistoryColumnPrice => "Cena",
        HistoryColumnWeight => "Váha",
        HistoryColumnUploadedAt => "Datum nahrání",
        Close => "Zavřít",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_czech() {
        assert_eq!(Locale::default(), Locale::Cs);
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("EN"), Some(Locale::En));
        assert_eq!(Locale::from_code(" cs "), Some(Locale::Cs));
        assert_eq!(Locale::from_code("de"), None);
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn test_languages_differ_where_expected() {
        assert_eq!(translate(Locale::En, MessageKey::SortNewest), "Newest first");
        assert_eq!(translate(Locale::Cs, MessageKey::SortNewest), "Nejnovější první");
        assert_eq!(
            translate(Locale::En, MessageKey::Export),
            translate(Locale::Cs, MessageKey::Export)
        );
    }

    #[test]
    fn test_no_empty_messages() {
        use MessageKey::*;
        let keys = [
            DashboardTitle, FilterPlaceholder, NoShipments, UploadInvoices, Loading, LoadError,
            Retry, PrevPage, NextPage, UploadTitle, InvalidJson, NoFilesSelected, ErrorUpload,
            HistoryTitle, HistoryLoadError, HistoryEmpty, Close,
        ];
        for locale in Locale::all() {
            for key in keys {
                assert!(!translate(locale, key).is_empty(), "{locale} {key:?}");
            }
        }
    }
}
