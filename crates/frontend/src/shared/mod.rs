pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod i18n;
pub mod icons;
pub mod list_utils;
