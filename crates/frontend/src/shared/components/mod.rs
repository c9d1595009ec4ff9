pub mod date_input;
pub mod language_switcher;
pub mod pagination_controls;
