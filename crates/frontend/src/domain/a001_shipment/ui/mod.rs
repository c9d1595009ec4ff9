pub mod card;
pub mod history_dialog;
pub mod list;
