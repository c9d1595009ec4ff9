pub mod api;
pub mod file_reader;
pub mod view;
