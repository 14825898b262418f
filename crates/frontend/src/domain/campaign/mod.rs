pub mod api;
pub mod discovery;
pub mod ui;
