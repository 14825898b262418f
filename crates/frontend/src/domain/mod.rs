pub mod application;
pub mod campaign;
