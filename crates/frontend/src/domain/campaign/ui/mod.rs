pub mod browse;
pub mod details;
