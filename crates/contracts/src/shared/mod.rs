pub mod flex;
pub mod ids;
