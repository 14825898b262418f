pub mod category_filter;
pub mod pagination_controls;
pub mod search_input;
pub mod status_badge;

pub use category_filter::CategoryFilter;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use status_badge::StatusBadge;
