pub mod categories;
pub mod create_category;
pub mod not_found;
