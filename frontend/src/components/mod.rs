// Reusable components live here.

pub mod error_banner;
pub mod footer;
pub mod header;
pub mod loading_spinner;
