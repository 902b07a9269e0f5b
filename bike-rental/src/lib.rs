pub mod category;
pub mod date_range;
pub mod error;
pub mod loader;
pub mod record;
