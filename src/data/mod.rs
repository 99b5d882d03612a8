pub mod loader;
pub mod types;

pub use loader::load_records;
pub use types::Record;
