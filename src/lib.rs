pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod rank;

pub use data::Record;
pub use error::Error;
pub use pipeline::{build_ranking, Ranking};
pub use rank::SortDirection;
