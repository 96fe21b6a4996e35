pub mod category;
pub mod collector;
pub mod config;
pub mod course;
pub mod display;
pub mod error;
pub mod logging;
pub mod query;
pub mod repl;
pub mod similarity;

pub use course::Course;
pub use error::AppError;
pub use query::{SearchEngine, SearchResult};
