//! Travel recommendations from a single keyword
//!
//! A typed keyword is classified into a category (beaches, temples or
//! countries), the recommendation dataset is loaded, and the matching items
//! are turned into recommendation cards or a single explanatory message.

pub mod classifier;
pub mod config;
pub mod display;
pub mod error;
pub mod loader;
pub mod models;
pub mod presenter;
pub mod search;
pub mod telemetry;

// Re-export core types for public API
pub use classifier::{Category, Classification, classify};
pub use self::config::TravelRecConfig;
pub use display::ResultsArea;
pub use error::TravelRecError;
pub use loader::{DatasetLoader, FileDatasetLoader, HttpDatasetLoader};
pub use models::{Country, Dataset, RecommendationItem};
pub use presenter::{Card, CardImage, Presenter, RenderOutcome, present};
pub use search::{SearchPage, SearchState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelRecError>;
