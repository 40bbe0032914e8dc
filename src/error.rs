//! Error types and handling for the travel recommendation search

use thiserror::Error;

/// Minimum number of recommendations shown when no configuration says otherwise
pub const DEFAULT_MIN_RESULTS: usize = 2;

/// Main error type for a search action
///
/// Every variant is terminal for the search that produced it and is turned
/// into exactly one user-facing message by [`TravelRecError::user_message`].
#[derive(Error, Debug)]
pub enum TravelRecError {
    /// The search box was empty after trimming
    #[error("Empty search input")]
    EmptyInput,

    /// The keyword did not match any category
    #[error("Unrecognized keyword: {keyword}")]
    UnrecognizedKeyword { keyword: String },

    /// The dataset could not be fetched
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// The dataset was fetched but could not be decoded
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// The selected category has fewer items than the display needs
    #[error("Insufficient results: found {found}, required {required}")]
    InsufficientResults { found: usize, required: usize },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl TravelRecError {
    /// Create a new unrecognized keyword error
    pub fn unrecognized<S: Into<String>>(keyword: S) -> Self {
        Self::UnrecognizedKeyword {
            keyword: keyword.into(),
        }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// True for failures of the dataset load, which are also reported to the log
    #[must_use]
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Parse { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelRecError::EmptyInput => {
                "Please enter a keyword: beach, temple, or country.".to_string()
            }
            TravelRecError::UnrecognizedKeyword { .. } => {
                r#"No matches. Try: "beach", "temple", or "country"."#.to_string()
            }
            TravelRecError::Transport { .. } | TravelRecError::Parse { .. } => {
                "Error loading recommendations. Please check your JSON file path.".to_string()
            }
            TravelRecError::InsufficientResults { required, .. } => {
                format!("Not enough recommendations found (minimum {required} required).")
            }
            TravelRecError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}
