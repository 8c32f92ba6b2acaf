//! Error handling for Region Tracker
//!
//! Classification itself cannot fail; the only fallible paths are loading and
//! validating the optional configuration file.

use thiserror::Error;

/// Main error type for Region Tracker operations
#[derive(Error, Debug)]
pub enum RegionTrackerError {
    /// Errors related to configuration loading or validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<RegionTrackerError>,
    },
}

impl RegionTrackerError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        RegionTrackerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for RegionTrackerError {
    fn from(err: toml::de::Error) -> Self {
        RegionTrackerError::Serialization(err.to_string())
    }
}

/// Result type alias for Region Tracker operations
pub type Result<T> = std::result::Result<T, RegionTrackerError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RegionTrackerError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Into::<RegionTrackerError>::into(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Into::<RegionTrackerError>::into(e).with_context(f()))
    }
}
