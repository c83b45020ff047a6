//! Custom error types for VibeCheck.
//!
//! This module provides a centralized error handling system with specific error types
//! for different parts of the application. Note that the website prober deliberately
//! does not use these: it converts every failure into a result value instead.

use std::fmt;

/// Main error type for VibeCheck operations.
#[derive(Debug)]
pub enum VibeCheckError {
    /// Configuration errors (missing env vars, invalid values)
    Config(String),
    /// Network/HTTP errors
    Network(String),
    /// Discord bot errors
    Discord(String),
    /// Invalid input errors
    InvalidInput(String),
    /// Generic I/O errors
    Io(std::io::Error),
}

impl fmt::Display for VibeCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Discord(msg) => write!(f, "Discord error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for VibeCheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VibeCheckError::Io(err) => Some(err),
            _ => None,
        }
    }
}

// Implement From traits for automatic error conversion
impl From<std::io::Error> for VibeCheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<reqwest::Error> for VibeCheckError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<std::env::VarError> for VibeCheckError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for VibeCheck operations.
pub type Result<T> = std::result::Result<T, VibeCheckError>;
