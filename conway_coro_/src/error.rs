// error.rs - Startup and run failures of the driver

use crate::config::ConfigError;
use conway::{LifeError, PatternError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Pattern(PatternError),
    Life(LifeError),
    Runtime(std::io::Error),
    /// Writing a generation to stdout failed (closed pipe, full disk).
    Output(std::io::Error),
    Window(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "invalid configuration: {}", e),
            AppError::Pattern(e) => write!(f, "{}", e),
            AppError::Life(e) => write!(f, "{}", e),
            AppError::Runtime(e) => write!(f, "cannot start the coroutine runtime: {}", e),
            AppError::Output(e) => write!(f, "cannot write generation output: {}", e),
            AppError::Window(e) => write!(f, "window error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Pattern(e) => Some(e),
            AppError::Life(e) => Some(e),
            AppError::Runtime(e) => Some(e),
            AppError::Output(e) => Some(e),
            AppError::Window(_) => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<PatternError> for AppError {
    fn from(e: PatternError) -> Self {
        AppError::Pattern(e)
    }
}

impl From<LifeError> for AppError {
    fn from(e: LifeError) -> Self {
        AppError::Life(e)
    }
}
