//! Errors raised by the UI layer itself.
//!
//! Network failures never reach these types: search and listings degrade to
//! empty views instead.

use haven_nav::{Feature, NavError, Role};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    Invalid { key: String, value: String },

    #[error(transparent)]
    Nav(#[from] NavError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("Role {role} is not permitted to use {feature:?}")]
    NotPermitted { role: Role, feature: Feature },
}
