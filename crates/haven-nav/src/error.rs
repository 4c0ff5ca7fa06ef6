//! Navigation errors.
//!
//! Hierarchy transitions themselves never fail; these cover parsing of
//! user-supplied names (levels, roles, coordinates).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("Unknown navigation level '{0}' (expected root, reality, galaxy or view_all)")]
    UnknownLevel(String),

    #[error("Unknown role '{0}' (expected public, partner, sub_admin or super_admin)")]
    UnknownRole(String),

    #[error("Invalid region coordinates '{0}' (expected X,Y,Z integers)")]
    InvalidCoordinates(String),
}
