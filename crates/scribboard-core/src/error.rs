//! Core error types.

use thiserror::Error;

/// Errors raised at the string boundary of the core.
///
/// Geometry and history operations never fail; these only surface when an
/// external caller hands the core a shape or tool name it does not know, or
/// a malformed color string. An unknown kind means the caller and the kernel
/// disagree about the set of supported kinds, so callers should treat it as
/// fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Shape not recognised: {0}")]
    UnknownShape(String),
    #[error("Tool not recognised: {0}")]
    UnknownTool(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

