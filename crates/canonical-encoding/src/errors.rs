//! # Error Types
//!
//! Failures of the canonical encoder and of document parsing.

use thiserror::Error;

/// Errors produced while encoding a [`Value`](crate::Value).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodeError {
    /// NaN and infinities have no canonical text form.
    #[error("non-finite number cannot be encoded: {0}")]
    NonFiniteNumber(f64),

    /// Nesting deeper than [`MAX_DEPTH`](crate::MAX_DEPTH).
    #[error("nesting depth exceeded: max {max}")]
    DepthExceeded { max: usize },

    /// Writing to the output buffer failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors produced while reading stored bytes back into a tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The bytes are not a well-formed document.
    #[error("malformed document: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Malformed(err.to_string())
    }
}
