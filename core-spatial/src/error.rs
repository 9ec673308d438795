//! # Spatial Source Error Types

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// Errors raised by the source-connection manager.
///
/// Every operation is synchronous and local, so no error here is transient:
/// a failure leaves the component in its last-known-good connection state
/// and there is nothing to retry.
#[derive(Error, Debug)]
pub enum SpatialSrcError {
    // ========================================================================
    // Usage Errors
    // ========================================================================
    /// `bind` was called on a component that already has a room.
    #[error("audio source is already bound to a room")]
    AlreadyBound,

    /// An operation that requires a room was called before `bind`.
    #[error("audio source is not bound to a room")]
    NotBound,

    // ========================================================================
    // Resolution Errors
    // ========================================================================
    /// A selector source named an element that does not exist in the document.
    #[error("no media element found for selector: #{0}")]
    ElementNotFound(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Logging or component configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A host capability failed.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

impl SpatialSrcError {
    /// Returns `true` if this error is a lifecycle misuse by the caller.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            SpatialSrcError::AlreadyBound | SpatialSrcError::NotBound
        )
    }

    /// Returns `true` if this error came from resolving a source reference.
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, SpatialSrcError::ElementNotFound(_))
    }
}

/// Result type for source-connection operations.
pub type Result<T> = std::result::Result<T, SpatialSrcError>;
