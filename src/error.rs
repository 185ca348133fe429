//! Error types
//!
//! Two families live here:
//! - [`RejectionReason`]: expected, recoverable outcomes of `add_claim`.
//!   The caller decides how to present them to the user.
//! - [`WallError`]: failures outside claim validation (snapshots, config).

use crate::ClaimId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a candidate claim was not stored
///
/// Validation stops at the first failing check, in variant order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Submitted content string is empty
    #[error("content is empty")]
    EmptyContent,

    /// Image claims must cover at least `min × min` cells
    #[error("image claim of size {size} is below the minimum of {min}")]
    ImageTooSmall { size: i64, min: u32 },

    /// Region leaves the grid or has negative coordinates / non-positive size
    #[error("region is outside the grid")]
    OutOfBounds,

    /// Region intersects an existing claim
    #[error("region overlaps claim {conflicting}")]
    Overlap { conflicting: ClaimId },
}

/// Fieldless category of a [`RejectionReason`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    EmptyContent,
    ImageTooSmall,
    OutOfBounds,
    Overlap,
}

impl RejectionReason {
    pub fn kind(&self) -> RejectionKind {
        match self {
            RejectionReason::EmptyContent => RejectionKind::EmptyContent,
            RejectionReason::ImageTooSmall { .. } => RejectionKind::ImageTooSmall,
            RejectionReason::OutOfBounds => RejectionKind::OutOfBounds,
            RejectionReason::Overlap { .. } => RejectionKind::Overlap,
        }
    }
}

/// Errors raised outside of claim validation
#[derive(Debug, Error)]
pub enum WallError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),

    #[error("snapshot grid {found} does not match store grid {expected}")]
    GridMismatch { expected: String, found: String },

    #[error("corrupt claim at index {index}: {reason}")]
    CorruptClaim {
        index: usize,
        reason: RejectionReason,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for WallError {
    fn from(err: serde_json::Error) -> Self {
        WallError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_kind() {
        let reason = RejectionReason::ImageTooSmall { size: 9, min: 10 };
        assert_eq!(reason.kind(), RejectionKind::ImageTooSmall);
        assert_eq!(
            reason.to_string(),
            "image claim of size 9 is below the minimum of 10"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let err: WallError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, WallError::Serialization(_)));
    }
}
