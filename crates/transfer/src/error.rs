//! Error types for transfer operations.
//!
//! Every variant is a deterministic input-validation failure, detected
//! before any keyframe is written. Variants carry the event, parameter, or
//! channel involved so the driver can render a user-facing message.

use thiserror::Error;

/// Why a time range could not be resolved between two regions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Cursor at {cursor_ms:.3} ms does not lie within both regions")]
    CursorOutsideOverlap { cursor_ms: f64 },

    #[error("Selection [{start_ms:.3} ms .. {end_ms:.3} ms] is not covered by both regions")]
    SelectionOutsideOverlap { start_ms: f64, end_ms: f64 },
}

/// A registry slot that is disabled or already consumed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Choice slot {0} is disabled or already consumed")]
pub struct SlotUnavailable(pub usize);

/// Errors surfaced by the transfer operations.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Expected {expected} selected video event(s), got {got}")]
    SelectionCount { expected: usize, got: usize },

    #[error("No selected event carries the \"{effect}\" effect")]
    EffectNotFound { effect: String },

    #[error("Parameter \"{param}\" not found on effect \"{effect}\"")]
    ParamNotFound { effect: String, param: String },

    #[error("Effect \"{effect}\" mode must be \"{expected}\", got \"{got}\"")]
    WrongEffectMode {
        effect: String,
        expected: String,
        got: String,
    },

    #[error("Mask channel {channel} is disabled or already assigned")]
    ChannelNotAvailable { channel: usize },

    #[error("Corner \"{corner}\" is already assigned")]
    CornerNotAvailable { corner: String },

    #[error(transparent)]
    Range(#[from] RangeError),
}
