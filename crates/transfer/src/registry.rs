//! Bitmask bookkeeping for mask-channel and corner choices.
//!
//! A registry is a per-invocation value: it is created fresh at the start of
//! an operation, threaded through the selection rounds of that invocation,
//! and dropped at the end. Nothing here is process-wide.

use tp_timeline::names::MASK_CHANNELS;
use tp_timeline::Corner;

use crate::error::SlotUnavailable;

/// Tracks which choice slots exist, and which have already been assigned
/// during a multi-pair session.
///
/// Invariant: `consumed` is always a subset of `enabled`. A slot, once
/// consumed, is not offered again until a new registry is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceRegistry {
    enabled: u8,
    consumed: u8,
    slots: usize,
}

impl ChoiceRegistry {
    /// Registry over the five mask channels, enabled per the host's
    /// `Enable_{i}` flags.
    pub fn masks(flags: [bool; MASK_CHANNELS]) -> Self {
        let mut enabled = 0u8;
        for (i, &on) in flags.iter().enumerate() {
            if on {
                enabled |= 1 << i;
            }
        }
        Self {
            enabled,
            consumed: 0,
            slots: MASK_CHANNELS,
        }
    }

    /// Registry over the four picture-in-picture corners, all enabled.
    pub fn corners() -> Self {
        Self {
            enabled: (1 << Corner::ALL.len()) - 1,
            consumed: 0,
            slots: Corner::ALL.len(),
        }
    }

    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Whether `index` is enabled and not yet consumed.
    pub fn is_available(&self, index: usize) -> bool {
        index < self.slots && (self.enabled & !self.consumed) & (1 << index) != 0
    }

    /// Indices still on offer, in ascending order.
    pub fn available(&self) -> Vec<usize> {
        (0..self.slots).filter(|&i| self.is_available(i)).collect()
    }

    /// True once every enabled slot has been consumed.
    pub fn is_exhausted(&self) -> bool {
        (self.enabled & !self.consumed) == 0
    }

    /// Claim a slot for the current session.
    pub fn consume(&mut self, index: usize) -> Result<(), SlotUnavailable> {
        if !self.is_available(index) {
            return Err(SlotUnavailable(index));
        }
        self.consumed |= 1 << index;
        Ok(())
    }
}
