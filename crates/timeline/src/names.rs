//! The fixed naming contract shared with the host effect definitions.
//!
//! These strings must match the host's parameter names exactly; they are the
//! only coupling between the engine and the effect plugins it drives.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of independently tracked mask channels on the motion-tracking effect.
pub const MASK_CHANNELS: usize = 5;

/// Host name of the motion-tracking effect carrying the mask channels.
pub const MOTION_TRACKING_FX: &str = "VEGAS Bézier Masking";

/// Host name of the picture-in-picture effect carrying the corner parameters.
pub const PIP_FX: &str = "VEGAS Picture In Picture";

/// Choice parameter selecting the picture-in-picture mode.
pub const PIP_MODE_PARAM: &str = "KeepProportions";

/// The only picture-in-picture mode whose corners are independently keyframable.
pub const PIP_MODE_FREE_FORM: &str = "Free Form";

/// `Location_{i}` — the tracked 2-D position of mask channel `i`.
pub fn location(channel: usize) -> String {
    format!("Location_{channel}")
}

/// `Width_{i}` — the mask width of channel `i`.
pub fn width(channel: usize) -> String {
    format!("Width_{channel}")
}

/// `Height_{i}` — the mask height of channel `i`.
pub fn height(channel: usize) -> String {
    format!("Height_{channel}")
}

/// `Enable_{i}` — whether mask channel `i` is populated.
pub fn enable(channel: usize) -> String {
    format!("Enable_{channel}")
}

/// One of the four corner parameters of the picture-in-picture effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The host parameter name for this corner.
    pub fn param_name(self) -> &'static str {
        match self {
            Self::TopLeft => "CornerTL",
            Self::TopRight => "CornerTR",
            Self::BottomLeft => "CornerBL",
            Self::BottomRight => "CornerBR",
        }
    }

    /// Human-readable label for choice lists.
    pub fn label(self) -> &'static str {
        match self {
            Self::TopLeft => "Top Left",
            Self::TopRight => "Top Right",
            Self::BottomLeft => "Bottom Left",
            Self::BottomRight => "Bottom Right",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::TopLeft => 0,
            Self::TopRight => 1,
            Self::BottomLeft => 2,
            Self::BottomRight => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
