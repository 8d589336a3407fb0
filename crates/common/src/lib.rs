//! `tp-common` — Shared types for the TrackPort motion-transfer engine.
//!
//! This crate is the foundation the timeline model and the transfer engine
//! depend on. It defines:
//!
//! - **Types**: `TimeCode`, `NormPoint`, `PixelDelta`, `PixelPoint`,
//!   `Resolution` (newtypes for safety)
//! - **Regions**: `TimeRegion` (an event's inclusive placement on the
//!   shared timeline, with local/global conversions)
//! - **Coordinates**: pure conversions between normalized mask space,
//!   pixel space, and a zoomed view cutout (`to_pixel_delta`,
//!   `view_to_normalized`)

pub mod coords;
pub mod region;
pub mod types;

// Re-export commonly used items at crate root
pub use coords::{to_pixel_delta, view_to_normalized, ViewCutout};
pub use region::TimeRegion;
pub use types::{
    NormPoint, PixelDelta, PixelPoint, Resolution, TimeCode, TIME_EPSILON_SECS,
};
