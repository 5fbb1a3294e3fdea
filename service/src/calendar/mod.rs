//! Calendar engines: visible window, segment layout and multi-day
//! selection.

pub mod layout;
pub mod selection;
pub mod window;

use smart_default::SmartDefault;

pub use self::{selection::Selection, window::DateWindow};

/// Calendar layout configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Width of a single day cell, in pixels.
    #[default(48.0)]
    pub cell_width_px: f64,

    /// Minimum rendered width of a visible segment, in pixels, so tiny
    /// spans never disappear entirely.
    #[default(20.0)]
    pub min_segment_px: f64,
}
