//! Segment read models produced by the layout engine.

use crate::domain::{blocked, booking};

/// Visual segment of a booking or blocked period within the visible window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Segment {
    /// Number of days the segment renders over.
    pub visible_days: i32,

    /// Whether the real interval starts before the visible window.
    pub is_start_truncated: bool,

    /// Whether the real interval ends past the visible window.
    pub is_end_truncated: bool,

    /// Whether the left edge is a true check-in notch.
    ///
    /// Never set on a truncation edge: bevels mark real arrivals only.
    pub has_left_bevel: bool,

    /// Whether the right edge is a true check-out notch.
    pub has_right_bevel: bool,

    /// Pixel offset of the segment from the window's left edge.
    pub offset_px: f64,

    /// Pixel width of the segment.
    pub width_px: f64,

    /// Whether the source interval was malformed (zero or negative
    /// duration); such segments render nothing and the flag is the caller's
    /// data-quality signal.
    pub malformed: bool,
}

impl Segment {
    /// An invisible [`Segment`] rendering nothing.
    #[must_use]
    pub fn empty(malformed: bool) -> Self {
        Self {
            malformed,
            ..Self::default()
        }
    }

    /// Checks whether this [`Segment`] renders anything at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width_px > 0.0
    }
}

/// Entity a [`PlacedSegment`] visualizes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Source {
    /// A [`Booking`].
    ///
    /// [`Booking`]: crate::domain::Booking
    Booking(booking::Id),

    /// A [`BlockedPeriod`].
    ///
    /// [`BlockedPeriod`]: crate::domain::BlockedPeriod
    Blocked(blocked::Id),
}

/// [`Segment`] placed on a concrete lane of a property row.
///
/// Lane `0` is the topmost; segments fall to lower lanes only when their
/// pixel spans genuinely overlap an already-placed one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedSegment {
    /// Entity this segment visualizes.
    pub source: Source,

    /// Computed visual segment.
    pub segment: Segment,

    /// Lane the segment landed on.
    pub lane: usize,
}

/// Laid-out segments of a whole property row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowLayout {
    /// Placed segments, in placement order.
    pub segments: Vec<PlacedSegment>,

    /// Number of bookings that had to fall below lane `0` because their
    /// pixel spans overlap another booking — a data-integrity violation the
    /// layout renders through instead of crashing on.
    pub overlaps: usize,

    /// Number of malformed intervals encountered and skipped.
    pub malformed: usize,
}
