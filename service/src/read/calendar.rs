//! Calendar row read models.

use common::Day;

use crate::read::{pricing::DailyPricing, segment::RowLayout};

/// Fully composed view model of one property row of the calendar grid.
#[derive(Clone, Debug)]
pub struct RowViewModel {
    /// Per-day cells of the row, in window order.
    pub cells: Vec<DayCell>,

    /// Laid-out booking/blocked segments of the row.
    pub layout: RowLayout,
}

/// Single day cell of a property row.
#[derive(Clone, Debug)]
pub struct DayCell {
    /// [`Day`] the cell renders.
    pub day: Day,

    /// Effective pricing of the day.
    pub pricing: DailyPricing,

    /// Whether a booking visually occupies the day.
    pub occupied: bool,

    /// Whether the day is part of the current selection.
    pub selected: bool,
}

impl DayCell {
    /// Checks whether a drag selection may start on this cell.
    ///
    /// Occupied and blocked cells are not selectable.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.occupied && !self.pricing.is_blocked
    }
}
