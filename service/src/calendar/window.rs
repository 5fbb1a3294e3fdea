//! [`DateWindow`] definitions.

use common::{Day, DaySpan};

/// Contiguous, ordered range of calendar days currently visible in the
/// scrollable grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateWindow {
    /// Days this [`DateWindow`] spans.
    span: DaySpan,
}

impl DateWindow {
    /// Creates a new [`DateWindow`] over the provided [`DaySpan`].
    #[must_use]
    pub fn new(span: DaySpan) -> Self {
        Self { span }
    }

    /// Creates a new [`DateWindow`] of `num_days` days starting at `first`.
    ///
    /// [`None`] is returned for an empty window.
    #[must_use]
    pub fn of_days(first: Day, num_days: u16) -> Option<Self> {
        let last = first + (i32::from(num_days) - 1);
        DaySpan::new(first, last).map(Self::new)
    }

    /// Returns the first visible [`Day`].
    #[must_use]
    pub fn first(self) -> Day {
        self.span.first()
    }

    /// Returns the last visible [`Day`].
    #[must_use]
    pub fn last(self) -> Day {
        self.span.last()
    }

    /// Returns the [`Day`] just past the visible range.
    #[must_use]
    pub fn end_exclusive(self) -> Day {
        self.span.end_exclusive()
    }

    /// Returns the number of visible days.
    #[must_use]
    pub fn num_days(self) -> i32 {
        self.span.num_days()
    }

    /// Checks whether the provided [`Day`] is visible.
    #[must_use]
    pub fn contains(self, day: Day) -> bool {
        self.span.contains(day)
    }

    /// Checks whether the provided [`Day`] precedes the visible range.
    #[must_use]
    pub fn is_before(self, day: Day) -> bool {
        day < self.span.first()
    }

    /// Checks whether the provided [`Day`] follows the visible range.
    #[must_use]
    pub fn is_after(self, day: Day) -> bool {
        day > self.span.last()
    }

    /// Returns the zero-based column of the provided [`Day`], if visible.
    #[must_use]
    pub fn index_of(self, day: Day) -> Option<usize> {
        if self.contains(day) {
            usize::try_from(day - self.span.first()).ok()
        } else {
            None
        }
    }

    /// Returns an [`Iterator`] over all the visible [`Day`]s.
    pub fn days(self) -> impl Iterator<Item = Day> {
        self.span.days()
    }

    /// Returns the total pixel width of this [`DateWindow`] at the given
    /// cell width.
    #[must_use]
    pub fn width_px(self, cell_width_px: f64) -> f64 {
        f64::from(self.num_days()) * cell_width_px
    }
}
