//! Multi-day selection over the day grid.

use common::{Day, DaySpan};

/// Drag / shift-click selection state machine.
///
/// The grid forwards pointer events on empty, selectable cells only;
/// release events arrive from a global listener, so a drag ends even when
/// the pointer leaves the grid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Selection {
    /// No selection in progress.
    #[default]
    Idle,

    /// Pointer is down; the live range follows the cursor.
    Dragging {
        /// [`Day`] the drag started on.
        anchor: Day,

        /// [`Day`] the pointer is currently over.
        cursor: Day,
    },

    /// A range was committed and awaits a batch action.
    Committed(DaySpan),
}

impl Selection {
    /// Starts a drag on the provided [`Day`], discarding any previous
    /// selection.
    pub fn begin_drag(&mut self, day: Day) {
        *self = Self::Dragging {
            anchor: day,
            cursor: day,
        };
    }

    /// Moves the drag cursor onto the provided [`Day`].
    ///
    /// No-op unless a drag is in progress.
    pub fn drag_over(&mut self, day: Day) {
        if let Self::Dragging { cursor, .. } = self {
            *cursor = day;
        }
    }

    /// Ends a drag, committing the range between the anchor and the cursor.
    ///
    /// No-op unless a drag is in progress.
    pub fn release(&mut self) {
        if let Self::Dragging { anchor, cursor } = *self {
            *self = Self::Committed(DaySpan::between(anchor, cursor));
        }
    }

    /// Commits the range between the previous anchor and the provided
    /// [`Day`].
    ///
    /// The anchor is the previously committed range's start, letting a user
    /// extend a selection without dragging; with nothing committed, the
    /// clicked day itself.
    pub fn shift_click(&mut self, day: Day) {
        let anchor = match *self {
            Self::Committed(span) => span.first(),
            Self::Dragging { anchor, .. } => anchor,
            Self::Idle => day,
        };
        *self = Self::Committed(DaySpan::between(anchor, day));
    }

    /// Clears the selection: an explicit cancel, or a batch action
    /// succeeded.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }

    /// Returns the current range: live while dragging (for highlighting),
    /// committed otherwise.
    #[must_use]
    pub fn range(&self) -> Option<DaySpan> {
        match *self {
            Self::Idle => None,
            Self::Dragging { anchor, cursor } => {
                Some(DaySpan::between(anchor, cursor))
            }
            Self::Committed(span) => Some(span),
        }
    }

    /// Returns the committed range, if any.
    #[must_use]
    pub fn committed(&self) -> Option<DaySpan> {
        match *self {
            Self::Committed(span) => Some(span),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }

    /// Checks whether the provided [`Day`] is selected.
    ///
    /// Two integer comparisons regardless of the range length.
    #[must_use]
    pub fn contains(&self, day: Day) -> bool {
        self.range().is_some_and(|span| span.contains(day))
    }
}
