//! Segment layout: mapping booking and blocked-period intervals onto the
//! visible [`DateWindow`].

use std::fmt;

use common::Day;
use tracing as log;

use crate::{
    domain::{booking::Status, BlockedPeriod, Booking},
    read::segment::{PlacedSegment, RowLayout, Segment, Source},
};

use super::{window::DateWindow, Config};

/// Half-open `[start, end_exclusive)` day interval: the layout normal form.
///
/// Bookings are half-open already; inclusive blocked-period spans normalize
/// through [`Interval::days_inclusive`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Interval {
    /// First day of the interval.
    start: Day,

    /// Day just past the interval.
    end_exclusive: Day,
}

impl Interval {
    /// Creates an [`Interval`] over a booking's paid nights; `check_out` is
    /// already exclusive.
    #[must_use]
    pub fn nights(check_in: Day, check_out: Day) -> Self {
        Self {
            start: check_in,
            end_exclusive: check_out,
        }
    }

    /// Creates an [`Interval`] over an inclusive range of days.
    #[must_use]
    pub fn days_inclusive(first: Day, last: Day) -> Self {
        Self {
            start: first,
            end_exclusive: last + 1,
        }
    }

    /// Returns the first day of this [`Interval`].
    #[must_use]
    pub fn start(self) -> Day {
        self.start
    }

    /// Returns the day just past this [`Interval`].
    #[must_use]
    pub fn end_exclusive(self) -> Day {
        self.end_exclusive
    }

    /// Checks whether this [`Interval`] has zero or negative duration.
    #[must_use]
    pub fn is_malformed(self) -> bool {
        self.start >= self.end_exclusive
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            start,
            end_exclusive,
        } = self;
        write!(f, "[{start}, {end_exclusive})")
    }
}

/// Kind of entity a segment visualizes.
///
/// Bevels and half-cell check-in/check-out offsets apply to bookings only;
/// blocked periods render over full cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SegmentKind {
    /// A booking segment.
    Booking,

    /// A blocked-period segment.
    Blocked,
}

/// Computes the visual [`Segment`] of the provided `interval` within the
/// visible `window`.
///
/// Total: malformed intervals come back as zero-width flagged segments and
/// off-window intervals as plain zero-width ones, so a single bad record
/// never breaks a grid render.
#[must_use]
pub fn layout(
    interval: Interval,
    kind: SegmentKind,
    window: DateWindow,
    config: Config,
) -> Segment {
    if interval.is_malformed() {
        log::warn!("malformed interval {interval}, rendering nothing");
        return Segment::empty(true);
    }

    let window_end = window.end_exclusive();
    let visible_start = Day::max(interval.start, window.first());
    let visible_end = Day::min(interval.end_exclusive, window_end);
    if visible_end <= visible_start {
        return Segment::empty(false);
    }

    let is_start_truncated = interval.start < window.first();
    let is_end_truncated = interval.end_exclusive > window_end;

    // A truncation edge never gets a bevel: bevels mark true arrivals and
    // departures only.
    let beveled = matches!(kind, SegmentKind::Booking);
    let has_left_bevel = beveled && !is_start_truncated;
    let has_right_bevel = beveled && !is_end_truncated;

    let cell = config.cell_width_px;
    let mut left = f64::from(visible_start - window.first()) * cell;
    let mut right = f64::from(visible_end - window.first()) * cell;
    if has_left_bevel {
        // A true check-in starts at its cell's midpoint: the first half of
        // the cell belongs to the previous guest's check-out.
        left += cell / 2.0;
    }
    if has_right_bevel {
        // A true check-out reaches into the departure day's cell up to its
        // midpoint.
        right += cell / 2.0;
    }
    let right = right.min(window.width_px(cell));

    Segment {
        visible_days: visible_end - visible_start,
        is_start_truncated,
        is_end_truncated,
        has_left_bevel,
        has_right_bevel,
        offset_px: left,
        width_px: (right - left).max(config.min_segment_px),
        malformed: false,
    }
}

/// Lays out all of a property row's segments, assigning lanes.
///
/// Bookings place first, in the order given: on overlapping pixel spans (a
/// data-integrity violation the layout renders through) the first-seen
/// booking keeps lane `0` and later ones fall below, deterministically.
/// Cancelled bookings are skipped. Blocked periods place after bookings.
#[must_use]
pub fn layout_row(
    bookings: &[Booking],
    blocked: &[BlockedPeriod],
    window: DateWindow,
    config: Config,
) -> RowLayout {
    let mut lanes: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut row = RowLayout::default();

    for booking in bookings {
        if booking.status == Status::Cancelled {
            continue;
        }
        let segment = layout(
            Interval::nights(booking.check_in, booking.check_out),
            SegmentKind::Booking,
            window,
            config,
        );
        if segment.malformed {
            row.malformed += 1;
            continue;
        }
        if !segment.is_visible() {
            continue;
        }
        let lane = place(&mut lanes, &segment);
        if lane > 0 {
            row.overlaps += 1;
            log::warn!(
                "`Booking(id: {})` overlaps an earlier booking, \
                 rendering on lane {lane}",
                booking.id,
            );
        }
        row.segments.push(PlacedSegment {
            source: Source::Booking(booking.id),
            segment,
            lane,
        });
    }

    for period in blocked {
        let segment = layout(
            Interval::days_inclusive(period.span.first(), period.span.last()),
            SegmentKind::Blocked,
            window,
            config,
        );
        if !segment.is_visible() {
            continue;
        }
        let lane = place(&mut lanes, &segment);
        row.segments.push(PlacedSegment {
            source: Source::Blocked(period.id),
            segment,
            lane,
        });
    }

    row
}

/// Puts the segment onto the first lane its pixel span fits, occupying it.
///
/// Spans touching edge-to-edge (same-day turnover meeting at a cell
/// midpoint) share a lane.
fn place(lanes: &mut Vec<Vec<(f64, f64)>>, segment: &Segment) -> usize {
    let (left, right) = (segment.offset_px, segment.offset_px + segment.width_px);
    let lane = lanes
        .iter()
        .position(|spans| spans.iter().all(|&(s, e)| right <= s || e <= left));
    let lane = match lane {
        Some(lane) => lane,
        None => {
            lanes.push(Vec::new());
            lanes.len() - 1
        }
    };
    lanes[lane].push((left, right));
    lane
}

#[cfg(test)]
mod spec {
    use common::{Day, DaySpan};
    use time::macros::date;

    use crate::{
        calendar::{window::DateWindow, Config},
        domain::{blocked, booking, BlockedPeriod, Booking},
        read::segment::Source,
    };

    use super::{layout, layout_row, Interval, SegmentKind};

    fn day(d: time::Date) -> Day {
        d.into()
    }

    fn config() -> Config {
        Config {
            cell_width_px: 48.0,
            min_segment_px: 20.0,
        }
    }

    fn booking(check_in: time::Date, check_out: time::Date) -> Booking {
        Booking {
            id: booking::Id::new(),
            property_id: crate::domain::property::Id::new(),
            check_in: day(check_in),
            check_out: day(check_out),
            channel: booking::Channel::Direct,
            guest: "Jo Miller".parse().unwrap(),
            guests_count: 2,
            nightly_rate: "100EUR".parse().unwrap(),
            status: booking::Status::Confirmed,
        }
    }

    #[test]
    fn truncates_both_edges_without_bevels() {
        // Booking [Jan 1, Jan 10) seen through [Jan 5, Jan 8].
        let window = DateWindow::of_days(day(date!(2026 - 01 - 05)), 4).unwrap();
        let segment = layout(
            Interval::nights(day(date!(2026 - 01 - 01)), day(date!(2026 - 01 - 10))),
            SegmentKind::Booking,
            window,
            config(),
        );

        assert!(segment.is_start_truncated);
        assert!(segment.is_end_truncated);
        assert!(!segment.has_left_bevel);
        assert!(!segment.has_right_bevel);
        assert_eq!(segment.visible_days, 4);
        assert_eq!(segment.offset_px, 0.0);
        assert_eq!(segment.width_px, 4.0 * 48.0);
    }

    #[test]
    fn bevels_a_fully_visible_booking() {
        // Booking [Jan 5, Jan 8) inside [Jan 1, Jan 10].
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let segment = layout(
            Interval::nights(day(date!(2026 - 01 - 05)), day(date!(2026 - 01 - 08))),
            SegmentKind::Booking,
            window,
            config(),
        );

        assert!(!segment.is_start_truncated);
        assert!(!segment.is_end_truncated);
        assert!(segment.has_left_bevel);
        assert!(segment.has_right_bevel);
        assert_eq!(segment.visible_days, 3);
        // Midpoint of the check-in cell to the midpoint of the check-out
        // cell.
        assert_eq!(segment.offset_px, 4.0 * 48.0 + 24.0);
        assert_eq!(segment.width_px, 3.0 * 48.0);
    }

    #[test]
    fn truncated_start_with_real_checkout() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 05)), 10).unwrap();
        let segment = layout(
            Interval::nights(day(date!(2026 - 01 - 01)), day(date!(2026 - 01 - 08))),
            SegmentKind::Booking,
            window,
            config(),
        );

        assert!(segment.is_start_truncated);
        assert!(!segment.is_end_truncated);
        assert!(!segment.has_left_bevel);
        assert!(segment.has_right_bevel);
        assert_eq!(segment.visible_days, 3);
        assert_eq!(segment.offset_px, 0.0);
        assert_eq!(segment.width_px, 3.0 * 48.0 + 24.0);
    }

    #[test]
    fn blocked_periods_render_square_over_full_cells() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let segment = layout(
            Interval::days_inclusive(
                day(date!(2026 - 01 - 05)),
                day(date!(2026 - 01 - 07)),
            ),
            SegmentKind::Blocked,
            window,
            config(),
        );

        assert!(!segment.has_left_bevel);
        assert!(!segment.has_right_bevel);
        assert_eq!(segment.visible_days, 3);
        assert_eq!(segment.offset_px, 4.0 * 48.0);
        assert_eq!(segment.width_px, 3.0 * 48.0);
    }

    #[test]
    fn malformed_interval_renders_nothing_but_flags() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        for (check_in, check_out) in [
            (date!(2026 - 01 - 05), date!(2026 - 01 - 05)),
            (date!(2026 - 01 - 08), date!(2026 - 01 - 05)),
        ] {
            let segment = layout(
                Interval::nights(day(check_in), day(check_out)),
                SegmentKind::Booking,
                window,
                config(),
            );
            assert!(segment.malformed);
            assert!(!segment.is_visible());
            assert_eq!(segment.width_px, 0.0);
        }
    }

    #[test]
    fn off_window_interval_is_invisible_but_well_formed() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let segment = layout(
            Interval::nights(day(date!(2026 - 02 - 01)), day(date!(2026 - 02 - 05))),
            SegmentKind::Booking,
            window,
            config(),
        );
        assert!(!segment.malformed);
        assert!(!segment.is_visible());
    }

    #[test]
    fn tiny_segments_get_the_width_floor() {
        let tight = Config {
            cell_width_px: 10.0,
            min_segment_px: 20.0,
        };
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let segment = layout(
            Interval::nights(day(date!(2026 - 01 - 05)), day(date!(2026 - 01 - 06))),
            SegmentKind::Booking,
            window,
            tight,
        );
        assert_eq!(segment.width_px, 20.0);
    }

    #[test]
    fn checkout_midpoint_clamps_at_the_window_edge() {
        // Check-out lands on the day right past the window: not a
        // truncation, but its cell midpoint lies outside the grid.
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 8).unwrap();
        let segment = layout(
            Interval::nights(day(date!(2026 - 01 - 08)), day(date!(2026 - 01 - 09))),
            SegmentKind::Booking,
            window,
            config(),
        );
        assert!(!segment.is_end_truncated);
        assert!(segment.has_right_bevel);
        assert_eq!(segment.offset_px, 7.0 * 48.0 + 24.0);
        assert_eq!(segment.width_px, 24.0);
    }

    #[test]
    fn same_day_turnover_meets_at_the_cell_midpoint() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let a = booking(date!(2026 - 01 - 01), date!(2026 - 01 - 05));
        let b = booking(date!(2026 - 01 - 05), date!(2026 - 01 - 09));

        let row = layout_row(&[a, b], &[], window, config());

        assert_eq!(row.segments.len(), 2);
        assert_eq!(row.overlaps, 0);
        let (a, b) = (&row.segments[0], &row.segments[1]);
        assert_eq!(a.lane, 0);
        assert_eq!(b.lane, 0);
        // A's right edge and B's left edge meet at the Jan 5 cell midpoint.
        let midpoint = 4.0 * 48.0 + 24.0;
        assert_eq!(a.segment.offset_px + a.segment.width_px, midpoint);
        assert_eq!(b.segment.offset_px, midpoint);
    }

    #[test]
    fn overlapping_bookings_fall_to_a_lower_lane() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let first = booking(date!(2026 - 01 - 01), date!(2026 - 01 - 06));
        let second = booking(date!(2026 - 01 - 04), date!(2026 - 01 - 09));

        let row = layout_row(
            &[first.clone(), second.clone()],
            &[],
            window,
            config(),
        );

        assert_eq!(row.overlaps, 1);
        assert_eq!(row.segments[0].source, Source::Booking(first.id));
        assert_eq!(row.segments[0].lane, 0);
        assert_eq!(row.segments[1].source, Source::Booking(second.id));
        assert_eq!(row.segments[1].lane, 1);
    }

    #[test]
    fn cancelled_bookings_are_skipped() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let mut cancelled = booking(date!(2026 - 01 - 02), date!(2026 - 01 - 04));
        cancelled.status = booking::Status::Cancelled;

        let row = layout_row(&[cancelled], &[], window, config());
        assert!(row.segments.is_empty());
    }

    #[test]
    fn malformed_bookings_are_counted_not_rendered() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let malformed = booking(date!(2026 - 01 - 05), date!(2026 - 01 - 05));

        let row = layout_row(&[malformed], &[], window, config());
        assert!(row.segments.is_empty());
        assert_eq!(row.malformed, 1);
    }

    #[test]
    fn blocked_periods_place_alongside_bookings() {
        let window =
            DateWindow::of_days(day(date!(2026 - 01 - 01)), 10).unwrap();
        let b = booking(date!(2026 - 01 - 01), date!(2026 - 01 - 04));
        let period = BlockedPeriod {
            id: blocked::Id::new(),
            property_id: b.property_id,
            span: DaySpan::new(
                day(date!(2026 - 01 - 06)),
                day(date!(2026 - 01 - 08)),
            )
            .unwrap(),
            reason: blocked::BlockReason::Maintenance,
            cleaning: None,
        };

        let row = layout_row(&[b], &[period.clone()], window, config());

        assert_eq!(row.segments.len(), 2);
        assert_eq!(row.segments[1].source, Source::Blocked(period.id));
        // Disjoint pixel spans share lane 0.
        assert_eq!(row.segments[1].lane, 0);
    }
}
