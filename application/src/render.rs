//! Plain-text rendering of the calendar grid.

use itertools::Itertools as _;
use service::{
    calendar::DateWindow,
    domain::Property,
    read::{
        calendar::RowViewModel,
        segment::{PlacedSegment, Source},
    },
};

/// Characters per rendered half-cell.
///
/// Segment pixel spans map onto half-cell columns, so same-day turnovers
/// show up in text exactly like on screen: two segments meeting mid-cell.
const HALF_CELL_CHARS: usize = 3;

/// Renders the day-of-month header of the visible window.
#[must_use]
pub fn header(window: DateWindow) -> String {
    window
        .days()
        .map(|day| {
            format!(
                "{:>width$}",
                day.day_of_month(),
                width = HALF_CELL_CHARS * 2,
            )
        })
        .join("")
}

/// Renders one property row: the nightly price per cell, then one line per
/// segment lane, then data-quality warnings, if any.
#[must_use]
pub fn row(
    property: &Property,
    view: &RowViewModel,
    window: DateWindow,
    cell_width_px: f64,
) -> String {
    let mut lines = vec![
        format!("{} (base {}/night)", property.name, property.nightly_rate),
        prices(view),
    ];

    let width_chars = usize::try_from(window.num_days())
        .unwrap_or_default()
        * HALF_CELL_CHARS
        * 2;
    let num_lanes = view
        .layout
        .segments
        .iter()
        .map(|s| s.lane + 1)
        .max()
        .unwrap_or(0);
    for lane in 0..num_lanes {
        let on_lane: Vec<&PlacedSegment> = view
            .layout
            .segments
            .iter()
            .filter(|s| s.lane == lane)
            .collect();
        lines.push(lane_line(&on_lane, width_chars, cell_width_px / 2.0));
    }

    if view.layout.overlaps > 0 {
        lines.push(format!(
            "! {} booking(s) overlap earlier ones",
            view.layout.overlaps,
        ));
    }
    if view.layout.malformed > 0 {
        lines.push(format!(
            "! {} record(s) with malformed dates skipped",
            view.layout.malformed,
        ));
    }

    lines.join("\n")
}

/// Renders the per-cell nightly prices; blocked days show `--`, selected
/// cells are starred.
fn prices(view: &RowViewModel) -> String {
    view.cells
        .iter()
        .map(|cell| {
            let text = if cell.pricing.is_blocked {
                "--".to_owned()
            } else {
                cell.pricing
                    .final_price
                    .amount
                    .round_dp(0)
                    .normalize()
                    .to_string()
            };
            let mark = if cell.selected { '*' } else { ' ' };
            format!("{text:>5}{mark}")
        })
        .join("")
}

/// Renders all the segments of one lane into a fixed-width line.
fn lane_line(
    segments: &[&PlacedSegment],
    width_chars: usize,
    half_cell_px: f64,
) -> String {
    let mut chars = vec![' '; width_chars];
    for placed in segments {
        let segment = &placed.segment;
        let start = half_cols(segment.offset_px, half_cell_px) * HALF_CELL_CHARS;
        let end = (half_cols(segment.offset_px + segment.width_px, half_cell_px)
            * HALF_CELL_CHARS)
            .min(width_chars);
        if start >= end {
            continue;
        }

        let is_booking = matches!(placed.source, Source::Booking(_));
        let body = if is_booking { '=' } else { '#' };
        for c in &mut chars[start..end] {
            *c = body;
        }
        if is_booking {
            // A bevel is a true check-in/check-out; a missing bevel on a
            // booking means the segment continues off-window.
            chars[start] = if segment.has_left_bevel { '/' } else { '<' };
            chars[end - 1] = if segment.has_right_bevel { '\\' } else { '>' };
        } else {
            chars[start] = '[';
            chars[end - 1] = ']';
        }
    }
    chars.into_iter().collect()
}

/// Maps a pixel offset onto half-cell columns.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "grid offsets are small and non-negative"
)]
fn half_cols(px: f64, half_cell_px: f64) -> usize {
    (px / half_cell_px).round() as usize
}
