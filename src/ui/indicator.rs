//! Progress dots: one per slide, derived from `(slide_count, current_index)`.
//!
//! The indicator holds no state. Rendering and hit testing share
//! [`dot_columns`], so a click lands on exactly the dot that was drawn there.

use std::ops::Range;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme::{DOT_ACTIVE, DOT_INACTIVE};

const INACTIVE_WIDTH: u16 = 1;
const ACTIVE_WIDTH: u16 = 3;
const GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotState {
    Active,
    Inactive,
}

pub fn dots(slide_count: usize, current_index: usize) -> Vec<DotState> {
    (0..slide_count)
        .map(|index| {
            if index == current_index {
                DotState::Active
            } else {
                DotState::Inactive
            }
        })
        .collect()
}

fn dot_width(state: DotState) -> u16 {
    match state {
        DotState::Active => ACTIVE_WIDTH,
        DotState::Inactive => INACTIVE_WIDTH,
    }
}

/// Indices of the dots drawn in a row `width` columns wide.
///
/// When the row cannot hold every dot, the window follows the active dot so
/// it is always drawn.
fn visible_window(width: u16, states: &[DotState]) -> Range<usize> {
    let len = states.len();
    // n dots need n * (INACTIVE_WIDTH + GAP) - GAP + (ACTIVE_WIDTH - INACTIVE_WIDTH)
    let capacity = (usize::from(width) + usize::from(GAP))
        .saturating_sub(usize::from(ACTIVE_WIDTH - INACTIVE_WIDTH))
        / usize::from(INACTIVE_WIDTH + GAP);
    if len <= capacity {
        return 0..len;
    }
    if capacity == 0 {
        return 0..0;
    }
    let active = states
        .iter()
        .position(|state| *state == DotState::Active)
        .unwrap_or(0);
    let first = active.saturating_sub(capacity / 2).min(len - capacity);
    first..first + capacity
}

/// Absolute column span of every dot, centered in `area`.
///
/// Dots outside the visible window get an empty span.
pub fn dot_columns(area: Rect, states: &[DotState]) -> Vec<Range<u16>> {
    let window = visible_window(area.width, states);
    let shown = &states[window.clone()];
    let total: u32 = shown
        .iter()
        .map(|state| u32::from(dot_width(*state)))
        .sum::<u32>()
        + u32::from(GAP) * (shown.len().saturating_sub(1) as u32);
    let width = u32::from(area.width);
    let start = u32::from(area.x) + width.saturating_sub(total) / 2;
    let end_limit = u32::from(area.x) + width;

    let mut x = start;
    states
        .iter()
        .enumerate()
        .map(|(index, state)| {
            if !window.contains(&index) {
                return area.x..area.x;
            }
            let from = x.min(end_limit);
            let to = (x + u32::from(dot_width(*state))).min(end_limit);
            x += u32::from(dot_width(*state)) + u32::from(GAP);
            // both bounded by end_limit, which fits in u16
            from as u16..to as u16
        })
        .collect()
}

/// Index of the dot drawn at `(column, row)`, if any.
pub fn dot_at(area: Rect, slide_count: usize, current_index: usize, column: u16, row: u16) -> Option<usize> {
    if area.height == 0 || row != area.y {
        return None;
    }
    dot_columns(area, &dots(slide_count, current_index))
        .iter()
        .position(|span| span.contains(&column))
}

pub struct Indicator {
    states: Vec<DotState>,
}

impl Indicator {
    pub fn new(slide_count: usize, current_index: usize) -> Self {
        Self {
            states: dots(slide_count, current_index),
        }
    }
}

impl Widget for Indicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let spans = dot_columns(area, &self.states);
        for (state, span) in self.states.iter().zip(spans) {
            let (symbol, color) = match state {
                DotState::Active => ("━", DOT_ACTIVE),
                DotState::Inactive => ("•", DOT_INACTIVE),
            };
            for x in span {
                if let Some(cell) = buf.cell_mut((x, area.y)) {
                    cell.set_symbol(symbol).set_style(Style::default().fg(color));
                }
            }
        }
    }
}
