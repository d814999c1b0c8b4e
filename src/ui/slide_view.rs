//! Slide renderer.
//!
//! [`SlideView::new`] is a pure projection of one slide and its position
//! relative to the current index. [`SlideWidget`] draws a view into a frame.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::slides::markup::{render_lines, MarkupMode};
use crate::slides::Slide;
use crate::ui::layout::content_column;
use crate::ui::theme::{
    BADGE_FILL, BADGE_TEXT, DATE_RED, INK, MUTED, NUMBER_BOX, STATUS_ERROR,
};

const READING_WIDTH: u16 = 72;

/// Where a slide sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    /// Already passed; parked above the viewport.
    Prev,
    Active,
    /// Not reached yet; parked below the viewport.
    Next,
}

impl SlidePosition {
    pub fn classify(index: usize, current_index: usize) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&current_index) {
            Ordering::Less => SlidePosition::Prev,
            Ordering::Equal => SlidePosition::Active,
            Ordering::Greater => SlidePosition::Next,
        }
    }

    /// Vertical offset in rows for a viewport `height` rows tall.
    pub fn offset(self, height: u16) -> i32 {
        match self {
            SlidePosition::Prev => -i32::from(height),
            SlidePosition::Active => 0,
            SlidePosition::Next => i32::from(height),
        }
    }
}

/// Per-variant layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideLayout {
    Cover {
        date: String,
        headline: String,
        badge: String,
    },
    Numbered {
        number: u32,
        heading: String,
        summary: String,
    },
    Markup {
        lines: Vec<String>,
    },
    Notice {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub position: SlidePosition,
    pub layout: SlideLayout,
    /// Target opened by a tap on the slide body.
    pub link: Option<String>,
}

impl SlideView {
    pub fn new(slide: &Slide, index: usize, current_index: usize, markup: MarkupMode) -> Self {
        let layout = match slide {
            Slide::Opening(opening) => SlideLayout::Cover {
                date: opening.date.to_uppercase(),
                headline: opening.headline.clone(),
                badge: opening.reading_time.clone(),
            },
            Slide::News(news) => SlideLayout::Numbered {
                number: news.number,
                heading: format!("{} {}", news.emoji, news.title).trim().to_string(),
                summary: news.summary.clone(),
            },
            Slide::Markup(markup_slide) => SlideLayout::Markup {
                lines: render_lines(&markup_slide.content, markup),
            },
            Slide::Fallback(fallback) => SlideLayout::Notice {
                message: format!(
                    "This {} slide could not be displayed.",
                    fallback.declared_type.as_deref().unwrap_or("story")
                ),
            },
        };

        Self {
            position: SlidePosition::classify(index, current_index),
            layout,
            link: slide.link().map(str::to_string),
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.link.is_some()
    }
}

/// Part of `area` a slide covers after shifting it by `offset` rows, if any
/// of it stays inside `area`.
pub fn visible_rect(area: Rect, offset: i32) -> Option<Rect> {
    let height = i32::from(area.height);
    if offset.abs() >= height {
        return None;
    }
    let top = i32::from(area.y) + offset.max(0);
    let visible = height - offset.abs();
    Some(Rect {
        x: area.x,
        y: top as u16,
        width: area.width,
        height: visible as u16,
    })
}

pub struct SlideWidget<'a> {
    view: &'a SlideView,
}

impl<'a> SlideWidget<'a> {
    pub fn new(view: &'a SlideView) -> Self {
        Self { view }
    }

    fn lines(&self) -> (Vec<Line<'a>>, Alignment) {
        let view: &'a SlideView = self.view;
        match &view.layout {
            SlideLayout::Cover {
                date,
                headline,
                badge,
            } => (
                vec![
                    Line::styled(
                        date.as_str(),
                        Style::default().fg(DATE_RED).add_modifier(Modifier::BOLD),
                    ),
                    Line::default(),
                    Line::styled(
                        headline.as_str(),
                        Style::default().fg(INK).add_modifier(Modifier::BOLD),
                    ),
                    Line::default(),
                    Line::from(Span::styled(
                        format!("  {}  ", badge),
                        Style::default().fg(BADGE_TEXT).bg(BADGE_FILL),
                    )),
                ],
                Alignment::Center,
            ),
            SlideLayout::Numbered {
                number,
                heading,
                summary,
            } => {
                let mut heading_style = Style::default().fg(INK).add_modifier(Modifier::BOLD);
                if view.is_clickable() {
                    heading_style = heading_style.add_modifier(Modifier::UNDERLINED);
                }
                (
                    vec![
                        Line::from(Span::styled(
                            format!(" {} ", number),
                            Style::default()
                                .fg(MUTED)
                                .bg(NUMBER_BOX)
                                .add_modifier(Modifier::BOLD),
                        )),
                        Line::default(),
                        Line::styled(heading.as_str(), heading_style),
                        Line::default(),
                        Line::styled(summary.as_str(), Style::default().fg(INK)),
                    ],
                    Alignment::Left,
                )
            }
            SlideLayout::Markup { lines } => (
                lines
                    .iter()
                    .map(|line| Line::styled(line.as_str(), Style::default().fg(INK)))
                    .collect(),
                Alignment::Center,
            ),
            SlideLayout::Notice { message } => (
                vec![Line::styled(
                    message.as_str(),
                    Style::default().fg(STATUS_ERROR),
                )],
                Alignment::Center,
            ),
        }
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(area) = visible_rect(area, self.view.position.offset(area.height)) else {
            return;
        };
        let column = content_column(area, READING_WIDTH);
        // Start a quarter of the way down, like a vertically centered card.
        let top_padding = column.height / 4;
        let column = Rect {
            y: column.y + top_padding,
            height: column.height - top_padding,
            ..column
        };

        let (lines, alignment) = self.lines();
        Paragraph::new(lines)
            .alignment(alignment)
            .wrap(Wrap { trim: true })
            .render(column, buf);
    }
}
