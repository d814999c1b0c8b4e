use crate::ui::theme::{GLOBAL_BORDER, INK, MUTED};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const LOGO: &str = "Ten News";

/// Date on the left, logo in the middle, position on the right.
pub struct Header<'a> {
    date: Option<&'a str>,
    position: Option<(usize, usize)>,
}

impl<'a> Header<'a> {
    pub fn new(date: Option<&'a str>, position: Option<(usize, usize)>) -> Self {
        Self { date, position }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let muted = Style::default().fg(MUTED);
        let logo_style = Style::default().fg(INK).add_modifier(Modifier::BOLD);

        let date = format!("  {}", self.date.unwrap_or(""));
        let position = match self.position {
            Some((current, total)) => format!("{}/{}  ", current + 1, total),
            None => String::new(),
        };

        // Char count, not byte count, so the logo stays centered with Unicode dates.
        let content_width = area.width as usize;
        let logo_width = LOGO.chars().count();
        let logo_start = content_width.saturating_sub(logo_width) / 2;
        let left_pad = logo_start.saturating_sub(date.chars().count());
        let right_pad = content_width
            .saturating_sub(logo_start.max(date.chars().count()) + logo_width)
            .saturating_sub(position.chars().count());

        let line = Line::from(vec![
            Span::styled(date, muted),
            Span::raw(" ".repeat(left_pad)),
            Span::styled(LOGO, logo_style),
            Span::raw(" ".repeat(right_pad)),
            Span::styled(position, muted),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
