use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::indicator::Indicator;
use crate::ui::layout::layout_regions;
use crate::ui::slide_view::SlideWidget;
use crate::ui::store::SlideStoreState;
use crate::ui::theme::{MUTED, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const LOADING_TEXT: &str = "Loading news...";
pub const HINT_TEXT: &str = "Scroll or press ↓ for next story";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    let header = Header::new(app.display_date(), app.position());
    frame.render_widget(header.widget(regions.header), regions.header);
    frame.render_widget(Clear, regions.body);

    match app.store() {
        SlideStoreState::Idle | SlideStoreState::Loading => {
            let lines = vec![Line::styled(LOADING_TEXT, Style::default().fg(MUTED))];
            draw_centered(frame, regions.body, lines);
        }
        SlideStoreState::Failed { reason } => {
            draw_centered(
                frame,
                regions.body,
                vec![
                    Line::styled(
                        "Couldn't load today's news",
                        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
                    ),
                    Line::default(),
                    Line::styled(reason.as_str(), Style::default().fg(MUTED)),
                    Line::default(),
                    Line::from("Press r to retry"),
                ],
            );
        }
        SlideStoreState::Ready { .. } => {
            for view in app.slide_views() {
                frame.render_widget(SlideWidget::new(&view), regions.body);
            }
        }
    }

    if app.hint_visible() {
        frame.render_widget(
            Paragraph::new(HINT_TEXT)
                .alignment(Alignment::Center)
                .style(Style::default().fg(MUTED).add_modifier(Modifier::DIM)),
            regions.hint,
        );
    }

    if let Some((current, total)) = app.position() {
        frame.render_widget(Indicator::new(total, current), regions.indicator);
    }

    let footer = Footer::new(app.store().failure().is_some());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn draw_centered(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'_>>) {
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let area = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
