//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_provider;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;
use tennews::config::Config;
use tennews::slides::{MarkupSlide, NewsSlide, OpeningSlide, Slide};
use tennews::ui::app::App;
use tennews::ui::link::LinkOpener;

pub fn opening() -> Slide {
    Slide::Opening(OpeningSlide {
        date: "Monday, August 25, 2025".to_string(),
        headline: "Good morning, typhoon chaos hits coastal millions".to_string(),
        reading_time: "2 minute read".to_string(),
    })
}

pub fn news(number: u32, url: Option<&str>) -> Slide {
    Slide::News(NewsSlide {
        number,
        emoji: "*".to_string(),
        title: format!("Story {}", number),
        summary: format!("Summary of story {}", number),
        url: url.map(str::to_string),
    })
}

pub fn markup(content: &str) -> Slide {
    Slide::Markup(MarkupSlide {
        kind: "html".to_string(),
        content: content.to_string(),
    })
}

/// Cover, `stories` linked news items, then an end slide.
pub fn digest(stories: u32) -> Vec<Slide> {
    let mut slides = vec![opening()];
    slides.extend(
        (1..=stories).map(|n| news(n, Some(&format!("https://news.example/{}", n)))),
    );
    slides.push(markup("<h2>That's all for today</h2>"));
    slides
}

/// Records every URL instead of launching a browser.
#[derive(Clone, Default)]
pub struct RecordingOpener {
    pub opened: Arc<Mutex<Vec<String>>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.lock().push(url.to_string());
        Ok(())
    }
}

/// App with `slides` loaded, an 80x24 terminal and a recording opener.
pub fn ready_app(slides: Vec<Slide>) -> (App, RecordingOpener) {
    let opener = RecordingOpener::default();
    let mut app = App::new(&Config::default(), Box::new(opener.clone()));
    app.on_resize(80, 24);
    assert!(app.request_load());
    app.on_slides_loaded(slides);
    (app, opener)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_down(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn left_up(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}
