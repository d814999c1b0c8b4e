mod common;

use common::{digest, key, left_down, left_up, mouse, news, opening, ready_app, RecordingOpener};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use ratatui::layout::Rect;
use tennews::config::Config;
use tennews::ui::app::App;
use tennews::ui::indicator::{dot_columns, dots};
use tennews::ui::input::{handle_key, handle_mouse, InputAction};
use tennews::ui::layout::layout_regions;
use tennews::ui::store::SlideStoreState;

fn press_down(app: &mut App, times: usize) {
    for _ in 0..times {
        handle_key(app, key(KeyCode::Down));
    }
}

#[test]
fn arrow_down_walks_forward_and_hides_hint() {
    let (mut app, _) = ready_app(digest(3));
    assert_eq!(app.position(), Some((0, 5)));
    assert!(app.hint_visible());

    press_down(&mut app, 2);

    assert_eq!(app.position(), Some((2, 5)));
    assert!(!app.hint_visible());

    handle_key(&mut app, key(KeyCode::Up));
    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.position(), Some((0, 5)));
    assert!(!app.hint_visible());
}

#[test]
fn last_slide_absorbs_next() {
    let (mut app, _) = ready_app(digest(1));
    press_down(&mut app, 10);
    assert_eq!(app.position(), Some((2, 3)));
}

#[test]
fn clicking_a_dot_jumps_to_it() {
    let (mut app, _) = ready_app(digest(10));
    press_down(&mut app, 7);
    assert_eq!(app.position(), Some((7, 12)));

    let indicator = layout_regions(Rect::new(0, 0, 80, 24)).indicator;
    let spans = dot_columns(indicator, &dots(12, 7));
    let column = spans[3].start;

    handle_mouse(&mut app, left_down(column, indicator.y));
    handle_mouse(&mut app, left_up(column, indicator.y));

    assert_eq!(app.position(), Some((3, 12)));
    assert!(!app.hint_visible());
}

#[test]
fn clicking_between_dots_does_nothing() {
    let (mut app, opener) = ready_app(digest(3));
    let indicator = layout_regions(Rect::new(0, 0, 80, 24)).indicator;
    let spans = dot_columns(indicator, &dots(5, 0));
    let gap = spans[0].end;

    handle_mouse(&mut app, left_down(gap, indicator.y));
    handle_mouse(&mut app, left_up(gap, indicator.y));

    assert_eq!(app.position(), Some((0, 5)));
    assert!(opener.opened.lock().is_empty());
}

#[test]
fn tapping_linked_story_opens_it_without_moving() {
    let (mut app, opener) = ready_app(digest(10));
    press_down(&mut app, 5);

    handle_mouse(&mut app, left_down(40, 10));
    handle_mouse(&mut app, left_up(40, 10));

    assert_eq!(*opener.opened.lock(), vec!["https://news.example/5".to_string()]);
    assert_eq!(app.position(), Some((5, 12)));
}

#[test]
fn tapping_story_without_link_opens_nothing() {
    let (mut app, opener) = ready_app(vec![opening(), news(1, None), news(2, Some("  "))]);
    press_down(&mut app, 1);
    handle_mouse(&mut app, left_down(40, 10));
    handle_mouse(&mut app, left_up(40, 10));

    press_down(&mut app, 1);
    handle_mouse(&mut app, left_down(40, 10));
    handle_mouse(&mut app, left_up(40, 10));

    assert!(opener.opened.lock().is_empty());
    assert_eq!(app.position(), Some((2, 3)));
}

#[test]
fn tapping_cover_opens_nothing() {
    let (mut app, opener) = ready_app(digest(2));
    handle_mouse(&mut app, left_down(40, 10));
    handle_mouse(&mut app, left_up(40, 10));
    assert!(opener.opened.lock().is_empty());
}

#[test]
fn tapping_header_does_not_open_link() {
    let (mut app, opener) = ready_app(digest(2));
    press_down(&mut app, 1);
    handle_mouse(&mut app, left_down(40, 1));
    handle_mouse(&mut app, left_up(40, 1));
    assert!(opener.opened.lock().is_empty());
}

#[test]
fn enter_opens_current_link() {
    let (mut app, opener) = ready_app(digest(2));
    press_down(&mut app, 2);
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(*opener.opened.lock(), vec!["https://news.example/2".to_string()]);
}

#[test]
fn drag_up_goes_next_and_drag_down_goes_back() {
    let (mut app, _) = ready_app(digest(3));

    // 4 rows at 16 units each is past the 50 unit threshold
    handle_mouse(&mut app, left_down(40, 12));
    handle_mouse(&mut app, left_up(40, 8));
    assert_eq!(app.position(), Some((1, 5)));

    handle_mouse(&mut app, left_down(40, 8));
    handle_mouse(&mut app, left_up(40, 12));
    assert_eq!(app.position(), Some((0, 5)));
}

#[test]
fn short_drag_neither_navigates_nor_opens() {
    let (mut app, opener) = ready_app(digest(3));
    press_down(&mut app, 1);

    // 3 rows is 48 units, under the threshold
    handle_mouse(&mut app, left_down(40, 12));
    handle_mouse(&mut app, left_up(40, 9));

    assert_eq!(app.position(), Some((1, 5)));
    assert!(opener.opened.lock().is_empty());
}

#[test]
fn wheel_moves_one_slide_per_notch() {
    let (mut app, _) = ready_app(digest(3));
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 40, 10));
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 40, 10));
    assert_eq!(app.position(), Some((2, 5)));
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollUp, 40, 10));
    assert_eq!(app.position(), Some((1, 5)));
}

#[test]
fn input_before_load_is_ignored() {
    let opener = RecordingOpener::default();
    let mut app = App::new(&Config::default(), Box::new(opener.clone()));
    app.on_resize(80, 24);
    assert!(app.request_load());

    press_down(&mut app, 3);
    handle_mouse(&mut app, mouse(MouseEventKind::ScrollDown, 40, 10));
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.position(), None);
    assert!(app.store().is_loading());
    assert!(opener.opened.lock().is_empty());
}

#[test]
fn failed_load_can_be_retried() {
    let opener = RecordingOpener::default();
    let mut app = App::new(&Config::default(), Box::new(opener));
    assert!(app.request_load());

    // retry is refused while a load is in flight
    assert_eq!(handle_key(&mut app, key(KeyCode::Char('r'))), InputAction::None);

    app.on_load_failed("provider unreachable".to_string());
    assert_eq!(app.store().failure(), Some("provider unreachable"));

    assert_eq!(handle_key(&mut app, key(KeyCode::Char('r'))), InputAction::Reload);
    assert!(app.store().is_loading());

    app.on_slides_loaded(digest(1));
    assert_eq!(app.position(), Some((0, 3)));
    assert_eq!(handle_key(&mut app, key(KeyCode::Char('r'))), InputAction::None);
}

#[test]
fn empty_digest_fails_the_load() {
    let opener = RecordingOpener::default();
    let mut app = App::new(&Config::default(), Box::new(opener));
    assert!(app.request_load());
    app.on_slides_loaded(Vec::new());

    assert!(matches!(app.store(), SlideStoreState::Failed { .. }));
    assert_eq!(app.position(), None);
}

#[test]
fn quit_keys() {
    for event in [
        key(KeyCode::Char('q')),
        key(KeyCode::Esc),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ] {
        let (mut app, _) = ready_app(digest(1));
        handle_key(&mut app, event);
        assert!(app.should_quit());
    }
}

#[test]
fn space_navigates_and_does_not_quit() {
    let (mut app, _) = ready_app(digest(2));
    handle_key(&mut app, key(KeyCode::Char(' ')));
    assert_eq!(app.position(), Some((1, 4)));
    assert!(!app.should_quit());
}

#[test]
fn key_release_is_ignored() {
    let (mut app, _) = ready_app(digest(2));
    let mut release = key(KeyCode::Down);
    release.kind = KeyEventKind::Release;
    handle_key(&mut app, release);
    assert_eq!(app.position(), Some((0, 4)));
}

#[test]
fn header_date_comes_from_cover() {
    let (app, _) = ready_app(digest(1));
    assert_eq!(app.display_date(), Some("Monday, August 25, 2025"));
}

#[test]
fn tap_before_size_is_known_opens_nothing() {
    let opener = RecordingOpener::default();
    let mut app = App::new(&Config::default(), Box::new(opener.clone()));
    assert!(app.request_load());
    app.on_slides_loaded(digest(2));
    press_down(&mut app, 1);

    handle_mouse(&mut app, left_down(40, 10));
    handle_mouse(&mut app, left_up(40, 10));
    assert!(opener.opened.lock().is_empty());

    app.on_resize(80, 24);
    handle_mouse(&mut app, left_down(40, 10));
    handle_mouse(&mut app, left_up(40, 10));
    assert_eq!(*opener.opened.lock(), vec!["https://news.example/1".to_string()]);
}
