use ratatui::layout::Rect;
use ratatui::buffer::Buffer;
use ratatui::widgets::Widget;
use tennews::ui::indicator::{dot_at, dot_columns, dots, DotState, Indicator};

#[test]
fn one_dot_per_slide_with_single_active() {
    for slide_count in 1..=12 {
        for current in 0..slide_count {
            let states = dots(slide_count, current);
            assert_eq!(states.len(), slide_count);
            let active: Vec<usize> = states
                .iter()
                .enumerate()
                .filter(|(_, state)| **state == DotState::Active)
                .map(|(index, _)| index)
                .collect();
            assert_eq!(active, vec![current]);
        }
    }
}

#[test]
fn hit_test_matches_drawn_columns() {
    let area = Rect::new(0, 20, 80, 1);
    let states = dots(5, 2);
    for (index, span) in dot_columns(area, &states).into_iter().enumerate() {
        for column in span {
            assert_eq!(dot_at(area, 5, 2, column, 20), Some(index));
        }
    }
}

#[test]
fn gaps_and_other_rows_miss() {
    let area = Rect::new(0, 20, 80, 1);
    let spans = dot_columns(area, &dots(5, 2));
    let gap = spans[0].end;
    assert_eq!(dot_at(area, 5, 2, gap, 20), None);
    assert_eq!(dot_at(area, 5, 2, spans[0].start, 19), None);
    assert_eq!(dot_at(area, 5, 2, 0, 20), None);
}

#[test]
fn empty_area_has_no_hits() {
    assert_eq!(dot_at(Rect::new(0, 0, 80, 0), 3, 0, 40, 0), None);
}

#[test]
fn active_dot_stays_visible_with_many_slides() {
    let area = Rect::new(0, 20, 80, 1);
    for current in [0, 30, 59] {
        let spans = dot_columns(area, &dots(60, current));
        let active = &spans[current];
        assert!(!active.is_empty(), "dot {current} hidden");
        assert!(active.end <= area.right());
        assert_eq!(dot_at(area, 60, current, active.start, 20), Some(current));
    }
}

#[test]
fn hidden_dots_cannot_be_hit() {
    let area = Rect::new(0, 20, 80, 1);
    let spans = dot_columns(area, &dots(60, 59));
    assert!(spans[0].is_empty());
    let hits: Vec<usize> = (area.left()..area.right())
        .filter_map(|column| dot_at(area, 60, 59, column, 20))
        .collect();
    assert!(!hits.contains(&0));
    assert!(hits.contains(&21));
}

#[test]
fn widget_draws_active_dot_at_end_of_long_digest() {
    let area = Rect::new(0, 0, 80, 1);
    let mut buf = Buffer::empty(area);
    Indicator::new(60, 59).render(area, &mut buf);

    let spans = dot_columns(area, &dots(60, 59));
    for column in spans[59].clone() {
        assert_eq!(buf[(column, 0)].symbol(), "━");
    }
    let row: String = (0..80).map(|x| buf[(x, 0)].symbol().to_string()).collect();
    assert_eq!(row.matches('━').count(), 3);
    assert_eq!(row.matches('•').count(), 38);
}
