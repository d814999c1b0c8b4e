use ratatui::layout::Rect;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    /// Where the current slide is drawn.
    pub body: Rect,
    pub hint: Rect,
    pub indicator: Rect,
    pub footer: Rect,
}

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;
const HINT_HEIGHT: u16 = 1;
const INDICATOR_HEIGHT: u16 = 1;

pub fn layout_regions(area: Rect) -> Regions {
    let mut remaining = area.height;
    let mut take = |wanted: u16| {
        let got = wanted.min(remaining);
        remaining -= got;
        got
    };
    let header_height = take(HEADER_HEIGHT);
    let footer_height = take(FOOTER_HEIGHT);
    let indicator_height = take(INDICATOR_HEIGHT);
    let hint_height = take(HINT_HEIGHT);
    let body_height = remaining;

    let row = |y: u16, height: u16| Rect {
        x: area.x,
        y,
        width: area.width,
        height,
    };

    let header = row(area.y, header_height);
    let body = row(header.y + header_height, body_height);
    let hint = row(body.y + body_height, hint_height);
    let indicator = row(hint.y + hint_height, indicator_height);
    let footer = row(indicator.y + indicator_height, footer_height);

    Regions {
        header,
        body,
        hint,
        indicator,
        footer,
    }
}

/// Inner column for slide content, capped like a reading column.
pub fn content_column(area: Rect, max_width: u16) -> Rect {
    let horizontal_margin = 2.min(area.width / 2);
    let width = area
        .width
        .saturating_sub(horizontal_margin * 2)
        .min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_stack_without_gaps() {
        let regions = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(regions.header, Rect::new(0, 0, 80, 3));
        assert_eq!(regions.body, Rect::new(0, 3, 80, 16));
        assert_eq!(regions.hint, Rect::new(0, 19, 80, 1));
        assert_eq!(regions.indicator, Rect::new(0, 20, 80, 1));
        assert_eq!(regions.footer, Rect::new(0, 21, 80, 3));
    }

    #[test]
    fn tiny_terminal_keeps_header_first() {
        let regions = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(regions.header.height, 3);
        assert_eq!(regions.footer.height, 1);
        assert_eq!(regions.body.height, 0);
        assert_eq!(regions.indicator.height, 0);
    }

    #[test]
    fn content_column_is_centered() {
        let column = content_column(Rect::new(0, 0, 100, 10), 60);
        assert_eq!(column, Rect::new(20, 0, 60, 10));
    }
}
