use ratatui::style::Color;

pub const INK: Color = Color::Rgb(0x1d, 0x1d, 0x1f);
pub const MUTED: Color = Color::Rgb(0x86, 0x86, 0x8b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0xd2, 0xd2, 0xd7);
pub const DATE_RED: Color = Color::Rgb(0xff, 0x3b, 0x30);
pub const BADGE_TEXT: Color = Color::Rgb(0x00, 0x7a, 0xff);
pub const BADGE_FILL: Color = Color::Rgb(0xc6, 0xe5, 0xf3);
pub const NUMBER_BOX: Color = Color::Rgb(0xf5, 0xf5, 0xf7);
pub const DOT_INACTIVE: Color = Color::Rgb(0xd2, 0xd2, 0xd7);
pub const DOT_ACTIVE: Color = INK;
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
