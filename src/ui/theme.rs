use ratatui::style::Color;

pub const TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const MUTED_TEXT: Color = Color::Rgb(0x9a, 0x9a, 0x9a);
pub const PLACEHOLDER: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const SEARCH_BACKGROUND: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const ROW_BORDER: Color = Color::Rgb(0x64, 0x64, 0x64);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const PRICE_RISING: Color = Color::Rgb(0xba, 0xe6, 0x09);
pub const PRICE_FALLING: Color = Color::Rgb(0xef, 0x44, 0x44);
