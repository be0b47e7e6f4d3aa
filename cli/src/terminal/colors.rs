use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Cyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const ERROR: Color = Color::Red;
pub const SUCCESS: Color = Color::Green;
pub const MUTED: Color = Color::BrightBlack;
