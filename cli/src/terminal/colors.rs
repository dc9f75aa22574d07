use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0, g: 153, b: 204 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 204, b: 0 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const DEVICE: Color = Color::BrightGreen;
pub const INTERFACE: Color = Color::TrueColor { r: 135, g: 206, b: 250 };
pub const UNNAMED: Color = Color::Red;
