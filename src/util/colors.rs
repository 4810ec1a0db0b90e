use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x005fd7a7);
pub const SECONDARY: Color = Color::from_u32(0x002e8b57);
pub const NEUTRAL: Color = Color::from_u32(0x00464646);
pub const BACKGROUND: Color = Color::from_u32(0x00101010);
pub const ACCENT: Color = Color::from_u32(0x00e88fb0);
