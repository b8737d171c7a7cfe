use ratatui::style::Color;

// Item colors
pub const ACCENT: Color = Color::Rgb(124, 175, 194);          // #7CAFC2
pub const PRIMARY: Color = Color::Rgb(255, 255, 255);         // #FFFFFF

// UI colors
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136);        // #888888
pub const HIGHLIGHT: Color = Color::Rgb(161, 193, 129);       // #A1C181
