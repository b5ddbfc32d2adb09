use ratatui::style::Color;

/// Slate palette used across the TUI
pub struct Slate;

impl Slate {
    /// Primary background
    pub const BG0: Color = Color::Rgb(0x1e, 0x22, 0x27);
    /// Raised background (header, status bar, popups)
    pub const BG1: Color = Color::Rgb(0x2a, 0x2f, 0x36);
    /// Primary foreground
    pub const FG0: Color = Color::Rgb(0xd8, 0xde, 0xe9);
    /// Muted foreground (unrevealed content, hints)
    pub const DIM: Color = Color::Rgb(0x55, 0x5c, 0x68);
    /// Accent (active nav link, headings)
    pub const ACCENT: Color = Color::Rgb(0x88, 0xc0, 0xd0);
    /// Skill-bar fill
    pub const BAR: Color = Color::Rgb(0xa3, 0xbe, 0x8c);
    /// Empty portion of a skill bar
    pub const BAR_EMPTY: Color = Color::Rgb(0x3b, 0x42, 0x52);
    /// Success notices
    pub const GREEN: Color = Color::Rgb(0xa3, 0xbe, 0x8c);
    /// Warnings and errors
    pub const RED: Color = Color::Rgb(0xbf, 0x61, 0x6a);
    /// Stat values
    pub const YELLOW: Color = Color::Rgb(0xeb, 0xcb, 0x8b);
}
