use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for highlighted options
};

impl Theme {
    /// Title text in the header boundary
    pub fn header_text(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Header boundary while the form has errors
    pub fn error_header_text(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.error)
            .add_modifier(Modifier::BOLD)
    }

    /// The rule a boundary line is drawn with
    pub fn boundary(&self, errored: bool) -> Style {
        Style::default().fg(if errored { self.error } else { self.border_normal })
    }

    pub fn help_key(&self) -> Style {
        Style::default().bg(self.comment).fg(Color::Black)
    }

    pub fn help_desc(&self) -> Style {
        Style::default().fg(self.comment)
    }

    pub fn doc_text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn doc_title(&self) -> Style {
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::BOLD)
    }
}
