use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Slate;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status_text = if app.is_sending {
            " Sending message...".to_string()
        } else if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            String::from(" ready")
        };

        // Scroll position as a percentage of the scrollable range
        let max = (app.content_height() - 1.0).max(1.0);
        let pct = ((app.scroll_offset() / max) * 100.0).clamp(0.0, 100.0);

        let help_hint = " q:quit j/k:scroll 1-9:jump c:contact ";
        let position = format!(" {:>3.0}% ", pct);

        let used = status_text.len() + help_hint.len() + position.len();
        let padding = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Slate::FG0).bg(Slate::BG1),
            ),
            Span::styled(" ".repeat(padding), Style::default().bg(Slate::BG1)),
            Span::styled(
                help_hint,
                Style::default().fg(Slate::DIM).bg(Slate::BG1),
            ),
            Span::styled(
                position,
                Style::default().fg(Slate::FG0).bg(Slate::BG1),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
