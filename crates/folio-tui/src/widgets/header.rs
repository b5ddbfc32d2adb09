use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::theme::Slate;

/// Sticky site header: page title on the left, numbered nav links on the
/// right, with the active link highlighted. The run loop gives this widget
/// no area at all while the header is hidden.
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let active = app.engine.active_section();

        let mut spans: Vec<Span> = vec![
            Span::styled(
                format!(" {} ", app.page.title),
                Style::default()
                    .fg(Slate::ACCENT)
                    .bg(Slate::BG1)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default().bg(Slate::BG1)),
        ];

        for (index, section) in app.page.sections.iter().enumerate() {
            let style = if active == Some(index) {
                Style::default()
                    .fg(Slate::BG0)
                    .bg(Slate::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Slate::FG0).bg(Slate::BG1)
            };
            spans.push(Span::styled(
                format!(" {} {} ", index + 1, section.nav_label()),
                style,
            ));
            spans.push(Span::styled(" ", Style::default().bg(Slate::BG1)));
        }

        let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(Slate::BG1));
        frame.render_widget(header, area);

        // Tagline row under the links
        if area.height > 1 {
            let tagline_area = Rect::new(area.x, area.y + 1, area.width, 1);
            let tagline = app.page.tagline.clone().unwrap_or_default();
            let paragraph = Paragraph::new(Line::from(Span::styled(
                format!(" {}", tagline),
                Style::default().fg(Slate::DIM).bg(Slate::BG1),
            )))
            .style(Style::default().bg(Slate::BG1));
            frame.render_widget(paragraph, tagline_area);
        }
    }
}
