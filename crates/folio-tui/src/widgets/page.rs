use chrono::Datelike;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use folio_core::document::Section;

use crate::app::App;
use crate::theme::Slate;

/// Character cells in a rendered skill bar
const BAR_CELLS: usize = 24;

pub struct PageWidget;

impl PageWidget {
    /// Render the scrolled page content
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mut lines: Vec<Line> = Vec::new();

        for (index, section) in app.page.sections.iter().enumerate() {
            build_section(&mut lines, app, index, section, area.width);
        }

        // Footer with the current year
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                format!("© {} {}", chrono::Local::now().year(), app.page.title),
                Style::default().fg(Slate::DIM),
            ))
            .centered(),
        );

        let offset = app.scroll_offset().floor() as u16;
        let paragraph = Paragraph::new(lines)
            .style(Style::default().bg(Slate::BG0))
            .scroll((offset, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Height of a section in rows for the given width. Must stay in lockstep
/// with `build_section`; the layout pass and the renderer both call it.
pub fn section_height(section: &Section, width: u16) -> u16 {
    let w = usable_width(width);
    // Leading blank, title, underline
    let mut height = 3usize;
    for paragraph in &section.paragraphs {
        height += wrap(paragraph, w).len() + 1;
    }
    for card in &section.cards {
        height += 1;
        if let Some(ref body) = card.body {
            height += wrap(body, w.saturating_sub(2)).len();
        }
        height += 1;
    }
    if !section.stats.is_empty() {
        height += 2;
    }
    height += section.skills.len();
    if !section.skills.is_empty() {
        height += 1;
    }
    if section.contact_form {
        height += 2;
    }
    height as u16
}

fn usable_width(width: u16) -> usize {
    (width as usize).saturating_sub(2).max(10)
}

fn build_section(lines: &mut Vec<Line>, app: &App, index: usize, section: &Section, width: u16) {
    let w = usable_width(width);
    let revealed = app.engine.section_revealed(index);

    let body_style = if revealed {
        Style::default().fg(Slate::FG0)
    } else {
        Style::default().fg(Slate::DIM)
    };
    let title_style = if revealed {
        Style::default()
            .fg(Slate::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Slate::DIM)
    };

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(section.title.clone(), title_style)));
    lines.push(Line::from(Span::styled(
        "─".repeat(section.title.width().min(w)),
        Style::default().fg(Slate::DIM),
    )));

    for paragraph in &section.paragraphs {
        for wrapped in wrap(paragraph, w) {
            lines.push(Line::from(Span::styled(wrapped, body_style)));
        }
        lines.push(Line::default());
    }

    // Children share one stagger sequence: cards, then stats, then skills
    let mut child = 0usize;

    for card in &section.cards {
        let shown = app.engine.child_revealed(index, child);
        child += 1;
        let style = if shown {
            Style::default().fg(Slate::FG0)
        } else {
            Style::default().fg(Slate::DIM)
        };
        lines.push(Line::from(vec![
            Span::styled("▸ ", Style::default().fg(Slate::ACCENT)),
            Span::styled(card.title.clone(), style.add_modifier(Modifier::BOLD)),
        ]));
        if let Some(ref body) = card.body {
            for wrapped in wrap(body, w.saturating_sub(2)) {
                lines.push(Line::from(Span::styled(format!("  {}", wrapped), style)));
            }
        }
        lines.push(Line::default());
    }

    if !section.stats.is_empty() {
        let mut spans: Vec<Span> = Vec::new();
        for (stat_idx, stat) in section.stats.iter().enumerate() {
            let shown = app.engine.child_revealed(index, child);
            child += 1;
            let value_style = if shown {
                Style::default()
                    .fg(Slate::YELLOW)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Slate::DIM)
            };
            let label_style = if shown {
                Style::default().fg(Slate::FG0)
            } else {
                Style::default().fg(Slate::DIM)
            };
            spans.push(Span::styled(
                app.engine.stat_text(index, stat_idx),
                value_style,
            ));
            spans.push(Span::styled(format!(" {}   ", stat.label), label_style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    for (skill_idx, skill) in section.skills.iter().enumerate() {
        let shown = app.engine.child_revealed(index, child);
        child += 1;
        let name_style = if shown {
            Style::default().fg(Slate::FG0)
        } else {
            Style::default().fg(Slate::DIM)
        };

        let pct = app.engine.bar_width(index, skill_idx);
        let filled = ((pct / 100.0) * BAR_CELLS as f64).round() as usize;
        let filled = filled.min(BAR_CELLS);

        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", truncate(&skill.name, 14)), name_style),
            Span::styled("█".repeat(filled), Style::default().fg(Slate::BAR)),
            Span::styled(
                "░".repeat(BAR_CELLS - filled),
                Style::default().fg(Slate::BAR_EMPTY),
            ),
            Span::styled(
                format!(" {}", app.engine.skill_text(index, skill_idx)),
                name_style,
            ),
        ]));
    }
    if !section.skills.is_empty() {
        lines.push(Line::default());
    }

    if section.contact_form {
        lines.push(Line::from(vec![
            Span::styled("Want to work together? Press ", body_style),
            Span::styled(
                "c",
                Style::default()
                    .fg(Slate::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to send a message.", body_style),
        ]));
        lines.push(Line::default());
    }
}

/// Greedy word wrap; always yields at least one line
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::document::{Card, Skill, Stat};

    fn section() -> Section {
        Section {
            id: "about".into(),
            title: "About".into(),
            nav_label: None,
            paragraphs: vec!["A short paragraph.".into()],
            cards: vec![Card {
                title: "Card".into(),
                body: Some("Body text".into()),
            }],
            stats: vec![Stat {
                label: "Years".into(),
                target: Some("5".into()),
            }],
            skills: vec![Skill {
                name: "Rust".into(),
                style: Some("width: 75%".into()),
                value: Some("75%".into()),
            }],
            contact_form: false,
        }
    }

    #[test]
    fn test_section_height_counts_every_block() {
        // 3 (blank/title/underline) + 2 (paragraph + gap)
        // + 3 (card title/body/gap) + 2 (stats row + gap) + 2 (skill + gap)
        assert_eq!(section_height(&section(), 80), 12);
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("one two three four five", 9);
        assert!(lines.iter().all(|l| l.width() <= 9));
        assert_eq!(lines.join(" "), "one two three four five");
    }

    #[test]
    fn test_wrap_empty_text_is_one_line() {
        assert_eq!(wrap("", 20).len(), 1);
    }

    #[test]
    fn test_narrow_width_still_positive_height() {
        assert!(section_height(&section(), 1) > 0);
    }
}
