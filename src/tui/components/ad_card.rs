//! Promotional cards of the "Descubre Más" section.
//!
//! The cards are placeholders and cannot be selected.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const ICONS: [(&str, Color); 3] = [("◆", Color::Cyan), ("?", Color::Gray), ("✦", Color::Yellow)];

/// Builds one line per card, cycling through the card icons.
pub fn lines(titles: &[String]) -> Vec<Line<'_>> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let (icon, color) = ICONS[i % ICONS.len()];
            Line::from(vec![
                Span::styled(format!(" {icon} "), Style::default().fg(color)),
                Span::styled(
                    title.as_str(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  →", Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect()
}
