//! Placeholder QR scanner shown when redeeming a token.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::models::TokenKind;
use crate::tui::components::layout::centered;

/// Renders the scanner modal for `token` over the current screen.
pub fn render(frame: &mut Frame, token: TokenKind, ticks: u64) {
    let area = centered(frame.area(), 50, 20);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Canjear {} ", token.name()))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [instructions, camera, button] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(inner);

    let text = format!(
        "Apunte la cámara al código QR en el mostrador para recibir su {}.",
        token.prize()
    );
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        instructions,
    );

    render_camera(frame, camera, ticks);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "[ Cerrar ]",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        button,
    );
}

/// Draws the camera placeholder with a scan line sweeping top to bottom.
fn render_camera(frame: &mut Frame, area: Rect, ticks: u64) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let scan_row = (ticks % u64::from(inner.height)) as u16;
    let middle = inner.height / 2;
    let lines: Vec<Line> = (0..inner.height)
        .map(|row| {
            if row == scan_row {
                Line::from(Span::styled(
                    "━".repeat(inner.width as usize),
                    Style::default().fg(Color::Red),
                ))
            } else if row == middle {
                Line::from(Span::styled(
                    "📷 Cámara no disponible",
                    Style::default().fg(Color::DarkGray),
                ))
            } else {
                Line::raw("")
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
