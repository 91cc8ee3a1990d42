//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;
use crate::tui::components::spinner;

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let controller = &app.controller;

    let session = match controller.user() {
        Some(user) => vec![
            Span::styled(format!(" {} ", user.email), Style::default().fg(Color::White)),
            Span::raw("│"),
            Span::styled(
                format!(" {} Beny Pts ", user.beny_points),
                Style::default().fg(Color::Yellow),
            ),
        ],
        None => vec![Span::styled(" Sin sesión ", Style::default().fg(Color::Gray))],
    };

    let loading = if controller.is_loading() {
        Span::styled(
            format!(" {} ", spinner::frame(app.ticks)),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::raw("")
    };

    let notice = if let Some(ref notice) = app.notice {
        Span::styled(
            format!(" {} ", notice.message),
            Style::default().fg(Color::LightRed),
        )
    } else {
        Span::raw("")
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", controller.screen().label()),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ),
        Span::raw("│"),
    ];
    spans.extend(session);
    spans.extend([Span::raw("│"), loading, notice]);

    let para = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
