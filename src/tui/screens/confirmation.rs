//! Confirmation screen shown after a settled exchange.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::App;
use crate::tui::components::layout::{CARD_WIDTH, centered};
use crate::tui::components::status_bar;

/// Renders the confirmation screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(15),   // Card
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);

    let tokens = app.controller.tokens();
    let card = centered(main_layout[1], CARD_WIDTH, 11 + tokens.len() as u16);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![
        Line::from(Span::styled(
            " ✔ ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "¡Canje Exitoso!",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Tus nuevos tokens están en tu billetera.",
            Style::default().fg(Color::Gray),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Nuevos Saldos",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
    ];

    let row_width = inner.width.saturating_sub(4) as usize;
    for token in tokens {
        let label = format!("{} {}", token.kind.icon(), token.name());
        let balance = token.balance.to_string();
        let gap = row_width.saturating_sub(label.width() + 1 + balance.len());
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(Color::White)),
            Span::raw(" ".repeat(gap)),
            Span::styled(
                balance,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "[ VOLVER A TU WALLET ]",
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    let help = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" volver a tu wallet  "),
        Span::styled("o", Style::default().fg(Color::Cyan)),
        Span::raw(" cerrar sesión  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" salir"),
    ]);
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        main_layout[2],
    );
}
