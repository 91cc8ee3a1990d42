//! Login screen layout and rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;
use crate::tui::components::layout::{CARD_WIDTH, centered};
use crate::tui::components::{spinner, status_bar};

/// Renders the login screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(16),   // Card
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);

    let card = centered(main_layout[1], CARD_WIDTH, 16);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let card_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Heading
            Constraint::Length(1), // Label
            Constraint::Length(3), // Email input
            Constraint::Length(1), // Validation message
            Constraint::Length(1), // Submit
        ])
        .split(inner);

    render_heading(frame, card_layout[0], app);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Tu Correo Electrónico",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        card_layout[1],
    );

    render_email_input(frame, card_layout[2], app);

    if let Some(ref error) = app.login.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::LightRed))),
            card_layout[3],
        );
    }

    render_submit(frame, card_layout[4], app);

    render_keybindings(frame, main_layout[2]);
}

/// Renders the event title and tagline.
fn render_heading(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled("✎", Style::default().fg(Color::Yellow))),
        Line::raw(""),
        Line::from(Span::styled(
            app.event.title.as_str(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.event.tagline.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Renders the email field with its placeholder and cursor.
fn render_email_input(frame: &mut Frame, area: Rect, app: &App) {
    let loading = app.controller.is_loading();
    let border_style = if loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Red)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let input = &app.login.email;
    let content = if input.is_empty() {
        Span::styled("tu@email.com", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input.as_str(), Style::default().fg(Color::White))
    };
    frame.render_widget(Paragraph::new(content).block(block), area);

    if !loading {
        frame.set_cursor_position((
            inner.x + input.cursor_column().min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }
}

/// Renders the submit button, or the spinner while signing in.
fn render_submit(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.controller.is_loading() {
        Line::from(vec![
            Span::styled(
                format!(" {} ", spinner::frame(app.ticks)),
                Style::default().fg(Color::White).bg(Color::Red),
            ),
            Span::styled(
                "Enviando... ",
                Style::default().fg(Color::White).bg(Color::Red),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "[ INGRESAR ]",
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Renders keybindings help.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled(" Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" ingresar  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" salir"),
    ]);
    frame.render_widget(Paragraph::new(help).style(Style::default().fg(Color::DarkGray)), area);
}
