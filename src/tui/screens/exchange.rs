//! Wallet screen: checklist, token list and redemption.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::models::task::POINTS_PER_TASK;
use crate::tui::app::{App, ExchangeItem};
use crate::tui::components::layout::{CARD_WIDTH, centered};
use crate::tui::components::{ad_card, spinner, status_bar};

/// Renders the wallet screen.
///
/// Falls back to an empty card when nobody is signed in; the next update
/// redirects to the login screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status bar
            Constraint::Min(10),   // Card
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    render_keybindings(frame, main_layout[2], app);

    let Some(user) = app.controller.user() else {
        return;
    };

    let exchanged = app.controller.has_exchanged();
    let tokens_height = 2 + app.controller.tokens().len() as u16;
    let lower_height = if exchanged {
        u16::try_from(app.event.ads.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
    } else {
        0
    };
    let checklist_height = if exchanged { 0 } else { 8 };

    // The ad list comes from the event file and may be arbitrarily long.
    let card_height = [3, checklist_height, tokens_height, lower_height, 1]
        .into_iter()
        .fold(2u16, u16::saturating_add);
    let card = centered(main_layout[1], CARD_WIDTH, card_height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Header
            Constraint::Length(checklist_height), // Checklist box
            Constraint::Length(tokens_height),    // Tus Tokens
            Constraint::Length(lower_height),     // Descubre Más
            Constraint::Length(1),                // Logout
        ])
        .split(inner);

    let header = vec![
        Line::from(vec![
            Span::styled(" ☺ ", Style::default().fg(Color::Gray).bg(Color::DarkGray)),
            Span::styled(
                format!(" {}", user.name),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {} Beny Pts", user.beny_points),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(header), sections[0]);

    let selected = app.selected_item();

    if !exchanged {
        render_checklist(frame, sections[1], app, selected);
    }

    render_tokens(frame, sections[2], app, selected);

    if exchanged {
        let mut lines = vec![Line::from(Span::styled(
            "Descubre Más",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(ad_card::lines(&app.event.ads));
        frame.render_widget(Paragraph::new(lines), sections[3]);
    }

    let logout_style = highlight(
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
        selected == Some(ExchangeItem::Logout),
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled("[ ⏻ Cerrar Sesión ]", logout_style)))
            .alignment(Alignment::Center),
        sections[4],
    );
}

/// Renders the checklist box with the exchange button.
fn render_checklist(frame: &mut Frame, area: Rect, app: &App, selected: Option<ExchangeItem>) {
    let block = Block::default()
        .title(" Bienvenido, canjea tus tokens: ")
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let reward = format!("+{POINTS_PER_TASK} Beny Pts");
    let mut lines: Vec<Line> = Vec::new();

    for task in app.exchange.checklist.tasks() {
        let badge = if task.completed {
            Span::styled(" ✓ ", Style::default().fg(Color::White).bg(Color::Green))
        } else {
            Span::styled(
                format!(" {} ", task.id),
                Style::default().fg(Color::Gray).bg(Color::DarkGray),
            )
        };
        let text_style = if task.completed {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::Gray)
        };
        let text_style = highlight(text_style, selected == Some(ExchangeItem::Task(task.id)));

        let used = 3 + 1 + task.text.width() + reward.width();
        let gap = (inner.width as usize).saturating_sub(used).max(1);
        lines.push(Line::from(vec![
            badge,
            Span::raw(" "),
            Span::styled(task.text.as_str(), text_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(reward.as_str(), Style::default().fg(Color::Yellow)),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(exchange_button(app, selected == Some(ExchangeItem::ExchangeButton)));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Builds the "CANJEAR TOKENS" button line.
fn exchange_button(app: &App, is_selected: bool) -> Line<'static> {
    let label = if app.controller.is_loading() {
        format!(" {} Procesando... ", spinner::frame(app.ticks))
    } else {
        " CANJEAR TOKENS ".to_string()
    };
    let style = if app.can_exchange() || app.controller.is_loading() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Black)
    };
    Line::from(Span::styled(label, highlight(style, is_selected))).alignment(Alignment::Center)
}

/// Renders the token list.
fn render_tokens(frame: &mut Frame, area: Rect, app: &App, selected: Option<ExchangeItem>) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Tus Tokens",
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];

    for (index, token) in app.controller.tokens().iter().enumerate() {
        let redeemable = app.is_redeemable(index);
        let label = format!(" {} {}", token.kind.icon(), token.kind.ticker());
        let balance = token.balance.to_string();
        let tag = if redeemable { " CANJEAR " } else { "" };

        let used = label.width() + balance.len() + tag.len() + 1;
        let gap = (area.width as usize).saturating_sub(used).max(1);

        let row_style = highlight(
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            selected == Some(ExchangeItem::Token(index)),
        );
        lines.push(Line::from(vec![
            Span::styled(label, row_style),
            Span::raw(" ".repeat(gap)),
            Span::styled(balance, row_style),
            Span::raw(" "),
            Span::styled(tag, Style::default().fg(Color::Black).bg(Color::White)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Renders keybindings help for the wallet or the open scanner.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let help = if app.exchange.scanner.is_some() {
        Line::from(vec![
            Span::styled(" Esc", key),
            Span::raw(" cerrar escáner"),
        ])
    } else {
        Line::from(vec![
            Span::styled(" ↑↓", key),
            Span::raw(" mover  "),
            Span::styled("Enter", key),
            Span::raw(" elegir  "),
            Span::styled("1-3", key),
            Span::raw(" tareas  "),
            Span::styled("e", key),
            Span::raw(" canjear  "),
            Span::styled("o", key),
            Span::raw(" cerrar sesión  "),
            Span::styled("q", key),
            Span::raw(" salir"),
        ])
    };
    frame.render_widget(Paragraph::new(help).style(Style::default().fg(Color::DarkGray)), area);
}

/// Reverses `style` when the row is highlighted.
fn highlight(style: Style, is_selected: bool) -> Style {
    if is_selected {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}
