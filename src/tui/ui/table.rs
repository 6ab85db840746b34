use crate::game::{ComputerMove, Phase};
use crate::hand::can_play;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::card::{color_style, render_card_widget, CARD_WIDTH};
use super::layout::{card_columns, centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(7), // pile
            Constraint::Min(6),    // hand
            Constraint::Length(5), // status bar
        ])
        .split(size);

    let game = &app.game;
    let header_lines = vec![
        Line::from(format!(
            "Deck: {}   Computer: {} cards   Seed: {}",
            game.deck_remaining(),
            game.computer_hand().len(),
            game.seed()
        )),
        Line::from(format!("Turn: {}   {}", game.turn(), phase_label(game.phase()))),
    ];
    let header =
        Paragraph::new(header_lines).block(Block::default().title("uno-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Discard pile, pending wild and the computer's last move
    let pile_block = Block::default().title("Discard").borders(Borders::ALL);
    let pile_area = chunks[1];
    let pile_inner = inner(pile_area);
    f.render_widget(pile_block, pile_area);
    let pile_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CARD_WIDTH + 2),
            Constraint::Length(CARD_WIDTH + 2),
            Constraint::Min(10),
        ])
        .split(pile_inner);
    render_card_widget(
        f,
        pile_cols[0],
        Some(game.top_card()),
        Some("Top".to_string()),
        Some(Color::White),
    );
    if let Some(card) = game.pending_wild() {
        render_card_widget(f, pile_cols[1], Some(card), Some("Wild".into()), Some(Color::Magenta));
    }
    let last = match app.last_computer_move() {
        Some(ComputerMove::Played(card)) => format!("Computer played {card}"),
        Some(ComputerMove::Drew) => "Computer drew a card".to_string(),
        _ => String::new(),
    };
    let mut pile_lines = vec![Line::from(format!("On top: {}", game.top_card()))];
    if !last.is_empty() {
        pile_lines.push(Line::from(Span::styled(last, Style::default().add_modifier(Modifier::DIM))));
    }
    if app.computer.is_waiting() {
        pile_lines.push(Line::from("Computer is thinking..."));
    }
    f.render_widget(Paragraph::new(pile_lines).wrap(Wrap { trim: true }), pile_cols[2]);

    draw_hand(f, chunks[2], app);
    draw_status(f, chunks[3], app);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.choosing_color() {
        draw_color_choice(f);
    }
}

fn phase_label(phase: Phase) -> String {
    match phase {
        Phase::AwaitingPlayerMove => "Your move".to_string(),
        Phase::AwaitingColorChoice => "Choose a color".to_string(),
        Phase::ComputerTurn => "Computer to move".to_string(),
        Phase::GameOver(winner) => format!("Game over, {winner} wins"),
    }
}

fn draw_hand(f: &mut Frame, area: Rect, app: &AppState) {
    let hand = app.game.player_hand();
    let title = format!("Your hand ({})", hand.len());
    f.render_widget(Block::default().title(title).borders(Borders::ALL), area);
    let hand_inner = inner(area);
    if hand.is_empty() {
        f.render_widget(Paragraph::new("No cards left."), hand_inner);
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(hand_inner);
    // Scroll so the selected card stays on screen
    let per_row = usize::from(hand_inner.width / CARD_WIDTH).max(1);
    let first = (app.selected / per_row) * per_row;
    let visible = &hand[first..hand.len().min(first + per_row)];
    let cols = card_columns(rows[0], visible.len(), CARD_WIDTH);
    let movable = app.can_move();
    for (offset, (card, col)) in visible.iter().zip(cols).enumerate() {
        let idx = first + offset;
        let border = if idx == app.selected {
            Some(Color::Cyan)
        } else if movable && can_play(card, app.game.top_card()) {
            Some(Color::White)
        } else {
            Some(Color::DarkGray)
        };
        render_card_widget(f, col, Some(card), Some(format!("{}", idx + 1)), border);
    }
    if hand.len() > per_row {
        let more = format!("cards {}-{} of {}", first + 1, first + visible.len(), hand.len());
        f.render_widget(
            Paragraph::new(Span::styled(more, Style::default().add_modifier(Modifier::DIM))),
            rows[1],
        );
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(status_inner);

    let mut left_info = vec![Line::from(app.game.message().to_string())];
    if app.game.is_stalled() {
        left_info.push(Line::from(Span::styled(
            "The deck is empty and no card can be played. Press N for a new game.",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let movable = app.can_move();
    left_info.push(Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("←/→ select", action_style(movable)),
        Span::raw(" • "),
        Span::styled("Enter play", action_style(movable)),
        Span::raw(" • "),
        Span::styled("D draw", action_style(movable)),
        Span::raw(" • "),
        Span::styled("N new game", action_style(true)),
    ]));

    let right_keys = vec![Line::from(""), Line::from("? help • H history • M menu")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);
}

fn draw_color_choice(f: &mut Frame) {
    let area = centered_rect(50, 30, f.area());
    let block = Block::default().title("Wild card").borders(Borders::ALL);
    let mut choices = vec![Span::raw("Pick a color: ")];
    for (i, &c) in crate::cards::Color::PLAYABLE.iter().enumerate() {
        if i > 0 {
            choices.push(Span::raw("  "));
        }
        let key = c.to_char().to_ascii_uppercase();
        choices.push(Span::styled(format!("[{key}] {c}"), color_style(c)));
    }
    let lines = vec![Line::from(""), Line::from(choices)];
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            let who = entry.seat.map(|s| s.label()).unwrap_or("Table");
            let card = entry.card.map(|c| format!(" {c}")).unwrap_or_default();
            lines.push(Line::from(format!("{who} {}{card}", entry.verb.label())));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Rules:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Match the top card's color or value, or play a wild."),
        Line::from("- Drawing a card ends your turn."),
        Line::from("- First to empty their hand wins."),
        Line::from(""),
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Left / Right: select card"),
        Line::from("- 1-9: select card by position"),
        Line::from("- Enter / Space: play selected card"),
        Line::from("- D: draw a card"),
        Line::from("- R / G / B / Y: name a color after a wild"),
        Line::from("- N: new game"),
        Line::from("- H: history"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply (deals a new game)"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
