use crate::cards;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::card::color_style;
use super::layout::{centered_rect, inner};

const LOGO: [&str; 6] = [
    r" /$$   /$$ /$$   /$$  /$$$$$$ ",
    r"| $$  | $$| $$$ | $$ /$$__  $$",
    r"| $$  | $$| $$$$| $$| $$  \ $$",
    r"| $$  | $$| $$ $$ $$| $$  | $$",
    r"|  $$$$$$/| $$  $$$$|  $$$$$$/",
    r" \______/ |__/  \__/ \______/ ",
];

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 80, size);
    let block = Block::default().title("uno-rs").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    // One logo row per playable color
    let logo_lines: Vec<Line> = LOGO
        .iter()
        .zip(cards::Color::PLAYABLE.iter().cycle())
        .map(|(l, &c)| Line::from(Span::styled(*l, color_style(c))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 2), Constraint::Min(3)])
        .split(inner_all);

    let logo_para =
        Paragraph::new(logo_lines).wrap(Wrap { trim: false }).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let hints = [
        "[Enter] Deal  [Q] Quit  [Esc] Back to table  [↑/↓] Move  [+/-] Adjust",
        "Seed 0 deals a fresh random game every time.",
    ];
    let mut cfg_lines: Vec<Line> = Vec::new();
    cfg_lines.push(Line::from(Span::styled(
        "Configuration:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for (i, it) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        cfg_lines.push(Line::from(Span::styled(it, style)));
    }
    if let Some(err) = app.action_error() {
        cfg_lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    }
    cfg_lines.push(Line::from(""));
    for hint in hints {
        cfg_lines
            .push(Line::from(Span::styled(hint, Style::default().add_modifier(Modifier::DIM))));
    }
    let cfg_para = Paragraph::new(cfg_lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(cfg_para, rows[1]);
}
