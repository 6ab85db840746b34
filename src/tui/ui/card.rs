use crate::cards::{self, Card};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::inner;

/// Width of one card widget, borders included.
pub(super) const CARD_WIDTH: u16 = 8;

pub(super) fn color_style(c: cards::Color) -> Style {
    let fg = match c {
        cards::Color::Red => Color::Red,
        cards::Color::Green => Color::Green,
        cards::Color::Blue => Color::Blue,
        cards::Color::Yellow => Color::Yellow,
        cards::Color::Wild => Color::Magenta,
    };
    Style::default().fg(fg).add_modifier(Modifier::BOLD)
}

/// Face text short enough for a card widget.
pub(super) fn face(card: &Card) -> String {
    match card.value() {
        cards::Value::Skip => "⊘".to_string(),
        cards::Value::Reverse => "⇄".to_string(),
        cards::Value::DrawTwo => "+2".to_string(),
        cards::Value::Wild => "W".to_string(),
        cards::Value::WildDrawFour => "W+4".to_string(),
        v => v.label().to_string(),
    }
}

pub(super) fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    card: Option<&Card>,
    title: Option<String>,
    border: Option<Color>,
) {
    let mut block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    if let Some(t) = title {
        block = block.title(t);
    }
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(face(c), color_style(c.color()))),
        None => Line::from(Span::styled("UNO", Style::default().add_modifier(Modifier::DIM))),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
