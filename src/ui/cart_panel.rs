//! The cart slide-over. Stateless: everything comes from `CartPanelProps`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
};

use crate::app::CartPanelProps;

use super::format::{cart_summary, format_price};

/// Rectangle hugging the right edge of `area`.
pub fn slide_over_rect(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height: area.height,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, props: &CartPanelProps<'_>) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Корзина ")
        .title_bottom(" [j/k] выбор | [d] удалить | [C] очистить | [esc] закрыть ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(inner);

    let summary = Paragraph::new(cart_summary(props.items.len())).fg(Color::Gray);
    frame.render_widget(summary, chunks[0]);

    if props.items.is_empty() {
        let empty = Paragraph::new("Добавьте композиции для покупки")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = props
        .items
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(item.title.as_str().bold()),
                Line::from(item.category.fg(Color::Gray)),
                Line::from(Span::styled(
                    format_price(u64::from(item.price)),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(props.cursor.min(props.items.len() - 1)));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    let total = Paragraph::new(Line::from(vec![
        Span::styled("Итого: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format_price(props.total),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(total, chunks[2]);
}
