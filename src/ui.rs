//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph, Tabs, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, View};
use crate::audio::AudioOutput;
use crate::catalog::{BLOG_POSTS, CONTACT_CHANNELS, CategoryFilter, Track};
use crate::config::UiSettings;
use crate::notice::NoticeVariant;
use crate::playback::PlaybackSlot;

mod cart_panel;
mod format;

use format::format_price;


static CONTROLS_MAP: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = BTreeMap::new();
    map.insert("j/k", "вверх/вниз");
    map.insert("h/l", "пред./след. вкладка");
    map.insert("1-5", "вкладка");
    map.insert("enter/b", "купить");
    map.insert("space/p", "слушать/пауза");
    map.insert("c", "корзина");
    map.insert("i", "о музыканте");
    map.insert("q", "выход");
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["j/k", "h/l", "1-5", "space/p", "enter/b", "c", "i", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Marker shown before a track: playing, paused or nothing.
fn play_marker(slot: PlaybackSlot, track: &Track) -> &'static str {
    match slot {
        PlaybackSlot::Loaded { track: id, playing } if id == track.id => {
            if playing {
                "▶ "
            } else {
                "⏸ "
            }
        }
        _ => "  ",
    }
}

/// One line of the track list.
fn track_line(track: &Track, slot: PlaybackSlot, in_cart: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw(play_marker(slot, track)),
        Span::styled(
            track.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", track.category.label()),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!("  {}  ", track.duration)),
        Span::styled(
            format_price(u64::from(track.price)),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if in_cart {
        spans.push(Span::styled("  ✓", Style::default().fg(Color::Green)));
    }
    Line::from(spans)
}

/// Text of the status line.
fn status_text<A: AudioOutput>(app: &App<A>) -> String {
    let mut parts: Vec<String> = Vec::new();

    match (app.slot(), app.now_playing()) {
        (PlaybackSlot::Loaded { playing, .. }, Some(track)) => {
            let state = if playing { "Играет" } else { "Пауза" };
            parts.push(format!("{}: {}", state, track.title));
        }
        _ => parts.push("Остановлено".to_string()),
    }

    parts.push(format!("Вкладка: {}", app.catalog.filter().label()));

    let count = app.cart.item_count();
    if count > 0 {
        parts.push(format!(
            "Корзина: {} • {}",
            count,
            format_price(app.cart.total_price())
        ));
    } else {
        parts.push("Корзина: пусто".to_string());
    }

    parts.join(" • ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<A: AudioOutput>(frame: &mut Frame, app: &App<A>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(vec![
        Line::from(ui_settings.header_text.as_str().bold()),
        Line::from(ui_settings.tagline.as_str().fg(Color::Gray)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" encore ")
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(header, chunks[0]);

    // Category tabs
    let titles: Vec<Line> = CategoryFilter::TABS
        .iter()
        .enumerate()
        .map(|(i, f)| Line::from(format!("{} {}", i + 1, f.tab_label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.catalog.filter().tab_index())
        .block(Block::bordered().title(" Каталог композиций "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    frame.render_widget(tabs, chunks[1]);

    // Track list and detail pane
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    draw_tracks(frame, main[0], app);
    draw_details(frame, main[1], app);

    let status = Paragraph::new(status_text(app))
        .block(Block::bordered().padding(Padding::left(1)).title(" статус "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[3]);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" управление ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    match app.view {
        View::Catalog => {}
        View::Cart => {
            let area = cart_panel::slide_over_rect(48, frame.area());
            cart_panel::draw(frame, area, &app.cart_snapshot());
        }
        View::About => draw_about(frame, chunks[2]),
    }

    let area = frame.area();
    draw_notices(frame, app, area);
}

fn draw_tracks<A: AudioOutput>(frame: &mut Frame, area: Rect, app: &App<A>) {
    let visible = app.catalog.visible_tracks();
    let slot = app.slot();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|t| ListItem::new(track_line(t, slot, app.cart.cart().contains(t.id))))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" композиции "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(app.catalog.selected_position());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_details<A: AudioOutput>(frame: &mut Frame, area: Rect, app: &App<A>) {
    let text = match app.catalog.selected_track() {
        Some(track) => {
            let action = if app.player.is_playing(track.id) {
                "[space] пауза"
            } else {
                "[space] слушать"
            };
            vec![
                Line::from(track.title.as_str().bold()),
                Line::from(track.category.label().fg(Color::Cyan)),
                Line::from(""),
                Line::from(track.description.as_str()),
                Line::from(""),
                Line::from(format!("⏱ {}", track.duration)),
                Line::from(Span::styled(
                    format_price(u64::from(track.price)),
                    Style::default().fg(Color::Yellow),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    format!("[enter] купить • {action}"),
                    Style::default().fg(Color::Gray),
                )),
            ]
        }
        None => vec![Line::from("Нет композиций")],
    };

    let details = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" подробнее ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(details, area);
}

fn draw_about(frame: &mut Frame, area: Rect) {
    let popup = centered_rect_sized(72, 14, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = vec![Line::from("Блог".bold())];
    for post in BLOG_POSTS {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(post.date, Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(post.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(post.excerpt));
    }
    lines.push(Line::from(""));
    lines.push(Line::from("Свяжитесь со мной".bold()));
    lines.push(Line::from(CONTACT_CHANNELS.join(" • ")));

    let about = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" о музыканте (i закрыть) ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(about, popup);
}

/// Stack live notices in the bottom-right corner, newest at the bottom.
fn draw_notices<A: AudioOutput>(frame: &mut Frame, app: &App<A>, area: Rect) {
    const WIDTH: u16 = 44;
    const HEIGHT: u16 = 4;

    if app.notices.is_empty() {
        return;
    }
    let notices: Vec<_> = app.notices.visible().collect();
    let width = WIDTH.min(area.width);
    let mut bottom = area.y + area.height.saturating_sub(3);

    for notice in notices.iter().rev() {
        if bottom < area.y + HEIGHT {
            break;
        }
        let rect = Rect {
            x: area.x + area.width - width,
            y: bottom - HEIGHT,
            width,
            height: HEIGHT,
        };
        bottom -= HEIGHT;

        let color = match notice.variant {
            NoticeVariant::Default => Color::Green,
            NoticeVariant::Destructive => Color::Red,
        };
        frame.render_widget(Clear, rect);
        let toast = Paragraph::new(notice.description.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .title(format!(" {} ", notice.title)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(toast, rect);
    }
}
