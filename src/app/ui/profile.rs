//! Profile page: identity header, stat chips, and the tabbed
//! achievements / records / settings panel.

use std::time::Duration;

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use crate::app::state::{stagger_visible, AppState};
use crate::app::ui::widgets;
use crate::model::profile::{ProfileTab, UnitSystem};

pub fn render<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let elapsed = state.reveal_elapsed();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    render_identity(frame, rows[0], state);
    render_stats(frame, rows[1], state, elapsed);
    render_tabs(frame, rows[2], state);

    let body_revealed = stagger_visible(elapsed, 4);
    match state.profile.tab {
        ProfileTab::Achievements => render_achievements(frame, rows[3], state, body_revealed),
        ProfileTab::Records => render_records(frame, rows[3], state, body_revealed),
        ProfileTab::Settings => render_settings(frame, rows[3], state, body_revealed),
    }
}

fn render_identity<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let identity = &state.profile.identity;
    let tags: Vec<Span> = identity
        .focus_areas
        .iter()
        .map(|tag| {
            Span::styled(
                format!("[{tag}] "),
                Style::default().fg(widgets::ACCENT),
            )
        })
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            identity.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            identity.tagline.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(tags),
    ];
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_stats<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState, elapsed: Duration) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ]
            .as_ref(),
        )
        .split(area);

    for (index, stat) in state.profile.stats.iter().take(cols.len()).enumerate() {
        let revealed = stagger_visible(elapsed, index);
        let block = Block::default().borders(Borders::ALL);
        if !revealed {
            frame.render_widget(block.style(widgets::reveal_style(false)), cols[index]);
            continue;
        }
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", stat.glyph),
                    Style::default().fg(widgets::ACCENT),
                ),
                Span::styled(
                    stat.value.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                stat.label.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), cols[index]);
    }
}

fn render_tabs<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let titles: Vec<Line> = ProfileTab::ALL
        .iter()
        .map(|tab| Line::from(tab.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(state.profile.tab.index())
        .highlight_style(
            Style::default()
                .fg(widgets::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(symbols::DOT);
    frame.render_widget(tabs, area);
}

fn render_achievements<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    state: &AppState,
    revealed: bool,
) {
    let block = Block::default().title("Achievements").borders(Borders::ALL);
    if !revealed {
        frame.render_widget(block.style(widgets::reveal_style(false)), area);
        return;
    }

    let items: Vec<ListItem> = state
        .profile
        .achievements
        .iter()
        .map(|achievement| {
            let lines = vec![
                Line::from(vec![
                    Span::styled("★ ", Style::default().fg(Color::Rgb(234, 179, 8))),
                    Span::styled(
                        achievement.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::raw(achievement.description.clone())),
                Line::from(Span::styled(
                    achievement.earned_label(),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ];
            ListItem::new(lines)
        })
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_records<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState, revealed: bool) {
    let block = Block::default()
        .title("Personal Records")
        .borders(Borders::ALL);
    if !revealed {
        frame.render_widget(block.style(widgets::reveal_style(false)), area);
        return;
    }

    let rows: Vec<Row> = state
        .profile
        .records
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.exercise.clone()),
                Cell::from(Span::styled(
                    record.value.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(
                    record.date_label(),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ];
    let table = Table::new(rows)
        .header(
            Row::new(vec!["Exercise", "Record", "Date"])
                .style(Style::default().fg(Color::DarkGray))
                .bottom_margin(1),
        )
        .block(block)
        .widths(&widths);
    frame.render_widget(table, area);
}

fn render_settings<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState, revealed: bool) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Length(6)].as_ref())
        .split(area);

    render_account(frame, rows[0], state, revealed);
    render_preferences(frame, rows[1], state, revealed);
}

fn render_account<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState, revealed: bool) {
    let block = Block::default().title("Account").borders(Borders::ALL);
    if !revealed {
        frame.render_widget(block.style(widgets::reveal_style(false)), area);
        return;
    }
    let account = &state.profile.account;
    let lines = vec![
        labeled("Name", account.name.as_str()),
        labeled("Email", account.email.as_str()),
        labeled("Bio", account.bio.as_str()),
    ];
    let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn render_preferences<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    state: &AppState,
    revealed: bool,
) {
    let block = Block::default().title("Preferences").borders(Borders::ALL);
    if !revealed {
        frame.render_widget(block.style(widgets::reveal_style(false)), area);
        return;
    }
    let preferences = &state.profile.preferences;
    let lines = vec![
        Line::from(vec![
            Span::styled("Notifications  ", Style::default().fg(Color::DarkGray)),
            toggle_span(preferences.notifications),
        ]),
        Line::from(vec![
            Span::styled("Dark Mode      ", Style::default().fg(Color::DarkGray)),
            toggle_span(preferences.dark_mode),
        ]),
        Line::from(vec![
            Span::styled("Units          ", Style::default().fg(Color::DarkGray)),
            unit_span(preferences.units, UnitSystem::Imperial),
            Span::raw("  "),
            unit_span(preferences.units, UnitSystem::Metric),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn labeled<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label:<7}"),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

fn toggle_span(enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled("on", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("off", Style::default().fg(Color::DarkGray))
    }
}

fn unit_span(current: UnitSystem, option: UnitSystem) -> Span<'static> {
    if current == option {
        Span::styled(
            option.label(),
            Style::default()
                .fg(widgets::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(option.label(), Style::default().fg(Color::DarkGray))
    }
}
