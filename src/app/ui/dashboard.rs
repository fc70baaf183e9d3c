//! Dashboard page: greeting, stat tiles, next workouts, progress
//! overview, and the recent activity feed.

use std::time::Duration;

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::state::{charts_revealed, stagger_visible, AppState};
use crate::app::ui::widgets;

pub fn render<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let elapsed = state.reveal_elapsed();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Length(5),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    render_greeting(frame, rows[0]);
    render_metrics(frame, rows[1], state, elapsed);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)].as_ref())
        .split(rows[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(0)].as_ref())
        .split(body[0]);

    render_featured(frame, left[0], state, elapsed);
    render_overview(frame, left[1], state, elapsed);
    widgets::activity_feed(
        frame,
        body[1],
        &state.activities,
        state.clock,
        stagger_visible(elapsed, 7),
    );
}

fn render_greeting<B: Backend>(frame: &mut Frame<B>, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Welcome back! Here's your fitness overview.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Stat tiles fade in left to right, one stagger step apart.
fn render_metrics<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    state: &AppState,
    elapsed: Duration,
) {
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
    for (index, card) in state.metrics.iter().take(cols.len()).enumerate() {
        widgets::metric_card(frame, cols[index], card, stagger_visible(elapsed, index));
    }
}

/// The two upcoming workout cards continue the stagger after the
/// metric tiles.
fn render_featured<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    state: &AppState,
    elapsed: Duration,
) {
    let block = Block::default().title("Next Workouts").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(inner);
    for (index, workout) in state.featured.iter().take(cols.len()).enumerate() {
        widgets::workout_card(
            frame,
            cols[index],
            workout,
            false,
            stagger_visible(elapsed, 3 + index),
        );
    }
}

fn render_overview<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    state: &AppState,
    elapsed: Duration,
) {
    let block = Block::default()
        .title("Progress Overview")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(inner);
    for (index, series) in state.overview.iter().take(cols.len()).enumerate() {
        widgets::overview_sparkline(frame, cols[index], series, charts_revealed(elapsed));
    }
}
