//! Progress page: time range selector, summary tiles, the 2x2 chart
//! grid, and the training time panel.

use std::time::Duration;

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::state::{charts_revealed, stagger_visible, AppState};
use crate::app::ui::widgets;
use crate::model::progress::TimeRange;

pub fn render<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let elapsed = state.reveal_elapsed();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Min(10),
                Constraint::Length(9),
            ]
            .as_ref(),
        )
        .split(area);

    render_ranges(frame, rows[0], state);
    render_summary(frame, rows[1], state, elapsed);
    render_grid(frame, rows[2], state, elapsed);
    render_training_time(frame, rows[3], state, elapsed);
}

/// The range selector only moves the highlight; the fixture series
/// cover a single fixed window.
fn render_ranges<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let titles: Vec<Line> = TimeRange::ALL
        .iter()
        .map(|range| Line::from(range.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title("Progress & Analytics")
                .borders(Borders::ALL),
        )
        .select(state.progress.range.index())
        .highlight_style(
            Style::default()
                .fg(widgets::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(symbols::DOT);
    frame.render_widget(tabs, area);
}

fn render_summary<B: Backend>(
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
    for (index, card) in state.progress.summary.iter().take(cols.len()).enumerate() {
        widgets::metric_card(frame, cols[index], card, stagger_visible(elapsed, index));
    }
}

fn render_grid<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState, elapsed: Duration) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[1]);

    let quads = [top[0], top[1], bottom[0], bottom[1]];
    let revealed = charts_revealed(elapsed);
    for (series, quad) in state.progress.series.iter().zip(quads) {
        widgets::render_line_chart(frame, quad, series, revealed);
    }
}

fn render_training_time<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    state: &AppState,
    elapsed: Duration,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(area);

    widgets::render_line_chart(
        frame,
        cols[0],
        &state.progress.time_series,
        charts_revealed(elapsed),
    );
    render_time_summary(frame, cols[1], state);
}

fn render_time_summary<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let summary = &state.progress.time_summary;
    let entries = [
        ("Total Time", summary.total.as_str()),
        ("Average", summary.average.as_str()),
        ("Longest", summary.longest.as_str()),
        ("Shortest", summary.shortest.as_str()),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label:<12}"), Style::default().fg(Color::DarkGray)),
                Span::styled(*value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Training Time")
            .borders(Borders::ALL),
    );
    frame.render_widget(panel, area);
}
