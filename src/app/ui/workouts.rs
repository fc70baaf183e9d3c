//! Workouts page: search bar, filter and sort readout, and the list
//! the pipeline produces.

use std::time::Duration;

use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::state::{stagger_visible, AppState, InputMode};
use crate::app::ui::widgets;
use crate::model::workout::WorkoutRecord;

pub fn render<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let elapsed = state.reveal_elapsed();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ]
            .as_ref(),
        )
        .split(area);

    render_search(frame, rows[0], state);
    render_controls(frame, rows[1], state);
    render_list(frame, rows[2], state, elapsed);
}

fn render_search<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let active = state.input_mode == InputMode::Search;
    let query = &state.workouts.params.query;

    let content = if active {
        Line::from(vec![
            Span::raw(query.clone()),
            Span::styled("▌", Style::default().fg(Color::Magenta)),
        ])
    } else if query.is_empty() {
        Line::from(Span::styled(
            "Search workouts...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::raw(query.clone()))
    };

    let border = if active {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };
    let search = Paragraph::new(content).block(
        Block::default()
            .title("Search (/)")
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(search, area);
}

fn render_controls<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let params = &state.workouts.params;
    let line = Line::from(vec![
        Span::styled("Filter: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(params.status.label(), Style::default().fg(widgets::ACCENT)),
        Span::raw("   "),
        Span::styled("Sort: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(params.sort.label(), Style::default().fg(widgets::ACCENT)),
        Span::raw("   "),
        Span::styled(
            format!(
                "{} of {} workouts",
                state.workouts.visible.len(),
                state.workouts.source_len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState, elapsed: Duration) {
    let block = Block::default().title("Workouts").borders(Borders::ALL);
    let workouts = &state.workouts.visible;

    if workouts.is_empty() {
        let empty = Paragraph::new("No workouts found. Try a different search or filter.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = workouts
        .iter()
        .enumerate()
        .map(|(index, workout)| {
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        workout.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    widgets::status_badge(workout),
                ]),
                Line::from(Span::styled(
                    format!(
                        "{}  ◷ {}  {} exercises",
                        workout.category,
                        workout.duration,
                        workout.exercises.len()
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::raw(exercise_summary(workout))),
                Line::from(""),
            ];
            ListItem::new(lines).style(widgets::reveal_style(stagger_visible(elapsed, index)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(widgets::ACCENT).fg(Color::White))
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default();
    list_state.select(Some(state.workouts.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn exercise_summary(workout: &WorkoutRecord) -> String {
    let mut names: Vec<String> = workout
        .exercises
        .iter()
        .take(2)
        .map(|e| format!("{} {} × {}", e.name, e.sets, e.reps))
        .collect();
    let extra = workout.exercises.len().saturating_sub(2);
    if extra > 0 {
        names.push(format!("+ {extra} more"));
    }
    names.join("  ·  ")
}
