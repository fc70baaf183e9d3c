//! Shared card, chart, and feed widgets used by more than one page.

use chrono::{DateTime, Local};
use ratatui::{
    backend::Backend,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph, Sparkline,
    },
    Frame,
};

use crate::model::activity::{ActivityEntry, ActivityKind};
use crate::model::metrics::{MetricCard, Trend};
use crate::model::progress::{MetricKind, ProgressSeries};
use crate::model::workout::WorkoutRecord;

/// Brand color used for the active tab, selections, and highlights.
pub const ACCENT: Color = Color::Rgb(79, 70, 229);

/// Style for content that has not faded in yet.
pub fn reveal_style(revealed: bool) -> Style {
    if revealed {
        Style::default()
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }
}

pub fn kind_color(kind: MetricKind) -> Color {
    match kind {
        MetricKind::Strength => Color::Rgb(79, 70, 229),
        MetricKind::Cardio => Color::Rgb(6, 182, 212),
        MetricKind::Energy => Color::Rgb(234, 179, 8),
        MetricKind::Heart => Color::Rgb(239, 68, 68),
        MetricKind::Time => Color::Rgb(139, 92, 246),
    }
}

pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Neutral => Color::DarkGray,
    }
}

pub fn activity_glyph(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Workout => "✓",
        ActivityKind::Achievement => "★",
        ActivityKind::Goal => "▦",
        ActivityKind::Record => "●",
    }
}

pub fn activity_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::Workout => Color::Green,
        ActivityKind::Achievement => Color::Rgb(139, 92, 246),
        ActivityKind::Goal => Color::Blue,
        ActivityKind::Record => Color::Rgb(234, 88, 12),
    }
}

/// One stat tile. Before its reveal slot only the dimmed frame shows,
/// which reads as a loading skeleton.
pub fn metric_card<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    card: &MetricCard,
    revealed: bool,
) {
    let block = Block::default()
        .title(card.title.as_str())
        .borders(Borders::ALL);
    if !revealed {
        frame.render_widget(block.style(reveal_style(false)), area);
        return;
    }

    let mut lines = vec![Line::from(Span::styled(
        card.value.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(change) = &card.change {
        let color = trend_color(card.trend);
        lines.push(Line::from(Span::styled(
            format!("{} {} vs last week", card.trend.arrow(), change),
            Style::default().fg(color),
        )));
        lines.push(Line::from(vec![
            Span::styled("▰▰▰▰▰▰", Style::default().fg(color)),
            Span::styled("▱▱▱", Style::default().fg(Color::DarkGray)),
        ]));
    }

    let body = Paragraph::new(lines).block(block);
    frame.render_widget(body, area);
}

/// One workout card with its first two exercises.
pub fn workout_card<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    workout: &WorkoutRecord,
    selected: bool,
    revealed: bool,
) {
    let border_style = if selected {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if !revealed {
        frame.render_widget(block.style(reveal_style(false)), area);
        return;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            workout.category.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            workout.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw(format!("◷ {}  ", workout.duration)),
            status_badge(workout),
        ]),
        Line::from(""),
    ];
    for exercise in workout.exercises.iter().take(2) {
        lines.push(Line::from(format!(
            "{}  {} × {}",
            exercise.name, exercise.sets, exercise.reps
        )));
    }
    let extra = workout.exercises.len().saturating_sub(2);
    if extra > 0 {
        lines.push(Line::from(Span::styled(
            format!("+ {extra} more exercises"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let body = Paragraph::new(lines).block(block);
    frame.render_widget(body, area);
}

pub fn status_badge(workout: &WorkoutRecord) -> Span<'static> {
    let color = if workout.completed {
        Color::Green
    } else {
        Color::Blue
    };
    Span::styled(
        workout.status_label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

/// The recent activity feed with relative timestamps.
pub fn activity_feed<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    activities: &[ActivityEntry],
    now: DateTime<Local>,
    revealed: bool,
) {
    let block = Block::default().title("Recent Activity").borders(Borders::ALL);
    if !revealed {
        frame.render_widget(block.style(reveal_style(false)), area);
        return;
    }
    if activities.is_empty() {
        let empty = Paragraph::new("No recent activity")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = activities
        .iter()
        .map(|entry| {
            let lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} ", activity_glyph(entry.kind)),
                        Style::default().fg(activity_color(entry.kind)),
                    ),
                    Span::styled(
                        entry.title.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::raw(entry.description.clone())),
                Line::from(Span::styled(
                    entry.relative_label(now),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(""),
            ];
            ListItem::new(lines)
        })
        .collect();
    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

/// One braille line chart for a series. Until the reveal delay passes
/// the axes render with no data, matching the staged fade-in.
pub fn render_line_chart<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    series: &ProgressSeries,
    revealed: bool,
) {
    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, point)| (i as f64, point.value))
        .collect();
    let data: &[(f64, f64)] = if revealed { &points } else { &[] };
    let color = kind_color(series.kind);
    let datasets = vec![Dataset::default()
        .name(series.kind.label())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)];

    let (y_min, y_max) = y_bounds(series);
    let x_labels: Vec<Span> = series
        .points
        .iter()
        .map(|point| Span::styled(point.label.clone(), Style::default().fg(Color::DarkGray)))
        .collect();
    let y_labels = vec![
        Span::styled(format_sample(y_min, series.kind), Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_sample((y_min + y_max) / 2.0, series.kind),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format_sample(y_max, series.kind), Style::default().fg(Color::DarkGray)),
    ];
    let x_max = series.points.len().saturating_sub(1).max(1) as f64;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(series.title.as_str())
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// Compact sparkline for the dashboard overview.
pub fn overview_sparkline<B: Backend>(
    frame: &mut Frame<B>,
    area: Rect,
    series: &ProgressSeries,
    revealed: bool,
) {
    let caption = match series.latest() {
        Some(point) => format!(
            "{} ({} {})",
            series.title,
            format_sample(point.value, series.kind),
            series.kind.unit()
        ),
        None => series.title.clone(),
    };
    let block = Block::default().title(caption).borders(Borders::ALL);
    if !revealed {
        frame.render_widget(block.style(reveal_style(false)), area);
        return;
    }

    // Sparkline wants integers; one decimal of precision survives the
    // scaling for the cardio kilometres.
    let values: Vec<u64> = series
        .points
        .iter()
        .map(|point| (point.value * 10.0).round().max(0.0) as u64)
        .collect();
    let spark = Sparkline::default()
        .block(block)
        .data(&values)
        .style(Style::default().fg(kind_color(series.kind)));
    frame.render_widget(spark, area);
}

fn y_bounds(series: &ProgressSeries) -> (f64, f64) {
    let max = series.max_value();
    let min = series.min_value();
    if (max - min).abs() < f64::EPSILON {
        return (min - 1.0, max + 1.0);
    }
    let pad = (max - min) * 0.15;
    ((min - pad).max(0.0), max + pad)
}

fn format_sample(value: f64, kind: MetricKind) -> String {
    match kind {
        MetricKind::Cardio => format!("{value:.1}"),
        _ => format!("{value:.0}"),
    }
}
