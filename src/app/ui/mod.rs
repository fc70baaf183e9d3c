//! Rendering. `draw_ui` lays out the navigation bar, the active page,
//! and the status bar; the page modules fill in the middle.

pub mod dashboard;
pub mod profile;
pub mod progress;
pub mod widgets;
pub mod workouts;

use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::state::{AppState, InputMode, Page};

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn draw_ui<B: Backend>(frame: &mut Frame<B>, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(frame.size());

    render_navbar(frame, chunks[0], state);

    if state.loading() {
        render_loading(frame, chunks[1], state);
    } else {
        match state.page {
            Page::Dashboard => dashboard::render(frame, chunks[1], state),
            Page::Workouts => workouts::render(frame, chunks[1], state),
            Page::Progress => progress::render(frame, chunks[1], state),
            Page::Profile => profile::render(frame, chunks[1], state),
        }
    }

    render_status(frame, chunks[2], state);

    if state.help_visible {
        render_help(frame, chunks[1]);
    }
}

fn render_navbar<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .map(|page| Line::from(page.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(Span::styled(
                    " ATHLETICA ",
                    Style::default()
                        .fg(widgets::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .select(state.page.index())
        .highlight_style(
            Style::default()
                .fg(widgets::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(symbols::DOT);
    frame.render_widget(tabs, area);
}

fn render_loading<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let frame_index = (state.reveal_elapsed().as_millis() / 120) as usize % SPINNER_FRAMES.len();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} Loading your fitness data", SPINNER_FRAMES[frame_index]),
            Style::default().fg(widgets::ACCENT),
        )),
        Line::from(Span::styled(
            "press any key to skip",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(splash, area);
}

fn render_status<B: Backend>(frame: &mut Frame<B>, area: Rect, state: &AppState) {
    let mut spans = Vec::new();

    match state.input_mode {
        InputMode::Search => {
            spans.push(Span::styled(
                format!("/ {}", state.workouts.params.query),
                Style::default().fg(Color::Magenta),
            ));
            spans.push(Span::styled(
                "  Enter: keep  Esc: clear",
                Style::default().fg(Color::DarkGray),
            ));
        }
        InputMode::Normal => {
            let hints = match state.page {
                Page::Dashboard => "Tab: pages  1-4: jump  r: replay intro  ?: help  q: quit",
                Page::Workouts => {
                    "/: search  f: filter  s: sort  j/k: move  Enter: open  ?: help  q: quit"
                }
                Page::Progress => "[ / ]: time range  Tab: pages  ?: help  q: quit",
                Page::Profile => "[ / ]: tabs  u: units  n: alerts  d: theme  ?: help  q: quit",
            };
            spans.push(Span::raw(hints));
        }
    }

    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

fn render_help<B: Backend>(frame: &mut Frame<B>, area: Rect) {
    let help_lines = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("q / Ctrl+C: Quit"),
        Line::from("Tab / Shift+Tab: Next / previous page"),
        Line::from("1-4: Jump to Dashboard, Workouts, Progress, Profile"),
        Line::from("/: Search workouts (Enter keeps it, Esc clears it)"),
        Line::from("f: Cycle status filter (all / completed / upcoming)"),
        Line::from("s: Cycle sort order (recent / duration / type)"),
        Line::from("j/k or arrows: Move workout selection"),
        Line::from("g / G: First / last workout"),
        Line::from("[ / ]: Previous / next time range or profile tab"),
        Line::from("u: Toggle units  n: Toggle notifications  d: Toggle dark mode"),
        Line::from("r: Replay the intro reveal"),
        Line::from("?: Toggle this help overlay"),
        Line::from("Esc: Leave input / close overlay"),
    ];
    let overlay = Paragraph::new(help_lines)
        .block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(overlay, area);
}
