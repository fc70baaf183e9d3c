//! Keyboard handling. Translates key events into calls on
//! [`AppState`]; rendering picks up the changes on the next frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::app::state::{AppState, InputMode, Page};

pub fn handle_key(key: KeyEvent, state: &mut AppState) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        state.request_exit();
        return;
    }

    // Any key during the intro fast-forwards the reveal, then still
    // performs its normal action.
    if !state.intro_complete() {
        state.skip_intro();
    }

    if matches!(key.code, KeyCode::Char('?')) && state.input_mode == InputMode::Normal {
        state.toggle_help();
        return;
    }

    if state.help_visible {
        if matches!(key.code, KeyCode::Esc) {
            state.help_visible = false;
        }
        return;
    }

    match state.input_mode {
        InputMode::Search => handle_search_input(key, state),
        InputMode::Normal => handle_normal_input(key, state),
    }
}

fn handle_search_input(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(c) => {
            state.workouts.push_query_char(c);
        }
        KeyCode::Backspace => {
            state.workouts.pop_query_char();
        }
        KeyCode::Enter => {
            state.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            state.workouts.clear_query();
            state.input_mode = InputMode::Normal;
        }
        _ => {}
    }
}

fn handle_normal_input(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('q') => {
            state.request_exit();
            return;
        }
        KeyCode::Tab => {
            state.next_page();
            return;
        }
        KeyCode::BackTab => {
            state.previous_page();
            return;
        }
        KeyCode::Char('1') => {
            state.goto(Page::Dashboard);
            return;
        }
        KeyCode::Char('2') => {
            state.goto(Page::Workouts);
            return;
        }
        KeyCode::Char('3') => {
            state.goto(Page::Progress);
            return;
        }
        KeyCode::Char('4') => {
            state.goto(Page::Profile);
            return;
        }
        KeyCode::Char('r') => {
            state.replay_intro();
            return;
        }
        _ => {}
    }

    match state.page {
        Page::Dashboard => {}
        Page::Workouts => handle_workouts_input(key, state),
        Page::Progress => handle_progress_input(key, state),
        Page::Profile => handle_profile_input(key, state),
    }
}

fn handle_workouts_input(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('/') => {
            state.input_mode = InputMode::Search;
        }
        KeyCode::Char('f') => state.workouts.cycle_status(),
        KeyCode::Char('s') => state.workouts.cycle_sort(),
        KeyCode::Char('j') | KeyCode::Down => state.workouts.select_next(),
        KeyCode::Char('k') | KeyCode::Up => state.workouts.select_previous(),
        KeyCode::Char('g') => state.workouts.select_first(),
        KeyCode::Char('G') => state.workouts.select_last(),
        KeyCode::Enter => handle_workout_open(state),
        KeyCode::Esc => state.workouts.clear_query(),
        _ => {}
    }
}

/// Opening a workout has no detail page behind it; record the intent.
fn handle_workout_open(state: &AppState) {
    if let Some(workout) = state.workouts.selected_workout() {
        info!(workout = %workout.title, "workout opened");
    }
}

fn handle_progress_input(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => state.progress.next_range(),
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => state.progress.previous_range(),
        _ => {}
    }
}

fn handle_profile_input(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => state.profile.next_tab(),
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => state.profile.previous_tab(),
        KeyCode::Char('u') => state.profile.toggle_units(),
        KeyCode::Char('n') => state.profile.toggle_notifications(),
        KeyCode::Char('d') => state.profile.toggle_dark_mode(),
        _ => {}
    }
}
