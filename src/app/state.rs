//! Mutable UI state. Input handlers call the small mutators here; the
//! renderer only reads.

use std::str::FromStr;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::data;
use crate::model::activity::ActivityEntry;
use crate::model::metrics::MetricCard;
use crate::model::profile::{
    AccountSettings, Achievement, AthleteProfile, PersonalRecord, Preferences, ProfileTab,
    StatHighlight, UnitSystem,
};
use crate::model::progress::{ProgressSeries, TimeRange, TrainingTimeSummary};
use crate::model::workout::{apply, ListParams, WorkoutRecord};
use crate::model::ParseError;

/// How long the initial loading indicator stays up after launch.
pub const LOADING_DURATION: Duration = Duration::from_millis(800);
/// Delay added per card position during the staggered reveal.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);
/// Extra delay before chart data fades in after loading ends.
pub const CHART_REVEAL_DELAY: Duration = Duration::from_millis(500);
/// Point past every reveal threshold; reached instantly on skip.
const INTRO_FULL: Duration = Duration::from_millis(4000);

/// Pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Workouts,
    Progress,
    Profile,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Workouts, Page::Progress, Page::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Workouts => "Workouts",
            Page::Progress => "Progress",
            Page::Profile => "Profile",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for Page {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dashboard" => Ok(Page::Dashboard),
            "workouts" => Ok(Page::Workouts),
            "progress" => Ok(Page::Progress),
            "profile" => Ok(Page::Profile),
            other => Err(ParseError::Page(other.to_string())),
        }
    }
}

/// Current input mode in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes edit the workout search query.
    Search,
}

/// Mutable state behind the whole dashboard.
pub struct AppState {
    /// Page currently shown.
    pub page: Page,
    /// Current input mode in the UI.
    pub input_mode: InputMode,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Wall clock used for relative activity timestamps. Refreshed on
    /// every tick.
    pub clock: DateTime<Local>,
    /// Stat tiles across the top of the dashboard.
    pub metrics: Vec<MetricCard>,
    /// Cards in the dashboard's "Next Workouts" section.
    pub featured: Vec<WorkoutRecord>,
    /// Mon..Sun series behind the dashboard overview sparklines.
    pub overview: Vec<ProgressSeries>,
    /// Recent activity feed, newest first.
    pub activities: Vec<ActivityEntry>,
    pub workouts: WorkoutsState,
    pub progress: ProgressState,
    pub profile: ProfileState,
    should_exit: bool,
    started: Instant,
    intro_skipped: bool,
}

impl AppState {
    /// Create initial state with every fixture catalog loaded.
    pub fn new(start_page: Page, units: UnitSystem, now: DateTime<Local>) -> Self {
        AppState {
            page: start_page,
            input_mode: InputMode::Normal,
            help_visible: false,
            clock: now,
            metrics: data::dashboard_metrics(),
            featured: data::featured_workouts(),
            overview: data::weekly_overview(),
            activities: data::recent_activity(now),
            workouts: WorkoutsState::new(data::sample_workouts()),
            progress: ProgressState::new(),
            profile: ProfileState::new(units),
            should_exit: false,
            started: Instant::now(),
            intro_skipped: false,
        }
    }

    /// Per-frame upkeep. Never touches the workout list; the pipeline
    /// only reruns when its inputs change.
    pub fn tick(&mut self) {
        self.clock = Local::now();
    }

    /// Time the reveal animation has been running. Skipping the intro
    /// pins this past every threshold.
    pub fn reveal_elapsed(&self) -> Duration {
        if self.intro_skipped {
            INTRO_FULL
        } else {
            self.started.elapsed()
        }
    }

    /// Whether the initial loading indicator is still up.
    pub fn loading(&self) -> bool {
        self.reveal_elapsed() < LOADING_DURATION
    }

    /// Whether every reveal threshold has passed.
    pub fn intro_complete(&self) -> bool {
        self.reveal_elapsed() >= INTRO_FULL
    }

    /// Jump past the loading indicator and all staggered reveals.
    pub fn skip_intro(&mut self) {
        self.intro_skipped = true;
    }

    /// Restart the reveal animation from the beginning.
    pub fn replay_intro(&mut self) {
        self.started = Instant::now();
        self.intro_skipped = false;
    }

    /// Switch to the next page in tab order (wrap-around).
    pub fn next_page(&mut self) {
        self.page = self.page.next();
    }

    /// Switch to the previous page in tab order (wrap-around).
    pub fn previous_page(&mut self) {
        self.page = self.page.previous();
    }

    /// Jump straight to a page.
    pub fn goto(&mut self, page: Page) {
        self.page = page;
    }

    /// Show or hide the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Mark the UI as ready to exit.
    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    /// Check if the UI loop should stop.
    pub fn exit_requested(&self) -> bool {
        self.should_exit
    }
}

/// State behind the workouts page: the immutable catalog, the current
/// pipeline parameters, and the rows derived from them.
pub struct WorkoutsState {
    source: Vec<WorkoutRecord>,
    /// Pipeline inputs currently in effect.
    pub params: ListParams,
    /// Rows produced by the pipeline for the current params.
    pub visible: Vec<WorkoutRecord>,
    /// Index of the focused row within `visible`.
    pub selected: usize,
}

impl WorkoutsState {
    pub fn new(source: Vec<WorkoutRecord>) -> Self {
        let mut state = WorkoutsState {
            source,
            params: ListParams::default(),
            visible: Vec::new(),
            selected: 0,
        };
        state.refresh();
        state
    }

    /// Size of the unfiltered catalog.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Append a character to the search query and rerun the pipeline.
    pub fn push_query_char(&mut self, c: char) {
        self.params.query.push(c);
        self.refresh();
    }

    /// Delete the last query character and rerun the pipeline.
    pub fn pop_query_char(&mut self) {
        if self.params.query.pop().is_some() {
            self.refresh();
        }
    }

    /// Clear the search query, keeping filter and sort.
    pub fn clear_query(&mut self) {
        if !self.params.query.is_empty() {
            self.params.query.clear();
            self.refresh();
        }
    }

    /// Advance the completion filter to its next option.
    pub fn cycle_status(&mut self) {
        self.params.status = self.params.status.cycled();
        self.refresh();
    }

    /// Advance the sort order to its next option.
    pub fn cycle_sort(&mut self) {
        self.params.sort = self.params.sort.cycled();
        self.refresh();
    }

    /// Move focus to the next row (wrap-around).
    pub fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.visible.len();
    }

    /// Move focus to the previous row (wrap-around).
    pub fn select_previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.visible.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    /// The focused row, if any rows are visible.
    pub fn selected_workout(&self) -> Option<&WorkoutRecord> {
        self.visible.get(self.selected)
    }

    fn refresh(&mut self) {
        self.visible = apply(&self.source, &self.params);
        self.ensure_selection();
    }

    fn ensure_selection(&mut self) {
        if self.visible.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.visible.len() {
            self.selected = self.visible.len() - 1;
        }
    }
}

/// State behind the progress page.
pub struct ProgressState {
    /// Highlighted time window above the charts.
    pub range: TimeRange,
    /// Stat tiles across the top of the page.
    pub summary: Vec<MetricCard>,
    /// Jan..Jul series for the chart grid.
    pub series: Vec<ProgressSeries>,
    /// Minutes-per-month series for the training time panel.
    pub time_series: ProgressSeries,
    pub time_summary: TrainingTimeSummary,
}

impl ProgressState {
    pub fn new() -> Self {
        ProgressState {
            range: TimeRange::default(),
            summary: data::progress_metrics(),
            series: data::monthly_progress(),
            time_series: data::training_time_series(),
            time_summary: data::training_time_summary(),
        }
    }

    pub fn next_range(&mut self) {
        self.range = self.range.next();
    }

    pub fn previous_range(&mut self) {
        self.range = self.range.previous();
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}

/// State behind the profile page.
pub struct ProfileState {
    /// Selected tab below the stat chips.
    pub tab: ProfileTab,
    pub identity: AthleteProfile,
    pub stats: Vec<StatHighlight>,
    pub achievements: Vec<Achievement>,
    pub records: Vec<PersonalRecord>,
    pub preferences: Preferences,
    pub account: AccountSettings,
}

impl ProfileState {
    pub fn new(units: UnitSystem) -> Self {
        let mut preferences = data::default_preferences();
        preferences.units = units;
        ProfileState {
            tab: ProfileTab::default(),
            identity: data::athlete_profile(),
            stats: data::profile_stats(),
            achievements: data::achievements(),
            records: data::personal_records(),
            preferences,
            account: data::account_settings(),
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    /// Flip between imperial and metric units.
    pub fn toggle_units(&mut self) {
        self.preferences.units = self.preferences.units.toggled();
    }

    /// Flip the notifications preference.
    pub fn toggle_notifications(&mut self) {
        self.preferences.notifications = !self.preferences.notifications;
    }

    /// Flip the dark mode preference.
    pub fn toggle_dark_mode(&mut self) {
        self.preferences.dark_mode = !self.preferences.dark_mode;
    }
}

/// Whether the card at `index` has faded in yet. Cards reveal left to
/// right, one [`STAGGER_STEP`] apart, once loading ends.
pub fn stagger_visible(elapsed: Duration, index: usize) -> bool {
    elapsed >= LOADING_DURATION + STAGGER_STEP * index as u32
}

/// Whether chart data has faded in yet. Charts wait a further
/// [`CHART_REVEAL_DELAY`] after loading ends.
pub fn charts_revealed(elapsed: Duration) -> bool {
    elapsed >= LOADING_DURATION + CHART_REVEAL_DELAY
}
