//! Stat tiles shown on the dashboard and progress pages.

/// Direction of a metric's week-over-week movement. Drives the arrow
/// and the badge color on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Neutral => "→",
        }
    }
}

/// One stat tile: a headline value with an optional change badge and a
/// trend bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    /// Display text for the week-over-week delta, e.g. `"12%"` or `"2"`.
    pub change: Option<String>,
    pub trend: Trend,
}

impl MetricCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        MetricCard {
            title: title.into(),
            value: value.into(),
            change: None,
            trend: Trend::Neutral,
        }
    }

    pub fn with_change(mut self, amount: impl Into<String>, trend: Trend) -> Self {
        self.change = Some(amount.into());
        self.trend = trend;
        self
    }
}
