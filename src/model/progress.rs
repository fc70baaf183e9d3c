//! Time-series data behind the progress charts.

/// Which measurement a series tracks. Drives the unit suffix and the
/// chart color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Strength,
    Cardio,
    Energy,
    Heart,
    Time,
}

impl MetricKind {
    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Strength => "Strength",
            MetricKind::Cardio => "Cardio",
            MetricKind::Energy => "Energy",
            MetricKind::Heart => "Heart Rate",
            MetricKind::Time => "Time",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Strength => "kg",
            MetricKind::Cardio => "km",
            MetricKind::Energy => "%",
            MetricKind::Heart => "bpm",
            MetricKind::Time => "min",
        }
    }
}

/// One sample in a series: an axis label and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// A titled run of samples rendered as one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSeries {
    pub title: String,
    pub kind: MetricKind,
    pub points: Vec<SeriesPoint>,
}

impl ProgressSeries {
    pub fn new(title: impl Into<String>, kind: MetricKind, samples: &[(&str, f64)]) -> Self {
        ProgressSeries {
            title: title.into(),
            kind,
            points: samples
                .iter()
                .map(|(label, value)| SeriesPoint {
                    label: (*label).to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    pub fn max_value(&self) -> f64 {
        self.points.iter().map(|p| p.value).fold(0.0, f64::max)
    }

    pub fn min_value(&self) -> f64 {
        let mut values = self.points.iter().map(|p| p.value);
        match values.next() {
            Some(first) => values.fold(first, f64::min),
            None => 0.0,
        }
    }

    /// Most recent sample, used for sparkline captions.
    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.last()
    }
}

/// Time window selector above the progress charts. The fixture data is
/// a single fixed window, so switching ranges only moves the highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    Week,
    Month,
    Quarter,
    #[default]
    HalfYear,
    Year,
    All,
}

impl TimeRange {
    pub const ALL: [TimeRange; 6] = [
        TimeRange::Week,
        TimeRange::Month,
        TimeRange::Quarter,
        TimeRange::HalfYear,
        TimeRange::Year,
        TimeRange::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Week => "1W",
            TimeRange::Month => "1M",
            TimeRange::Quarter => "3M",
            TimeRange::HalfYear => "6M",
            TimeRange::Year => "1Y",
            TimeRange::All => "ALL",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Headline numbers under the training time chart.
#[derive(Debug, Clone)]
pub struct TrainingTimeSummary {
    pub total: String,
    pub average: String,
    pub longest: String,
    pub shortest: String,
}
