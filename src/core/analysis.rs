//! Summary statistics of the gaps between daytime naps.

use crate::models::records::SleepRecord;
use chrono::{Local, NaiveDateTime, TimeDelta};

pub const DEFAULT_MAX_GAP_HOURS: f64 = 6.0;
pub const DEFAULT_CONFIDENCE_Z: f64 = 1.96;

/// Tunables of the daytime-sleep analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Gaps at or above this are treated as overnight outliers.
    pub max_gap_hours: f64,
    /// Multiplier applied to the standard deviation (1.96 → 95%).
    pub confidence_z: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_gap_hours: DEFAULT_MAX_GAP_HOURS,
            confidence_z: DEFAULT_CONFIDENCE_Z,
        }
    }
}

/// Filtered sessions plus their descriptive statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct DaytimeSleepSummary {
    pub rows: Vec<SleepRecord>,
    pub weeks: u32,
    pub cutoff: NaiveDateTime,
    pub mean: f64,
    pub std_dev: f64,
    pub confidence_z: f64,
}

impl DaytimeSleepSummary {
    pub fn half_width(&self) -> f64 {
        self.confidence_z * self.std_dev
    }

    /// Two-sided coverage of `mean +/- half_width` under a normal model, in percent.
    pub fn confidence_percent(&self) -> f64 {
        100.0 * erf(self.confidence_z / std::f64::consts::SQRT_2)
    }

    pub fn summary(&self) -> String {
        format!(
            "Mean +/- {:.0}% confidence interval: {:.2} +/- {:.2}",
            self.confidence_percent(),
            self.mean,
            self.half_width()
        )
    }

    pub fn dt_hours(&self) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.dt_hours).collect()
    }
}

/// Analyze relative to the current local wall-clock time.
pub fn analyze_daytime_sleep(
    sleep: &[SleepRecord],
    weeks: u32,
    cfg: &AnalysisConfig,
) -> DaytimeSleepSummary {
    analyze_daytime_sleep_at(sleep, weeks, Local::now().naive_local(), cfg)
}

/// Keep daytime sessions from the last `weeks` weeks whose gap is below
/// `cfg.max_gap_hours`, then summarize their gaps.
///
/// An empty selection yields NaN statistics, never an error.
pub fn analyze_daytime_sleep_at(
    sleep: &[SleepRecord],
    weeks: u32,
    now: NaiveDateTime,
    cfg: &AnalysisConfig,
) -> DaytimeSleepSummary {
    let cutoff = now
        .checked_sub_signed(TimeDelta::weeks(i64::from(weeks)))
        .unwrap_or(NaiveDateTime::MIN);

    let rows: Vec<SleepRecord> = sleep
        .iter()
        .filter(|r| {
            r.daytime
                && r.dt_hours.is_some_and(|h| h < cfg.max_gap_hours)
                && r.time >= cutoff
        })
        .cloned()
        .collect();

    let values: Vec<f64> = rows.iter().filter_map(|r| r.dt_hours).collect();
    let mean = mean(&values);
    let std_dev = sample_std_dev(&values, mean);

    tracing::debug!(%cutoff, weeks, kept = rows.len(), total = sleep.len(), "daytime sleep filtered");

    DaytimeSleepSummary {
        rows,
        weeks,
        cutoff,
        mean,
        std_dev,
        confidence_z: cfg.confidence_z,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Bessel-corrected standard deviation; a single value has no spread.
fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    match values.len() {
        0 => f64::NAN,
        1 => 0.0,
        n => {
            let sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (sq / (n - 1) as f64).sqrt()
        }
    }
}

/// Abramowitz & Stegun 7.1.26, absolute error below 1.5e-7.
fn erf(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.327_591_1 * x.abs());
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736 + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));
    let y = 1.0 - poly * (-x * x).exp();
    if x < 0.0 { -y } else { y }
}
