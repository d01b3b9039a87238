//! Text histogram and box-plot numbers for the analyzed gaps.

const BIN_WIDTH_HOURS: f64 = 0.5;
const BAR_WIDTH: usize = 40;
/// Upper bound on the number of bins; wider spreads get wider bins.
pub const MAX_BINS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Fixed-width bins from `floor(min)` to past `max`. Empty input → no bins.
///
/// `width` is widened when the spread would need more than [`MAX_BINS`] bins.
pub fn bin_values(values: &[f64], width: f64) -> Vec<Bin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let Some(min) = finite.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = finite.iter().copied().fold(min, f64::max);

    let start = min.floor();
    let span = max - start;
    let width = width.max(span / (MAX_BINS - 1) as f64);
    let n_bins = ((span / width).floor() as usize + 1).min(MAX_BINS);
    let mut bins: Vec<Bin> = (0..n_bins)
        .map(|i| Bin {
            start: start + i as f64 * width,
            end: start + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for v in finite {
        let idx = (((v - start) / width).floor() as usize).min(n_bins - 1);
        bins[idx].count += 1;
    }

    bins
}

pub fn render_histogram(values: &[f64]) -> String {
    let bins = bin_values(values, BIN_WIDTH_HOURS);
    let peak = bins.iter().map(|b| b.count).max().unwrap_or(0);

    let mut out = String::new();
    for b in &bins {
        let len = if peak == 0 { 0 } else { b.count * BAR_WIDTH / peak };
        out.push_str(&format!(
            "{:>5.2} - {:>5.2} | {} {}\n",
            b.start,
            b.end,
            "#".repeat(len),
            b.count
        ));
    }
    out
}

/// min, q1, median, q3, max (linear interpolation between ranks).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumber {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

pub fn five_number_summary(values: &[f64]) -> Option<FiveNumber> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    Some(FiveNumber {
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}
