//! Equal-width histogram binning for the range-filter display.

/// One display bucket: its value range, population, and whether it
/// overlaps the current selection (emphasized when rendered).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lo: f64,
    pub hi: f64,
    pub count: usize,
    pub active: bool,
}

/// Bin `values` into `bins` equal-width buckets over `[min, max]`.
///
/// A zero-span distribution is binned with width 1 so every value lands in
/// the first bucket instead of dividing by zero. Float rounding that lands
/// a value outside the bucket range clamps into the nearest edge bucket.
pub fn bin_values(
    values: &[f64],
    min: f64,
    max: f64,
    bins: usize,
    selected_min: f64,
    selected_max: f64,
) -> Vec<HistogramBin> {
    if bins == 0 {
        return Vec::new();
    }
    let span = max - min;
    let span = if span > 0.0 { span } else { 1.0 };
    let width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &value in values {
        let index = ((value - min) / width).floor() as isize;
        let index = index.clamp(0, bins as isize - 1) as usize;
        counts[index] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(index, &count)| {
            let lo = min + index as f64 * width;
            let hi = lo + width;
            HistogramBin {
                lo,
                hi,
                count,
                active: hi >= selected_min && lo <= selected_max,
            }
        })
        .collect()
}
