//! # scale
//!
//! D3-style scales: linear, time and band.
//! Each maps a data domain onto a pixel range.

use chart_core::Range;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for continuous scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Inverse scale (range to domain)
    fn invert(&self, value: f64) -> f64;

    /// Generate tick values
    fn ticks(&self, count: usize) -> Vec<f64>;
}

// ============================================================================
// TICK STEPS
// ============================================================================

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick index bounds and increment for `start <= stop`.
///
/// A negative increment `-k` means the step is `1 / k`, which keeps
/// decimal ticks exact (`3 / 10` instead of `3 * 0.1`).
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        i1 = (start * k).round();
        i2 = (stop * k).round();
        if i1 / k < start {
            i1 += 1.0;
        }
        if i2 / k > stop {
            i2 -= 1.0;
        }
        inc = -k;
    } else {
        let k = 10f64.powf(power) * factor;
        i1 = (start / k).round();
        i2 = (stop / k).round();
        if i1 * k < start {
            i1 += 1.0;
        }
        if i2 * k > stop {
            i2 -= 1.0;
        }
        inc = k;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Round tick values covering `[start, stop]`, about `count` of them.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let at = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    (0..n)
        .map(|i| {
            if reverse {
                at(i2 - i as f64)
            } else {
                at(i1 + i as f64)
            }
        })
        .collect()
}

/// Signed increment used by `ticks` (negative means `1 / -inc`)
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Absolute distance between adjacent ticks
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: Range,
    clamp: bool,
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Get domain bounds
    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> Range {
        self.range
    }

    /// Extend the domain to round values so the ends land on ticks
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        let reverse = d1 < d0;
        let (mut start, mut stop) = if reverse { (d1, d0) } else { (d0, d1) };
        let mut prestep = None;

        for _ in 0..10 {
            if count == 0 || start == stop || !start.is_finite() || !stop.is_finite() {
                break;
            }
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }

        self.domain = if reverse { (stop, start) } else { (start, stop) };
        self
    }

    /// Distance between adjacent ticks for `count`
    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        match normalize(value, self.domain) {
            Some(t) if self.clamp => interpolate(self.range, t.clamp(0.0, 1.0)),
            Some(t) => interpolate(self.range, t),
            None => midpoint(self.range),
        }
    }

    fn invert(&self, value: f64) -> f64 {
        normalize(value, self.range)
            .map_or_else(|| midpoint(self.domain), |t| interpolate(self.domain, t))
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Position of `value` within `(a, b)` as a fraction; `None` for an empty interval
fn normalize(value: f64, (a, b): (f64, f64)) -> Option<f64> {
    let span = b - a;
    (span.abs() >= f64::EPSILON).then(|| (value - a) / span)
}

fn interpolate((a, b): (f64, f64), t: f64) -> f64 {
    a + t * (b - a)
}

fn midpoint((a, b): (f64, f64)) -> f64 {
    (a + b) / 2.0
}

// ============================================================================
// TIME SCALE
// ============================================================================

const SECOND: i64 = 1_000;
const MINUTE: i64 = 60 * SECOND;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Candidate tick intervals in milliseconds
const TIME_INTERVALS: [i64; 18] = [
    SECOND,
    5 * SECOND,
    15 * SECOND,
    30 * SECOND,
    MINUTE,
    5 * MINUTE,
    15 * MINUTE,
    30 * MINUTE,
    HOUR,
    3 * HOUR,
    6 * HOUR,
    12 * HOUR,
    DAY,
    2 * DAY,
    7 * DAY,
    30 * DAY,
    90 * DAY,
    365 * DAY,
];

/// Time scale (maps timestamps to pixel positions)
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    domain: (i64, i64), // Unix timestamps in milliseconds
    range: Range,
}

impl TimeScale {
    pub fn new() -> Self {
        Self {
            domain: (0, 1),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: i64, max: i64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn domain_bounds(&self) -> (i64, i64) {
        self.domain
    }

    pub fn range_bounds(&self) -> Range {
        self.range
    }

    /// Pixel position of a timestamp; an empty domain maps to the range midpoint
    pub fn scale(&self, timestamp: i64) -> f64 {
        let (t0, t1) = self.domain;
        if t0 == t1 {
            return midpoint(self.range);
        }
        // Offsets stay integral so millisecond timestamps keep full precision
        interpolate(self.range, (timestamp - t0) as f64 / (t1 - t0) as f64)
    }

    /// Timestamp at a pixel position, truncated to whole milliseconds
    pub fn invert(&self, value: f64) -> i64 {
        let (t0, t1) = self.domain;
        match normalize(value, self.range) {
            Some(t) => t0 + (t * (t1 - t0) as f64) as i64,
            None => t0 + (t1 - t0) / 2,
        }
    }

    /// Smallest standard interval giving at most `count` ticks
    pub fn tick_interval(&self, count: usize) -> i64 {
        let (lo, hi) = self.ordered();
        let target = (hi - lo) as f64 / count.max(1) as f64;

        TIME_INTERVALS
            .iter()
            .copied()
            .find(|&interval| interval as f64 >= target)
            .unwrap_or_else(|| {
                let year = 365 * DAY;
                year * (target / year as f64).ceil() as i64
            })
    }

    /// Interval-aligned timestamps inside the domain, ascending
    pub fn ticks(&self, count: usize) -> Vec<i64> {
        if count == 0 {
            return Vec::new();
        }
        let (lo, hi) = self.ordered();
        if lo == hi {
            return vec![lo];
        }

        let interval = self.tick_interval(count);
        let first = if lo.rem_euclid(interval) == 0 {
            lo
        } else {
            (lo.div_euclid(interval) + 1) * interval
        };

        std::iter::successors(Some(first), |t| Some(t + interval))
            .take_while(|t| *t <= hi)
            .collect()
    }

    fn ordered(&self) -> (i64, i64) {
        let (a, b) = self.domain;
        (a.min(b), a.max(b))
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// BAND SCALE (for categorical/ordinal data)
// ============================================================================

/// Band scale for categorical data (bar positions, one band per key)
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: Range,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl BandScale {
    /// Duplicate keys keep their first position
    pub fn new<I, K>(domain: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut keys: Vec<String> = Vec::new();
        for key in domain {
            let key = key.into();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }

        Self {
            domain: keys,
            range: (0.0, 1.0),
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Same inner and outer padding, as a fraction of the step
    pub fn padding(self, padding: f64) -> Self {
        self.padding_inner(padding).padding_outer(padding)
    }

    pub fn padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self
    }

    pub fn padding_outer(mut self, padding: f64) -> Self {
        self.padding_outer = padding.max(0.0);
        self
    }

    pub fn align(mut self, align: f64) -> Self {
        self.align = align.clamp(0.0, 1.0);
        self
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range_bounds(&self) -> Range {
        self.range
    }

    /// Get step size (band + gap)
    pub fn step(&self) -> f64 {
        let (start, stop) = self.sorted_range();
        let n = self.domain.len() as f64;
        (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    /// Get band width (width of each bar)
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    /// Band start for the `index`-th key
    pub fn position(&self, index: usize) -> f64 {
        let (start, stop) = self.sorted_range();
        let n = self.domain.len() as f64;
        let step = self.step();
        let first = start + (stop - start - step * (n - self.padding_inner)) * self.align;

        let slot = if self.range.1 < self.range.0 {
            self.domain.len().saturating_sub(index + 1)
        } else {
            index
        };
        first + step * slot as f64
    }

    /// Band start for `key`, `None` when the key is not in the domain
    pub fn scale(&self, key: &str) -> Option<f64> {
        self.index_of(key).map(|i| self.position(i))
    }

    /// Band center for `key`
    pub fn scale_center(&self, key: &str) -> Option<f64> {
        self.scale(key).map(|x| x + self.bandwidth() / 2.0)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.domain.iter().position(|k| k == key)
    }

    fn sorted_range(&self) -> Range {
        let (a, b) = self.range;
        if b < a { (b, a) } else { (a, b) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new()
            .domain(0.0, 100.0)
            .range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_invert() {
        let scale = LinearScale::new()
            .domain(0.0, 100.0)
            .range(0.0, 500.0);

        assert_eq!(scale.invert(250.0), 50.0);
    }

    #[test]
    fn test_linear_scale_clamp() {
        let scale = LinearScale::new().domain(0.0, 10.0).range(0.0, 100.0).clamp(true);
        assert_eq!(scale.scale(20.0), 100.0);
        assert_eq!(scale.scale(-5.0), 0.0);
    }

    #[test]
    fn test_linear_scale_empty_domain_maps_to_midpoint() {
        let scale = LinearScale::new().domain(5.0, 5.0).range(0.0, 80.0);
        assert_eq!(scale.scale(5.0), 40.0);

        let flat = LinearScale::new().domain(0.0, 10.0).range(30.0, 30.0);
        assert_eq!(flat.invert(30.0), 5.0);
    }

    #[test]
    fn test_linear_ticks() {
        assert_eq!(
            ticks(0.0, 100.0, 5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(0.5, 3.2, 3), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_linear_ticks_reversed_domain() {
        let scale = LinearScale::new().domain(100.0, 0.0);
        assert_eq!(scale.ticks(5), vec![100.0, 80.0, 60.0, 40.0, 20.0, 0.0]);
    }

    #[test]
    fn test_linear_ticks_degenerate() {
        assert!(ticks(0.0, 10.0, 0).is_empty());
        assert_eq!(ticks(4.0, 4.0, 10), vec![4.0]);
    }

    #[test]
    fn test_tick_step() {
        assert_eq!(tick_step(0.0, 1.0, 5), 0.2);
        assert_eq!(tick_step(0.0, 100.0, 10), 10.0);
        assert_eq!(tick_step(0.0, 100.0, 0), 0.0);
    }

    #[test]
    fn test_linear_nice() {
        let scale = LinearScale::new().domain(0.13, 9.7).nice(10);
        assert_eq!(scale.domain_bounds(), (0.0, 10.0));

        let scale = LinearScale::new().domain(930.0, 12.0).nice(5);
        assert_eq!(scale.domain_bounds(), (1000.0, 0.0));
    }

    #[test]
    fn test_time_ticks() {
        let scale = TimeScale::new().domain(0, 10 * MINUTE).range(0.0, 600.0);
        assert_eq!(scale.tick_interval(10), MINUTE);

        let ticks = scale.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[1], MINUTE);
        assert_eq!(scale.scale(ticks[5]), 300.0);
    }

    #[test]
    fn test_time_ticks_aligned() {
        let scale = TimeScale::new().domain(90 * SECOND, 5 * MINUTE);
        assert_eq!(
            scale.ticks(4),
            vec![2 * MINUTE, 3 * MINUTE, 4 * MINUTE, 5 * MINUTE]
        );
    }

    #[test]
    fn test_time_invert() {
        let scale = TimeScale::new().domain(1_000, 2_000).range(0.0, 100.0);
        assert_eq!(scale.invert(50.0), 1_500);
    }

    #[test]
    fn test_band_scale() {
        let scale = BandScale::new(["a", "b", "c"]).range(0.0, 120.0).padding(0.2);

        assert_eq!(scale.step(), 37.5);
        assert_eq!(scale.bandwidth(), 30.0);
        assert_eq!(scale.scale("a"), Some(7.5));
        assert_eq!(scale.scale("b"), Some(45.0));
        assert_eq!(scale.scale("c"), Some(82.5));
        assert_eq!(scale.scale_center("a"), Some(22.5));
        assert_eq!(scale.scale("missing"), None);
    }

    #[test]
    fn test_band_scale_reversed_range() {
        let scale = BandScale::new(["a", "b", "c"]).range(120.0, 0.0).padding(0.2);

        assert_eq!(scale.scale("a"), Some(82.5));
        assert_eq!(scale.scale("c"), Some(7.5));
    }

    #[test]
    fn test_band_scale_dedup_and_empty() {
        let scale = BandScale::new(["x", "y", "x"]).range(0.0, 100.0);
        assert_eq!(scale.domain(), &["x".to_string(), "y".to_string()]);
        assert_eq!(scale.bandwidth(), 50.0);

        let empty = BandScale::new(Vec::<String>::new()).range(0.0, 100.0);
        assert_eq!(empty.bandwidth(), 100.0);
        assert_eq!(empty.scale("x"), None);
    }
}
