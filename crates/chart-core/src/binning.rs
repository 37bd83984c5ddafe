//! Data binning for plotting dense series
//!
//! Collapses an ordered sequence of records into fixed-size windows so a
//! chart draws roughly one mark per pixel column instead of one per record.

use num_traits::{NumCast, Zero};
use std::fmt;
use std::ops::Div;

// ============================================================================
// STRATEGY PATTERN: Record merging
// ============================================================================

/// Records that can be folded together.
///
/// `bin_data` folds each window left to right: the first record is the
/// accumulator and later records are merged into it. Fields that should come
/// out averaged must be summed here.
pub trait Mergeable: Sized {
    fn merge(self, other: Self) -> Self;
}

// ============================================================================
// FIELD ACCESSORS
// ============================================================================

/// Named accessor for a numeric field of `T`
pub struct Field<T, V> {
    name: &'static str,
    get: fn(&T) -> V,
    set: fn(&mut T, V),
}

impl<T, V> Field<T, V> {
    pub const fn new(name: &'static str, get: fn(&T) -> V, set: fn(&mut T, V)) -> Self {
        Self { name, get, set }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, record: &T) -> V {
        (self.get)(record)
    }

    /// Consume `record` and return it with the field replaced
    pub fn with(&self, mut record: T, value: V) -> T {
        (self.set)(&mut record, value);
        record
    }
}

impl<T, V> Field<T, V>
where
    V: Copy + NumCast + Zero + Div<Output = V>,
{
    /// Consume `record` and return it with the field divided by `count`.
    ///
    /// Division follows `V`: integer fields truncate. A `count` too large
    /// for `V` exceeds any sum `V` can hold, so the field becomes zero.
    ///
    /// # Panics
    ///
    /// If `count` is zero and `V` is an integer type.
    pub fn rescaled(&self, record: T, count: usize) -> T {
        let mean = match <V as NumCast>::from(count) {
            Some(divisor) => self.get(&record) / divisor,
            None => V::zero(),
        };
        self.with(record, mean)
    }
}

impl<T, V> Clone for Field<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Field<T, V> {}

impl<T, V> fmt::Debug for Field<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

// ============================================================================
// BINNING
// ============================================================================

/// Records per window needed to get about `target_width` windows.
///
/// Zero target width means "no binning" and yields 0.
pub fn window_size(len: usize, target_width: usize) -> usize {
    if target_width == 0 {
        return 0;
    }
    len.div_ceil(target_width)
}

/// Fold consecutive runs of `window_size` records into one record each.
///
/// Returns every merged record with the number of input records it covers.
/// The last window may be shorter. Empty input yields no windows.
pub fn merge_windows<T: Mergeable>(data: Vec<T>, window_size: usize) -> Vec<(T, usize)> {
    let window_size = window_size.max(1);
    let mut windows = Vec::with_capacity(data.len().div_ceil(window_size));
    let mut acc: Option<T> = None;
    let mut count = 0;

    for record in data {
        acc = Some(match acc.take() {
            Some(merged) => merged.merge(record),
            None => record,
        });
        count += 1;

        if count == window_size {
            if let Some(merged) = acc.take() {
                windows.push((merged, count));
            }
            count = 0;
        }
    }

    // Trailing partial window
    if let Some(merged) = acc {
        windows.push((merged, count));
    }

    windows
}

/// Downsample `data` to about `target_width` records.
///
/// Each output record is the merge of one window, with `x_key` divided by the
/// window's record count. When the window size would be 1 or less (including
/// empty input and `target_width == 0`) `data` is returned as is.
///
/// `y_key` is accepted for symmetry with the other chart helpers and is not
/// read or written.
pub fn bin_data<T, X, Y>(
    data: Vec<T>,
    x_key: &Field<T, X>,
    y_key: &Field<T, Y>,
    target_width: usize,
) -> Vec<T>
where
    T: Mergeable,
    X: Copy + NumCast + Zero + Div<Output = X>,
{
    let size = window_size(data.len(), target_width);
    if size <= 1 {
        return data;
    }

    tracing::trace!(
        records = data.len(),
        window = size,
        x_key = x_key.name(),
        y_key = y_key.name(),
        "binning series"
    );

    merge_windows(data, size)
        .into_iter()
        .map(|(merged, count)| x_key.rescaled(merged, count))
        .collect()
}
