// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-column stacking and percent normalization.
//!
//! A column is every series' point at one x-position, in stack order. Stacking a column is a
//! fold carrying the running stack top: each layer adds its `y1` on top of the layers below it,
//! and an explicit null `y1` leaves the top where it was.

use smallvec::SmallVec;

use crate::domain::ScaleType;
use crate::fill::FilledPoint;
use crate::point::StackedDataPoint;

/// How stacked values are scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackMode {
    /// Stack raw values.
    #[default]
    Absolute,
    /// Divide each column by its total of real values so the stack reaches `1.0`.
    Percentage,
}

impl StackMode {
    /// Maps a "normalized" flag to a mode.
    pub fn from_normalized(normalized: bool) -> Self {
        if normalized {
            Self::Percentage
        } else {
            Self::Absolute
        }
    }

    /// Returns `true` for [`StackMode::Percentage`].
    pub fn is_percentage(self) -> bool {
        matches!(self, Self::Percentage)
    }
}

/// Settings threaded in from the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StackConfig {
    /// Absolute or percentage stacking.
    ///
    /// Default: `StackMode::Absolute`.
    pub mode: StackMode,
    /// Scale type of the x values. Does not affect stacking arithmetic.
    ///
    /// Default: `ScaleType::Linear`.
    pub scale_type: ScaleType,
}

impl StackConfig {
    /// Creates an absolute-stacking config over a linear x scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute stacking.
    pub fn absolute() -> Self {
        Self::new().with_mode(StackMode::Absolute)
    }

    /// Percentage (100%) stacking.
    pub fn percentage() -> Self {
        Self::new().with_mode(StackMode::Percentage)
    }

    /// Sets the stack mode.
    pub fn with_mode(mut self, mode: StackMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the x scale type.
    pub fn with_scale_type(mut self, scale_type: ScaleType) -> Self {
        self.scale_type = scale_type;
        self
    }
}

/// The result of stacking one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStack {
    /// Sum of real, non-null `y1` values.
    pub total: f64,
    /// Value every contribution was divided by.
    pub divisor: f64,
    /// Stack top after the last layer.
    pub top: f64,
    /// Stacked points, in the order they were given.
    pub points: SmallVec<[StackedDataPoint; 4]>,
}

/// Sums `y1` over the real, non-null points of a column.
///
/// Filled points hold `0.0` and do not change the sum.
pub fn column_total(points: &[&FilledPoint]) -> f64 {
    points
        .iter()
        .filter(|p| p.is_real())
        .filter_map(|p| p.y1)
        .sum()
}

/// Stacks one column of points given in stack order.
///
/// In [`StackMode::Percentage`] every value is divided by [`column_total`]; a zero total divides
/// by `1.0` instead so an empty column stays at zero rather than `NaN`.
///
/// The stacked `y0` of a layer is its own baseline (if any) added to the stack top below it.
/// Without a baseline, the base layer reports `None` and later layers report the stack top below
/// them, including a top of exactly `0.0`.
pub fn stack_column(points: &[&FilledPoint], mode: StackMode) -> ColumnStack {
    let total = column_total(points);
    let divisor = if mode.is_percentage() && total != 0.0 {
        total
    } else {
        1.0
    };

    let (top, out) = points.iter().enumerate().fold(
        (0.0, SmallVec::new()),
        |(top, mut out): (f64, SmallVec<[StackedDataPoint; 4]>), (layer, point)| {
            let stacked = stack_layer(point, top, layer == 0, divisor);
            let next_top = stacked.y1.unwrap_or(top);
            out.push(stacked);
            (next_top, out)
        },
    );

    ColumnStack {
        total,
        divisor,
        top,
        points: out,
    }
}

fn stack_layer(point: &FilledPoint, top: f64, is_base: bool, divisor: f64) -> StackedDataPoint {
    let initial_y1 = point.y1.map(|v| v / divisor);
    let initial_y0 = point.y0.value().map(|v| v / divisor);

    let y0 = match initial_y0 {
        Some(v) => Some(top + v),
        None if is_base => None,
        None => Some(top),
    };

    StackedDataPoint {
        x: point.x,
        y0,
        y1: initial_y1.map(|v| top + v),
        initial_y0,
        initial_y1,
        mark: point.mark,
        filled: point.filled(),
    }
}
