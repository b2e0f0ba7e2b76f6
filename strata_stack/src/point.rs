// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw and stacked data points.

extern crate alloc;

use alloc::vec::Vec;

/// Stable identity of a data series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesKey(pub u64);

/// Position of a series in the stack.
///
/// Lower orders sit closer to the chart floor; the lowest order at a column is the base layer.
/// Series with equal orders keep their input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StackOrder(pub u32);

impl StackOrder {
    /// Creates an order from a list position, saturating at `u32::MAX`.
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

/// The lower value of a raw point.
///
/// `Absent` and `Null` both stack from the running stack top, but only a series with at least
/// one non-`Absent` baseline records `y0` in its fills.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Baseline {
    /// No baseline was supplied.
    #[default]
    Absent,
    /// A baseline field was supplied with a null value.
    Null,
    /// An explicit baseline value.
    Value(f64),
}

impl Baseline {
    /// Returns the explicit value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Returns `true` if the baseline field was supplied (even as null).
    pub fn is_supplied(self) -> bool {
        !matches!(self, Self::Absent)
    }
}

impl From<Option<f64>> for Baseline {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl From<f64> for Baseline {
    fn from(value: f64) -> Self {
        Self::Value(value)
    }
}

/// One observation for one series at one x-position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawDataPoint {
    /// X-position (ordinal categories already resolved to a rank).
    pub x: f64,
    /// Primary value; `None` is an explicit gap.
    pub y1: Option<f64>,
    /// Optional lower value.
    pub y0: Baseline,
    /// Pass-through marker value.
    pub mark: Option<f64>,
}

impl RawDataPoint {
    /// Creates a point with a `y1` value and no baseline.
    pub fn new(x: f64, y1: f64) -> Self {
        Self {
            x,
            y1: Some(y1),
            y0: Baseline::Absent,
            mark: None,
        }
    }

    /// Creates a point whose `y1` is an explicit null.
    pub fn null(x: f64) -> Self {
        Self {
            x,
            y1: None,
            y0: Baseline::Absent,
            mark: None,
        }
    }

    /// Sets the baseline.
    pub fn with_y0(mut self, y0: impl Into<Baseline>) -> Self {
        self.y0 = y0.into();
        self
    }

    /// Sets the pass-through marker.
    pub fn with_mark(mut self, mark: Option<f64>) -> Self {
        self.mark = mark;
        self
    }
}

/// An ordered sequence of points sharing one series identity.
///
/// Points should have distinct x values; see [`crate::validate_input`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataSeries {
    /// Series identity, carried to the output.
    pub key: SeriesKey,
    /// Stack layering position.
    pub order: StackOrder,
    /// Raw observations.
    pub data: Vec<RawDataPoint>,
}

impl RawDataSeries {
    /// Creates a series.
    pub fn new(key: SeriesKey, order: StackOrder, data: Vec<RawDataPoint>) -> Self {
        Self { key, order, data }
    }

    /// Returns `true` if any point supplies a baseline field.
    pub fn uses_y0(&self) -> bool {
        self.data.iter().any(|p| p.y0.is_supplied())
    }
}

/// Builds series whose keys and stack orders follow their position in `data`.
pub fn series_in_order(data: impl IntoIterator<Item = Vec<RawDataPoint>>) -> Vec<RawDataSeries> {
    data.into_iter()
        .enumerate()
        .map(|(i, points)| RawDataSeries::new(SeriesKey(i as u64), StackOrder::from_index(i), points))
        .collect()
}

/// The raw values invented for a point that had no observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledValues {
    /// X-position of the fill.
    pub x: f64,
    /// Synthesized primary value (always `0.0`).
    pub y1: f64,
    /// Synthesized lower value; `Some(0.0)` only for series that use `y0`.
    pub y0: Option<f64>,
}

/// A stacked output point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedDataPoint {
    /// X-position.
    pub x: f64,
    /// Stacked lower coordinate; `None` means "draw from the chart floor".
    pub y0: Option<f64>,
    /// Stacked upper coordinate; `None` iff the raw `y1` was an explicit null.
    pub y1: Option<f64>,
    /// This series' (possibly normalized) lower value before stacking.
    pub initial_y0: Option<f64>,
    /// This series' (possibly normalized) contribution before stacking.
    pub initial_y1: Option<f64>,
    /// Pass-through marker value.
    pub mark: Option<f64>,
    /// Present only on synthesized points.
    pub filled: Option<FilledValues>,
}

impl StackedDataPoint {
    /// Returns `true` if this point was synthesized by the domain filler.
    pub fn is_filled(&self) -> bool {
        self.filled.is_some()
    }
}

/// A stacked output series with one point per domain entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedDataSeries {
    /// Series identity.
    pub key: SeriesKey,
    /// Stack layering position.
    pub order: StackOrder,
    /// Stacked points, in domain order.
    pub data: Vec<StackedDataPoint>,
}
