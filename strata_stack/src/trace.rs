// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the stacking pipeline.
//!
//! [`StackTraceSink`] has one method per event, each defaulting to a no-op, so a sink only
//! implements the events it cares about.
//!
//! [`StackTracer`] wraps an optional `&mut dyn StackTraceSink`. With the `trace` feature **off**,
//! every tracer method compiles to nothing. With it **on**, each method performs a single `Option`
//! branch before dispatching.

use crate::domain::ScaleType;
use crate::point::SeriesKey;

/// Emitted after a series has been filled against the domain.
#[derive(Clone, Copy, Debug)]
pub struct SeriesFilledEvent {
    /// Series identity.
    pub key: SeriesKey,
    /// Points passed through from the raw series.
    pub real: usize,
    /// Points synthesized for x-positions the series did not observe.
    pub filled: usize,
}

/// Emitted after one x-position has been stacked across all series.
#[derive(Clone, Copy, Debug)]
pub struct ColumnStackedEvent {
    /// Column index in the domain.
    pub column: usize,
    /// X-position of the column.
    pub x: f64,
    /// Sum of real, non-null `y1` values.
    pub total: f64,
    /// Stack top after the last layer.
    pub top: f64,
    /// Scale type the x values came from.
    pub scale_type: ScaleType,
}

/// Emitted when percentage stacking meets a column with a zero total.
///
/// The column is stacked with a divisor of `1.0` instead.
#[derive(Clone, Copy, Debug)]
pub struct ZeroTotalEvent {
    /// Column index in the domain.
    pub column: usize,
    /// X-position of the column.
    pub x: f64,
}

/// Receiver for stacking diagnostics.
pub trait StackTraceSink {
    /// A series was filled against the domain.
    fn on_series_filled(&mut self, _e: &SeriesFilledEvent) {}

    /// A column was stacked.
    fn on_column_stacked(&mut self, _e: &ColumnStackedEvent) {}

    /// A percentage column had nothing to divide by.
    fn on_zero_total(&mut self, _e: &ZeroTotalEvent) {}
}

/// A [`StackTraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl StackTraceSink for NoopSink {}

/// Thin wrapper around an optional [`StackTraceSink`].
pub struct StackTracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn StackTraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn StackTraceSink>,
}

impl core::fmt::Debug for StackTracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackTracer").finish_non_exhaustive()
    }
}

impl<'a> StackTracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn StackTraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`SeriesFilledEvent`].
    #[inline]
    pub fn series_filled(&mut self, e: &SeriesFilledEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_series_filled(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ColumnStackedEvent`].
    #[inline]
    pub fn column_stacked(&mut self, e: &ColumnStackedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_column_stacked(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ZeroTotalEvent`].
    #[inline]
    pub fn zero_total(&mut self, e: &ZeroTotalEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_zero_total(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
