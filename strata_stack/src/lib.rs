// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series stacking and percent normalization for Strata charts.
//!
//! This crate turns independent per-series observations into stacked `y0`/`y1` coordinates that
//! bar and area geometry can consume directly:
//! - the **domain filler** gives every series exactly one point per x-position, synthesizing
//!   zero-valued placeholders where a series has no observation, and
//! - the **stack normalizer** walks each x-position in stack order, accumulating a running stack
//!   top and optionally dividing by the column total (100% stacking).
//!
//! Explicit nulls are kept distinct from fills: a null `y1` stays null in the output and never
//! moves the stack, while a filled point stacks as a zero-height segment and carries a
//! [`FilledValues`] record so renderers can suppress tooltips for it.
//!
//! ```
//! use strata_stack::{RawDataPoint, StackConfig, XDomain, format_stacked_series, series_in_order};
//!
//! let series = series_in_order([
//!     vec![RawDataPoint::new(0.0, 10.0)],
//!     vec![RawDataPoint::new(0.0, 30.0)],
//! ]);
//! let domain = XDomain::from_series(&series);
//! let stacked = format_stacked_series(&series, &domain, StackConfig::percentage());
//! assert_eq!(stacked[1].data[0].y1, Some(1.0));
//! ```
//!
//! Scales, pixel mapping, and drawing are out of scope; x values reach this crate already
//! resolved to numbers (see [`OrdinalRanks`] for categorical data).
//!
//! # Crate features
//!
//! - `trace`: dispatches diagnostic events to a [`StackTraceSink`].

#![no_std]

extern crate alloc;

mod domain;
mod extent;
mod fill;
mod pipeline;
mod point;
mod stack;
#[cfg(test)]
mod stacked_tests;
mod trace;
mod validate;

pub use domain::{OrdinalRanks, ScaleType, XDomain, XKey};
pub use extent::stacked_y_extent;
pub use fill::{FilledPoint, FilledSeries, PointOrigin, fill_series};
pub use pipeline::{format_stacked_series, format_stacked_series_traced};
pub use point::{
    Baseline, FilledValues, RawDataPoint, RawDataSeries, SeriesKey, StackOrder, StackedDataPoint,
    StackedDataSeries, series_in_order,
};
pub use stack::{ColumnStack, StackConfig, StackMode, column_total, stack_column};
pub use trace::{
    ColumnStackedEvent, NoopSink, SeriesFilledEvent, StackTraceSink, StackTracer, ZeroTotalEvent,
};
pub use validate::{StackInputError, validate_domain_values, validate_input};
