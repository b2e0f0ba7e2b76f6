// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill-then-stack over a whole set of series.

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::domain::XDomain;
use crate::fill::{FilledPoint, FilledSeries, fill_series};
use crate::point::{RawDataSeries, StackedDataSeries};
use crate::stack::{StackConfig, stack_column};
use crate::trace::{ColumnStackedEvent, SeriesFilledEvent, StackTracer, ZeroTotalEvent};

/// Fills every series against `domain` and stacks each column.
///
/// Series are layered by [`StackOrder`](crate::StackOrder), lowest first; ties keep their input
/// order. The output is in that stack order, with one point per domain entry in domain order.
pub fn format_stacked_series(
    series: &[RawDataSeries],
    domain: &XDomain,
    config: StackConfig,
) -> Vec<StackedDataSeries> {
    format_stacked_series_traced(series, domain, config, &mut StackTracer::none())
}

/// Like [`format_stacked_series`], reporting diagnostics to `tracer`.
pub fn format_stacked_series_traced(
    series: &[RawDataSeries],
    domain: &XDomain,
    config: StackConfig,
    tracer: &mut StackTracer<'_>,
) -> Vec<StackedDataSeries> {
    let mut ordered: Vec<&RawDataSeries> = series.iter().collect();
    ordered.sort_by_key(|s| s.order);

    let filled: Vec<FilledSeries> = ordered
        .into_iter()
        .map(|s| {
            let f = fill_series(s, domain);
            let synthesized = f.filled_count();
            tracer.series_filled(&SeriesFilledEvent {
                key: f.key,
                real: f.points.len() - synthesized,
                filled: synthesized,
            });
            f
        })
        .collect();

    let mut out: Vec<StackedDataSeries> = filled
        .iter()
        .map(|s| StackedDataSeries {
            key: s.key,
            order: s.order,
            data: Vec::with_capacity(domain.len()),
        })
        .collect();

    for (column, x) in domain.iter().enumerate() {
        let points: SmallVec<[&FilledPoint; 8]> =
            filled.iter().map(|s| &s.points[column]).collect();
        let stack = stack_column(&points, config.mode);

        if config.mode.is_percentage() && stack.total == 0.0 {
            tracer.zero_total(&ZeroTotalEvent { column, x });
        }
        tracer.column_stacked(&ColumnStackedEvent {
            column,
            x,
            total: stack.total,
            top: stack.top,
            scale_type: config.scale_type,
        });

        for (series, point) in out.iter_mut().zip(stack.points) {
            series.data.push(point);
        }
    }

    out
}
