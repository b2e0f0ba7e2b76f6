// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Y extent of stacked output, for building the value scale.

use crate::point::StackedDataSeries;

/// Infer a `(min, max)` y domain covering every stacked segment.
///
/// A `None` `y0` is the chart floor and counts as `0.0`; null `y1` values are skipped along with
/// non-finite values. Returns `None` if no finite values are present.
pub fn stacked_y_extent(series: &[StackedDataSeries]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in series.iter().flat_map(|s| &s.data) {
        let Some(y1) = point.y1 else {
            continue;
        };
        for v in [point.y0.unwrap_or(0.0), y1] {
            if !v.is_finite() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() && max.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::{RawDataPoint, StackConfig, XDomain, format_stacked_series, series_in_order};

    #[test]
    fn extent_spans_floor_to_stack_top() {
        let series = series_in_order([
            vec![RawDataPoint::new(0.0, 2.0), RawDataPoint::new(1.0, 1.0)],
            vec![RawDataPoint::new(0.0, 3.0), RawDataPoint::null(1.0)],
        ]);
        let domain = XDomain::from_series(&series);
        let stacked = format_stacked_series(&series, &domain, StackConfig::absolute());
        assert_eq!(stacked_y_extent(&stacked), Some((0.0, 5.0)));
    }

    #[test]
    fn extent_includes_negative_baselines() {
        let series = series_in_order([vec![RawDataPoint::new(0.0, 2.0).with_y0(-1.0)]]);
        let domain = XDomain::from_series(&series);
        let stacked = format_stacked_series(&series, &domain, StackConfig::absolute());
        assert_eq!(stacked_y_extent(&stacked), Some((-1.0, 2.0)));
    }

    #[test]
    fn all_null_has_no_extent() {
        let series = series_in_order([vec![RawDataPoint::null(0.0)]]);
        let domain = XDomain::from_series(&series);
        let stacked = format_stacked_series(&series, &domain, StackConfig::percentage());
        assert_eq!(stacked_y_extent(&stacked), None);
    }
}
