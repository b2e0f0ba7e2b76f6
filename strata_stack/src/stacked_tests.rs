// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use crate::{
    FilledValues, RawDataPoint, RawDataSeries, SeriesKey, StackConfig, StackOrder,
    StackedDataSeries, XDomain, format_stacked_series, series_in_order,
};

fn assert_close(got: Option<f64>, want: Option<f64>) {
    let eps = 1e-9;
    match (got, want) {
        (Some(a), Some(b)) => assert!((a - b).abs() <= eps, "{a} != {b}"),
        (None, None) => {}
        _ => panic!("{got:?} != {want:?}"),
    }
}

fn percent(series: &[RawDataSeries], domain: &XDomain) -> Vec<StackedDataSeries> {
    format_stacked_series(series, domain, StackConfig::percentage())
}

fn single_column(points: [RawDataPoint; 3]) -> Vec<RawDataSeries> {
    series_in_order(points.map(|p| vec![p]))
}

#[test]
fn percent_stack_without_nulls() {
    let series = single_column([
        RawDataPoint::new(0.0, 10.0),
        RawDataPoint::new(0.0, 20.0),
        RawDataPoint::new(0.0, 70.0),
    ]);
    let out = percent(&series, &XDomain::new([0.0]));

    let d0 = out[0].data[0];
    assert_close(d0.initial_y1, Some(0.1));
    assert_eq!(d0.y0, None);
    assert_close(d0.y1, Some(0.1));

    let d1 = out[1].data[0];
    assert_close(d1.initial_y1, Some(0.2));
    assert_close(d1.y0, Some(0.1));
    assert_close(d1.y1, Some(0.3));

    let d2 = out[2].data[0];
    assert_close(d2.initial_y1, Some(0.7));
    assert_close(d2.y0, Some(0.3));
    assert_close(d2.y1, Some(1.0));
}

#[test]
fn percent_stack_with_null_middle_series() {
    let series = single_column([
        RawDataPoint::new(0.0, 10.0),
        RawDataPoint::null(0.0),
        RawDataPoint::new(0.0, 30.0),
    ]);
    let out = percent(&series, &XDomain::new([0.0]));

    let d0 = out[0].data[0];
    assert_close(d0.initial_y1, Some(0.25));
    assert_eq!(d0.y0, None);
    assert_close(d0.y1, Some(0.25));

    let d1 = out[1].data[0];
    assert_eq!(d1.initial_y0, None);
    assert_eq!(d1.initial_y1, None);
    assert_eq!(d1.x, 0.0);
    assert_eq!(d1.y1, None);
    assert_close(d1.y0, Some(0.25));
    assert_eq!(d1.mark, None);
    assert!(!d1.is_filled());

    let d2 = out[2].data[0];
    assert_close(d2.initial_y1, Some(0.75));
    assert_close(d2.y0, Some(0.25));
    assert_close(d2.y1, Some(1.0));
}

#[test]
fn percent_stack_with_explicit_baselines() {
    let series = single_column([
        RawDataPoint::new(0.0, 10.0).with_y0(2.0),
        RawDataPoint::new(0.0, 20.0).with_y0(4.0),
        RawDataPoint::new(0.0, 70.0).with_y0(6.0),
    ]);
    let out = percent(&series, &XDomain::new([0.0]));

    let d0 = out[0].data[0];
    assert_close(d0.initial_y0, Some(0.02));
    assert_close(d0.initial_y1, Some(0.1));
    assert_close(d0.y0, Some(0.02));
    assert_close(d0.y1, Some(0.1));

    let d1 = out[1].data[0];
    assert_close(d1.initial_y0, Some(0.04));
    assert_close(d1.initial_y1, Some(0.2));
    assert_close(d1.y0, Some(0.14));
    assert_close(d1.y1, Some(0.3));

    let d2 = out[2].data[0];
    assert_close(d2.initial_y0, Some(0.06));
    assert_close(d2.initial_y1, Some(0.7));
    assert_close(d2.y0, Some(0.36));
    assert_close(d2.y1, Some(1.0));
}

#[test]
fn percent_stack_with_null_and_baselines() {
    let series = single_column([
        RawDataPoint::new(0.0, 10.0).with_y0(2.0),
        RawDataPoint::null(0.0),
        RawDataPoint::new(0.0, 90.0).with_y0(6.0).with_mark(None),
    ]);
    let out = percent(&series, &XDomain::new([0.0]));

    let d0 = out[0].data[0];
    assert_close(d0.initial_y0, Some(0.02));
    assert_close(d0.initial_y1, Some(0.1));
    assert_close(d0.y0, Some(0.02));
    assert_close(d0.y1, Some(0.1));

    let d1 = out[1].data[0];
    assert_eq!(d1.initial_y0, None);
    assert_eq!(d1.initial_y1, None);
    assert_close(d1.y0, Some(0.1));
    assert_eq!(d1.y1, None);

    let d2 = out[2].data[0];
    assert_close(d2.initial_y0, Some(0.06));
    assert_close(d2.initial_y1, Some(0.9));
    assert_close(d2.y0, Some(0.16));
    assert_close(d2.y1, Some(1.0));
}

fn sparse_pair() -> Vec<RawDataSeries> {
    vec![
        RawDataSeries::new(
            SeriesKey(0xa),
            StackOrder(0),
            vec![
                RawDataPoint::new(1.0, 10.0),
                RawDataPoint::new(2.0, 20.0),
                RawDataPoint::new(4.0, 40.0),
            ],
        ),
        RawDataSeries::new(
            SeriesKey(0xb),
            StackOrder(1),
            vec![RawDataPoint::new(1.0, 90.0), RawDataPoint::new(3.0, 30.0)],
        ),
    ]
}

#[test]
fn percent_stack_fills_missing_points_on_both_series() {
    let series = sparse_pair();
    let out = percent(&series, &XDomain::new([1.0, 2.0, 3.0, 4.0]));

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].data.len(), 4);
    assert_eq!(out[1].data.len(), 4);

    let a = &out[0].data;
    assert_eq!(a[0].initial_y0, None);
    assert_close(a[0].initial_y1, Some(0.1));
    assert_eq!(a[0].x, 1.0);
    assert_eq!(a[0].y0, None);
    assert_close(a[0].y1, Some(0.1));
    assert_eq!(a[0].mark, None);

    assert_close(a[1].initial_y1, Some(1.0));
    assert_eq!(a[1].y0, None);
    assert_close(a[1].y1, Some(1.0));

    assert_close(a[3].initial_y1, Some(1.0));
    assert_eq!(a[3].x, 4.0);
    assert_eq!(a[3].y0, None);
    assert_close(a[3].y1, Some(1.0));

    let b = &out[1].data;
    assert_eq!(b[0].initial_y0, None);
    assert_close(b[0].initial_y1, Some(0.9));
    assert_close(b[0].y0, Some(0.1));
    assert_close(b[0].y1, Some(1.0));

    assert_eq!(b[1].initial_y0, None);
    assert_eq!(b[1].initial_y1, Some(0.0));
    assert_eq!(b[1].x, 2.0);
    assert_close(b[1].y0, Some(1.0));
    assert_close(b[1].y1, Some(1.0));
    assert_eq!(b[1].mark, None);
    assert_eq!(
        b[1].filled,
        Some(FilledValues {
            x: 2.0,
            y1: 0.0,
            y0: None,
        })
    );

    // Series `a` is filled at x = 3, so `b` sits on a zero-height base layer.
    assert!(a[2].is_filled());
    assert_eq!(a[2].y0, None);
    assert_eq!(b[2].initial_y0, None);
    assert_close(b[2].initial_y1, Some(1.0));
    assert_eq!(b[2].x, 3.0);
    assert_eq!(b[2].y0, Some(0.0));
    assert_close(b[2].y1, Some(1.0));
    assert_eq!(b[2].mark, None);
}

#[test]
fn every_percent_column_reaches_one_without_nulls() {
    let series = series_in_order([
        vec![
            RawDataPoint::new(0.0, 3.0),
            RawDataPoint::new(1.0, 0.5),
            RawDataPoint::new(2.0, 12.0),
        ],
        vec![
            RawDataPoint::new(0.0, 7.0),
            RawDataPoint::new(1.0, 0.25),
            RawDataPoint::new(2.0, 1.0),
        ],
        vec![
            RawDataPoint::new(0.0, 11.0),
            RawDataPoint::new(1.0, 9.0),
            RawDataPoint::new(2.0, 0.125),
        ],
    ]);
    let domain = XDomain::from_series(&series);
    let out = percent(&series, &domain);

    for column in 0..domain.len() {
        let last = out.last().map(|s| s.data[column].y1);
        assert_close(last.flatten(), Some(1.0));
        let share: f64 = out
            .iter()
            .filter_map(|s| s.data[column].initial_y1)
            .sum();
        assert_close(Some(share), Some(1.0));
    }
}

#[test]
fn null_series_is_excluded_from_the_total_and_the_stack() {
    let series = single_column([
        RawDataPoint::new(0.0, 6.0),
        RawDataPoint::null(0.0),
        RawDataPoint::new(0.0, 2.0),
    ]);
    let out = percent(&series, &XDomain::new([0.0]));

    assert_close(out[0].data[0].initial_y1, Some(0.75));
    assert_close(out[2].data[0].y0, out[0].data[0].y1);
    assert_close(out[2].data[0].y1, Some(1.0));
}

#[test]
fn missing_baseline_is_null_only_for_the_base_layer() {
    let series = single_column([
        RawDataPoint::new(0.0, 1.0),
        RawDataPoint::new(0.0, 2.0),
        RawDataPoint::new(0.0, 3.0),
    ]);
    let out = format_stacked_series(&series, &XDomain::new([0.0]), StackConfig::absolute());
    assert_eq!(out[0].data[0].y0, None);
    assert_eq!(out[1].data[0].y0, Some(1.0));
    assert_eq!(out[2].data[0].y0, Some(3.0));
}

#[test]
fn fills_do_not_move_the_stack() {
    let series = sparse_pair();
    let domain = XDomain::from_series(&series);
    for config in [StackConfig::absolute(), StackConfig::percentage()] {
        let out = format_stacked_series(&series, &domain, config);
        for s in &out {
            for p in s.data.iter().filter(|p| p.is_filled()) {
                assert_eq!(p.initial_y1, Some(0.0));
                assert_eq!(p.filled.map(|f| f.y1), Some(0.0));
                assert_eq!(p.filled.map(|f| f.x), Some(p.x));
                if p.y0.is_some() {
                    assert_eq!(p.y0, p.y1);
                }
            }
        }
    }
}

#[test]
fn absolute_stack_is_the_unscaled_percent_stack() {
    let series = sparse_pair();
    let domain = XDomain::from_series(&series);
    let absolute = format_stacked_series(&series, &domain, StackConfig::absolute());
    let percentage = percent(&series, &domain);

    // Column totals of real values: 100, 20, 30, 40.
    let totals = [100.0, 20.0, 30.0, 40.0];
    for (abs, pct) in absolute.iter().zip(&percentage) {
        for ((a, p), total) in abs.data.iter().zip(&pct.data).zip(totals) {
            assert_close(a.y1, p.y1.map(|v| v * total));
            assert_close(a.y0, p.y0.map(|v| v * total));
            assert_close(a.initial_y1, p.initial_y1.map(|v| v * total));
        }
    }

    assert_eq!(absolute[0].data[0].y1, Some(10.0));
    assert_eq!(absolute[1].data[0].y1, Some(100.0));
    assert_eq!(absolute[1].data[1].y1, Some(20.0));
}

#[test]
fn marks_pass_through_unchanged() {
    let series = series_in_order([
        vec![RawDataPoint::new(0.0, 1.0).with_mark(Some(12.0))],
        vec![RawDataPoint::null(0.0).with_mark(Some(4.0))],
    ]);
    let out = percent(&series, &XDomain::new([0.0]));
    assert_eq!(out[0].data[0].mark, Some(12.0));
    assert_eq!(out[1].data[0].mark, Some(4.0));
}
