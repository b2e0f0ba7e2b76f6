// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Example binary for `strata_stack`.

use strata_stack::{
    ColumnStackedEvent, OrdinalRanks, RawDataPoint, RawDataSeries, ScaleType, SeriesFilledEvent,
    SeriesKey, StackConfig, StackOrder, StackTraceSink, StackTracer, StackedDataSeries, XDomain,
    ZeroTotalEvent, format_stacked_series, format_stacked_series_traced, series_in_order,
    stacked_y_extent, validate_input,
};

struct PrintSink;

impl StackTraceSink for PrintSink {
    fn on_series_filled(&mut self, e: &SeriesFilledEvent) {
        println!(
            "  filled series {}: real={} filled={}",
            e.key.0, e.real, e.filled
        );
    }

    fn on_column_stacked(&mut self, e: &ColumnStackedEvent) {
        println!(
            "  column {} (x={}, {:?}): total={} top={}",
            e.column, e.x, e.scale_type, e.total, e.top
        );
    }

    fn on_zero_total(&mut self, e: &ZeroTotalEvent) {
        println!("  column {} (x={}) has no real data", e.column, e.x);
    }
}

fn main() {
    // Three single-point series at one x-position.
    let series = series_in_order([
        vec![RawDataPoint::new(0.0, 10.0)],
        vec![RawDataPoint::new(0.0, 20.0)],
        vec![RawDataPoint::new(0.0, 70.0)],
    ]);
    let domain = XDomain::from_series(&series);
    let stacked = format_stacked_series(&series, &domain, StackConfig::percentage());
    println!("percent stack, one column:");
    print_series(&stacked, None);

    // Ordinal categories where each series skips some of them.
    let mut ranks = OrdinalRanks::from_categories(["a", "b", "c", "d"]);
    let visits = RawDataSeries::new(
        SeriesKey(1),
        StackOrder(0),
        vec![
            RawDataPoint::new(ranks.insert("a"), 2.0),
            RawDataPoint::new(ranks.insert("b"), 3.0),
            RawDataPoint::new(ranks.insert("d"), 6.0),
        ],
    );
    let signups = RawDataSeries::new(
        SeriesKey(2),
        StackOrder(1),
        vec![
            RawDataPoint::new(ranks.insert("a"), 1.0),
            RawDataPoint::null(ranks.insert("c")),
        ],
    );
    let series = [visits, signups];
    let domain = ranks.domain();
    if let Err(err) = validate_input(&series, &domain) {
        println!("invalid input: {err}");
        return;
    }

    for config in [StackConfig::absolute(), StackConfig::percentage()] {
        let config = config.with_scale_type(ScaleType::Ordinal);
        println!("{:?} stack over ordinal categories:", config.mode);
        let mut sink = PrintSink;
        let stacked = format_stacked_series_traced(
            &series,
            &domain,
            config,
            &mut StackTracer::new(&mut sink),
        );
        print_series(&stacked, Some(&ranks));
        println!("  y extent: {:?}", stacked_y_extent(&stacked));
    }
}

fn print_series(stacked: &[StackedDataSeries], ranks: Option<&OrdinalRanks>) {
    for s in stacked {
        println!("  series {} (order {}):", s.key.0, s.order.0);
        for p in &s.data {
            let x = ranks
                .and_then(|r| r.category(p.x))
                .map_or_else(|| format!("{}", p.x), String::from);
            let filled = if p.is_filled() { " (filled)" } else { "" };
            println!(
                "    x={x} y0={:?} y1={:?} initial_y0={:?} initial_y1={:?}{filled}",
                p.y0, p.y1, p.initial_y0, p.initial_y1
            );
        }
    }
}
