// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain filling: one point per series per x-position.
//!
//! After filling, the series × domain grid is rectangular, so stacking never has to special-case
//! a missing index. Points a series did not observe become zero-valued placeholders tagged with
//! [`PointOrigin::Filled`].

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::domain::{XDomain, XKey};
use crate::point::{Baseline, FilledValues, RawDataPoint, RawDataSeries, SeriesKey, StackOrder};

/// Where a filled point came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointOrigin {
    /// Passed through from the raw series.
    Real,
    /// Synthesized for an x-position the series did not observe.
    Filled(FilledValues),
}

/// A point in the rectangular grid consumed by the stack normalizer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledPoint {
    /// X-position.
    pub x: f64,
    /// Primary value; `None` only for an explicit null observation.
    pub y1: Option<f64>,
    /// Lower value.
    pub y0: Baseline,
    /// Pass-through marker value.
    pub mark: Option<f64>,
    /// Real or synthesized.
    pub origin: PointOrigin,
}

impl FilledPoint {
    fn real(point: &RawDataPoint) -> Self {
        Self {
            x: point.x,
            y1: point.y1,
            y0: point.y0,
            mark: point.mark,
            origin: PointOrigin::Real,
        }
    }

    fn placeholder(x: f64, uses_y0: bool) -> Self {
        Self {
            x,
            y1: Some(0.0),
            y0: Baseline::Absent,
            mark: None,
            origin: PointOrigin::Filled(FilledValues {
                x,
                y1: 0.0,
                y0: uses_y0.then_some(0.0),
            }),
        }
    }

    /// Returns `true` if the point was observed rather than synthesized.
    pub fn is_real(&self) -> bool {
        matches!(self.origin, PointOrigin::Real)
    }

    /// Returns the synthesized values for a filled point.
    pub fn filled(&self) -> Option<FilledValues> {
        match self.origin {
            PointOrigin::Real => None,
            PointOrigin::Filled(values) => Some(values),
        }
    }
}

/// A series with exactly one point per domain entry, in domain order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilledSeries {
    /// Series identity.
    pub key: SeriesKey,
    /// Stack layering position.
    pub order: StackOrder,
    /// One point per domain entry.
    pub points: Vec<FilledPoint>,
}

impl FilledSeries {
    /// Returns the number of synthesized points.
    pub fn filled_count(&self) -> usize {
        self.points.iter().filter(|p| !p.is_real()).count()
    }
}

/// Fills `series` so it has one point for every x-position in `domain`.
///
/// Observed points pass through unchanged. Missing positions get `y1 = 0`, no baseline, no mark,
/// and a [`FilledValues`] record that includes `y0 = 0` only when the series uses `y0` anywhere.
///
/// Raw points whose x is not in `domain` are dropped; debug builds assert against them and
/// against duplicate x values.
pub fn fill_series(series: &RawDataSeries, domain: &XDomain) -> FilledSeries {
    let mut by_x: HashMap<XKey, usize> = HashMap::with_capacity(series.data.len());
    for (i, point) in series.data.iter().enumerate() {
        let prev = by_x.insert(XKey::new(point.x), i);
        debug_assert!(
            prev.is_none(),
            "series {:?} has more than one point at x = {}",
            series.key,
            point.x
        );
        debug_assert!(
            domain.contains(point.x),
            "series {:?} has x = {} outside the domain",
            series.key,
            point.x
        );
    }

    let uses_y0 = series.uses_y0();
    let points = domain
        .iter()
        .map(|x| match by_x.get(&XKey::new(x)) {
            Some(&i) => FilledPoint::real(&series.data[i]),
            None => FilledPoint::placeholder(x, uses_y0),
        })
        .collect();

    FilledSeries {
        key: series.key,
        order: series.order,
        points,
    }
}
