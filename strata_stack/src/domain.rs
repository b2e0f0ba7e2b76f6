// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! X-positions shared by every stacked series.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use hashbrown::HashMap;

use crate::point::RawDataSeries;

/// How x values were produced upstream.
///
/// Stacking arithmetic is identical for every scale type; it is carried through for diagnostics
/// and for geometry that needs to tell ordinal ranks from continuous positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleType {
    /// Continuous linear scale.
    #[default]
    Linear,
    /// Continuous log scale.
    Log,
    /// Continuous square-root scale.
    Sqrt,
    /// Continuous time scale (numeric timestamps).
    Time,
    /// Discrete categories resolved to ranks.
    Ordinal,
}

impl ScaleType {
    /// Returns `true` for every scale type except [`ScaleType::Ordinal`].
    pub fn is_continuous(self) -> bool {
        !matches!(self, Self::Ordinal)
    }
}

/// A hashable, totally ordered x-position.
///
/// `-0.0` is folded into `0.0` so both spell the same key.
#[derive(Debug, Clone, Copy)]
pub struct XKey(f64);

impl XKey {
    /// Creates a key from an x value.
    pub fn new(x: f64) -> Self {
        Self(if x == 0.0 { 0.0 } else { x })
    }

    /// Returns the x value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for XKey {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl PartialEq for XKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for XKey {}

impl Hash for XKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for XKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for XKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// The ordered set of x-positions every stacked series must cover.
///
/// Values are finite, distinct, and ascending; this order is the stacking and output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XDomain {
    values: Vec<f64>,
}

impl XDomain {
    /// Builds a domain from arbitrary x values.
    ///
    /// Non-finite values are dropped, duplicates are merged, and the result is sorted ascending.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .filter(|v| v.is_finite())
            .map(|v| XKey::new(v).get())
            .collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        Self { values }
    }

    /// Builds the union of x-positions across all series.
    pub fn from_series(series: &[RawDataSeries]) -> Self {
        Self::new(series.iter().flat_map(|s| s.data.iter().map(|p| p.x)))
    }

    /// Returns the number of x-positions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the domain has no x-positions.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the x-positions in ascending order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterates the x-positions in ascending order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Returns the column index of `x`, if present.
    pub fn index_of(&self, x: f64) -> Option<usize> {
        let x = XKey::new(x).get();
        self.values.binary_search_by(|v| v.total_cmp(&x)).ok()
    }

    /// Returns `true` if `x` is one of the domain's positions.
    pub fn contains(&self, x: f64) -> bool {
        self.index_of(x).is_some()
    }
}

/// Resolves ordinal categories to numeric ranks.
///
/// Ranks are assigned in first-seen order starting at `0.0`, so feeding categories in rendering
/// order yields a domain in the same order.
#[derive(Debug, Clone, Default)]
pub struct OrdinalRanks {
    categories: Vec<String>,
    ranks: HashMap<String, usize>,
}

impl OrdinalRanks {
    /// Creates an empty rank table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rank table from categories in rendering order.
    pub fn from_categories<'a>(categories: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ranks = Self::new();
        for category in categories {
            ranks.insert(category);
        }
        ranks
    }

    /// Returns the rank of `category`, assigning the next rank if it is new.
    pub fn insert(&mut self, category: &str) -> f64 {
        if let Some(&rank) = self.ranks.get(category) {
            return rank as f64;
        }
        let rank = self.categories.len();
        self.categories.push(String::from(category));
        self.ranks.insert(String::from(category), rank);
        rank as f64
    }

    /// Returns the rank of a known category.
    pub fn rank(&self, category: &str) -> Option<f64> {
        self.ranks.get(category).map(|&rank| rank as f64)
    }

    /// Returns the category for a rank, if the rank is integral and in range.
    pub fn category(&self, rank: f64) -> Option<&str> {
        if rank.is_nan() || rank < 0.0 || rank >= self.categories.len() as f64 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "checked non-negative and below the category count"
        )]
        let index = rank as usize;
        if index as f64 != rank {
            return None;
        }
        self.categories.get(index).map(String::as_str)
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if no category has been ranked.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the domain covering every rank.
    pub fn domain(&self) -> XDomain {
        XDomain::new((0..self.categories.len()).map(|i| i as f64))
    }
}
