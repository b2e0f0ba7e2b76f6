// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checks for the preconditions stacking relies on.
//!
//! Stacking itself never fails; a malformed input silently corrupts the stack order instead.
//! Callers that accept untrusted data can run [`validate_input`] first.

use hashbrown::HashSet;

use crate::domain::{XDomain, XKey};
use crate::point::{RawDataSeries, SeriesKey};

/// Errors returned by [`validate_input`] and [`validate_domain_values`].
#[derive(Debug, Clone, PartialEq)]
pub enum StackInputError {
    /// A domain value is `NaN` or infinite.
    NonFiniteDomainValue {
        /// Position in the domain slice.
        index: usize,
    },
    /// The domain is not strictly ascending.
    UnsortedDomain {
        /// Position of the first value not greater than its predecessor.
        index: usize,
    },
    /// A point's x is `NaN` or infinite.
    NonFiniteX {
        /// Series holding the point.
        series: SeriesKey,
        /// Position of the point in the series.
        index: usize,
    },
    /// Two points of one series share an x-position.
    DuplicateX {
        /// Series holding the points.
        series: SeriesKey,
        /// The repeated x value.
        x: f64,
    },
    /// A point's x is not part of the domain.
    XOutsideDomain {
        /// Series holding the point.
        series: SeriesKey,
        /// The x value missing from the domain.
        x: f64,
    },
}

impl core::fmt::Display for StackInputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonFiniteDomainValue { index } => {
                write!(f, "domain value at index {index} is not finite")
            }
            Self::UnsortedDomain { index } => {
                write!(f, "domain is not strictly ascending at index {index}")
            }
            Self::NonFiniteX { series, index } => {
                write!(f, "series {} has a non-finite x at index {index}", series.0)
            }
            Self::DuplicateX { series, x } => {
                write!(f, "series {} has more than one point at x = {x}", series.0)
            }
            Self::XOutsideDomain { series, x } => {
                write!(f, "series {} has x = {x} outside the domain", series.0)
            }
        }
    }
}

impl core::error::Error for StackInputError {}

/// Checks that raw domain values are finite and strictly ascending.
///
/// [`XDomain::new`] already produces such values; this is for callers holding a precomputed
/// slice.
pub fn validate_domain_values(values: &[f64]) -> Result<(), StackInputError> {
    for (index, v) in values.iter().enumerate() {
        if !v.is_finite() {
            return Err(StackInputError::NonFiniteDomainValue { index });
        }
        if index > 0 && values[index - 1] >= *v {
            return Err(StackInputError::UnsortedDomain { index });
        }
    }
    Ok(())
}

/// Checks that every series can be filled against `domain` without losing or merging points.
pub fn validate_input(series: &[RawDataSeries], domain: &XDomain) -> Result<(), StackInputError> {
    validate_domain_values(domain.as_slice())?;
    let mut seen: HashSet<XKey> = HashSet::new();
    for s in series {
        seen.clear();
        for (index, point) in s.data.iter().enumerate() {
            if !point.x.is_finite() {
                return Err(StackInputError::NonFiniteX {
                    series: s.key,
                    index,
                });
            }
            if !seen.insert(XKey::new(point.x)) {
                return Err(StackInputError::DuplicateX {
                    series: s.key,
                    x: point.x,
                });
            }
            if !domain.contains(point.x) {
                return Err(StackInputError::XOutsideDomain {
                    series: s.key,
                    x: point.x,
                });
            }
        }
    }
    Ok(())
}
